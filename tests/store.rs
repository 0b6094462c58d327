use anka::interpreter::value::{
    compound::{Block, Executor, Tuple},
    store::{AssignmentState, Store},
    word::{Word, WordKind},
};

#[test]
fn create_appends_to_the_matching_column() {
    let mut store = Store::new();

    let a = store.create(1);
    let b = store.create(2);
    let numbers = store.create(vec![1, 2, 3]);
    let ratio = store.create(0.5);
    let flags = store.create(vec![true, false]);
    let name = store.create(String::from("inc"));

    assert_eq!(a, Word::new(WordKind::Int, 0));
    assert_eq!(b, Word::new(WordKind::Int, 1));
    assert_eq!(numbers, Word::new(WordKind::IntArray, 0));
    assert_eq!(ratio, Word::new(WordKind::Double, 0));
    assert_eq!(flags, Word::new(WordKind::BoolArray, 0));
    assert_eq!(name, Word::new(WordKind::Name, 0));

    assert_eq!(store.integers(), &[1, 2]);
    assert_eq!(store.integer_arrays(), &[vec![1, 2, 3]]);
    assert_eq!(store.names(), &[String::from("inc")]);
    assert_eq!(store.name(name), "inc");
}

#[test]
fn words_stay_valid_while_the_store_grows() {
    let mut store = Store::new();
    let first = store.create(7);
    for value in 0..1000 {
        store.create(value);
    }
    assert_eq!(*store.read::<i32>(first), 7);
}

#[test]
fn compound_records_are_stored() {
    let mut store = Store::new();
    let one = store.create(1);
    let tuple = store.create(Tuple::unconnected(vec![one, Word::placeholder(0)]));
    let block = store.create(Block { words: vec![one] });
    let executor = store.create(Executor { words: vec![one, one] });

    assert_eq!(tuple.kind, WordKind::Tuple);
    assert_eq!(block.kind, WordKind::Block);
    assert_eq!(executor.kind, WordKind::Executor);
    assert_eq!(store.read::<Block>(block).words, vec![one]);
    assert_eq!(store.executors().len(), 1);
    assert!(!store.read::<Tuple>(tuple).is_connected());
}

#[test]
#[should_panic(expected = "read a Int word as Double")]
fn reading_with_the_wrong_kind_panics() {
    let mut store = Store::new();
    let word = store.create(1);
    let _ = store.read::<f64>(word);
}

#[test]
fn components_of_tuples_and_scalars() {
    let mut store = Store::new();
    let a = store.create(1);
    let b = store.create(2.5);
    let pair = store.create(Tuple::unconnected(vec![a, b]));
    let empty = store.create(Tuple::unconnected(Vec::new()));

    assert_eq!(store.all_components(pair), vec![a, b]);
    assert_eq!(store.all_components(a), vec![a]);
    assert!(store.all_components(empty).is_empty());

    assert_eq!(store.component_count(pair), 2);
    assert_eq!(store.component_count(a), 1);
    assert_eq!(store.component_count(empty), 0);

    assert_eq!(store.get_component(pair, 0), Some(a));
    assert_eq!(store.get_component(a, 0), Some(a));
    assert_eq!(store.get_component(a, 1), None);
}

#[test]
fn bindings_and_constants() {
    let mut store = Store::with_constants();
    assert!(store.is_bound("pi"));
    assert!(store.is_bound("e"));
    assert!(store.lookup("val").is_none());

    let value = store.create(42);
    store.bind("val", value);
    assert_eq!(store.lookup("val"), Some(value));
    assert_eq!(store.bindings().count(), 3);
}

#[test]
fn assignment_state_is_consumed_once() {
    let mut store = Store::new();
    assert_eq!(store.assignment_state(), AssignmentState::Normal);

    store.arm_assignment();
    assert_eq!(store.assignment_state(), AssignmentState::Pending);
    assert!(store.take_assignment());
    assert!(!store.take_assignment());

    store.arm_assignment();
    store.reset_assignment();
    assert_eq!(store.assignment_state(), AssignmentState::Normal);
}

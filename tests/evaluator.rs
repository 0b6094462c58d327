use anka::{
    error::ExecutionError,
    interpreter::{
        parser::core::parse_program,
        value::{
            compound::{Executor, Tuple},
            store::{AssignmentState, Store},
            word::{Word, WordKind},
        },
    },
};

fn run(store: &mut Store, source: &str) -> Result<Option<Word>, ExecutionError> {
    let sentences = parse_program(source, store).unwrap_or_else(|e| panic!("{e}"));
    store.execute(&sentences)
}

fn show(source: &str) -> String {
    let mut store = Store::with_constants();
    let word = run(&mut store, source).unwrap_or_else(|e| panic!("{source}: {e}"))
                                      .unwrap_or_else(|| panic!("{source}: no result"));
    store.display(word).to_string()
}

fn failure(source: &str) -> ExecutionError {
    run(&mut Store::with_constants(), source).expect_err("sentence should fail")
}

#[test]
fn assignment_marker_arms_and_passes_through() {
    let mut store = Store::new();
    let five = store.create(5);

    assert_eq!(store.fold(Word::assignment(), five).unwrap(), five);
    assert_eq!(store.assignment_state(), AssignmentState::Pending);

    let name = store.create(String::from("five"));
    assert_eq!(store.fold(name, five).unwrap(), name);
    assert_eq!(store.assignment_state(), AssignmentState::Normal);
    assert_eq!(store.lookup("five"), Some(five));
}

#[test]
fn assignment_resolves_the_bound_value() {
    let mut store = Store::with_constants();
    run(&mut store, "tau: pi").unwrap();
    let tau = store.lookup("tau").unwrap();
    assert_eq!(tau.kind, WordKind::Double);
}

#[test]
fn assignment_targets_must_be_free_names() {
    assert!(matches!(failure("1: 2"), ExecutionError::CannotAssign { .. }));
    assert!(matches!(failure("add: 2"), ExecutionError::NameAlreadyTaken { .. }));
    assert!(matches!(failure("x: nope"), ExecutionError::NameNotFound { .. }));
}

#[test]
fn failed_sentences_leave_no_pending_assignment() {
    let mut store = Store::with_constants();
    assert!(run(&mut store, "x: nope").is_err());
    assert_eq!(store.assignment_state(), AssignmentState::Normal);
}

#[test]
fn last_result_is_resolved() {
    let mut store = Store::with_constants();
    let word = run(&mut store, "val: 42").unwrap().unwrap();
    assert_eq!(word.kind, WordKind::Int);
    assert_eq!(*store.read::<i32>(word), 42);
}

#[test]
fn blocks_on_the_right_take_the_left_word_first() {
    assert_eq!(show("inc {inc 1}"), "3");
    assert_eq!(show("twice: {inc inc}\nmul[10 _] twice 1"), "30");
    assert_eq!(show("5 {}"), "5");
    assert_eq!(show("sub[10 _] {2}"), "8");
}

#[test]
fn blocks_on_the_left_receive_the_argument_last() {
    assert_eq!(show("{sub[_ 1]} 10"), "9");
    assert_eq!(show("{} 10"), "10");
}

#[test]
fn unconnected_tuples_do_not_top_up() {
    assert_eq!(show("[_2 _1] [1 2]"), "[2 1]");
    assert_eq!(show("[_ _] 7"), "[7 7]");
    assert_eq!(show("[1 2] 3"), "[1 2]");
}

#[test]
fn connected_tuples_top_up_with_unused_components() {
    assert_eq!(show("sub[_2] [10 3]"), "-7");
    assert_eq!(show("sub[_1] [10 3]"), "7");
    assert_eq!(show("sub[] [10 3]"), "7");
}

#[test]
fn placeholder_errors() {
    assert!(matches!(failure("_2 [1]"), ExecutionError::PlaceholderOutOfRange { .. }));
    assert!(matches!(failure("_2 5"), ExecutionError::PlaceholderOutOfRange { .. }));
    assert!(matches!(failure("_ [1 2]"), ExecutionError::PlaceholderOutOfRange { .. }));
    assert!(matches!(failure("[_3] [1 2]"),
                     ExecutionError::PlaceholderOutOfRange { .. }));
}

#[test]
fn placeholders_cannot_fold_onto_placeholders() {
    let store = Store::new();
    assert!(matches!(store.fold_placeholder(Word::placeholder(1), Word::placeholder(2)),
                     Err(ExecutionError::CannotFoldPlaceholderToPlaceholder { .. })));
}

#[test]
fn placeholders_are_not_values() {
    assert!(matches!(failure("_"), ExecutionError::CannotFold { right: None, .. }));
    assert!(matches!(failure("inc _"), ExecutionError::NoMatchingOverload { .. }));
}

#[test]
fn executor_stages() {
    assert_eq!(show("|inc dec| 5"), "[6 4]");
    assert_eq!(show("|sum length sort| (3 1 2)"), "[6 3 (1 2 3)]");
    assert_eq!(show("|| 5"), "[]");
}

#[test]
fn executor_stages_group_connected_tuples() {
    let mut store = Store::new();
    let sentences = parse_program("|add[1 _] _1 mul[2 _]|", &mut store).unwrap();
    let executor = store.read::<Executor>(sentences[0].words[0]).clone();
    let stages = store.stages(&executor.words);

    assert_eq!(stages.len(), 3);
    assert_eq!(stages[0].len(), 2);
    assert!(store.read::<Tuple>(stages[0][1]).is_connected());
    assert_eq!(stages[1], vec![Word::placeholder(1)]);
}

#[test]
fn values_cannot_take_arguments() {
    let error = failure("true 1");
    assert!(matches!(error, ExecutionError::CannotFold { right: Some(_), .. }));
    assert_eq!(error.to_string(), "Could not fold words.");
}

#[test]
fn reductions_of_short_and_boolean_arrays() {
    assert_eq!(show("foldl[add] (1)"), "1");
    assert_eq!(show("scanl[or] (false true false)"), "(false true true)");
}

#[test]
fn errors_carry_their_words() {
    let mut store = Store::new();
    let error = run(&mut store, "nope 1").unwrap_err();
    let name = error.word1().unwrap();
    assert_eq!(store.display(name).to_string(), "nope");
    assert!(error.word2().is_none());
}

#[test]
fn resolving_a_value_returns_it_unchanged() {
    let mut store = Store::new();
    let numbers = store.create(vec![1, 2, 3]);
    let tuple = store.create(Tuple::unconnected(vec![numbers]));

    for word in [numbers, tuple] {
        let once = store.resolve_if_foldable(word).unwrap();
        assert_eq!(once, word);
        assert_eq!(store.resolve_if_foldable(once).unwrap(), word);
    }
}

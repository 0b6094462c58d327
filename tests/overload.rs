use anka::{
    error::ExecutionError,
    interpreter::{
        builtins::registry::{
            self, ArgType, INT_OPERATOR, Signature, find, find_signature, max_arity,
        },
        evaluator::overload::{Candidates, interpretations},
        value::{compound::Tuple, store::Store, word::Word},
    },
};

fn types(store: &Store, args: &[Word]) -> Vec<Vec<ArgType>> {
    Candidates::new(store, args).map(|candidate| candidate.iter().map(|i| i.ty).collect())
                                .collect()
}

#[test]
fn registry_lookups() {
    assert!(registry::is_builtin("foldl"));
    assert!(!registry::is_builtin("pi"));
    assert_eq!(max_arity("foldl"), 2);
    assert_eq!(max_arity("ioata"), 1);

    let add = find("add", &[ArgType::Double, ArgType::Double]).unwrap();
    assert_eq!(add.signature.ret, ArgType::Double);
    assert!(find("add", &[ArgType::Int]).is_none());

    let mul = find_signature("mul", &INT_OPERATOR).unwrap();
    assert_eq!(mul.name, "mul");
    assert!(find_signature("not", &INT_OPERATOR).is_none());
}

#[test]
fn every_name_has_consistent_overloads() {
    for overload in registry::all() {
        let same_params = registry::overloads(overload.name)
            .filter(|other| other.signature.params == overload.signature.params)
            .count();
        assert_eq!(same_params, 1, "duplicate overload {} {}", overload.name, overload.signature);
    }
}

#[test]
fn signatures_display_like_source() {
    assert_eq!(INT_OPERATOR.to_string(), "[int int] -> int");
    let sum = Signature { params: &[ArgType::DoubleArray],
                          ret:    ArgType::Double, };
    assert_eq!(sum.to_string(), "(double) -> double");
}

#[test]
fn interpretations_are_ordered_most_specific_first() {
    let mut store = Store::new();
    let numbers = store.create(vec![1, 2]);
    let flags = store.create(vec![true]);
    let ratio = store.create(0.5);
    let tuple = store.create(Tuple::unconnected(vec![]));

    let read = |word| {
        interpretations(&store, word).iter()
                                     .map(|i| (i.ty, i.expand))
                                     .collect::<Vec<_>>()
    };

    assert_eq!(read(numbers), vec![(ArgType::IntArray, false), (ArgType::Int, true)]);
    assert_eq!(read(flags), vec![(ArgType::BoolArray, false), (ArgType::Bool, true)]);
    assert_eq!(read(ratio), vec![(ArgType::Double, false)]);
    assert!(read(tuple).is_empty());
}

#[test]
fn function_names_offer_every_overload_signature() {
    let mut store = Store::new();
    let add = store.create(String::from("add"));
    let options = interpretations(&store, add);
    assert_eq!(options.len(), 2);
    assert!(matches!(options[0].ty, ArgType::Function(signature) if *signature == INT_OPERATOR));
}

#[test]
fn first_position_turns_fastest() {
    let mut store = Store::new();
    let one = store.create(1);
    let two = store.create(2);

    assert_eq!(types(&store, &[one, two]),
               vec![vec![ArgType::Int, ArgType::Int],
                    vec![ArgType::Double, ArgType::Int],
                    vec![ArgType::Int, ArgType::Double],
                    vec![ArgType::Double, ArgType::Double]]);
}

#[test]
fn uninterpretable_arguments_yield_no_candidates() {
    let mut store = Store::new();
    let one = store.create(1);
    assert_eq!(types(&store, &[one, Word::placeholder(1)]).len(), 0);
    assert_eq!(types(&store, &[]), vec![Vec::<ArgType>::new()]);
}

#[test]
fn call_builtin_picks_the_first_invocable_candidate() {
    let mut store = Store::new();
    let add = store.create(String::from("add"));
    let ten = store.create(10);
    let ratio = store.create(1.5);
    let args = store.create(Tuple::unconnected(vec![ten, ratio]));

    let result = store.call_builtin(add, args).unwrap();
    assert_eq!(*store.read::<f64>(result), 11.5);
}

#[test]
fn expanded_candidates_must_return_scalars() {
    let mut store = Store::new();
    let ioata = store.create(String::from("ioata"));
    let numbers = store.create(vec![1, 2]);

    assert!(matches!(store.call_builtin(ioata, numbers),
                     Err(ExecutionError::NoMatchingOverload { .. })));
}

#[test]
fn length_mismatches_exhaust_the_candidates() {
    let mut store = Store::new();
    let add = store.create(String::from("add"));
    let short = store.create(vec![1, 2]);
    let long = store.create(vec![1, 2, 3]);
    let args = store.create(Tuple::unconnected(vec![short, long]));

    assert!(matches!(store.call_builtin(add, args),
                     Err(ExecutionError::NoMatchingOverload { .. })));
}

#[test]
fn bound_names_are_substituted_before_matching() {
    let mut store = Store::new();
    let add = store.create(String::from("add"));
    let val = store.create(String::from("val"));
    let forty = store.create(40);
    store.bind("val", forty);
    let two = store.create(2);
    let args = store.create(Tuple::unconnected(vec![val, two]));

    let result = store.call_builtin(add, args).unwrap();
    assert_eq!(*store.read::<i32>(result), 42);
}

#[test]
fn non_builtins_are_not_found() {
    let mut store = Store::new();
    let nope = store.create(String::from("nope"));
    let one = store.create(1);

    assert!(matches!(store.call_builtin(nope, one),
                     Err(ExecutionError::NameNotFound { name }) if name == nope));
}

#[test]
fn combinators_take_functions_by_name() {
    let mut store = Store::new();
    let scanl = store.create(String::from("scanl"));
    let mul = store.create(String::from("mul"));
    let numbers = store.create(vec![1.0, 2.0, 3.0]);
    let args = store.create(Tuple::unconnected(vec![mul, numbers]));

    let result = store.call_builtin(scanl, args).unwrap();
    assert_eq!(store.read::<Vec<f64>>(result), &vec![1.0, 2.0, 6.0]);
}

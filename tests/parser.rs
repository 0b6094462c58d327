use anka::{
    error::ParseError,
    interpreter::{
        parser::core::parse_program,
        value::{
            compound::{Block, Executor, Tuple},
            store::Store,
            word::{Word, WordKind},
        },
    },
};

fn parse(source: &str) -> (Store, Vec<Vec<Word>>) {
    let mut store = Store::new();
    let sentences = parse_program(source, &mut store).unwrap_or_else(|e| panic!("{e}"));
    (store, sentences.into_iter().map(|s| s.words).collect())
}

fn parse_error(source: &str) -> ParseError {
    parse_program(source, &mut Store::new()).expect_err("source should not parse")
}

fn kinds(words: &[Word]) -> Vec<WordKind> {
    words.iter().map(|word| word.kind).collect()
}

#[test]
fn array_elements_stay_out_of_the_scalar_column() {
    let (store, _) = parse("40 (10 20 30) 50 (1 2 3)");
    assert_eq!(store.integers(), &[40, 50]);
    assert_eq!(store.integer_arrays(), &[vec![10, 20, 30], vec![1, 2, 3]]);
}

#[test]
fn literals_of_every_type() {
    let (store, sentences) = parse("1 -2 3.5 -0.25 true (1.0 2.0) (true false)");
    assert_eq!(kinds(&sentences[0]),
               vec![WordKind::Int,
                    WordKind::Int,
                    WordKind::Double,
                    WordKind::Double,
                    WordKind::Bool,
                    WordKind::DoubleArray,
                    WordKind::BoolArray]);
    assert_eq!(store.integers(), &[1, -2]);
    assert_eq!(store.doubles(), &[3.5, -0.25]);
    assert_eq!(store.double_arrays(), &[vec![1.0, 2.0]]);
    assert_eq!(store.booleans(), &[true]);
    assert_eq!(store.boolean_arrays(), &[vec![true, false]]);
}

#[test]
fn names_are_stored_in_source_order() {
    let (store, _) = parse("dec inc foo");
    assert_eq!(store.names(), &["dec", "inc", "foo"]);
}

#[test]
fn placeholders_carry_their_number() {
    let (store, sentences) = parse("[_ _1 _2]");
    let tuple = store.read::<Tuple>(sentences[0][0]);
    assert_eq!(tuple.words,
               vec![Word::placeholder(0), Word::placeholder(1), Word::placeholder(2)]);
}

#[test]
fn assignment_produces_name_marker_value() {
    let (_, sentences) = parse("inc2: {inc inc}");
    assert_eq!(kinds(&sentences[0]),
               vec![WordKind::Name, WordKind::Assignment, WordKind::Block]);
}

#[test]
fn tuples_directly_after_a_name_are_connected() {
    let (store, sentences) = parse("add[10 _] add [10 _]");
    let words = &sentences[0];
    assert_eq!(kinds(words),
               vec![WordKind::Name, WordKind::Tuple, WordKind::Name, WordKind::Tuple]);

    let connected = store.read::<Tuple>(words[1]);
    assert_eq!(connected.connected_name, Some(words[0].index));
    assert!(!store.read::<Tuple>(words[3]).is_connected());
}

#[test]
fn groups_nest() {
    let (store, sentences) = parse("|{to_double sum} length| [1 [2 3]]");
    let words = &sentences[0];

    let executor = store.read::<Executor>(words[0]);
    assert_eq!(kinds(&executor.words), vec![WordKind::Block, WordKind::Name]);
    let block = store.read::<Block>(executor.words[0]);
    assert_eq!(kinds(&block.words), vec![WordKind::Name, WordKind::Name]);

    let outer = store.read::<Tuple>(words[1]);
    assert_eq!(kinds(&outer.words), vec![WordKind::Int, WordKind::Tuple]);
}

#[test]
fn each_line_is_a_sentence() {
    let (_, sentences) = parse("val: 42\n\n   # comment\nadd[val _] 10\r\n");
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[1].len(), 3);
}

#[test]
fn empty_tuple_is_allowed() {
    let (store, sentences) = parse("add[] [10 20]");
    assert!(store.read::<Tuple>(sentences[0][1]).words.is_empty());
}

#[test]
fn malformed_arrays_are_rejected() {
    assert!(matches!(parse_error("()"), ParseError::EmptyArray { line: 1 }));
    assert!(matches!(parse_error("(1 2.0)"), ParseError::MixedArray { line: 1 }));
    assert!(matches!(parse_error("(1 (2))"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("(1 x)"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn groups_must_close_on_their_line() {
    assert!(matches!(parse_error("[1 2"),
                     ParseError::UnterminatedGroup { delimiter: ']',
                                                     line:      1, }));
    assert!(matches!(parse_error("inc 1\n{inc\n}"),
                     ParseError::UnterminatedGroup { delimiter: '}',
                                                     line:      2, }));
    assert!(matches!(parse_error("|inc"),
                     ParseError::UnterminatedGroup { delimiter: '|', .. }));
    assert!(matches!(parse_error("inc 1\ninc [2"),
                     ParseError::UnterminatedGroup { delimiter: ']',
                                                     line:      2, }));
    assert!(matches!(parse_error("(1 2\n)"),
                     ParseError::UnterminatedGroup { delimiter: ')', .. }));
}

#[test]
fn stray_closers_and_unknown_characters() {
    assert!(matches!(parse_error("inc ]"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("inc\n@"),
                     ParseError::UnexpectedToken { line: 2, .. }));
}

#[test]
fn oversized_integers_are_rejected() {
    assert!(matches!(parse_error("inc 2147483648"),
                     ParseError::LiteralTooLarge { .. }));
    let (store, _) = parse("-2147483648");
    assert_eq!(store.integers(), &[i32::MIN]);
}

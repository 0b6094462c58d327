use anka::interpreter::value::{
    compound::{Block, Executor, Tuple},
    format::{BLOCK_TEXT, format_double},
    store::Store,
    word::Word,
};

#[test]
fn doubles_keep_one_fractional_digit() {
    assert_eq!(format_double(0.0), "0.0");
    assert_eq!(format_double(11.2), "11.2");
    assert_eq!(format_double(-4.0), "-4.0");
    assert_eq!(format_double(std::f64::consts::PI), "3.141593");
    assert_eq!(format_double(1e-9), "0.0");
}

#[test]
fn scalars_and_arrays() {
    let mut store = Store::new();
    let words = [store.create(-7),
                 store.create(true),
                 store.create(2.5),
                 store.create(vec![1, -2, 3]),
                 store.create(vec![0.5, 2.0]),
                 store.create(vec![false, true])];
    let text: Vec<String> = words.iter().map(|&word| store.display(word).to_string()).collect();

    assert_eq!(text, ["-7", "true", "2.5", "(1 -2 3)", "(0.5 2.0)", "(false true)"]);
}

#[test]
fn compound_words() {
    let mut store = Store::new();
    let inc = store.create(String::from("inc"));
    let one = store.create(1);
    let inner = store.create(Tuple::unconnected(vec![one, Word::placeholder(0)]));
    let outer = store.create(Tuple::unconnected(vec![inner, Word::placeholder(2)]));
    let executor = store.create(Executor { words: vec![inc, Word::placeholder(1)] });
    let block = store.create(Block { words: vec![inc] });
    let empty = store.create(Tuple::default());

    assert_eq!(store.display(outer).to_string(), "[[1 _] _2]");
    assert_eq!(store.display(executor).to_string(), "|inc _1|");
    assert_eq!(store.display(block).to_string(), BLOCK_TEXT);
    assert_eq!(store.display(Word::assignment()).to_string(), ":");
    assert_eq!(store.display(empty).to_string(), "[]");
}

#[test]
fn debug_output_names_the_kind() {
    let mut store = Store::new();
    let ratio = store.create(0.25);
    assert_eq!(format!("{:?}", store.display(ratio)), "Double(0.25)");
}

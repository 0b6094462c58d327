use std::fmt;

use crate::interpreter::value::{
    compound::{Executor, Tuple},
    store::Store,
    word::{Word, WordKind},
};

/// Text a block renders as. Block bodies are not printed.
pub const BLOCK_TEXT: &str = "user-defined block";

/// A word paired with the store it lives in, ready to be displayed.
///
/// Created by [`Store::display`].
#[derive(Clone, Copy)]
pub struct WordDisplay<'a> {
    store: &'a Store,
    word:  Word,
}

impl Store {
    /// Returns a value that formats `word` the way the REPL prints results.
    ///
    /// # Example
    /// ```
    /// use anka::interpreter::value::{compound::Tuple, store::Store};
    ///
    /// let mut store = Store::new();
    /// let numbers = store.create(vec![1, 2, 3]);
    /// let ratio = store.create(3.5);
    /// let pair = store.create(Tuple::unconnected(vec![numbers, ratio]));
    ///
    /// assert_eq!(store.display(pair).to_string(), "[(1 2 3) 3.5]");
    /// ```
    #[must_use]
    pub const fn display(&self, word: Word) -> WordDisplay<'_> {
        WordDisplay { store: self,
                      word }
    }
}

/// Formats a double with up to six fractional digits, trimming trailing
/// zeros but keeping at least one digit after the point.
///
/// # Example
/// ```
/// use anka::interpreter::value::format::format_double;
///
/// assert_eq!(format_double(1.2), "1.2");
/// assert_eq!(format_double(3.0), "3.0");
/// assert_eq!(format_double(-0.125), "-0.125");
/// ```
#[must_use]
pub fn format_double(value: f64) -> String {
    let mut text = format!("{value:.6}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').len();
        text.truncate(trimmed);
        if text.ends_with('.') {
            text.push('0');
        }
    }
    text
}

/// Writes `items` separated by single spaces.
fn write_spaced<T, F>(f: &mut fmt::Formatter<'_>, items: &[T], mut write_item: F) -> fmt::Result
    where F: FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result
{
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write_item(f, item)?;
    }
    Ok(())
}

impl WordDisplay<'_> {
    fn words(&self, f: &mut fmt::Formatter<'_>, words: &[Word]) -> fmt::Result {
        write_spaced(f, words, |f, &word| write!(f, "{}", self.store.display(word)))
    }
}

impl fmt::Display for WordDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store;
        let word = self.word;
        match word.kind {
            WordKind::Int => write!(f, "{}", store.read::<i32>(word)),
            WordKind::Double => write!(f, "{}", format_double(*store.read::<f64>(word))),
            WordKind::Bool => write!(f, "{}", store.read::<bool>(word)),
            WordKind::IntArray => {
                write!(f, "(")?;
                write_spaced(f, store.read::<Vec<i32>>(word), |f, value| write!(f, "{value}"))?;
                write!(f, ")")
            },
            WordKind::DoubleArray => {
                write!(f, "(")?;
                write_spaced(f, store.read::<Vec<f64>>(word), |f, &value| {
                    write!(f, "{}", format_double(value))
                })?;
                write!(f, ")")
            },
            WordKind::BoolArray => {
                write!(f, "(")?;
                write_spaced(f, store.read::<Vec<bool>>(word), |f, value| write!(f, "{value}"))?;
                write!(f, ")")
            },
            WordKind::Name => write!(f, "{}", store.name(word)),
            WordKind::Tuple => {
                write!(f, "[")?;
                self.words(f, &store.read::<Tuple>(word).words)?;
                write!(f, "]")
            },
            WordKind::Executor => {
                write!(f, "|")?;
                self.words(f, &store.read::<Executor>(word).words)?;
                write!(f, "|")
            },
            WordKind::Placeholder if word.index == 0 => write!(f, "_"),
            WordKind::Placeholder => write!(f, "_{}", word.index),
            WordKind::Block => write!(f, "{BLOCK_TEXT}"),
            WordKind::Assignment => write!(f, ":"),
        }
    }
}

impl fmt::Debug for WordDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({self})", self.word.kind)
    }
}

/// The kind tag of a [`Word`].
///
/// Each kind except `Placeholder` and `Assignment` names one column of the
/// [`Store`](crate::interpreter::value::store::Store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordKind {
    /// A 32-bit integer.
    Int,
    /// An array of 32-bit integers.
    IntArray,
    /// A double precision floating-point number.
    Double,
    /// An array of doubles.
    DoubleArray,
    /// A boolean.
    Bool,
    /// An array of booleans.
    BoolArray,
    /// An identifier, either user-bound or a builtin function name.
    Name,
    /// A group of words, possibly attached to a function name.
    Tuple,
    /// A positional marker; the index is the placeholder number.
    Placeholder,
    /// A pipeline literal `| … |`.
    Executor,
    /// A deferred word sequence `{ … }`.
    Block,
    /// The `:` marker of `name: value`; the index is unused.
    Assignment,
}

/// A tagged handle to one runtime value.
///
/// Words are the only currency passed between the parser and the evaluator.
/// They are small, `Copy`, and compare structurally: two words are equal when
/// they have the same kind and point at the same slot, not when the values
/// they point at happen to be equal.
///
/// # Example
/// ```
/// use anka::interpreter::value::word::{Word, WordKind};
///
/// let first = Word::placeholder(1);
/// assert_eq!(first.kind, WordKind::Placeholder);
/// assert_eq!(first, Word::new(WordKind::Placeholder, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    /// Which column (or marker) this word refers to.
    pub kind:  WordKind,
    /// Slot inside the column, or the placeholder number.
    pub index: u32,
}

impl Word {
    /// Creates a word from its parts.
    #[must_use]
    pub const fn new(kind: WordKind, index: u32) -> Self {
        Self { kind, index }
    }

    /// Creates a placeholder word. `0` is the bare `_`.
    #[must_use]
    pub const fn placeholder(number: u32) -> Self {
        Self::new(WordKind::Placeholder, number)
    }

    /// Creates the assignment marker.
    #[must_use]
    pub const fn assignment() -> Self {
        Self::new(WordKind::Assignment, 0)
    }

    /// Position of the value inside its column.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.index as usize
    }

    /// Returns `true` if the word is an identifier.
    #[must_use]
    pub const fn is_name(self) -> bool {
        matches!(self.kind, WordKind::Name)
    }

    /// Returns `true` if the word is a tuple.
    #[must_use]
    pub const fn is_tuple(self) -> bool {
        matches!(self.kind, WordKind::Tuple)
    }
}

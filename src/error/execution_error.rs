use std::fmt;

use crate::interpreter::value::{store::Store, word::Word};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while folding words.
///
/// Errors carry the words involved rather than rendered text, because only
/// the [`Store`] that produced them can format them. Use
/// [`ExecutionReport`] to render an error against its store.
pub enum ExecutionError {
    /// A name has no user binding and is not usable as a value.
    NameNotFound {
        /// The unresolved name.
        name: Word,
    },
    /// Tried to bind a builtin or an already bound name.
    NameAlreadyTaken {
        /// The name that is taken.
        name: Word,
    },
    /// The left side of `:` is not a name.
    CannotAssign {
        /// The word written before `:`.
        target: Word,
        /// The value that was to be bound.
        value:  Word,
    },
    /// No overload of a builtin accepts the argument.
    NoMatchingOverload {
        /// The builtin name.
        function: Word,
        /// The argument it was folded against.
        argument: Word,
    },
    /// A placeholder addresses a component the argument does not have.
    PlaceholderOutOfRange {
        /// The placeholder.
        placeholder: Word,
        /// The argument it was substituted from.
        argument:    Word,
    },
    /// A placeholder was folded against another placeholder.
    CannotFoldPlaceholderToPlaceholder {
        /// The placeholder on the left.
        lhs: Word,
        /// The placeholder on the right.
        rhs: Word,
    },
    /// Two words have no folding rule, or a marker word was used as a value.
    CannotFold {
        /// The left word, or the word used as a value.
        left:  Word,
        /// The right word, when there is one.
        right: Option<Word>,
    },
    /// Two expanded arrays have different lengths. The overload resolver
    /// recovers from this by trying the next candidate.
    LengthMismatch {
        /// Length of the left array.
        left:  usize,
        /// Length of the right array.
        right: usize,
    },
    /// Integer division by zero.
    DivisionByZero,
}

impl ExecutionError {
    /// The first offending word, if any.
    #[must_use]
    pub const fn word1(&self) -> Option<Word> {
        match self {
            Self::NameNotFound { name } | Self::NameAlreadyTaken { name } => Some(*name),
            Self::CannotAssign { target, .. } => Some(*target),
            Self::NoMatchingOverload { function, .. } => Some(*function),
            Self::PlaceholderOutOfRange { placeholder, .. } => Some(*placeholder),
            Self::CannotFoldPlaceholderToPlaceholder { lhs, .. } => Some(*lhs),
            Self::CannotFold { left, .. } => Some(*left),
            Self::LengthMismatch { .. } | Self::DivisionByZero => None,
        }
    }

    /// The second offending word, if any.
    #[must_use]
    pub const fn word2(&self) -> Option<Word> {
        match self {
            Self::CannotAssign { value, .. } => Some(*value),
            Self::NoMatchingOverload { argument, .. }
            | Self::PlaceholderOutOfRange { argument, .. } => Some(*argument),
            Self::CannotFoldPlaceholderToPlaceholder { rhs, .. } => Some(*rhs),
            Self::CannotFold { right, .. } => *right,
            Self::NameNotFound { .. }
            | Self::NameAlreadyTaken { .. }
            | Self::LengthMismatch { .. }
            | Self::DivisionByZero => None,
        }
    }

    /// The human-readable message, without the offending words.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameNotFound { .. } => write!(f, "Name not found."),

            Self::NameAlreadyTaken { .. } => write!(f, "Name is already taken."),

            Self::CannotAssign { .. } => write!(f, "Only a name can be assigned to."),

            Self::NoMatchingOverload { .. } => {
                write!(f, "No overload of the function accepts the argument.")
            },

            Self::PlaceholderOutOfRange { placeholder, .. } => {
                if placeholder.index == 0 {
                    write!(f, "Placeholder _ is out of range.")
                } else {
                    write!(f, "Placeholder _{} is out of range.", placeholder.index)
                }
            },

            Self::CannotFoldPlaceholderToPlaceholder { .. } => {
                write!(f, "Cannot fold a placeholder to another.")
            },

            Self::CannotFold { right: None, .. } => write!(f, "Cannot fold word."),

            Self::CannotFold { .. } => write!(f, "Could not fold words."),

            Self::LengthMismatch { left, right } => {
                write!(f, "Array lengths do not match: {left} vs {right}.")
            },

            Self::DivisionByZero => write!(f, "Division by zero."),
        }
    }
}

impl std::error::Error for ExecutionError {}

/// An [`ExecutionError`] rendered against the store that produced it.
///
/// Displays the error message followed by one `word: …` line per offending
/// word.
///
/// # Example
/// ```
/// use anka::{
///     error::{ExecutionError, ExecutionReport},
///     interpreter::value::store::Store,
/// };
///
/// let mut store = Store::new();
/// let left = store.create(10);
/// let right = store.create(20);
/// let error = ExecutionError::CannotFold { left, right: Some(right) };
///
/// let report = ExecutionReport::new(&error, &store);
/// assert_eq!(report.to_string(), "Could not fold words.\nword: 10\nword: 20");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionReport {
    /// The error being reported.
    pub error: ExecutionError,
    /// The offending words, already formatted.
    pub words: Vec<String>,
}

impl ExecutionReport {
    /// Formats the words of `error` using `store`.
    #[must_use]
    pub fn new(error: &ExecutionError, store: &Store) -> Self {
        let words = [error.word1(), error.word2()].into_iter()
                                                  .flatten()
                                                  .map(|word| store.display(word).to_string())
                                                  .collect();
        Self { error: error.clone(),
               words }
    }
}

impl fmt::Display for ExecutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        for word in &self.words {
            write!(f, "\nword: {word}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ExecutionReport {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

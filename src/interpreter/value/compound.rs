use crate::interpreter::value::word::Word;

/// A group of words written as `[ … ]`.
///
/// When the literal is written directly after a name (`add[10 _]`) the
/// tuple remembers that name so that missing trailing arguments can be
/// completed when the tuple is filled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tuple {
    /// The tuple elements in source order.
    pub words:          Vec<Word>,
    /// Index into the name column of the function this tuple is attached to.
    pub connected_name: Option<u32>,
}

impl Tuple {
    /// Creates a tuple that is not attached to any name.
    #[must_use]
    pub const fn unconnected(words: Vec<Word>) -> Self {
        Self { words,
               connected_name: None }
    }

    /// Creates a tuple attached to the name stored at `name_index`.
    #[must_use]
    pub const fn connected(words: Vec<Word>, name_index: u32) -> Self {
        Self { words,
               connected_name: Some(name_index) }
    }

    /// Returns `true` if the tuple was written directly after a name.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected_name.is_some()
    }
}

/// A deferred word sequence `{ … }`, used as a user-defined function body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// The body, evaluated only when the block is folded against a value.
    pub words: Vec<Word>,
}

/// A pipeline literal `| … |`.
///
/// Its words form independent stages which all receive the same input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Executor {
    /// The stage words in source order.
    pub words: Vec<Word>,
}

/// One line of a program; the unit of reduction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    /// The words of the sentence, reduced right to left.
    pub words: Vec<Word>,
}

use std::iter::Peekable;

use crate::interpreter::{
    lexer::{Lexeme, Token},
    parser::core::{ParseResult, parse_words},
    value::{
        compound::{Block, Executor, Tuple},
        store::Store,
        word::Word,
    },
};

/// The nesting constructs of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// `[ … ]`, attached to the name at `connected_to` when written directly
    /// after it.
    Tuple {
        /// Index of the name the tuple is connected to.
        connected_to: Option<u32>,
    },
    /// `{ … }`
    Block,
    /// `| … |`
    Executor,
}

impl Group {
    /// Returns `true` if `token` ends this group.
    #[must_use]
    pub fn is_closed_by(self, token: &Token) -> bool {
        matches!((self, token),
                 (Self::Tuple { .. }, Token::RBracket)
                 | (Self::Block, Token::RBrace)
                 | (Self::Executor, Token::Pipe))
    }

    /// The closing delimiter, for error messages.
    #[must_use]
    pub const fn closing_char(self) -> char {
        match self {
            Self::Tuple { .. } => ']',
            Self::Block => '}',
            Self::Executor => '|',
        }
    }
}

/// Parses the words of a group whose opening token was just consumed, and
/// stores the resulting compound value.
///
/// Groups nest arbitrarily; a `|` inside an executor always closes it, so
/// nested executors have to be wrapped in another group.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the opening token.
/// - `store`: The store receiving the group and its words.
/// - `group`: Which construct is being parsed.
/// - `line`: Line of the opening token.
///
/// # Returns
/// A tuple, block or executor word.
///
/// # Errors
/// `UnterminatedGroup` if the line ends before the closing token, plus any
/// error from the nested words.
pub fn parse_group<'a, I>(tokens: &mut Peekable<I>,
                          store: &mut Store,
                          group: Group,
                          line: usize)
                          -> ParseResult<Word>
    where I: Iterator<Item = &'a Lexeme>
{
    let words = parse_words(tokens, store, Some((group, line)))?;

    Ok(match group {
           Group::Tuple { connected_to: Some(name_index) } => {
               store.create(Tuple::connected(words, name_index))
           },
           Group::Tuple { connected_to: None } => store.create(Tuple::unconnected(words)),
           Group::Block => store.create(Block { words }),
           Group::Executor => store.create(Executor { words }),
       })
}

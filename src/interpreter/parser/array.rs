use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token},
        parser::core::ParseResult,
        value::{store::Store, word::Word},
    },
    util::num::parse_i32_literal,
};

/// Elements collected so far by [`parse_array`]. The first element fixes
/// the element type.
enum Elements {
    Empty,
    Integers(Vec<i32>),
    Doubles(Vec<f64>),
    Booleans(Vec<bool>),
}

/// Parses an array literal whose `(` was just consumed.
///
/// Elements are integer, double or boolean literals of a single type.
/// Nested arrays, names and groups are not allowed inside.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `(`.
/// - `store`: The store receiving the array.
/// - `line`: Line of the `(` token.
///
/// # Returns
/// An integer, double or boolean array word.
///
/// # Errors
/// - `EmptyArray` for `()`.
/// - `MixedArray` when element types differ.
/// - `UnexpectedToken` for anything that is not a literal.
/// - `UnterminatedGroup` if the line ends before `)`.
pub fn parse_array<'a, I>(tokens: &mut Peekable<I>, store: &mut Store, line: usize) -> ParseResult<Word>
    where I: Iterator<Item = &'a Lexeme>
{
    let mut elements = Elements::Empty;

    loop {
        let Some(lexeme) = tokens.next() else {
            return Err(ParseError::UnterminatedGroup { delimiter: ')',
                                                       line });
        };
        let line = lexeme.line;

        elements = match (elements, &lexeme.token) {
            (Elements::Empty, Token::RParen) => return Err(ParseError::EmptyArray { line }),
            (Elements::Integers(values), Token::RParen) => return Ok(store.create(values)),
            (Elements::Doubles(values), Token::RParen) => return Ok(store.create(values)),
            (Elements::Booleans(values), Token::RParen) => return Ok(store.create(values)),

            (Elements::Empty, Token::Integer(literal)) => {
                Elements::Integers(vec![integer_literal(literal, line)?])
            },
            (Elements::Integers(mut values), Token::Integer(literal)) => {
                values.push(integer_literal(literal, line)?);
                Elements::Integers(values)
            },
            (Elements::Empty, Token::Double(value)) => Elements::Doubles(vec![*value]),
            (Elements::Doubles(mut values), Token::Double(value)) => {
                values.push(*value);
                Elements::Doubles(values)
            },
            (Elements::Empty, Token::Bool(value)) => Elements::Booleans(vec![*value]),
            (Elements::Booleans(mut values), Token::Bool(value)) => {
                values.push(*value);
                Elements::Booleans(values)
            },

            (_, Token::Integer(_) | Token::Double(_) | Token::Bool(_)) => {
                return Err(ParseError::MixedArray { line });
            },
            (_, Token::NewLine) => {
                return Err(ParseError::UnterminatedGroup { delimiter: ')',
                                                           line });
            },
            (_, token) => {
                return Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                         line });
            },
        };
    }
}

fn integer_literal(literal: &str, line: usize) -> ParseResult<i32> {
    parse_i32_literal(literal).ok_or_else(|| ParseError::LiteralTooLarge { literal: literal.to_string(),
                                                                           line })
}

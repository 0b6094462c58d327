use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Token, tokenize},
        parser::{
            array::parse_array,
            group::{Group, parse_group},
        },
        value::{compound::Sentence, store::Store, word::Word},
    },
    util::num::parse_i32_literal,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Each line becomes one sentence. Blank and comment-only lines produce no
/// sentence. Literal values are created in `store` as they are parsed.
///
/// # Parameters
/// - `source`: The program text.
/// - `store`: The store receiving literals, names and groups.
///
/// # Returns
/// The sentences in source order.
///
/// # Example
/// ```
/// use anka::interpreter::{
///     parser::core::parse_program,
///     value::{store::Store, word::WordKind},
/// };
///
/// let mut store = Store::new();
/// let sentences = parse_program("inc2: {inc inc}\n\n# comment\ninc2 5", &mut store).unwrap();
///
/// assert_eq!(sentences.len(), 2);
/// let kinds: Vec<_> = sentences[0].words.iter().map(|word| word.kind).collect();
/// assert_eq!(kinds, vec![WordKind::Name, WordKind::Assignment, WordKind::Block]);
/// ```
pub fn parse_program(source: &str, store: &mut Store) -> ParseResult<Vec<Sentence>> {
    let lexemes = tokenize(source)?;
    let mut tokens = lexemes.iter().peekable();
    let mut sentences = Vec::new();

    while tokens.peek().is_some() {
        let words = parse_words(&mut tokens, store, None)?;
        tokens.next_if(|lexeme| lexeme.token == Token::NewLine);
        if !words.is_empty() {
            sentences.push(Sentence { words });
        }
    }

    Ok(sentences)
}

/// Parses words up to the end of a sentence or the end of a group.
///
/// With `group` set to `None` parsing stops before the next newline or at
/// the end of input. Inside a group it stops after the group's closing
/// token; reaching a newline or the end of input first is an error.
///
/// A `[` that directly follows a name, with nothing in between, produces a
/// tuple connected to that name.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first word.
/// - `store`: The store receiving parsed values.
/// - `group`: The enclosing group with the line it was opened on, if any.
///
/// # Returns
/// The parsed words.
pub fn parse_words<'a, I>(tokens: &mut Peekable<I>,
                          store: &mut Store,
                          group: Option<(Group, usize)>)
                          -> ParseResult<Vec<Word>>
    where I: Iterator<Item = &'a Lexeme>
{
    let mut words = Vec::new();
    // End offset and name index of the previous word when it was a name.
    let mut previous_name: Option<(usize, u32)> = None;

    loop {
        let Some(&lexeme) = tokens.peek() else {
            return match group {
                None => Ok(words),
                Some((group, line)) => Err(ParseError::UnterminatedGroup { delimiter:
                                                                               group.closing_char(),
                                                                           line }),
            };
        };

        if lexeme.token == Token::NewLine {
            return match group {
                None => Ok(words),
                Some((group, _)) => {
                    Err(ParseError::UnterminatedGroup { delimiter: group.closing_char(),
                                                        line:      lexeme.line, })
                },
            };
        }

        if let Some((group, _)) = group
           && group.is_closed_by(&lexeme.token)
        {
            tokens.next();
            return Ok(words);
        }

        let connected_to =
            previous_name.filter(|&(end, _)| lexeme.token == Token::LBracket && end == lexeme.span.start)
                         .map(|(_, name_index)| name_index);

        tokens.next();
        let word = parse_word(lexeme, tokens, store, connected_to)?;
        previous_name = word.is_name().then_some((lexeme.span.end, word.index));
        words.push(word);
    }
}

/// Parses a single word starting at `lexeme`, which was just consumed.
///
/// # Parameters
/// - `lexeme`: The first token of the word.
/// - `tokens`: Token iterator positioned after `lexeme`.
/// - `store`: The store receiving parsed values.
/// - `connected_to`: Name index a tuple opened here attaches to.
///
/// # Returns
/// The parsed word.
///
/// # Errors
/// - `UnexpectedToken` for closing delimiters without an opener.
/// - Any error from parsing a nested array or group.
fn parse_word<'a, I>(lexeme: &Lexeme,
                     tokens: &mut Peekable<I>,
                     store: &mut Store,
                     connected_to: Option<u32>)
                     -> ParseResult<Word>
    where I: Iterator<Item = &'a Lexeme>
{
    let line = lexeme.line;

    match &lexeme.token {
        Token::Integer(literal) => {
            let value =
                parse_i32_literal(literal).ok_or_else(|| ParseError::LiteralTooLarge { literal:
                                                                                           literal.clone(),
                                                                                       line })?;
            Ok(store.create(value))
        },
        Token::Double(value) => Ok(store.create(*value)),
        Token::Bool(value) => Ok(store.create(*value)),
        Token::Name(name) => Ok(store.create(name.clone())),
        Token::Placeholder(number) => Ok(Word::placeholder(*number)),
        Token::Colon => Ok(Word::assignment()),
        Token::LParen => parse_array(tokens, store, line),
        Token::LBracket => parse_group(tokens, store, Group::Tuple { connected_to }, line),
        Token::LBrace => parse_group(tokens, store, Group::Block, line),
        Token::Pipe => parse_group(tokens, store, Group::Executor, line),
        token => Err(ParseError::UnexpectedToken { token: token.to_string(),
                                                   line }),
    }
}

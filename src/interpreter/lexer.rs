use std::ops::Range;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult, util::num::parse_i32_literal};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Double literal tokens, such as `3.5` or `-0.25`.
    #[regex(r"-?[0-9]+\.[0-9]+", parse_double)]
    Double(f64),
    /// Integer literal tokens, such as `42` or `-7`. Literals that do not
    /// fit in 32 bits are kept as text and rejected by [`tokenize`].
    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string())]
    Integer(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// Names of builtins and user bindings, such as `inc` or `avg2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Name(String),
    /// `_` (number 0) or `_N`.
    #[regex(r"_[0-9]*", parse_placeholder)]
    Placeholder(u32),
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `|`
    #[token("|")]
    Pipe,
    /// `:`
    #[token(":")]
    Colon,

    /// End of a sentence.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Blanks, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// A token together with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The token.
    pub token: Token,
    /// The line the token starts on (one-based).
    pub line:  usize,
    /// Byte range of the token in the source.
    pub span:  Range<usize>,
}

/// Parses a double literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid double.
fn parse_double(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses the number of a placeholder token; the bare `_` is number `0`.
///
/// # Returns
/// - `Some(u32)`: The placeholder number.
/// - `None`: If the number does not fit in 32 bits.
fn parse_placeholder(lex: &logos::Lexer<Token>) -> Option<u32> {
    let digits = &lex.slice()[1..];
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}

/// Splits source text into lexemes.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// Every token with its line and byte span, in source order.
///
/// # Errors
/// - `UnexpectedToken` for characters that start no token.
/// - `LiteralTooLarge` for integer literals outside the 32-bit range.
///
/// # Example
/// ```
/// use anka::interpreter::lexer::{Token, tokenize};
///
/// let lexemes = tokenize("add[10 _] 20 # sum").unwrap();
/// let tokens: Vec<_> = lexemes.into_iter().map(|lexeme| lexeme.token).collect();
///
/// assert_eq!(tokens,
///            vec![Token::Name("add".into()),
///                 Token::LBracket,
///                 Token::Integer("10".into()),
///                 Token::Placeholder(0),
///                 Token::RBracket,
///                 Token::Integer("20".into())]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<Lexeme>> {
    let mut lexemes = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        // The newline callback has already advanced the counter.
        let line = if token == Ok(Token::NewLine) {
            lexer.extras.line - 1
        } else {
            lexer.extras.line
        };

        let Ok(token) = token else {
            return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                     line });
        };

        if let Token::Integer(literal) = &token
           && parse_i32_literal(literal).is_none()
        {
            return Err(ParseError::LiteralTooLarge { literal: literal.clone(),
                                                     line });
        }

        lexemes.push(Lexeme { token,
                              line,
                              span: lexer.span() });
    }

    Ok(lexemes)
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Double(value) => write!(f, "{value}"),
            Self::Integer(literal) | Self::Name(literal) => write!(f, "{literal}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Placeholder(0) => write!(f, "_"),
            Self::Placeholder(number) => write!(f, "_{number}"),
            Self::Comment => write!(f, "#"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Pipe => write!(f, "|"),
            Self::Colon => write!(f, ":"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "blank"),
        }
    }
}

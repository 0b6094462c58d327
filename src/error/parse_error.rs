#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An array literal `()` had no elements.
    EmptyArray {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An array literal mixed integers, doubles and booleans.
    MixedArray {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A group was still open when its line ended.
    UnterminatedGroup {
        /// The closing delimiter that was expected.
        delimiter: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An integer literal does not fit in 32 bits.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::EmptyArray { line }
            | Self::MixedArray { line }
            | Self::UnterminatedGroup { line, .. }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::EmptyArray { line } => {
                write!(f, "Error on line {line}: Array literals cannot be empty.")
            },

            Self::MixedArray { line } => write!(f,
                                                "Error on line {line}: Array literals must hold elements of a single type."),

            Self::UnterminatedGroup { delimiter, line } => write!(f,
                                                                  "Error on line {line}: Expected closing '{delimiter}' before the end of the line."),

            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

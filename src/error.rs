/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unknown characters, malformed literals, unbalanced groups and
/// ill-formed array literals.
pub mod parse_error;
/// Execution errors.
///
/// Contains all error types that can be raised while folding words: unknown
/// or taken names, failed overload resolution, bad placeholders and words
/// that cannot be folded together. Each error carries the offending words so
/// that the host can render them.
pub mod execution_error;

pub use execution_error::{ExecutionError, ExecutionReport};
pub use parse_error::ParseError;

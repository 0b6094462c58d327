/// The fold engine.
///
/// Contains sentence execution, right-to-left reduction and the ordered
/// folding rules.
pub mod core;

/// Name resolution and assignment.
///
/// Turns names into their bound values and performs pending bindings.
pub mod resolve;

/// Overload resolution.
///
/// Enumerates the interpretations of an argument and picks the first
/// registered overload that accepts one of them.
pub mod overload;

/// Rank-polymorphic invocation of native operations.
///
/// Maps scalar operations over expanded arrays, broadcasts scalars against
/// arrays and runs the fold combinators.
pub mod invoke;

/// Standalone placeholder substitution.
pub mod placeholder;

/// Tuple filling and currying of connected tuples.
pub mod tuple_fill;

/// Executor fan-out.
pub mod fan_out;

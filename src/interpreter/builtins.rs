/// The overload registry.
///
/// A static table mapping each builtin name to one or more typed overloads,
/// plus the queries the resolver and the REPL run against it.
pub mod registry;

/// Scalar operations: wrapping integer arithmetic, double arithmetic,
/// boolean logic and comparisons.
pub mod scalar;

/// Whole-array operations such as `length`, `sum` and `sort`.
pub mod array;

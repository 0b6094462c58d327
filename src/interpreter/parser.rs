/// Core parsing routines.
///
/// Splits a token stream into sentences and parses the words of each
/// sentence, populating the value store as literals are encountered.
pub mod core;

/// Array literal parsing.
///
/// Parses homogeneous `( … )` literals of integers, doubles or booleans.
pub mod array;

/// Group parsing.
///
/// Parses the nesting constructs: tuples `[ … ]`, blocks `{ … }` and
/// executors `| … |`.
pub mod group;

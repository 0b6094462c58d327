/// The tagged handle type.
///
/// Defines `Word`, the `(kind, index)` pair that refers to one runtime value,
/// and `WordKind`, the tag selecting the column or marker it refers to.
pub mod word;

/// Compound records.
///
/// Tuples, blocks, executors and sentences: the values that are themselves
/// sequences of words.
pub mod compound;

/// The value arena.
///
/// Holds one append-only column per value kind, the name binding table and
/// the pending-assignment state.
pub mod store;

/// Rendering of words as text.
pub mod format;

/// The builtin library.
///
/// Declares the overload registry and the native operations behind every
/// builtin name, together with the constants seeded into each session.
///
/// # Responsibilities
/// - Lists every overload with its parameter and return types.
/// - Implements the scalar and whole-array native operations.
/// - Answers registry queries: overloads by name, maximum arity, listing.
pub mod builtins;
/// The evaluator module reduces sentences to values.
///
/// The evaluator folds the words of each sentence from right to left,
/// resolving names, selecting builtin overloads, mapping operations over
/// arrays, filling tuples, fanning out executors and invoking blocks. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Applies the ordered folding rules to pairs of words.
/// - Resolves overloads and applies them with rank polymorphism.
/// - Reports execution errors carrying the offending words.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a literal, a name, a placeholder, a
/// delimiter or a sentence break.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers and
///   byte spans.
/// - Skips blanks and `#` comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module turns tokens into sentences of words.
///
/// The parser processes the token stream produced by the lexer, creates
/// every literal in the value store and produces one sentence per line.
///
/// # Responsibilities
/// - Parses array literals, tuples, blocks, executors and assignments.
/// - Detects tuples connected to the name before them.
/// - Validates grouping and literals, reporting errors with line numbers.
pub mod parser;
/// The value module defines the runtime data model.
///
/// This module declares the arena holding every runtime value, the `Word`
/// handles that refer to them, the compound records built from words and
/// the formatting of words as text.
///
/// # Responsibilities
/// - Defines `Word`, `WordKind` and the compound records.
/// - Owns values in append-only, per-kind columns.
/// - Holds the name binding table and the assignment state.
pub mod value;

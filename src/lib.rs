//! # anka
//!
//! anka is a point-free, array-oriented scripting language written in Rust.
//! Programs are sequences of words evaluated from right to left: builtins are
//! applied to everything on their right, arrays are mapped over elementwise,
//! tuples pass several arguments at once, placeholders pick arguments apart,
//! executors fan one input out to several pipelines and blocks act as
//! user-defined functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::error::Error;

use crate::{
    error::ExecutionReport,
    interpreter::{parser::core::parse_program, value::store::Store},
};

/// Provides unified error types for parsing and execution.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or folding words. It standardizes error reporting and carries detailed
/// information about failures: line numbers for parse errors and the
/// offending words for execution errors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and offending words for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the value store, the builtin
/// library and the fold engine to provide a complete runtime for anka
/// programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   store.
/// - Provides entry points for parsing and executing user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Reads programs line by line against a persistent [`Session`] and handles
/// the dot commands (`.exit`, `.clear`, `.cls`, `.internal`, `.history`).
pub mod repl;
/// General utilities for safe numeric conversion.
pub mod util;

/// A persistent evaluation context.
///
/// A session owns one value store seeded with the builtin constants. Every
/// call to [`Session::run`] parses into and executes against that store, so
/// bindings made by one snippet are visible to the next.
///
/// # Example
/// ```
/// use anka::Session;
///
/// let mut session = Session::new();
/// session.run("inc2: {inc inc}").unwrap();
///
/// assert_eq!(session.run("inc2 5").unwrap().as_deref(), Some("7"));
///
/// session.clear();
/// assert!(session.run("inc2 5").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    store: Store,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with only the builtin constants bound.
    #[must_use]
    pub fn new() -> Self {
        Self { store: Store::with_constants() }
    }

    /// Parses and executes `source` against the session's store.
    ///
    /// # Returns
    /// The formatted result of the last sentence, or `None` for a program
    /// without sentences.
    ///
    /// # Errors
    /// A [`ParseError`](error::ParseError) or an
    /// [`ExecutionReport`] describing the failure. Bindings made by earlier
    /// sentences of a failing snippet are kept.
    pub fn run(&mut self, source: &str) -> Result<Option<String>, Box<dyn Error>> {
        let sentences = parse_program(source, &mut self.store)?;
        match self.store.execute(&sentences) {
            Ok(result) => Ok(result.map(|word| self.store.display(word).to_string())),
            Err(error) => Err(Box::new(ExecutionReport::new(&error, &self.store))),
        }
    }

    /// Drops every value and user binding.
    pub fn clear(&mut self) {
        self.store = Store::with_constants();
    }

    /// The session's value store.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }
}

/// Returns the final evaluation result after execution.
///
/// This function parses and executes all sentences in the provided source
/// string in a fresh session. If execution succeeds, it returns the
/// formatted result of the last sentence; otherwise, it returns an error with
/// details about the failure.
///
/// # Errors
/// Returns an error if parsing or execution fails.
///
/// # Examples
/// ```
/// use anka::get_result;
///
/// // Elementwise application over an array.
/// let res = get_result("inc (1 2 3)", false).unwrap();
/// assert_eq!(res.as_deref(), Some("(2 3 4)"));
///
/// // Example with an intentional error (two values cannot be folded).
/// assert!(get_result("10 20", false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Option<String>, Box<dyn Error>> {
    let result = Session::new().run(source)?;

    if auto_print && let Some(text) = &result {
        println!("{text}");
    }

    Ok(result)
}

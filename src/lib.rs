//! # logica
//!
//! logica is an interactive interpreter for a small propositional-logic
//! expression language. It scans, parses, and evaluates statements with
//! support for named bindings, user-defined gates, boolean sequences, and a
//! catalogue of logical and relational operators, admitting both logical
//! glyphs (`∧`, `∨`, `¬`, `⊕`, `≡`, `→`) and ASCII aliases.

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
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::core::Session;

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent
/// the syntactic structure of source code as a tree. The expression type is
/// a discriminated union with one case per shape; the statement type covers
/// bindings, binding continuations, gate declarations and expressions.
///
/// # Responsibilities
/// - Defines expression and statement nodes for all language constructs.
/// - Attaches source positions to nodes for error reporting.
/// - Collects parse errors embedded in a tree via a post-pass walk.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during scanning,
/// parsing, or evaluating code. Errors carry source positions and
/// accumulate into lists: several problems can flow out of one statement,
/// and none is silently dropped.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser, evaluator).
/// - Attaches positions and detailed messages for user feedback.
/// - Bundles per-statement failures for the binary and for library users.
pub mod error;
/// Orchestrates the entire process of statement execution.
///
/// This module ties together scanning, parsing, evaluation, environments
/// and value representations to provide a complete runtime for the
/// language. It exposes the pipeline's entry points for interpreting user
/// statements.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides the persistent `Session` for statement-by-statement use.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs every statement in the provided source, one per line.
///
/// A fresh session is created and fed the source line by line; blank lines
/// are skipped. With `auto_print` set, the last value any statement
/// produced is printed after the run, which is what the binary's pipe mode
/// uses.
///
/// # Errors
/// Returns the first statement's bundled errors if parsing or evaluation
/// fails; statements after a failing one are not run.
///
/// # Examples
/// ```
/// use logica::run_source;
///
/// // The gate and both bindings install, and the final expression evaluates.
/// let source = "gate nand(a, b) = !(a ^ b)\np is true\nnand(p, p)";
/// assert!(run_source(source, false).is_ok());
///
/// // Referencing an identifier that was never bound fails.
/// assert!(run_source("p ^ q", false).is_err());
/// ```
pub fn run_source(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();
    let mut result = None;

    for line in source.lines() {
        if line.trim().is_empty() {
            continue;
        }

        match session.eval_line(line) {
            Ok(value) => {
                if value.is_some() {
                    result = value;
                }
            },
            Err(e) => return Err(Box::new(e)),
        }
    }

    if auto_print && let Some(value) = result {
        println!("{value}");
    }

    Ok(())
}

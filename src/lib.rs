//! # varith
//!
//! varith is an arithmetic expression evaluator with named variables.
//! Expressions are parsed and evaluated in a single recursive-descent pass
//! over the text, with no separate tokenizer or syntax tree.
//!
//! Supported syntax, with all whitespace ignored:
//! - numbers such as `42` or `3.25`,
//! - `+ - * / %` and right-associative `**`,
//! - unary minus and parentheses,
//! - variables: `name = expression` at the start of a line declares or
//!   assigns, a bare unknown `name` on its own declares it as `0`, and
//!   `name` anywhere else reads it.

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

/// Provides the error types for parsing and evaluation.
///
/// This module defines every failure an evaluation can end with and the
/// [`EvalError`](error::EvalError) that unites them for `?` propagation.
///
/// # Responsibilities
/// - Separates malformed text (parse errors) from failures of well-formed
///   expressions (runtime errors).
/// - Carries the offset or identifier name needed to explain the failure.
pub mod error;
/// Ties the cursor, grammar layers, and variable store together.
///
/// This module exposes the [`Interpreter`] and the pieces it is built from.
pub mod interpreter;
/// General helpers shared across modules.
pub mod util;

pub use error::{EvalError, EvalResult, ParseError, RuntimeError};
pub use interpreter::evaluator::Interpreter;

/// Splits a script into the expressions it contains.
///
/// Expressions are separated by newlines or `;`. Segments holding nothing but
/// whitespace are skipped, so trailing newlines do not produce extra lines.
///
/// # Examples
/// ```
/// use varith::script_lines;
///
/// let lines: Vec<_> = script_lines("a = 1; b = 2\n\na + b\n").collect();
/// assert_eq!(lines, vec!["a = 1", " b = 2", "a + b"]);
/// ```
pub fn script_lines(source: &str) -> impl Iterator<Item = &str> {
    source.split(['\n', ';'])
          .filter(|line| !line.trim().is_empty())
}

/// Evaluates every expression of a script in a fresh interpreter.
///
/// Returns the value of each expression in order.
///
/// # Errors
/// Returns the first error met; evaluation stops at the failing expression.
///
/// # Examples
/// ```
/// use varith::run_script;
///
/// let values = run_script("x = 4\ny = x ** 2\ny - x").unwrap();
/// assert_eq!(values, vec![4.0, 16.0, 12.0]);
///
/// // 'z' was never declared
/// assert!(run_script("x = 1\nx + z").is_err());
/// ```
pub fn run_script(source: &str) -> EvalResult<Vec<f64>> {
    Interpreter::new().evaluate_each(script_lines(source))
}

//! # numera
//!
//! numera is an arithmetic expression evaluator written in Rust.
//! It parses and evaluates an expression in a single left-to-right pass, with
//! support for the four basic operations, unary sign, parentheses, and
//! right-associative exponentiation.

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

use crate::{error::EvalError, evaluator::Evaluator};

/// Provides unified error types for evaluation.
///
/// This module defines all errors that can be raised while parsing and
/// evaluating an expression. Every error carries the character offset it
/// points at, so callers can show exactly where an input went wrong.
///
/// # Responsibilities
/// - Defines the `EvalError` enum covering every failure mode.
/// - Attaches character offsets for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Parses and evaluates expressions in a single pass.
///
/// This module ties together the cursor primitives, the grammar layers, and
/// the number scanner to provide a complete evaluator for arithmetic
/// expressions. There is no token stream and no syntax tree: each grammar
/// layer computes its value directly while consuming input.
///
/// # Responsibilities
/// - Coordinates the grammar layers over one shared cursor.
/// - Provides the entry point for evaluating user input.
/// - Reports errors with the offset where they occurred.
pub mod evaluator;

/// Evaluates an arithmetic expression and returns its value.
///
/// This is the one-call entry point. It builds an [`Evaluator`] for the given
/// text, runs the full parse-and-evaluate pass, and hands back the numeric
/// result.
///
/// # Errors
/// Returns an [`EvalError`] when the expression is malformed or divides by
/// zero. The error's offset says where in the input the failure was detected.
///
/// # Examples
/// ```
/// use numera::evaluate;
///
/// // Multiplication binds tighter than addition.
/// let result = evaluate("2 + 3 * 4");
/// assert_eq!(result, Ok(14.0));
///
/// // Unary minus applies before exponentiation.
/// assert_eq!(evaluate("-2 ^ 2"), Ok(4.0));
///
/// // Example with an intentional error (unclosed group).
/// let result = evaluate("(2 + 3");
/// assert!(result.is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    Evaluator::new(expression).parse()
}

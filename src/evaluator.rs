/// Binary operator layers: additive, multiplicative, and exponent parsing.
///
/// Each layer parses its operands from the next-tighter layer and folds the
/// results as it goes, so precedence falls out of the call structure rather
/// than out of a table. There is no intermediate representation: every layer
/// returns the numeric value of the text it consumed.
///
/// # Responsibilities
/// - Folds `+` and `-` chains left to right over multiplicative operands.
/// - Folds `*` and `/` chains left to right, rejecting division by zero.
/// - Parses right-associative `^` by recursing into itself for the exponent.
pub mod binary;
/// The core evaluator type and its top-level entry point.
///
/// Defines [`Evaluator`], which owns the expression text as a character
/// buffer together with a cursor into it, and drives a single
/// parse-and-evaluate pass over that buffer.
///
/// # Responsibilities
/// - Owns the character buffer and the cursor position.
/// - Runs the full evaluation and rejects trailing input.
/// - Defines `EvalResult`, the result alias used by every layer.
pub mod core;
/// Cursor primitives shared by all parsing layers.
///
/// Low-level helpers for inspecting the character under the cursor, skipping
/// whitespace, and conditionally consuming an expected character.
pub mod cursor;
/// Numeric literal scanning and conversion.
///
/// Scans digits and at most one decimal point at the cursor, then converts
/// the scanned text into a number.
pub mod number;
/// Primary expressions: unary sign, grouping, and literals.
///
/// The tightest grammar layer. Applies unary `+` and `-`, evaluates
/// parenthesized groups by recursing back into the additive layer, and
/// otherwise defers to the number scanner.
pub mod primary;

pub use self::core::{EvalResult, Evaluator};

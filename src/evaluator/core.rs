use crate::error::EvalError;

/// Result type used by the parsing layers.
///
/// All parsing functions return either a value of type `T` or an `EvalError`
/// describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a single arithmetic expression in one pass.
///
/// `Evaluator` owns the expression text as a character buffer together with
/// a cursor into it. The parsing layers walk the buffer left to right,
/// folding values as they consume characters. The cursor only ever moves
/// forward; no layer backtracks.
///
/// ## Usage
///
/// An `Evaluator` is built for one expression and consumed by [`parse`].
/// Evaluating another expression means building another `Evaluator`.
///
/// [`parse`]: Evaluator::parse
#[derive(Debug)]
pub struct Evaluator {
    /// The expression under evaluation.
    pub(crate) buffer: Vec<char>,
    /// Current position in `buffer`, counted in characters.
    pub(crate) pos:    usize,
}

impl Evaluator {
    /// Creates an evaluator over `expression`, with the cursor at the start.
    #[must_use]
    pub fn new(expression: &str) -> Self {
        Self { buffer: expression.chars().collect(),
               pos:    0, }
    }

    /// Parses and evaluates the whole expression.
    ///
    /// Parsing starts at the additive layer and must account for every
    /// character of the input. Anything left over after the final operand,
    /// other than whitespace, is reported as an unexpected token.
    ///
    /// This consumes the evaluator: the cursor has moved past everything the
    /// layers accepted, so the instance cannot be reused for another pass.
    ///
    /// # Returns
    /// The numeric value of the expression.
    ///
    /// # Errors
    /// Any syntax or arithmetic failure from the layers below, or
    /// `UnexpectedToken` when trailing input remains.
    ///
    /// # Example
    /// ```
    /// use numera::evaluator::Evaluator;
    ///
    /// let result = Evaluator::new("(2 + 3) * 4").parse();
    /// assert_eq!(result, Ok(20.0));
    /// ```
    pub fn parse(mut self) -> EvalResult<f64> {
        let value = self.parse_additive()?;

        self.skip_whitespace();
        if let Some(found) = self.current_char() {
            return Err(EvalError::UnexpectedToken { found,
                                                    offset: self.pos });
        }

        log::debug!("evaluated to {value}");
        Ok(value)
    }
}

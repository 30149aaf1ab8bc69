use crate::{
    error::EvalError,
    evaluator::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Parses a primary expression.
    ///
    /// Supports prefix operators:
    /// - `+` (numeric identity)
    /// - `-` (numeric negation)
    ///
    /// Unary operators are right-associative, so an input like `--x` is
    /// parsed as `-( -x )`. A parenthesized group recurses back into the
    /// additive layer and requires the closing `)`. Anything else is handed
    /// to the number scanner.
    ///
    /// Grammar:
    /// ```text
    ///     primary := ("+" | "-") primary
    ///              | "(" additive ")"
    ///              | number
    /// ```
    ///
    /// # Returns
    /// The value of the primary expression, with any sign applied.
    ///
    /// # Errors
    /// `MissingClosingParen` when a group is left open; the offset points at
    /// the character where `)` was expected.
    pub(crate) fn parse_primary(&mut self) -> EvalResult<f64> {
        log::trace!("parse_primary: offset {}", self.pos);

        if self.match_char('+') {
            return self.parse_primary();
        }
        if self.match_char('-') {
            return Ok(-self.parse_primary()?);
        }

        if self.match_char('(') {
            let value = self.parse_additive()?;
            if !self.match_char(')') {
                return Err(EvalError::MissingClosingParen { offset: self.pos });
            }
            return Ok(value);
        }

        self.parse_number()
    }
}

use crate::{
    error::EvalError,
    evaluator::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    ///
    /// # Returns
    /// The folded value of the chain.
    pub(crate) fn parse_additive(&mut self) -> EvalResult<f64> {
        log::trace!("parse_additive: offset {}", self.pos);

        let mut value = self.parse_multiplicative()?;
        loop {
            if self.match_char('+') {
                value += self.parse_multiplicative()?;
                continue;
            }
            if self.match_char('-') {
                value -= self.parse_multiplicative()?;
                continue;
            }
            break;
        }
        Ok(value)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Handles left-associative binary operators: `*` and `/`. A divisor is
    /// evaluated first and rejected when it compares equal to zero, before
    /// any division takes place.
    ///
    /// The rule is: `multiplicative := exponent (("*" | "/") exponent)*`
    ///
    /// # Returns
    /// The folded value of the chain.
    ///
    /// # Errors
    /// `DivisionByZero` when a divisor evaluates to zero; the offset points
    /// just past the divisor.
    pub(crate) fn parse_multiplicative(&mut self) -> EvalResult<f64> {
        log::trace!("parse_multiplicative: offset {}", self.pos);

        let mut value = self.parse_exponent()?;
        loop {
            if self.match_char('*') {
                value *= self.parse_exponent()?;
                continue;
            }
            if self.match_char('/') {
                let divisor = self.parse_exponent()?;
                if divisor == 0.0 {
                    return Err(EvalError::DivisionByZero { offset: self.pos });
                }
                value /= divisor;
                continue;
            }
            break;
        }
        Ok(value)
    }

    /// Parses exponentiation expressions.
    ///
    /// Handles right-associativity by recursing for the exponent side:
    /// `a ^ b ^ c` evaluates as `a ^ (b ^ c)`.
    ///
    /// The rule is: `exponent := primary ("^" exponent)?`
    ///
    /// The result is whatever [`f64::powf`] produces, so a domain error such
    /// as a negative base with a fractional exponent surfaces as NaN rather
    /// than as an evaluation error.
    ///
    /// # Returns
    /// The value of the expression, exponentiation applied.
    pub(crate) fn parse_exponent(&mut self) -> EvalResult<f64> {
        log::trace!("parse_exponent: offset {}", self.pos);

        let base = self.parse_primary()?;
        if self.match_char('^') {
            let exponent = self.parse_exponent()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }
}

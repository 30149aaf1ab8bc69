use crate::{
    error::EvalError,
    evaluator::{EvalResult, Evaluator},
};

impl Evaluator {
    /// Scans and converts a numeric literal at the cursor.
    ///
    /// Skips leading whitespace, then consumes digits and at most one
    /// decimal point. The scanned text is converted with [`str::parse`], so
    /// forms like `2.`, `.5`, and `007` are all accepted.
    ///
    /// The rule is: `number := (digit | ".")+` with at most one `.`
    ///
    /// # Returns
    /// The value of the literal.
    ///
    /// # Errors
    /// - `InvalidNumberFormat` when a second decimal point appears; the
    ///   offset points at that point.
    /// - `ExpectedNumber` when no digit or decimal point is present at the
    ///   cursor.
    /// - `NumberConversion` when the scanned text does not convert, such as
    ///   a lone `.`; the offset points at the start of the literal.
    pub(crate) fn parse_number(&mut self) -> EvalResult<f64> {
        log::trace!("parse_number: offset {}", self.pos);

        self.skip_whitespace();
        let start = self.pos;

        let mut seen_point = false;
        while let Some(c) = self.current_char() {
            if c == '.' {
                if seen_point {
                    return Err(EvalError::InvalidNumberFormat { offset: self.pos });
                }
                seen_point = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            self.pos += 1;
        }

        if self.pos == start {
            return Err(EvalError::ExpectedNumber { offset: self.pos });
        }

        let literal: String = self.buffer[start..self.pos].iter().collect();
        literal.parse()
               .map_err(|_| EvalError::NumberConversion { offset: start })
    }
}

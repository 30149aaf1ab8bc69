#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// Found a character that no grammar rule can consume.
    UnexpectedToken {
        /// The character encountered.
        found:  char,
        /// The offset where the character was found.
        offset: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    MissingClosingParen {
        /// The offset where the parenthesis was expected.
        offset: usize,
    },
    /// A numeric literal contained more than one decimal point.
    InvalidNumberFormat {
        /// The offset of the second decimal point.
        offset: usize,
    },
    /// A numeric literal was expected but not found.
    ExpectedNumber {
        /// The offset where the literal was expected.
        offset: usize,
    },
    /// The right-hand side of a division evaluated to zero.
    DivisionByZero {
        /// The offset just past the divisor.
        offset: usize,
    },
    /// A scanned literal could not be converted to a number.
    NumberConversion {
        /// The offset where the literal starts.
        offset: usize,
    },
}

impl EvalError {
    /// Returns the offset into the evaluated expression that this error
    /// points at, counted in characters from zero.
    ///
    /// # Example
    /// ```
    /// use numera::{error::EvalError, evaluate};
    ///
    /// let error = evaluate("(1 + 2").unwrap_err();
    /// assert_eq!(error, EvalError::MissingClosingParen { offset: 6 });
    /// assert_eq!(error.offset(), 6);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedToken { offset, .. }
            | Self::MissingClosingParen { offset }
            | Self::InvalidNumberFormat { offset }
            | Self::ExpectedNumber { offset }
            | Self::DivisionByZero { offset }
            | Self::NumberConversion { offset } => *offset,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found, offset } => {
                write!(f, "Unexpected token at offset {offset}: '{found}'.")
            },

            Self::MissingClosingParen { offset } => {
                write!(f, "Missing closing parenthesis at offset {offset}.")
            },

            Self::InvalidNumberFormat { offset } => {
                write!(f, "Invalid number format at offset {offset}.")
            },

            Self::ExpectedNumber { offset } => {
                write!(f, "Expected a number at offset {offset}.")
            },

            Self::DivisionByZero { offset } => {
                write!(f, "Division by zero at offset {offset}.")
            },

            Self::NumberConversion { offset } => {
                write!(f, "Number conversion error at offset {offset}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}

use std::fmt;

/// The ways a calculator operation can be rejected.
///
/// Every rejection is reported to the immediate caller and leaves the
/// accumulator untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorError {
    /// Binary division with a divisor of exactly 0.0.
    DivisionByZero,
    /// The selector character matches no operation recognized by the
    /// calling context.
    UnsupportedOperation,
    /// The truncated accumulator is outside the operation's domain.
    NumberNotInArea,
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::DivisionByZero => "Division by zero is not defined.",
            Self::UnsupportedOperation => "This type of operation is not supported.",
            Self::NumberNotInArea => "Number is not in range [0,10].",
        };
        f.write_str(message)
    }
}

impl std::error::Error for CalculatorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CalculatorError::DivisionByZero.to_string(),
            "Division by zero is not defined."
        );
        assert_eq!(
            CalculatorError::UnsupportedOperation.to_string(),
            "This type of operation is not supported."
        );
        assert_eq!(
            CalculatorError::NumberNotInArea.to_string(),
            "Number is not in range [0,10]."
        );
    }
}

//! Error type shared by every numeric routine in the crate.

use thiserror::Error;

/// Errors raised by the strict numeric APIs.
///
/// Only the formatting entry points swallow these; everything else returns
/// them to the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("exponent step {step} has no SI prefix")]
    UnsupportedMagnitude { step: i32 },

    #[error("median of an empty sequence is undefined")]
    EmptyInput,

    #[error("NaN at position {index} has no place in a sorted sequence")]
    NanInput { index: usize },

    #[error("gcd operands must be finite (got {a} and {b})")]
    NonFiniteOperand { a: f64, b: f64 },

    #[error("gcd did not reach a zero remainder within {iterations} iterations")]
    GcdDidNotConverge { iterations: usize },

    #[error("unknown SI prefix: {0}")]
    UnknownPrefix(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = NumericError::UnsupportedMagnitude { step: 27 };
        assert_eq!(err.to_string(), "exponent step 27 has no SI prefix");

        let err = NumericError::NanInput { index: 3 };
        assert!(err.to_string().contains('3'));

        let err = NumericError::UnknownPrefix("bogo".to_string());
        assert_eq!(err.to_string(), "unknown SI prefix: bogo");
    }
}

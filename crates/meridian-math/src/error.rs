//! Error types for mathematical operations.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: Decimal,
    },

    /// Invalid bracket for root-finding.
    #[error("Invalid bracket: f({a}) = {fa} and f({b}) = {fb} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: Decimal,
        /// Upper bound of bracket.
        b: Decimal,
        /// Function value at a.
        fa: Decimal,
        /// Function value at b.
        fb: Decimal,
    },

    /// Division by zero or near-zero value.
    #[error("Division by zero or near-zero value: {value}")]
    DivisionByZero {
        /// The near-zero value.
        value: Decimal,
    },

    /// Interpolation point is outside the valid range.
    #[error("Extrapolation not allowed: {x} is outside [{min}, {max}]")]
    ExtrapolationNotAllowed {
        /// The query point.
        x: Decimal,
        /// Minimum valid value.
        min: Decimal,
        /// Maximum valid value.
        max: Decimal,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: Decimal) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_convergence_error_display() {
        let err = MathError::convergence_failed(100, dec!(0.000001));
        assert!(err.to_string().contains("100 iterations"));
    }

    #[test]
    fn test_insufficient_data_display() {
        let err = MathError::insufficient_data(2, 1);
        assert!(err.to_string().contains("need at least 2"));
    }
}

//! Error types for curve operations.
//!
//! Every variant here is a form of invalid curve data: malformed pillar
//! sequences, missing identification properties, or inconsistent grid
//! dimensions. All are raised eagerly at construction; once a curve is
//! built, evaluation is total.

use meridian_core::types::Date;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// No pillar points were supplied.
    #[error("Invalid curve data: no curve points supplied")]
    EmptyCurve,

    /// Pillar terms are not strictly increasing.
    #[error("Invalid curve data: non-monotonic terms at index {index}: {prev} >= {current}")]
    NonMonotonicTerms {
        /// Index where monotonicity breaks.
        index: usize,
        /// Previous term.
        prev: Date,
        /// Current term.
        current: Date,
    },

    /// A pillar term falls before the curve's base date.
    #[error("Invalid curve data: term {term} at index {index} precedes base date {base_date}")]
    TermBeforeBaseDate {
        /// Index of the offending point.
        index: usize,
        /// The offending term.
        term: Date,
        /// The curve base date.
        base_date: Date,
    },

    /// A required curve-identification property is absent.
    ///
    /// `Source`, `Currency`, `MarketName`, and `IndexName` identify a curve
    /// to the rest of the platform; their absence is a caller error, not a
    /// recoverable condition.
    #[error("Invalid curve data: missing required property {property}")]
    MissingProperty {
        /// Name of the missing property.
        property: &'static str,
    },

    /// Interpolation setup failed.
    #[error("Interpolation error: {reason}")]
    InterpolationFailed {
        /// Description of the interpolation error.
        reason: String,
    },

    /// Date arithmetic failed while validating or sampling the curve.
    #[error(transparent)]
    Date(#[from] meridian_core::error::CoreError),

    /// Volatility grid dimensions are inconsistent with their labels.
    #[error("Invalid matrix data: {values} values for a {label_rows}x{label_cols} grid")]
    GridDimensionMismatch {
        /// Number of values supplied.
        values: usize,
        /// Number of row labels.
        label_rows: usize,
        /// Number of column labels.
        label_cols: usize,
    },
}

impl CurveError {
    /// Creates a non-monotonic terms error.
    #[must_use]
    pub fn non_monotonic_terms(index: usize, prev: Date, current: Date) -> Self {
        Self::NonMonotonicTerms {
            index,
            prev,
            current,
        }
    }

    /// Creates a term-before-base-date error.
    #[must_use]
    pub fn term_before_base_date(index: usize, term: Date, base_date: Date) -> Self {
        Self::TermBeforeBaseDate {
            index,
            term,
            base_date,
        }
    }

    /// Creates a missing property error.
    #[must_use]
    pub fn missing_property(property: &'static str) -> Self {
        Self::MissingProperty { property }
    }

    /// Creates an interpolation error.
    #[must_use]
    pub fn interpolation_failed(reason: impl Into<String>) -> Self {
        Self::InterpolationFailed {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_property_names_the_field() {
        let err = CurveError::missing_property("MarketName");
        assert!(err.to_string().contains("MarketName"));
    }

    #[test]
    fn test_non_monotonic_display() {
        let d1 = Date::from_ymd(2026, 6, 1).unwrap();
        let d2 = Date::from_ymd(2026, 3, 1).unwrap();
        let err = CurveError::non_monotonic_terms(2, d1, d2);
        let msg = err.to_string();
        assert!(msg.contains("index 2"));
        assert!(msg.contains("2026-06-01"));
    }

    #[test]
    fn test_term_before_base_date_display() {
        let base = Date::from_ymd(2026, 1, 1).unwrap();
        let term = Date::from_ymd(2025, 12, 1).unwrap();
        let err = CurveError::term_before_base_date(0, term, base);
        assert!(err.to_string().contains("precedes base date"));
    }
}

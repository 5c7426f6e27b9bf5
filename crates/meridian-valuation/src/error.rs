//! Error types for valuation operations.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for valuation operations.
pub type ValuationResult<T> = Result<T, ValuationError>;

/// Error types for valuation operations.
///
/// Both variants are raised eagerly at the point of detection; no partial
/// valuation is ever returned as success. Retrying (for example re-fetching
/// a missing curve from the store) is the caller's concern.
#[derive(Error, Debug, Clone)]
pub enum ValuationError {
    /// A discount or FX curve the valuation needs is absent from the
    /// market environment.
    #[error("Missing curve: {name}")]
    MissingCurve {
        /// Identifier of the missing curve.
        name: String,
    },

    /// Par-rate root-finding exhausted its iteration bound without meeting
    /// tolerance.
    #[error("Par rate search failed to converge after {iterations} iterations (residual: {residual})")]
    NonConvergence {
        /// Iterations attempted.
        iterations: u32,
        /// Final absolute NPV residual.
        residual: Decimal,
    },
}

impl ValuationError {
    /// Creates a missing curve error.
    #[must_use]
    pub fn missing_curve(name: impl Into<String>) -> Self {
        Self::MissingCurve { name: name.into() }
    }

    /// Creates a missing discount curve error for a currency.
    #[must_use]
    pub fn missing_discount_curve(currency: meridian_core::types::Currency) -> Self {
        Self::MissingCurve {
            name: format!("DISCOUNT.{currency}"),
        }
    }

    /// Creates a missing FX curve error for a currency pair.
    #[must_use]
    pub fn missing_fx_curve(
        from: meridian_core::types::Currency,
        to: meridian_core::types::Currency,
    ) -> Self {
        Self::MissingCurve {
            name: format!("FX.{from}/{to}"),
        }
    }

    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergence(iterations: u32, residual: Decimal) -> Self {
        Self::NonConvergence {
            iterations,
            residual,
        }
    }
}

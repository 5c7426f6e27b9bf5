//! Error types for the facade service.

use thiserror::Error;

use meridian_curves::error::CurveError;
use meridian_store::error::StoreError;
use meridian_valuation::error::ValuationError;

/// A specialized Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error types for facade operations.
///
/// The facade adds no failure modes of its own; it surfaces the component
/// errors unchanged so callers can react to the underlying condition.
#[derive(Error, Debug, Clone)]
pub enum EngineError {
    /// Curve construction or matrix validation failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Valuation failed.
    #[error(transparent)]
    Valuation(#[from] ValuationError),

    /// Store interaction failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_passes_through() {
        let err: EngineError = StoreError::not_found("GLOBAL.Curve.X").into();
        assert!(err.to_string().contains("GLOBAL.Curve.X"));
    }

    #[test]
    fn test_curve_error_passes_through() {
        let err: EngineError = CurveError::missing_property("Source").into();
        assert!(err.to_string().contains("Source"));
    }
}

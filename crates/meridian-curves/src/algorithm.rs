//! Curve construction algorithms.

use serde::{Deserialize, Serialize};

/// Interpolation/bootstrap algorithm a curve is built with.
///
/// The curve carries its algorithm as data so a persisted snapshot records
/// how it was produced. Additional algorithms slot in here; consumers only
/// rely on the discount-factor contract, never on the method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurveAlgorithm {
    /// Linear interpolation on continuously compounded zero rates.
    ///
    /// "Fast" because quoted mids are taken as zero rates directly, with no
    /// instrument bootstrap pass.
    #[default]
    FastLinearZero,

    /// Linear interpolation on log discount factors.
    LogLinearDiscount,
}

impl CurveAlgorithm {
    /// Returns the platform's wire name for this algorithm.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::FastLinearZero => "FastLinearZero",
            Self::LogLinearDiscount => "LogLinearDiscount",
        }
    }
}

impl std::fmt::Display for CurveAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

//! Quoted curve pillar points.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use meridian_core::types::Date;

/// A single quoted pillar: a term date and its mid rate.
///
/// Mids are continuously compounded zero rates expressed as decimals
/// (0.05 for 5%), as delivered by the market data extraction upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Pillar maturity date.
    pub term: Date,
    /// Quoted mid rate.
    pub mid: Decimal,
}

impl CurvePoint {
    /// Creates a new curve point.
    #[must_use]
    pub fn new(term: Date, mid: Decimal) -> Self {
        Self { term, mid }
    }
}

//! Volatility matrices for publishing.
//!
//! The platform publishes quoted cap/floor and swaption volatility grids to
//! the store alongside curves. These are pure data carriers: valuation of
//! the optionality itself happens in the external pricer, so no
//! interpolation over the grid is offered here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use meridian_core::types::Currency;

use crate::error::{CurveError, CurveResult};

/// Which instrument family a volatility grid quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatrixKind {
    /// Cap/floor volatilities: expiries by strikes.
    CapFloor,
    /// Swaption volatilities: option expiries by swap tenors.
    Swaption,
}

impl MatrixKind {
    /// Returns the platform's wire name for this matrix kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CapFloor => "CAPFLOOR",
            Self::Swaption => "SWAPTION",
        }
    }
}

impl std::fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A quoted volatility grid.
///
/// Rows are option expiries; columns are strikes (cap/floor) or underlying
/// swap tenors (swaptions). Values are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolMatrix {
    /// Quoted currency.
    pub currency: Currency,
    /// Instrument family.
    pub kind: MatrixKind,
    /// Row labels (expiries, e.g. "1Y").
    pub expiries: Vec<String>,
    /// Column labels (strikes or tenors).
    pub columns: Vec<String>,
    /// Row-major volatility values.
    values: Vec<Decimal>,
}

impl VolMatrix {
    /// Creates a matrix, checking the grid against its labels.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::GridDimensionMismatch` when the value count is
    /// not `expiries.len() * columns.len()`.
    pub fn new(
        currency: Currency,
        kind: MatrixKind,
        expiries: Vec<String>,
        columns: Vec<String>,
        values: Vec<Decimal>,
    ) -> CurveResult<Self> {
        let expected = expiries.len() * columns.len();
        if values.len() != expected || expected == 0 {
            return Err(CurveError::GridDimensionMismatch {
                values: values.len(),
                label_rows: expiries.len(),
                label_cols: columns.len(),
            });
        }

        Ok(Self {
            currency,
            kind,
            expiries,
            columns,
            values,
        })
    }

    /// Returns the volatility at a row/column index pair.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Option<Decimal> {
        if row >= self.expiries.len() || col >= self.columns.len() {
            return None;
        }
        Some(self.values[row * self.columns.len() + col])
    }

    /// Returns the volatility for labeled coordinates.
    #[must_use]
    pub fn lookup(&self, expiry: &str, column: &str) -> Option<Decimal> {
        let row = self.expiries.iter().position(|e| e == expiry)?;
        let col = self.columns.iter().position(|c| c == column)?;
        self.at(row, col)
    }

    /// Returns the grid dimensions as (rows, columns).
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.expiries.len(), self.columns.len())
    }
}

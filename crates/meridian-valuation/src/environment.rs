//! The per-valuation market environment.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use meridian_core::types::Currency;
use meridian_curves::curve::ZeroCurve;
use meridian_curves::surfaces::VolMatrix;

use crate::error::{ValuationError, ValuationResult};

/// The complete set of market objects one valuation call needs.
///
/// Constructed fresh for each valuation and owned solely by it; curves are
/// shared into the environment via [`Arc`] but the environment itself is
/// never shared mutably across concurrent valuations. Discount curves are
/// indexed by their quoted currency, FX rates by ordered currency pair,
/// and volatility grids by their published name.
#[derive(Debug, Clone, Default)]
pub struct MarketEnvironment {
    discount_curves: HashMap<Currency, Arc<ZeroCurve>>,
    fx_rates: HashMap<(Currency, Currency), Decimal>,
    vol_matrices: HashMap<String, VolMatrix>,
}

impl MarketEnvironment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a discount curve, indexed by its identity's currency.
    ///
    /// A later curve for the same currency supersedes the earlier one; the
    /// superseded instance stays alive for any valuation already holding
    /// its `Arc`.
    pub fn add_discount_curve(&mut self, curve: Arc<ZeroCurve>) -> &mut Self {
        self.discount_curves
            .insert(curve.identity().currency, curve);
        self
    }

    /// Adds a spot FX rate quoted as units of `to` per unit of `from`.
    pub fn add_fx_rate(&mut self, from: Currency, to: Currency, rate: Decimal) -> &mut Self {
        self.fx_rates.insert((from, to), rate);
        self
    }

    /// Adds a volatility grid under its published name.
    pub fn add_vol_matrix(&mut self, name: impl Into<String>, matrix: VolMatrix) -> &mut Self {
        self.vol_matrices.insert(name.into(), matrix);
        self
    }

    /// Returns the discount curve for a currency.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::MissingCurve` if no curve is loaded for the
    /// currency.
    pub fn discount_curve(&self, currency: Currency) -> ValuationResult<&Arc<ZeroCurve>> {
        self.discount_curves
            .get(&currency)
            .ok_or_else(|| ValuationError::missing_discount_curve(currency))
    }

    /// Resolves the conversion rate from one currency to another.
    ///
    /// Tries the direct pair first, then the inverted pair. Identical
    /// currencies convert at one.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::MissingCurve` when neither quote direction
    /// is present.
    pub fn fx_rate(&self, from: Currency, to: Currency) -> ValuationResult<Decimal> {
        if from == to {
            return Ok(Decimal::ONE);
        }

        if let Some(rate) = self.fx_rates.get(&(from, to)) {
            return Ok(*rate);
        }

        if let Some(rate) = self.fx_rates.get(&(to, from)) {
            if *rate != Decimal::ZERO {
                return Ok(Decimal::ONE / rate);
            }
        }

        Err(ValuationError::missing_fx_curve(from, to))
    }

    /// Returns a volatility grid by published name.
    #[must_use]
    pub fn vol_matrix(&self, name: &str) -> Option<&VolMatrix> {
        self.vol_matrices.get(name)
    }

    /// Returns the number of loaded discount curves.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.discount_curves.len()
    }
}

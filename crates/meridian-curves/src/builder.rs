//! Curve construction entry point: identification, validation, and the
//! base-date fallback chain.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use meridian_core::types::{Currency, Date};

use crate::algorithm::CurveAlgorithm;
use crate::curve::ZeroCurve;
use crate::error::{CurveError, CurveResult};
use crate::points::CurvePoint;

/// The four properties that identify a curve to the rest of the platform.
///
/// All four are required; a curve that cannot be addressed is useless to
/// the store and to downstream valuations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveIdentity {
    /// Market data source (e.g. "MARKIT").
    pub source: String,
    /// Quoted currency.
    pub currency: Currency,
    /// Market name (e.g. "LIVE", "EOD").
    pub market_name: String,
    /// Rate index the curve discounts against (e.g. "SOFR").
    pub index_name: String,
}

impl CurveIdentity {
    /// Creates a new curve identity.
    pub fn new(
        source: impl Into<String>,
        currency: Currency,
        market_name: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            currency,
            market_name: market_name.into(),
            index_name: index_name.into(),
        }
    }

    /// Returns the dotted name the platform addresses this curve by.
    ///
    /// This is the only place the four identification properties are joined
    /// into a string; everything downstream treats the result as opaque.
    #[must_use]
    pub fn name(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.source, self.currency, self.market_name, self.index_name
        )
    }
}

impl fmt::Display for CurveIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Builder for [`ZeroCurve`].
///
/// Collects identification properties, quoted pillars, and the as-of date,
/// then validates everything in one pass. The base date resolves through a
/// deterministic fallback chain: the explicit base date if set, else the
/// date component of the build timestamp, else today.
///
/// # Example
///
/// ```rust,ignore
/// let curve = CurveBuilder::new()
///     .source("MARKIT")
///     .currency(Currency::USD)
///     .market_name("LIVE")
///     .index_name("SOFR")
///     .base_date(base)
///     .add_point(pillar_date, dec!(0.045))
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurveBuilder {
    source: Option<String>,
    currency: Option<Currency>,
    market_name: Option<String>,
    index_name: Option<String>,
    base_date: Option<Date>,
    build_datetime: Option<NaiveDateTime>,
    points: Vec<CurvePoint>,
    algorithm: CurveAlgorithm,
}

impl CurveBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the market data source.
    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the curve currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the market name.
    #[must_use]
    pub fn market_name(mut self, market_name: impl Into<String>) -> Self {
        self.market_name = Some(market_name.into());
        self
    }

    /// Sets the rate index name.
    #[must_use]
    pub fn index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = Some(index_name.into());
        self
    }

    /// Sets the explicit base (as-of) date.
    #[must_use]
    pub fn base_date(mut self, date: Date) -> Self {
        self.base_date = Some(date);
        self
    }

    /// Sets the build timestamp used as a base-date fallback.
    #[must_use]
    pub fn build_datetime(mut self, datetime: NaiveDateTime) -> Self {
        self.build_datetime = Some(datetime);
        self
    }

    /// Adds a quoted pillar.
    #[must_use]
    pub fn add_point(mut self, term: Date, mid: Decimal) -> Self {
        self.points.push(CurvePoint::new(term, mid));
        self
    }

    /// Adds multiple quoted pillars.
    #[must_use]
    pub fn add_points(mut self, points: impl IntoIterator<Item = (Date, Decimal)>) -> Self {
        self.points
            .extend(points.into_iter().map(|(term, mid)| CurvePoint::new(term, mid)));
        self
    }

    /// Sets the construction algorithm.
    #[must_use]
    pub fn algorithm(mut self, algorithm: CurveAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Resolves the base date through the fallback chain.
    fn resolve_base_date(&self) -> Date {
        self.base_date
            .or_else(|| self.build_datetime.map(|dt| Date::from(dt.date())))
            .unwrap_or_else(Date::today)
    }

    /// Validates inputs and builds the curve.
    ///
    /// # Errors
    ///
    /// Returns `CurveError::MissingProperty` naming the first absent
    /// identification property, or the pillar-validation errors from
    /// [`ZeroCurve::new`].
    pub fn build(self) -> CurveResult<ZeroCurve> {
        let source = self
            .source
            .clone()
            .ok_or_else(|| CurveError::missing_property("Source"))?;
        let currency = self
            .currency
            .ok_or_else(|| CurveError::missing_property("Currency"))?;
        let market_name = self
            .market_name
            .clone()
            .ok_or_else(|| CurveError::missing_property("MarketName"))?;
        let index_name = self
            .index_name
            .clone()
            .ok_or_else(|| CurveError::missing_property("IndexName"))?;

        let identity = CurveIdentity::new(source, currency, market_name, index_name);
        let base_date = self.resolve_base_date();

        ZeroCurve::new(identity, base_date, self.points, self.algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use meridian_core::traits::DiscountFactors;
    use rust_decimal_macros::dec;

    fn populated() -> CurveBuilder {
        let base = Date::from_ymd(2026, 1, 1).unwrap();
        CurveBuilder::new()
            .source("MARKIT")
            .currency(Currency::USD)
            .market_name("LIVE")
            .index_name("SOFR")
            .base_date(base)
            .add_point(base.add_days(100), dec!(0.04))
            .add_point(base.add_days(300), dec!(0.05))
    }

    #[test]
    fn test_builds_with_all_properties() {
        let curve = populated().build().unwrap();
        assert_eq!(curve.identity().name(), "MARKIT.USD.LIVE.SOFR");
        assert_eq!(curve.points().len(), 2);
    }

    #[test]
    fn test_missing_source_named_in_error() {
        let base = Date::from_ymd(2026, 1, 1).unwrap();
        let result = CurveBuilder::new()
            .currency(Currency::USD)
            .market_name("LIVE")
            .index_name("SOFR")
            .base_date(base)
            .add_point(base.add_days(100), dec!(0.04))
            .build();

        match result {
            Err(CurveError::MissingProperty { property }) => assert_eq!(property, "Source"),
            other => panic!("expected MissingProperty, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_index_name_named_in_error() {
        let base = Date::from_ymd(2026, 1, 1).unwrap();
        let result = CurveBuilder::new()
            .source("MARKIT")
            .currency(Currency::USD)
            .market_name("LIVE")
            .base_date(base)
            .add_point(base.add_days(100), dec!(0.04))
            .build();

        match result {
            Err(CurveError::MissingProperty { property }) => assert_eq!(property, "IndexName"),
            other => panic!("expected MissingProperty, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_base_date_wins_over_build_datetime() {
        let explicit = Date::from_ymd(2026, 3, 1).unwrap();
        let stamp = NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();

        let curve = populated()
            .base_date(explicit)
            .build_datetime(stamp)
            .build()
            .unwrap();

        assert_eq!(curve.base_date(), explicit);
    }

    #[test]
    fn test_build_datetime_fallback() {
        let stamp = NaiveDate::from_ymd_opt(2025, 12, 15)
            .unwrap()
            .and_hms_opt(17, 0, 0)
            .unwrap();

        let base = Date::from_ymd(2026, 1, 1).unwrap();
        let curve = CurveBuilder::new()
            .source("MARKIT")
            .currency(Currency::USD)
            .market_name("LIVE")
            .index_name("SOFR")
            .build_datetime(stamp)
            .add_point(base.add_days(100), dec!(0.04))
            .build()
            .unwrap();

        assert_eq!(curve.base_date(), Date::from_ymd(2025, 12, 15).unwrap());
    }

    #[test]
    fn test_today_fallback_when_nothing_set() {
        // No base date and no build timestamp: the curve anchors on today.
        let today = Date::today();
        let curve = CurveBuilder::new()
            .source("MARKIT")
            .currency(Currency::USD)
            .market_name("LIVE")
            .index_name("SOFR")
            .add_point(today.add_days(100), dec!(0.04))
            .build()
            .unwrap();

        assert_eq!(curve.base_date(), today);
    }

    #[test]
    fn test_add_points_bulk() {
        let base = Date::from_ymd(2026, 1, 1).unwrap();
        let curve = CurveBuilder::new()
            .source("MARKIT")
            .currency(Currency::EUR)
            .market_name("EOD")
            .index_name("ESTR")
            .base_date(base)
            .add_points(vec![
                (base.add_days(90), dec!(0.02)),
                (base.add_days(180), dec!(0.021)),
                (base.add_days(365), dec!(0.022)),
            ])
            .build()
            .unwrap();

        assert_eq!(curve.points().len(), 3);
    }
}

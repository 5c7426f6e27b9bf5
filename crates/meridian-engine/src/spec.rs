//! Curve specifications as delivered to the facade.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use meridian_core::types::{Currency, Date};
use meridian_curves::algorithm::CurveAlgorithm;
use meridian_curves::builder::CurveBuilder;

/// A curve specification: identification properties plus quoted pillars.
///
/// This is the document shape the upstream marshalling layers deliver.
/// Identification properties are optional here because callers routinely
/// omit them - validation happens when the curve is built, where a missing
/// property is reported by name.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CurveSpec {
    /// Market data source (required to build).
    pub source: Option<String>,
    /// Quoted currency (required to build).
    pub currency: Option<Currency>,
    /// Market name (required to build).
    pub market_name: Option<String>,
    /// Rate index name (required to build).
    pub index_name: Option<String>,
    /// Explicit as-of date; first entry in the base-date fallback chain.
    pub base_date: Option<Date>,
    /// Build timestamp; second entry in the fallback chain.
    pub build_datetime: Option<NaiveDateTime>,
    /// Construction algorithm.
    #[serde(default)]
    pub algorithm: CurveAlgorithm,
    /// Quoted pillars as (term, mid) pairs.
    pub points: Vec<(Date, Decimal)>,
}

impl CurveSpec {
    /// Converts the specification into a curve builder.
    #[must_use]
    pub fn into_builder(self) -> CurveBuilder {
        let mut builder = CurveBuilder::new()
            .algorithm(self.algorithm)
            .add_points(self.points);

        if let Some(source) = self.source {
            builder = builder.source(source);
        }
        if let Some(currency) = self.currency {
            builder = builder.currency(currency);
        }
        if let Some(market_name) = self.market_name {
            builder = builder.market_name(market_name);
        }
        if let Some(index_name) = self.index_name {
            builder = builder.index_name(index_name);
        }
        if let Some(base_date) = self.base_date {
            builder = builder.base_date(base_date);
        }
        if let Some(build_datetime) = self.build_datetime {
            builder = builder.build_datetime(build_datetime);
        }

        builder
    }
}

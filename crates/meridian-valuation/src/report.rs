//! Valuation report aggregation and flattening.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use meridian_core::types::Currency;

/// A named sensitivity value nested under a risk measure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensitivity {
    /// Sensitivity bucket name (e.g. a rate curve name).
    pub name: String,
    /// Sensitivity value.
    pub value: Decimal,
}

impl Sensitivity {
    /// Creates a sensitivity entry.
    pub fn new(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One per-asset risk row delivered by the pricer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRow {
    /// Measure type (e.g. "NPV", "Delta0").
    pub measure: String,
    /// Optional currency qualifier for the measure.
    pub currency: Option<Currency>,
    /// Measure value.
    pub value: Decimal,
    /// Nested sensitivity breakdown, possibly empty.
    pub sensitivities: Vec<Sensitivity>,
}

impl RiskRow {
    /// Creates a row with no sensitivity breakdown.
    pub fn new(measure: impl Into<String>, currency: Option<Currency>, value: Decimal) -> Self {
        Self {
            measure: measure.into(),
            currency,
            value,
            sensitivities: Vec::new(),
        }
    }

    /// Attaches a sensitivity entry.
    #[must_use]
    pub fn with_sensitivity(mut self, name: impl Into<String>, value: Decimal) -> Self {
        self.sensitivities.push(Sensitivity::new(name, value));
        self
    }

    /// The row's top-level aggregation key: `measure` or `measure.CCY`.
    #[must_use]
    pub fn key(&self) -> String {
        match self.currency {
            Some(ccy) => format!("{}.{}", self.measure, ccy),
            None => self.measure.clone(),
        }
    }
}

/// Aggregates per-asset risk rows into a measure-keyed mapping.
///
/// Keys are `measure` or `measure.CCY`; each nested sensitivity lands under
/// `measure.<sensitivity name>`. Colliding keys accumulate additively -
/// repeated measures sum rather than overwrite, so the aggregation is
/// order-independent.
#[must_use]
pub fn aggregate_report(rows: &[RiskRow]) -> BTreeMap<String, Decimal> {
    let mut metrics = BTreeMap::new();

    for row in rows {
        *metrics.entry(row.key()).or_insert(Decimal::ZERO) += row.value;

        for sensitivity in &row.sensitivities {
            let key = format!("{}.{}", row.measure, sensitivity.name);
            *metrics.entry(key).or_insert(Decimal::ZERO) += sensitivity.value;
        }
    }

    metrics
}

/// A flattened valuation report: unique identifier plus metric mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationReport {
    /// Report identifier, unique within a valuation view.
    pub id: String,
    /// Metric name to value.
    pub metrics: BTreeMap<String, Decimal>,
}

impl ValuationReport {
    /// Creates a report from aggregated metrics.
    pub fn new(id: impl Into<String>, metrics: BTreeMap<String, Decimal>) -> Self {
        Self {
            id: id.into(),
            metrics,
        }
    }

    /// Creates a report by aggregating raw risk rows.
    pub fn from_rows(id: impl Into<String>, rows: &[RiskRow]) -> Self {
        Self::new(id, aggregate_report(rows))
    }
}

/// Flattens reports into a single view keyed by report identifier.
///
/// Identifiers are expected to be unique; when two reports collide, the
/// later arrival is kept under `<id>_Duplicate` rather than merged or
/// dropped (suffixing repeats if that key is itself taken). This preserves
/// both values exactly as the platform always has - a collision normally
/// signals an identifier defect upstream, and hiding one of the values
/// would mask it.
#[must_use]
pub fn flatten_reports(reports: Vec<ValuationReport>) -> BTreeMap<String, ValuationReport> {
    let mut view: BTreeMap<String, ValuationReport> = BTreeMap::new();

    for report in reports {
        let mut key = report.id.clone();
        while view.contains_key(&key) {
            key.push_str("_Duplicate");
        }
        view.insert(key, report);
    }

    view
}

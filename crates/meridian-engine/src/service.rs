//! The facade service.

use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use meridian_core::types::{BaseParty, CashFlow, Currency, Party};
use meridian_curves::builder::CurveIdentity;
use meridian_curves::curve::ZeroCurve;
use meridian_curves::surfaces::{MatrixKind, VolMatrix};
use meridian_curves::term_curve::TermCurve;
use meridian_store::error::StoreError;
use meridian_store::key::{Category, Namespace, ObjectKey};
use meridian_store::properties::Properties;
use meridian_store::store::ObjectStore;
use meridian_valuation::environment::MarketEnvironment;
use meridian_valuation::npv::{npv, present_value, TradeParties};
use meridian_valuation::report::{flatten_reports, RiskRow, ValuationReport};

use crate::error::EngineResult;
use crate::spec::CurveSpec;

/// A trade valuation request as delivered by the booking layer.
#[derive(Debug, Clone)]
pub struct TradeValuationRequest {
    /// Trade identifier; becomes the report identifier.
    pub trade_id: String,
    /// First leg party.
    pub party1: Party,
    /// Second leg party.
    pub party2: Party,
    /// The party the valuation is reported for.
    pub reporting_party: Party,
    /// Currency the headline NPV is reported in.
    pub reporting_currency: Currency,
    /// Projected cash flows from the pricer.
    pub flows: Vec<CashFlow>,
}

/// The platform facade: curve publishing, trade valuation, and matrix
/// publishing over a keyed object store.
///
/// The store handle and namespace are injected at construction and carried
/// through every operation - the service holds no other state, so one
/// instance serves concurrent callers.
///
/// Published term curves are reporting snapshots; valuation always runs
/// against freshly built [`ZeroCurve`] instances supplied through the
/// [`MarketEnvironment`], never against re-read snapshots.
pub struct ValuationService {
    store: Arc<dyn ObjectStore>,
    namespace: Namespace,
}

impl ValuationService {
    /// Creates a service over a store and namespace.
    pub fn new(store: Arc<dyn ObjectStore>, namespace: Namespace) -> Self {
        Self { store, namespace }
    }

    /// Returns the namespace this service addresses.
    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    fn curve_key(&self, identity: &CurveIdentity) -> ObjectKey {
        ObjectKey::new(self.namespace.clone(), Category::Curve, identity.name())
    }

    fn matrix_key(&self, currency: Currency, kind: MatrixKind) -> ObjectKey {
        ObjectKey::new(
            self.namespace.clone(),
            Category::VolMatrix,
            format!("{}.{}", currency, kind.name()),
        )
    }

    // ========================================================================
    // Curves
    // ========================================================================

    /// Builds a discount curve from a specification.
    pub fn build_curve(&self, spec: CurveSpec) -> EngineResult<ZeroCurve> {
        let curve = spec.into_builder().build()?;
        debug!(
            curve = %curve.identity(),
            algorithm = %curve.algorithm(),
            pillars = curve.points().len(),
            "curve built"
        );
        Ok(curve)
    }

    /// Builds a curve and publishes its monthly term-curve snapshot.
    ///
    /// The snapshot is saved under `<namespace>.Curve.<identity>` with the
    /// identification properties as its searchable bag.
    pub fn publish_curve(&self, spec: CurveSpec) -> EngineResult<ObjectKey> {
        let curve = self.build_curve(spec)?;
        let snapshot = TermCurve::snapshot(&curve)?;

        let identity = curve.identity();
        let key = self.curve_key(identity);
        let properties = Properties::new()
            .with("Source", identity.source.clone())
            .with("Currency", identity.currency.code())
            .with("MarketName", identity.market_name.clone())
            .with("IndexName", identity.index_name.clone())
            .with("BaseDate", snapshot.base_date.to_string())
            .with("Algorithm", snapshot.algorithm.clone());

        let document = to_document(&key, &snapshot)?;
        self.store.save(&key, properties, document)?;

        info!(key = %key, points = snapshot.len(), "term curve published");
        Ok(key)
    }

    /// Loads a published term-curve snapshot by curve identity.
    pub fn load_term_curve(&self, identity: &CurveIdentity) -> EngineResult<TermCurve> {
        let key = self.curve_key(identity);
        let object = self.store.load(&key)?;
        Ok(from_document(&key, object.document)?)
    }

    /// Returns every published snapshot whose properties match the filter.
    pub fn find_term_curves(&self, filter: &Properties) -> EngineResult<Vec<TermCurve>> {
        let objects = self
            .store
            .query(&self.namespace, Category::Curve, filter)?;

        objects
            .into_iter()
            .map(|object| Ok(from_document(&object.key, object.document)?))
            .collect()
    }

    // ========================================================================
    // Valuation
    // ========================================================================

    /// Values a trade's cash flows and returns its valuation report.
    ///
    /// The report carries the headline `NPV` in the reporting currency plus
    /// an `NPV.<CCY>` breakdown holding each currency's discounted
    /// contribution in its own currency. The reporting party resolves to a
    /// perspective through the trade's leg parties; a reporting party
    /// matching neither leg falls back to the `Party2` perspective, which
    /// is logged but deliberately not an error.
    pub fn npv_report(
        &self,
        request: &TradeValuationRequest,
        env: &MarketEnvironment,
    ) -> EngineResult<ValuationReport> {
        let parties = TradeParties::new(request.party1.clone(), request.party2.clone());

        let base_party =
            BaseParty::try_match(&request.reporting_party, &parties.party1, &parties.party2)
                .unwrap_or_else(|| {
                    warn!(
                        trade = %request.trade_id,
                        reporting_party = %request.reporting_party,
                        "reporting party matches neither leg party; defaulting to Party2 perspective"
                    );
                    BaseParty::default()
                });

        let total = npv(
            &request.flows,
            env,
            request.reporting_currency,
            base_party,
            &parties,
        )?;

        let mut rows = vec![RiskRow::new("NPV", None, total)];
        for flow in &request.flows {
            let curve = env.discount_curve(flow.currency())?;
            let pv = present_value(flow, curve.as_ref(), base_party, &parties);
            rows.push(RiskRow::new("NPV", Some(flow.currency()), pv));
        }

        debug!(trade = %request.trade_id, base_party = %base_party, "trade valued");
        Ok(ValuationReport::from_rows(request.trade_id.clone(), &rows))
    }

    /// Flattens reports into a valuation view.
    ///
    /// Colliding report identifiers are preserved under the platform's
    /// `_Duplicate` suffix policy.
    #[must_use]
    pub fn valuation_view(
        &self,
        reports: Vec<ValuationReport>,
    ) -> BTreeMap<String, ValuationReport> {
        flatten_reports(reports)
    }

    /// Flattens reports and persists each entry of the view.
    pub fn publish_valuation_view(
        &self,
        reports: Vec<ValuationReport>,
    ) -> EngineResult<Vec<ObjectKey>> {
        let view = self.valuation_view(reports);

        let mut keys = Vec::with_capacity(view.len());
        for (view_id, report) in view {
            let key = ObjectKey::new(
                self.namespace.clone(),
                Category::ValuationReport,
                view_id,
            );
            let properties = Properties::new().with("TradeId", report.id.clone());
            let document = to_document(&key, &report)?;
            self.store.save(&key, properties, document)?;
            keys.push(key);
        }

        info!(reports = keys.len(), "valuation view published");
        Ok(keys)
    }

    // ========================================================================
    // Volatility matrices
    // ========================================================================

    /// Validates and publishes a cap/floor volatility matrix.
    ///
    /// Rows are expiries, columns are strikes; the grid must be row-major
    /// with `expiries x strikes` values.
    pub fn publish_cap_floor_matrix(
        &self,
        currency: Currency,
        expiries: Vec<String>,
        strikes: Vec<String>,
        vols: Vec<Decimal>,
    ) -> EngineResult<ObjectKey> {
        let matrix = VolMatrix::new(currency, MatrixKind::CapFloor, expiries, strikes, vols)?;
        self.publish_vol_matrix(matrix)
    }

    /// Validates and publishes a swaption volatility matrix.
    ///
    /// Rows are option expiries, columns are underlying swap tenors.
    pub fn publish_swaption_matrix(
        &self,
        currency: Currency,
        expiries: Vec<String>,
        tenors: Vec<String>,
        vols: Vec<Decimal>,
    ) -> EngineResult<ObjectKey> {
        let matrix = VolMatrix::new(currency, MatrixKind::Swaption, expiries, tenors, vols)?;
        self.publish_vol_matrix(matrix)
    }

    /// Publishes a pre-built volatility matrix.
    pub fn publish_vol_matrix(&self, matrix: VolMatrix) -> EngineResult<ObjectKey> {
        let key = self.matrix_key(matrix.currency, matrix.kind);
        let (rows, cols) = matrix.dimensions();
        let properties = Properties::new()
            .with("Currency", matrix.currency.code())
            .with("Kind", matrix.kind.name());

        let document = to_document(&key, &matrix)?;
        self.store.save(&key, properties, document)?;

        info!(key = %key, rows, cols, "volatility matrix published");
        Ok(key)
    }

    /// Loads a published volatility matrix.
    pub fn load_vol_matrix(
        &self,
        currency: Currency,
        kind: MatrixKind,
    ) -> EngineResult<VolMatrix> {
        let key = self.matrix_key(currency, kind);
        let object = self.store.load(&key)?;
        Ok(from_document(&key, object.document)?)
    }
}

/// Serializes a value into a store document.
fn to_document<T: serde::Serialize>(key: &ObjectKey, value: &T) -> Result<Value, StoreError> {
    serde_json::to_value(value)
        .map_err(|e| StoreError::invalid_document(key.to_string(), e.to_string()))
}

/// Deserializes a store document into a value.
fn from_document<T: serde::de::DeserializeOwned>(
    key: &ObjectKey,
    document: Value,
) -> Result<T, StoreError> {
    serde_json::from_value(document)
        .map_err(|e| StoreError::invalid_document(key.to_string(), e.to_string()))
}

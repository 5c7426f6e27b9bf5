//! Integration test: the full publish-and-value flow.
//!
//! Exercises the facade end to end the way the platform drives it: curve
//! specifications arrive and their snapshots are published, a cross-currency
//! trade is valued from its projected cash flows, the valuation view is
//! flattened and persisted, and the volatility matrices are published for
//! the option pricer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use meridian_core::types::{CashFlow, Currency, Date, Party};
use meridian_curves::algorithm::CurveAlgorithm;
use meridian_curves::builder::CurveIdentity;
use meridian_curves::surfaces::MatrixKind;
use meridian_engine::{CurveSpec, TradeValuationRequest, ValuationService};
use meridian_store::key::Namespace;
use meridian_store::memory::MemoryStore;
use meridian_store::properties::Properties;
use meridian_valuation::environment::MarketEnvironment;
use meridian_valuation::report::ValuationReport;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("meridian_engine=debug,meridian_store=debug")
        .try_init();
}

fn base() -> Date {
    Date::from_ymd(2026, 1, 2).unwrap()
}

fn curve_spec(currency: Currency, index: &str, level: Decimal) -> CurveSpec {
    CurveSpec {
        source: Some("MARKIT".to_string()),
        currency: Some(currency),
        market_name: Some("EOD".to_string()),
        index_name: Some(index.to_string()),
        base_date: Some(base()),
        build_datetime: None,
        algorithm: CurveAlgorithm::FastLinearZero,
        points: vec![
            (base().add_days(90), level),
            (base().add_days(365), level + dec!(0.002)),
            (base().add_days(1825), level + dec!(0.005)),
        ],
    }
}

fn service() -> ValuationService {
    ValuationService::new(Arc::new(MemoryStore::new()), Namespace::new("GLOBAL"))
}

#[test]
fn test_publish_query_and_reload_curves() {
    init_tracing();
    let service = service();

    service
        .publish_curve(curve_spec(Currency::USD, "SOFR", dec!(0.040)))
        .unwrap();
    service
        .publish_curve(curve_spec(Currency::EUR, "ESTR", dec!(0.020)))
        .unwrap();

    // Property-filtered discovery.
    let eod_curves = service
        .find_term_curves(&Properties::new().with("MarketName", "EOD"))
        .unwrap();
    assert_eq!(eod_curves.len(), 2);

    // Keyed reload.
    let snapshot = service
        .load_term_curve(&CurveIdentity::new("MARKIT", Currency::EUR, "EOD", "ESTR"))
        .unwrap();
    assert_eq!(snapshot.base_date, base());
    assert_eq!(snapshot.points[0].date, base().add_days(90));
}

#[test]
fn test_cross_currency_trade_valuation() {
    init_tracing();
    let service = service();

    let usd_curve = service
        .build_curve(curve_spec(Currency::USD, "SOFR", dec!(0.040)))
        .unwrap();
    let eur_curve = service
        .build_curve(curve_spec(Currency::EUR, "ESTR", dec!(0.020)))
        .unwrap();

    let mut env = MarketEnvironment::new();
    env.add_discount_curve(Arc::new(usd_curve));
    env.add_discount_curve(Arc::new(eur_curve));
    env.add_fx_rate(Currency::EUR, Currency::USD, dec!(1.10));

    let request = TradeValuationRequest {
        trade_id: "XCCY-SWAP-42".to_string(),
        party1: Party::new("BANK-A"),
        party2: Party::new("FUND-B"),
        reporting_party: Party::new("BANK-A"),
        reporting_currency: Currency::USD,
        flows: vec![
            CashFlow::fixed(
                base().add_days(365),
                Currency::USD,
                dec!(400_000),
                Party::new("BANK-A"),
            ),
            CashFlow::floating(
                base().add_days(365),
                Currency::EUR,
                dec!(380_000),
                Party::new("FUND-B"),
            ),
        ],
    };

    let report = service.npv_report(&request, &env).unwrap();

    // Headline NPV plus one per-currency bucket per flow currency.
    assert!(report.metrics.contains_key("NPV"));
    assert!(report.metrics.contains_key("NPV.USD"));
    assert!(report.metrics.contains_key("NPV.EUR"));

    // BANK-A pays USD and receives EUR.
    assert!(report.metrics["NPV.USD"] < Decimal::ZERO);
    assert!(report.metrics["NPV.EUR"] > Decimal::ZERO);

    // Flipping the reporting party flips the headline sign exactly.
    let flipped = TradeValuationRequest {
        reporting_party: Party::new("FUND-B"),
        ..request.clone()
    };
    let flipped_report = service.npv_report(&flipped, &env).unwrap();
    assert_eq!(flipped_report.metrics["NPV"], -report.metrics["NPV"]);
}

#[test]
fn test_valuation_view_preserves_duplicates() {
    init_tracing();
    let service = service();

    let reports = vec![
        ValuationReport::new(
            "SWAP-1",
            [("NPV".to_string(), dec!(100))].into_iter().collect(),
        ),
        ValuationReport::new(
            "SWAP-1",
            [("NPV".to_string(), dec!(250))].into_iter().collect(),
        ),
    ];

    let keys = service.publish_valuation_view(reports).unwrap();
    assert_eq!(keys.len(), 2);

    let names: Vec<&str> = keys.iter().map(|k| k.name.as_str()).collect();
    assert!(names.contains(&"SWAP-1"));
    assert!(names.contains(&"SWAP-1_Duplicate"));
}

#[test]
fn test_vol_matrix_publishing_round_trip() {
    init_tracing();
    let service = service();

    service
        .publish_cap_floor_matrix(
            Currency::USD,
            vec!["1Y".to_string(), "2Y".to_string()],
            vec!["ATM".to_string(), "ATM+100".to_string()],
            vec![dec!(0.25), dec!(0.27), dec!(0.23), dec!(0.26)],
        )
        .unwrap();
    service
        .publish_swaption_matrix(
            Currency::USD,
            vec!["1Y".to_string()],
            vec!["5Y".to_string(), "10Y".to_string()],
            vec![dec!(0.21), dec!(0.19)],
        )
        .unwrap();

    let caps = service
        .load_vol_matrix(Currency::USD, MatrixKind::CapFloor)
        .unwrap();
    assert_eq!(caps.lookup("2Y", "ATM"), Some(dec!(0.23)));

    let swaptions = service
        .load_vol_matrix(Currency::USD, MatrixKind::Swaption)
        .unwrap();
    assert_eq!(swaptions.dimensions(), (1, 2));
}

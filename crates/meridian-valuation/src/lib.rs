//! # Meridian Valuation
//!
//! Cash-flow valuation and report aggregation for the Meridian platform.
//!
//! This crate turns projected trade cash flows plus a market environment
//! into valuation numbers:
//!
//! - **Market Environment**: The per-call set of discount curves, FX rates,
//!   and volatility grids a trade needs
//! - **Present Value / NPV**: Decimal discounting with currency conversion
//!   and base-party sign conventions
//! - **Par Rates**: Closed form where the instrument is linear in rate,
//!   bounded root-finding otherwise
//! - **Report Aggregation**: Measure-keyed accumulation and multi-report
//!   flattening with the platform's duplicate-identifier policy
//!
//! Everything here is a pure function over immutable inputs: no shared
//! state, no I/O, safe to call concurrently.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod environment;
pub mod error;
pub mod npv;
pub mod report;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::environment::MarketEnvironment;
    pub use crate::error::{ValuationError, ValuationResult};
    pub use crate::npv::{deposit_par_rate, npv, par_rate, present_value, TradeParties};
    pub use crate::report::{
        aggregate_report, flatten_reports, RiskRow, Sensitivity, ValuationReport,
    };
    pub use meridian_core::types::{BaseParty, CashFlow, Currency, Date, FlowType, Party};
}

pub use environment::MarketEnvironment;
pub use error::{ValuationError, ValuationResult};
pub use npv::{deposit_par_rate, npv, par_rate, present_value, TradeParties};
pub use report::{aggregate_report, flatten_reports, RiskRow, Sensitivity, ValuationReport};

//! # Meridian Engine
//!
//! The facade service of the Meridian valuation platform.
//!
//! [`ValuationService`] wires the core components onto the object store:
//! curve specifications come in, discount curves are built and their
//! monthly snapshots published; trades are valued against a market
//! environment and the resulting reports flattened and persisted;
//! volatility matrices are validated and published for the pricer.
//!
//! Dependencies are explicit: the service receives its store handle and
//! namespace at construction and threads them through every call - there
//! is no ambient global state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod service;
pub mod spec;

pub use error::{EngineError, EngineResult};
pub use service::{TradeValuationRequest, ValuationService};
pub use spec::CurveSpec;

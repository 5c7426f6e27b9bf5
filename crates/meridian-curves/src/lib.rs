//! # Meridian Curves
//!
//! Discount-factor curve construction for the Meridian valuation platform.
//!
//! This crate provides:
//!
//! - **Curve Points**: Quoted `(term, mid)` pillars extracted from a market
//!   term structure
//! - **Curve Builder**: Validation, identification properties, and the
//!   base-date fallback chain
//! - **Zero Curve**: The built, immutable discount-factor function
//! - **Term Curves**: Monthly-stepped snapshots for persistence and reporting
//! - **Vol Matrices**: Cap/floor and swaption volatility grids for publishing
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use meridian_curves::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let base = Date::from_ymd(2026, 1, 1).unwrap();
//! let curve = CurveBuilder::new()
//!     .source("MARKIT")
//!     .currency(Currency::USD)
//!     .market_name("LIVE")
//!     .index_name("SOFR")
//!     .base_date(base)
//!     .add_point(base.add_months(3).unwrap(), dec!(0.042))
//!     .add_point(base.add_months(12).unwrap(), dec!(0.045))
//!     .build()
//!     .unwrap();
//!
//! let df = curve.discount_factor(base.add_months(6).unwrap());
//! assert!(df < dec!(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod algorithm;
pub mod builder;
pub mod curve;
pub mod error;
pub mod points;
pub mod surfaces;
pub mod term_curve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::algorithm::CurveAlgorithm;
    pub use crate::builder::{CurveBuilder, CurveIdentity};
    pub use crate::curve::ZeroCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::points::CurvePoint;
    pub use crate::surfaces::{MatrixKind, VolMatrix};
    pub use crate::term_curve::{TermCurve, TermPoint};
    pub use meridian_core::traits::DiscountFactors;
    pub use meridian_core::types::{Currency, Date};
}

pub use algorithm::CurveAlgorithm;
pub use builder::{CurveBuilder, CurveIdentity};
pub use curve::ZeroCurve;
pub use error::{CurveError, CurveResult};
pub use points::CurvePoint;
pub use term_curve::{TermCurve, TermPoint};

//! # Meridian Math
//!
//! Decimal-precision numerical kernels for the Meridian valuation platform.
//!
//! This crate provides:
//!
//! - **Interpolation**: Linear interpolation over decimal knots with an
//!   explicit flat-extrapolation policy
//! - **Solvers**: Root-finding (Newton-Raphson, bisection, and a hybrid of
//!   the two) over decimal-valued functions
//!
//! Everything operates on [`rust_decimal::Decimal`]: the valuation path
//! never round-trips through binary floating point, so repeated curve
//! evaluation accumulates no representation drift.
//!
//! ## Example
//!
//! ```rust
//! use meridian_math::interpolation::LinearInterpolator;
//! use rust_decimal_macros::dec;
//!
//! let interp = LinearInterpolator::new(
//!     vec![dec!(0), dec!(1), dec!(2)],
//!     vec![dec!(0.02), dec!(0.03), dec!(0.035)],
//! )
//! .unwrap();
//!
//! assert_eq!(interp.interpolate(dec!(0.5)).unwrap(), dec!(0.025));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod interpolation;
pub mod solvers;

pub use error::{MathError, MathResult};
pub use interpolation::LinearInterpolator;
pub use solvers::{bisection, hybrid_numerical, newton_raphson_numerical, SolverConfig};

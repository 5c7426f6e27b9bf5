//! Root-finding algorithms over decimal-valued functions.
//!
//! This module provides the solvers the valuation layer uses to back out
//! par rates:
//!
//! - [`newton_raphson`] / [`newton_raphson_numerical`]: fast quadratic
//!   convergence near the root
//! - [`bisection`]: slow but guaranteed given a sign-changing bracket
//! - [`hybrid_numerical`]: Newton first, bisection fallback when Newton
//!   stalls or walks out of the bracket
//!
//! All solvers stop on an absolute residual tolerance and carry an
//! iteration cap; exhausting the cap is an error, never a stale guess.

mod bisection;
mod hybrid;
mod newton;

pub use bisection::bisection;
pub use hybrid::hybrid_numerical;
pub use newton::{newton_raphson, newton_raphson_numerical};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default absolute residual tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: Decimal = dec!(0.0000000001); // 1e-10

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Absolute residual tolerance for convergence.
    pub tolerance: Decimal,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: Decimal, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Decimal) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a successful root-finding run.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The located root.
    pub root: Decimal,
    /// Iterations consumed.
    pub iterations: u32,
    /// Residual `f(root)` at termination.
    pub residual: Decimal,
}

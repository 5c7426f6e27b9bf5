//! Bisection root-finding algorithm.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding.
///
/// Repeatedly halves a sign-changing bracket. Linear convergence, but
/// guaranteed to converge for any continuous function once a valid bracket
/// is supplied.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a`, `b` - Bracket endpoints; `f(a)` and `f(b)` must differ in sign
/// * `config` - Solver configuration
///
/// # Errors
///
/// Returns `MathError::InvalidBracket` if the endpoints do not bracket a
/// root and `MathError::ConvergenceFailed` if the iteration cap is reached.
pub fn bisection<F>(f: F, a: Decimal, b: Decimal, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(Decimal) -> Decimal,
{
    let (mut lo, mut hi) = if a < b { (a, b) } else { (b, a) };

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if f_lo.abs() < config.tolerance {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: f_lo,
        });
    }
    if f_hi.abs() < config.tolerance {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: f_hi,
        });
    }

    if (f_lo > Decimal::ZERO) == (f_hi > Decimal::ZERO) {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    let two = dec!(2);
    let mut mid = (lo + hi) / two;

    for iteration in 0..config.max_iterations {
        mid = (lo + hi) / two;
        let f_mid = f(mid);

        if f_mid.abs() < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual: f_mid,
            });
        }

        if (f_mid > Decimal::ZERO) == (f_lo > Decimal::ZERO) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(mid).abs(),
    ))
}

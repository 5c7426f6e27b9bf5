//! Newton-Raphson root-finding algorithm.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Derivatives smaller than this are treated as zero.
const MIN_DERIVATIVE: Decimal = dec!(0.000000000001); // 1e-12

/// Newton-Raphson root-finding.
///
/// Uses the iteration `x_{n+1} = x_n - f(x_n) / f'(x_n)`. Quadratic
/// convergence near the root, but requires the derivative and may diverge
/// from a poor starting point.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Errors
///
/// Returns `MathError::DivisionByZero` if the derivative vanishes and
/// `MathError::ConvergenceFailed` if the iteration cap is reached.
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: Decimal,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(Decimal) -> Decimal,
    DF: Fn(Decimal) -> Decimal,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);

        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);

        // A vanishing derivative would launch the iterate far outside any
        // representable range; reject it and let callers fall back.
        if dfx.abs() < MIN_DERIVATIVE {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        // Newton step
        let step = fx / dfx;
        x -= step;

        if step.abs() < config.tolerance {
            let final_fx = f(x);
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: final_fx,
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}

/// Newton-Raphson with numerical derivative estimation.
///
/// Uses a symmetric finite difference to estimate the derivative when an
/// analytical derivative is not available.
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: Decimal,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(Decimal) -> Decimal,
{
    let h = dec!(0.00000001); // Step size for numerical differentiation

    let df = |x: Decimal| {
        let f1 = f(x + h);
        let f2 = f(x - h);
        (f1 - f2) / (dec!(2) * h)
    };

    newton_raphson(&f, df, initial_guess, config)
}

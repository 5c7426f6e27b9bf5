//! Newton-Raphson with bisection fallback.

use rust_decimal::Decimal;

use crate::error::{MathError, MathResult};
use crate::solvers::{bisection, newton_raphson_numerical, SolverConfig, SolverResult};

/// Newton-Raphson with a bisection fallback.
///
/// Attempts Newton iteration with a numerically estimated derivative first.
/// When Newton fails - zero derivative, divergence, or iteration
/// exhaustion - and a bracket is supplied, the bracket is handed to
/// [`bisection`] with the same configuration. Without a bracket the Newton
/// error is returned as-is.
///
/// The iteration cap applies to each phase independently; the fallback is a
/// fresh, bounded search rather than a continuation.
pub fn hybrid_numerical<F>(
    f: F,
    initial_guess: Decimal,
    bracket: Option<(Decimal, Decimal)>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(Decimal) -> Decimal,
{
    match newton_raphson_numerical(&f, initial_guess, config) {
        Ok(result) => Ok(result),
        Err(newton_err) => match bracket {
            Some((a, b)) => bisection(&f, a, b, config).map_err(|bisect_err| {
                // Surface whichever failure carries the iteration evidence.
                match bisect_err {
                    MathError::InvalidBracket { .. } => newton_err,
                    other => other,
                }
            }),
            None => Err(newton_err),
        },
    }
}

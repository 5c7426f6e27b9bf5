//! Present value, NPV, and par-rate calculations.

use rust_decimal::Decimal;

use meridian_core::daycounts::{Act365Fixed, DayCount};
use meridian_core::traits::DiscountFactors;
use meridian_core::types::{BaseParty, CashFlow, Currency, Date, Party};
use meridian_math::solvers::{hybrid_numerical, SolverConfig};
use meridian_math::MathError;

use crate::environment::MarketEnvironment;
use crate::error::{ValuationError, ValuationResult};

/// The two legal parties to a trade, in leg order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeParties {
    /// First leg party.
    pub party1: Party,
    /// Second leg party.
    pub party2: Party,
}

impl TradeParties {
    /// Creates a party pair.
    pub fn new(party1: impl Into<Party>, party2: impl Into<Party>) -> Self {
        Self {
            party1: party1.into(),
            party2: party2.into(),
        }
    }

    /// Returns the legal party a perspective refers to.
    #[must_use]
    pub fn party(&self, base: BaseParty) -> &Party {
        match base {
            BaseParty::Party1 => &self.party1,
            BaseParty::Party2 => &self.party2,
        }
    }

    /// Resolves a reporting party to a valuation perspective.
    ///
    /// Falls back to [`BaseParty::Party2`] when the reporting party matches
    /// neither leg - the platform's long-standing behavior for third-party
    /// reporting requests.
    #[must_use]
    pub fn resolve(&self, reporting: &Party) -> BaseParty {
        BaseParty::try_match(reporting, &self.party1, &self.party2).unwrap_or_default()
    }
}

/// Signs a flow's amount from the base party's perspective.
///
/// Flows the base party pays are negative; flows it receives are positive.
fn signed_amount(flow: &CashFlow, base_party: BaseParty, parties: &TradeParties) -> Decimal {
    if flow.payer() == parties.party(base_party) {
        -flow.amount()
    } else {
        flow.amount()
    }
}

/// Present value of a single cash flow against a discount curve.
///
/// `pv = signed amount x discount_factor(payment date)`, in the flow's own
/// currency. Flows on or before the curve's base date carry a factor of
/// one.
pub fn present_value(
    flow: &CashFlow,
    curve: &dyn DiscountFactors,
    base_party: BaseParty,
    parties: &TradeParties,
) -> Decimal {
    signed_amount(flow, base_party, parties) * curve.discount_factor(flow.payment_date())
}

/// Net present value of a set of cash flows in the reporting currency.
///
/// Each flow discounts on its own currency's curve from the environment,
/// then converts into `reporting_currency` at the environment's FX rate.
///
/// # Errors
///
/// Returns `ValuationError::MissingCurve` when a flow's currency has no
/// discount curve loaded, or when no FX rate path exists between a flow
/// currency and the reporting currency.
pub fn npv(
    flows: &[CashFlow],
    env: &MarketEnvironment,
    reporting_currency: Currency,
    base_party: BaseParty,
    parties: &TradeParties,
) -> ValuationResult<Decimal> {
    let mut total = Decimal::ZERO;

    for flow in flows {
        let curve = env.discount_curve(flow.currency())?;
        let pv = present_value(flow, curve.as_ref(), base_party, parties);
        let fx = env.fx_rate(flow.currency(), reporting_currency)?;
        total += pv * fx;
    }

    Ok(total)
}

/// Closed-form par rate for a deposit-style instrument.
///
/// The simple rate over `[start, maturity]` (ACT/365F accrual) that makes
/// lending one unit at `start` against repayment with interest at
/// `maturity` worth zero today:
///
/// `r = (DF(start) / DF(maturity) - 1) / tau`
///
/// # Errors
///
/// A degenerate period (`maturity <= start`) cannot be solved and is
/// reported as `ValuationError::NonConvergence` at zero iterations.
pub fn deposit_par_rate(
    curve: &dyn DiscountFactors,
    start: Date,
    maturity: Date,
) -> ValuationResult<Decimal> {
    let tau = Act365Fixed.year_fraction(start, maturity);
    if tau <= Decimal::ZERO {
        return Err(ValuationError::non_convergence(0, Decimal::ZERO));
    }

    let df_start = curve.discount_factor(start);
    let df_maturity = curve.discount_factor(maturity);
    if df_maturity == Decimal::ZERO {
        return Err(ValuationError::non_convergence(0, df_start));
    }

    Ok((df_start / df_maturity - Decimal::ONE) / tau)
}

/// Solves for the fixed rate that zeroes a trade's NPV.
///
/// `schedule` regenerates the trade's cash flows for a candidate rate,
/// holding every other parameter fixed; the solver searches for the rate at
/// which [`npv`] of the regenerated flows vanishes. Newton iteration with a
/// numerical derivative runs first, falling back to bisection over
/// `bracket` when supplied. Tolerance is absolute NPV (default 1e-10) with
/// a 100-iteration bound; exhausting the bound is an error, never a stale
/// guess.
///
/// # Errors
///
/// Returns `ValuationError::MissingCurve` if the environment cannot value
/// the schedule at all, and `ValuationError::NonConvergence` when the
/// search exhausts its iteration bound.
pub fn par_rate<F>(
    schedule: F,
    env: &MarketEnvironment,
    reporting_currency: Currency,
    base_party: BaseParty,
    parties: &TradeParties,
    initial_guess: Decimal,
    bracket: Option<(Decimal, Decimal)>,
) -> ValuationResult<Decimal>
where
    F: Fn(Decimal) -> Vec<CashFlow>,
{
    // Probe once so curve/FX gaps surface as their own error instead of
    // being folded into the root search.
    let probe = npv(
        &schedule(initial_guess),
        env,
        reporting_currency,
        base_party,
        parties,
    )?;

    let objective = |rate: Decimal| {
        npv(
            &schedule(rate),
            env,
            reporting_currency,
            base_party,
            parties,
        )
        // The probe resolved every curve this schedule touches; a schedule
        // that changes currency with the rate would be a modeling fault.
        .unwrap_or(Decimal::ZERO)
    };

    let config = SolverConfig::default();
    match hybrid_numerical(objective, initial_guess, bracket, &config) {
        Ok(result) => Ok(result.root),
        Err(MathError::ConvergenceFailed {
            iterations,
            residual,
        }) => Err(ValuationError::non_convergence(iterations, residual)),
        Err(_) => Err(ValuationError::non_convergence(0, probe.abs())),
    }
}

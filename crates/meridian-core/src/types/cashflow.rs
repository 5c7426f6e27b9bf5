//! Cash flow type for trade valuation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Currency, Date, Party};

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowType {
    /// Fixed-leg coupon payment
    Fixed,
    /// Floating-leg coupon payment (rate already projected)
    Float,
    /// Notional exchange
    PrincipalExchange,
    /// Cap payoff
    Cap,
    /// Floor payoff
    Floor,
    /// Fee or upfront payment
    Fee,
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowType::Fixed => "Fixed",
            FlowType::Float => "Float",
            FlowType::PrincipalExchange => "PrincipalExchange",
            FlowType::Cap => "Cap",
            FlowType::Floor => "Floor",
            FlowType::Fee => "Fee",
        };
        write!(f, "{name}")
    }
}

/// A single projected cash flow.
///
/// Flows arrive from the upstream projection engine already fixed or
/// projected; the valuation layer consumes them read-only. Amounts are
/// unsigned magnitudes; directionality comes from `payer` combined with the
/// reporting perspective at valuation time.
///
/// # Example
///
/// ```rust
/// use meridian_core::types::{CashFlow, Currency, Date, FlowType, Party};
/// use rust_decimal_macros::dec;
///
/// let cf = CashFlow::fixed(
///     Date::from_ymd(2026, 6, 15).unwrap(),
///     Currency::USD,
///     dec!(125_000),
///     Party::new("BANK-A"),
/// );
/// assert_eq!(cf.flow_type(), FlowType::Fixed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    payment_date: Date,
    /// Payment currency
    currency: Currency,
    /// Unsigned payment amount
    amount: Decimal,
    /// Type of cash flow
    flow_type: FlowType,
    /// The leg party that pays this flow
    payer: Party,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(
        payment_date: Date,
        currency: Currency,
        amount: Decimal,
        flow_type: FlowType,
        payer: Party,
    ) -> Self {
        Self {
            payment_date,
            currency,
            amount,
            flow_type,
            payer,
        }
    }

    /// Creates a fixed-leg coupon flow.
    #[must_use]
    pub fn fixed(payment_date: Date, currency: Currency, amount: Decimal, payer: Party) -> Self {
        Self::new(payment_date, currency, amount, FlowType::Fixed, payer)
    }

    /// Creates a floating-leg coupon flow.
    #[must_use]
    pub fn floating(payment_date: Date, currency: Currency, amount: Decimal, payer: Party) -> Self {
        Self::new(payment_date, currency, amount, FlowType::Float, payer)
    }

    /// Creates a principal exchange flow.
    #[must_use]
    pub fn principal_exchange(
        payment_date: Date,
        currency: Currency,
        amount: Decimal,
        payer: Party,
    ) -> Self {
        Self::new(
            payment_date,
            currency,
            amount,
            FlowType::PrincipalExchange,
            payer,
        )
    }

    /// Creates a fee flow.
    #[must_use]
    pub fn fee(payment_date: Date, currency: Currency, amount: Decimal, payer: Party) -> Self {
        Self::new(payment_date, currency, amount, FlowType::Fee, payer)
    }

    /// Returns the payment date.
    #[must_use]
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Returns the payment currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the unsigned amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the flow type.
    #[must_use]
    pub fn flow_type(&self) -> FlowType {
        self.flow_type
    }

    /// Returns the paying party.
    #[must_use]
    pub fn payer(&self) -> &Party {
        &self.payer
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} on {} (payer {})",
            self.flow_type, self.amount, self.currency, self.payment_date, self.payer
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_constructors() {
        let date = Date::from_ymd(2026, 6, 15).unwrap();
        let payer = Party::new("BANK-A");

        let cf = CashFlow::fixed(date, Currency::USD, dec!(100), payer.clone());
        assert_eq!(cf.flow_type(), FlowType::Fixed);

        let cf = CashFlow::principal_exchange(date, Currency::EUR, dec!(1_000_000), payer);
        assert_eq!(cf.flow_type(), FlowType::PrincipalExchange);
        assert_eq!(cf.currency(), Currency::EUR);
    }

    #[test]
    fn test_display() {
        let cf = CashFlow::fee(
            Date::from_ymd(2026, 1, 2).unwrap(),
            Currency::GBP,
            dec!(500),
            Party::new("FUND-B"),
        );
        let s = cf.to_string();
        assert!(s.contains("Fee"));
        assert!(s.contains("GBP"));
        assert!(s.contains("FUND-B"));
    }
}

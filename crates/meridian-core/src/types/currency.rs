//! Currency type with ISO 4217 codes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// ISO 4217 currency codes.
///
/// Represents the currencies the platform books and values trades in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum Currency {
    /// United States Dollar
    #[default]
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
    /// Canadian Dollar
    CAD,
    /// Australian Dollar
    AUD,
    /// New Zealand Dollar
    NZD,
    /// Swedish Krona
    SEK,
    /// Norwegian Krone
    NOK,
    /// Danish Krone
    DKK,
    /// Hong Kong Dollar
    HKD,
    /// Singapore Dollar
    SGD,
}

impl Currency {
    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::NZD => "NZD",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
            Currency::DKK => "DKK",
            Currency::HKD => "HKD",
            Currency::SGD => "SGD",
        }
    }

    /// Parses a 3-letter ISO 4217 code.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownCurrency` for codes outside the supported set.
    pub fn from_code(code: &str) -> CoreResult<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CHF" => Ok(Currency::CHF),
            "CAD" => Ok(Currency::CAD),
            "AUD" => Ok(Currency::AUD),
            "NZD" => Ok(Currency::NZD),
            "SEK" => Ok(Currency::SEK),
            "NOK" => Ok(Currency::NOK),
            "DKK" => Ok(Currency::DKK),
            "HKD" => Ok(Currency::HKD),
            "SGD" => Ok(Currency::SGD),
            other => Err(CoreError::unknown_currency(other)),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for ccy in [Currency::USD, Currency::EUR, Currency::GBP, Currency::JPY] {
            assert_eq!(Currency::from_code(ccy.code()).unwrap(), ccy);
        }
    }

    #[test]
    fn test_from_code_case_insensitive() {
        assert_eq!(Currency::from_code("usd").unwrap(), Currency::USD);
    }

    #[test]
    fn test_unknown_code() {
        assert!(Currency::from_code("XXX").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Currency::GBP.to_string(), "GBP");
    }
}

//! Domain types for the Meridian valuation platform.

mod cashflow;
mod currency;
mod date;
mod party;

pub use cashflow::{CashFlow, FlowType};
pub use currency::Currency;
pub use date::Date;
pub use party::{BaseParty, Party};

//! # Meridian Core
//!
//! Core types, traits, and abstractions for the Meridian valuation platform.
//!
//! This crate provides the foundational building blocks used throughout
//! Meridian:
//!
//! - **Types**: Domain-specific types like [`types::Date`], [`types::Currency`],
//!   [`types::CashFlow`], and [`types::Party`]
//! - **Day Count Conventions**: Year-fraction calculations in decimal precision
//! - **Traits**: The [`traits::DiscountFactors`] abstraction every curve
//!   implementation satisfies
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Decimal Arithmetic**: Rate and discount-factor math never touches
//!   binary floating point
//! - **Explicit Over Implicit**: Dependencies are passed as arguments, never
//!   held as ambient state
//!
//! ## Example
//!
//! ```rust
//! use meridian_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let pay_date = Date::from_ymd(2026, 6, 15).unwrap();
//! let flow = CashFlow::fixed(pay_date, Currency::USD, dec!(125_000), Party::new("BANK-A"));
//! assert_eq!(flow.currency(), Currency::USD);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod daycounts;
pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act360, Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::traits::DiscountFactors;
    pub use crate::types::{BaseParty, CashFlow, Currency, Date, FlowType, Party};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{BaseParty, CashFlow, Currency, Date, FlowType, Party};

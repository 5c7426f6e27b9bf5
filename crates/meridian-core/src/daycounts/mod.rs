//! Day count conventions for curve time and accrual calculations.
//!
//! Day count conventions determine how a span between two dates maps to a
//! year fraction. Fractions are returned as `Decimal` so curve time never
//! passes through binary floating point.
//!
//! # Supported Conventions
//!
//! - [`Act365Fixed`]: Actual/365 Fixed - the convention curve tenors use
//! - [`Act360`]: Actual/360 - money market convention
//!
//! # Usage
//!
//! ```rust
//! use meridian_core::daycounts::{Act365Fixed, DayCount};
//! use meridian_core::types::Date;
//!
//! let dc = Act365Fixed;
//! let start = Date::from_ymd(2026, 1, 1).unwrap();
//! let end = Date::from_ymd(2027, 1, 1).unwrap();
//! assert_eq!(dc.day_count(start, end), 365);
//! ```

mod act360;
mod act365;

pub use act360::Act360;
pub use act365::Act365Fixed;

use rust_decimal::Decimal;

use crate::types::Date;

/// Trait for day count conventions.
pub trait DayCount: Send + Sync {
    /// Returns the number of days counted between two dates under this
    /// convention.
    fn day_count(&self, start: Date, end: Date) -> i64;

    /// Returns the year fraction between two dates.
    ///
    /// Negative when `end` precedes `start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Returns the convention's market name.
    fn name(&self) -> &'static str;
}

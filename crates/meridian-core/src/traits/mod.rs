//! Core traits for the Meridian valuation platform.
//!
//! This module defines the fundamental abstraction shared by every curve
//! implementation:
//!
//! - [`DiscountFactors`]: a continuous discount-factor function anchored at
//!   a base date

use rust_decimal::Decimal;
use std::sync::Arc;

use crate::types::Date;

/// A continuous discount-factor function anchored at a base date.
///
/// Implementations are immutable once built and are total over all dates on
/// or after the base date: within the quoted range they interpolate, beyond
/// it they extrapolate per the implementation's stated policy, and on or
/// before the base date the factor is exactly one. There is no failure path
/// at evaluation time; malformed inputs are rejected when the curve is
/// built.
///
/// # Thread Safety
///
/// Curves are required to be `Send + Sync` so a single built instance can be
/// shared across concurrent valuation calls via [`Arc`].
pub trait DiscountFactors: Send + Sync {
    /// Returns the curve's base (as-of) date.
    fn base_date(&self) -> Date;

    /// Returns the discount factor for a given date.
    ///
    /// The discount factor is the present value of one unit of currency paid
    /// on `date`. Returns exactly one for any date on or before the base
    /// date.
    fn discount_factor(&self, date: Date) -> Decimal;

    /// Returns the continuously compounded zero rate implied for `date`.
    ///
    /// Returns zero for any date on or before the base date.
    fn zero_rate(&self, date: Date) -> Decimal;

    /// Returns the last quoted date backing the curve.
    ///
    /// Evaluation past this date holds the implied zero rate constant.
    fn last_quoted_date(&self) -> Date;

    /// Returns the forward discount factor between two dates.
    ///
    /// `DF(start, end) = DF(end) / DF(start)`; one when the start factor is
    /// zero or the dates coincide.
    fn forward_discount_factor(&self, start: Date, end: Date) -> Decimal {
        let df_start = self.discount_factor(start);
        if df_start == Decimal::ZERO {
            return Decimal::ONE;
        }
        self.discount_factor(end) / df_start
    }
}

/// Blanket implementation allowing `Arc<T>` to be used as a curve.
impl<T: DiscountFactors + ?Sized> DiscountFactors for Arc<T> {
    fn base_date(&self) -> Date {
        (**self).base_date()
    }

    fn discount_factor(&self, date: Date) -> Decimal {
        (**self).discount_factor(date)
    }

    fn zero_rate(&self, date: Date) -> Decimal {
        (**self).zero_rate(date)
    }

    fn last_quoted_date(&self) -> Date {
        (**self).last_quoted_date()
    }
}

/// Blanket implementation allowing `&T` to be used as a curve.
impl<T: DiscountFactors + ?Sized> DiscountFactors for &T {
    fn base_date(&self) -> Date {
        (**self).base_date()
    }

    fn discount_factor(&self, date: Date) -> Decimal {
        (**self).discount_factor(date)
    }

    fn zero_rate(&self, date: Date) -> Decimal {
        (**self).zero_rate(date)
    }

    fn last_quoted_date(&self) -> Date {
        (**self).last_quoted_date()
    }
}

//! Monthly-stepped discount-factor snapshots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use meridian_core::traits::DiscountFactors;
use meridian_core::types::Date;

use crate::builder::CurveIdentity;
use crate::curve::ZeroCurve;
use crate::error::CurveResult;

/// A single sampled point of a term curve snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermPoint {
    /// Sample date.
    pub date: Date,
    /// Discount factor at the sample date.
    pub discount_factor: Decimal,
}

/// A serializable snapshot of a built curve.
///
/// Produced by stepping the curve at a fixed monthly cadence from its first
/// quoted pillar to its last. This is a persistence and reporting
/// convenience only - callers needing precise factors at arbitrary dates
/// evaluate the curve directly, never interpolate the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCurve {
    /// Identification of the curve that produced the snapshot.
    pub identity: CurveIdentity,
    /// The curve's base date.
    pub base_date: Date,
    /// Wire name of the construction algorithm.
    pub algorithm: String,
    /// Sampled points, strictly increasing in date.
    pub points: Vec<TermPoint>,
}

impl TermCurve {
    /// Samples a curve into a monthly-stepped snapshot.
    ///
    /// Steps are anchored on the first quoted pillar (`first + 1 month`,
    /// `first + 2 months`, ...) so month-end clamping never drifts. The
    /// final pillar date is always included even when the monthly cadence
    /// does not land on it exactly.
    ///
    /// # Errors
    ///
    /// Returns `CurveError` only if date arithmetic leaves the supported
    /// range, which no realistic curve horizon does.
    pub fn snapshot(curve: &ZeroCurve) -> CurveResult<Self> {
        let first = curve.first_quoted_date();
        let last = curve.last_quoted_date();

        let mut points = Vec::new();
        let mut months = 0;
        loop {
            let date = first.add_months(months)?;
            if date >= last {
                break;
            }
            points.push(TermPoint {
                date,
                discount_factor: curve.discount_factor(date),
            });
            months += 1;
        }
        points.push(TermPoint {
            date: last,
            discount_factor: curve.discount_factor(last),
        });

        Ok(Self {
            identity: curve.identity().clone(),
            base_date: curve.base_date(),
            algorithm: curve.algorithm().name().to_string(),
            points,
        })
    }

    /// Returns the number of sampled points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the snapshot holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

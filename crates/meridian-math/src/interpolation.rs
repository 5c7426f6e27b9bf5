//! Linear interpolation over decimal knots.

use rust_decimal::Decimal;

use crate::error::{MathError, MathResult};

/// Linear interpolation between decimal data points.
///
/// Connects consecutive knots with straight lines. Outside the knot range
/// the interpolator either rejects the query or, when flat extrapolation is
/// enabled, holds the boundary knot's value constant. Flat (not linear)
/// extrapolation is the policy the curve layer requires: beyond the last
/// quoted pillar the implied zero rate stays at its final value.
///
/// # Example
///
/// ```rust
/// use meridian_math::interpolation::LinearInterpolator;
/// use rust_decimal_macros::dec;
///
/// let xs = vec![dec!(0), dec!(1), dec!(2)];
/// let ys = vec![dec!(0), dec!(2), dec!(6)];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap();
/// assert_eq!(interp.interpolate(dec!(1.5)).unwrap(), dec!(4));
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<Decimal>,
    ys: Vec<Decimal>,
    flat_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates, strictly increasing
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, lengths differ,
    /// or the x values are not strictly increasing.
    pub fn new(xs: Vec<Decimal>, ys: Vec<Decimal>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(MathError::invalid_input(
                    "x values must be strictly increasing",
                ));
            }
        }

        Ok(Self {
            xs,
            ys,
            flat_extrapolation: false,
        })
    }

    /// Enables flat extrapolation beyond the knot range.
    ///
    /// Queries before the first knot return the first y value; queries past
    /// the last knot return the last y value.
    #[must_use]
    pub fn with_flat_extrapolation(mut self) -> Self {
        self.flat_extrapolation = true;
        self
    }

    /// Returns the smallest knot x value.
    #[must_use]
    pub fn min_x(&self) -> Decimal {
        self.xs[0]
    }

    /// Returns the largest knot x value.
    #[must_use]
    pub fn max_x(&self) -> Decimal {
        self.xs[self.xs.len() - 1]
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1].
    fn find_segment(&self, x: Decimal) -> usize {
        match self.xs.binary_search(&x) {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => i.saturating_sub(1).min(self.xs.len() - 2),
        }
    }

    /// Interpolates the value at `x`.
    ///
    /// # Errors
    ///
    /// Returns `MathError::ExtrapolationNotAllowed` when `x` lies outside
    /// the knot range and flat extrapolation is disabled.
    pub fn interpolate(&self, x: Decimal) -> MathResult<Decimal> {
        if x < self.min_x() || x > self.max_x() {
            if !self.flat_extrapolation {
                return Err(MathError::ExtrapolationNotAllowed {
                    x,
                    min: self.min_x(),
                    max: self.max_x(),
                });
            }
            // Hold the boundary knot constant.
            if x < self.min_x() {
                return Ok(self.ys[0]);
            }
            return Ok(self.ys[self.ys.len() - 1]);
        }

        let i = self.find_segment(x);

        let x0 = self.xs[i];
        let x1 = self.xs[i + 1];
        let y0 = self.ys[i];
        let y1 = self.ys[i + 1];

        // Linear interpolation formula
        let t = (x - x0) / (x1 - x0);
        Ok(y0 + t * (y1 - y0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_linear_interpolation() {
        let xs = vec![dec!(0), dec!(1), dec!(2)];
        let ys = vec![dec!(0), dec!(2), dec!(4)];

        let interp = LinearInterpolator::new(xs, ys).unwrap();

        // Exact knots
        assert_eq!(interp.interpolate(dec!(0)).unwrap(), dec!(0));
        assert_eq!(interp.interpolate(dec!(1)).unwrap(), dec!(2));
        assert_eq!(interp.interpolate(dec!(2)).unwrap(), dec!(4));

        // Between knots
        assert_eq!(interp.interpolate(dec!(0.5)).unwrap(), dec!(1));
        assert_eq!(interp.interpolate(dec!(1.5)).unwrap(), dec!(3));
    }

    #[test]
    fn test_midpoint_is_average_of_brackets() {
        let xs = vec![dec!(1), dec!(3)];
        let ys = vec![dec!(0.04), dec!(0.05)];

        let interp = LinearInterpolator::new(xs, ys).unwrap();
        let mid = interp.interpolate(dec!(2)).unwrap();
        assert_eq!(mid, (dec!(0.04) + dec!(0.05)) / dec!(2));
    }

    #[test]
    fn test_extrapolation_disabled() {
        let xs = vec![dec!(0), dec!(1)];
        let ys = vec![dec!(0), dec!(1)];

        let interp = LinearInterpolator::new(xs, ys).unwrap();

        assert!(interp.interpolate(dec!(-0.5)).is_err());
        assert!(interp.interpolate(dec!(1.5)).is_err());
    }

    #[test]
    fn test_flat_extrapolation() {
        let xs = vec![dec!(0), dec!(1)];
        let ys = vec![dec!(0.02), dec!(0.05)];

        let interp = LinearInterpolator::new(xs, ys)
            .unwrap()
            .with_flat_extrapolation();

        // Held constant on both sides, not extended along the segment slope.
        assert_eq!(interp.interpolate(dec!(-3)).unwrap(), dec!(0.02));
        assert_eq!(interp.interpolate(dec!(11)).unwrap(), dec!(0.05));
    }

    #[test]
    fn test_insufficient_points() {
        let result = LinearInterpolator::new(vec![dec!(0)], vec![dec!(1)]);
        assert!(matches!(
            result,
            Err(MathError::InsufficientData { required: 2, .. })
        ));
    }

    #[test]
    fn test_unsorted_error() {
        let xs = vec![dec!(1), dec!(0), dec!(2)];
        let ys = vec![dec!(1), dec!(0), dec!(2)];
        assert!(LinearInterpolator::new(xs, ys).is_err());
    }

    #[test]
    fn test_duplicate_knot_error() {
        let xs = vec![dec!(0), dec!(1), dec!(1)];
        let ys = vec![dec!(0), dec!(1), dec!(2)];
        assert!(LinearInterpolator::new(xs, ys).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// In-range queries never leave the envelope of the knot values.
            #[test]
            fn prop_interpolation_within_knot_envelope(q in 0i64..=2000) {
                let interp = LinearInterpolator::new(
                    vec![dec!(0), dec!(1), dec!(2)],
                    vec![dec!(0.02), dec!(0.05), dec!(0.03)],
                )
                .unwrap();

                let x = Decimal::from(q) / dec!(1000);
                let y = interp.interpolate(x).unwrap();
                prop_assert!(y >= dec!(0.02));
                prop_assert!(y <= dec!(0.05));
            }
        }
    }
}

//! The built discount-factor curve.

use rust_decimal::{Decimal, MathematicalOps};

use meridian_core::daycounts::{Act365Fixed, DayCount};
use meridian_core::traits::DiscountFactors;
use meridian_core::types::Date;

use crate::algorithm::CurveAlgorithm;
use crate::builder::CurveIdentity;
use crate::error::{CurveError, CurveResult};
use crate::points::CurvePoint;
use meridian_math::interpolation::LinearInterpolator;

/// A discount-factor curve built from quoted zero-rate pillars.
///
/// Immutable once built: a new market snapshot produces a new instance, it
/// never updates one in place. Evaluation is total over all dates - on or
/// before the base date the factor is exactly one, within the quoted range
/// the configured algorithm interpolates, and beyond the last pillar the
/// implied zero rate is held flat (likewise before the first pillar).
///
/// Quoted mids are continuously compounded zero rates; time is measured
/// with ACT/365 Fixed from the base date. All arithmetic is decimal.
#[derive(Debug, Clone)]
pub struct ZeroCurve {
    identity: CurveIdentity,
    base_date: Date,
    points: Vec<CurvePoint>,
    algorithm: CurveAlgorithm,
    /// Pillar year fractions from the base date.
    times: Vec<Decimal>,
    /// Interpolation ordinates: zero rates for `FastLinearZero`, log
    /// discount factors for `LogLinearDiscount`.
    interpolator: Option<LinearInterpolator>,
}

impl ZeroCurve {
    /// Builds a curve from validated inputs.
    ///
    /// Terms must be strictly increasing and none may precede the base
    /// date; violations are rejected rather than repaired - the upstream
    /// extraction is expected to deliver ordered pillars, and reordering
    /// here would mask a data fault.
    ///
    /// # Errors
    ///
    /// Returns a [`CurveError`] variant describing the first malformed
    /// pillar, or `CurveError::EmptyCurve` for an empty sequence.
    pub fn new(
        identity: CurveIdentity,
        base_date: Date,
        points: Vec<CurvePoint>,
        algorithm: CurveAlgorithm,
    ) -> CurveResult<Self> {
        if points.is_empty() {
            return Err(CurveError::EmptyCurve);
        }

        for (i, point) in points.iter().enumerate() {
            if point.term < base_date {
                return Err(CurveError::term_before_base_date(i, point.term, base_date));
            }
            if i > 0 && point.term <= points[i - 1].term {
                return Err(CurveError::non_monotonic_terms(
                    i,
                    points[i - 1].term,
                    point.term,
                ));
            }
        }

        let day_count = Act365Fixed;
        let times: Vec<Decimal> = points
            .iter()
            .map(|p| day_count.year_fraction(base_date, p.term))
            .collect();

        let ordinates: Vec<Decimal> = match algorithm {
            CurveAlgorithm::FastLinearZero => points.iter().map(|p| p.mid).collect(),
            CurveAlgorithm::LogLinearDiscount => points
                .iter()
                .zip(&times)
                .map(|(p, t)| -p.mid * t)
                .collect(),
        };

        // A single pillar cannot feed the interpolator; the curve is flat
        // at that pillar's rate instead.
        let interpolator = if points.len() >= 2 {
            Some(
                LinearInterpolator::new(times.clone(), ordinates)
                    .map_err(|e| CurveError::interpolation_failed(e.to_string()))?
                    .with_flat_extrapolation(),
            )
        } else {
            None
        };

        Ok(Self {
            identity,
            base_date,
            points,
            algorithm,
            times,
            interpolator,
        })
    }

    /// Returns the curve's identification properties.
    #[must_use]
    pub fn identity(&self) -> &CurveIdentity {
        &self.identity
    }

    /// Returns the quoted pillar points.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the construction algorithm.
    #[must_use]
    pub fn algorithm(&self) -> CurveAlgorithm {
        self.algorithm
    }

    /// Returns the first quoted pillar date.
    #[must_use]
    pub fn first_quoted_date(&self) -> Date {
        self.points[0].term
    }

    /// Year fraction from the base date under the curve's day count.
    fn tenor(&self, date: Date) -> Decimal {
        Act365Fixed.year_fraction(self.base_date, date)
    }

    /// The interpolation ordinate at tenor `t`, with flat extrapolation.
    fn ordinate(&self, t: Decimal) -> Decimal {
        match &self.interpolator {
            Some(interp) => interp
                .interpolate(t)
                .expect("flat extrapolation makes interpolation total"),
            None => match self.algorithm {
                CurveAlgorithm::FastLinearZero => self.points[0].mid,
                CurveAlgorithm::LogLinearDiscount => -self.points[0].mid * t,
            },
        }
    }

    /// The continuously compounded zero rate implied at tenor `t > 0`.
    fn zero_at_tenor(&self, t: Decimal) -> Decimal {
        match self.algorithm {
            CurveAlgorithm::FastLinearZero => self.ordinate(t),
            CurveAlgorithm::LogLinearDiscount => {
                let last = self.times[self.times.len() - 1];
                let first = self.times[0];
                // Outside the pillar range the log-DF knots no longer apply;
                // the boundary pillar's quoted rate is held flat instead.
                if t >= last {
                    self.points[self.points.len() - 1].mid
                } else if t <= first {
                    self.points[0].mid
                } else {
                    -self.ordinate(t) / t
                }
            }
        }
    }
}

impl DiscountFactors for ZeroCurve {
    fn base_date(&self) -> Date {
        self.base_date
    }

    fn discount_factor(&self, date: Date) -> Decimal {
        if date <= self.base_date {
            return Decimal::ONE;
        }

        let t = self.tenor(date);
        let rate = self.zero_at_tenor(t);

        // Continuous compounding: DF = e^(-r*t)
        (-rate * t).exp()
    }

    fn zero_rate(&self, date: Date) -> Decimal {
        if date <= self.base_date {
            return Decimal::ZERO;
        }

        self.zero_at_tenor(self.tenor(date))
    }

    fn last_quoted_date(&self) -> Date {
        self.points[self.points.len() - 1].term
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn identity() -> CurveIdentity {
        CurveIdentity::new(
            "MARKIT",
            meridian_core::types::Currency::USD,
            "LIVE",
            "SOFR",
        )
    }

    fn base() -> Date {
        Date::from_ymd(2026, 1, 1).unwrap()
    }

    fn two_point_curve() -> ZeroCurve {
        // 0% at base, 5% one year out (365 days -> t = 1 exactly).
        ZeroCurve::new(
            identity(),
            base(),
            vec![
                CurvePoint::new(base(), dec!(0)),
                CurvePoint::new(base().add_days(365), dec!(0.05)),
            ],
            CurveAlgorithm::FastLinearZero,
        )
        .unwrap()
    }

    #[test]
    fn test_discount_factor_at_base_is_exactly_one() {
        let curve = two_point_curve();
        assert_eq!(curve.discount_factor(base()), Decimal::ONE);
    }

    #[test]
    fn test_discount_factor_before_base_is_one() {
        let curve = two_point_curve();
        assert_eq!(curve.discount_factor(base().add_days(-30)), Decimal::ONE);
    }

    #[test]
    fn test_zero_rate_before_base_is_zero() {
        let curve = two_point_curve();
        assert_eq!(curve.zero_rate(base()), Decimal::ZERO);
    }

    #[test]
    fn test_interpolated_rate_is_time_weighted() {
        let curve = two_point_curve();

        // 146 days = 0.4 years exactly under ACT/365F; linear zero between
        // 0% and 5% gives 2%.
        let date = base().add_days(146);
        assert_eq!(curve.zero_rate(date), dec!(0.02));
    }

    #[test]
    fn test_midpoint_rate_is_average_of_brackets() {
        let curve = ZeroCurve::new(
            identity(),
            base(),
            vec![
                CurvePoint::new(base().add_days(100), dec!(0.04)),
                CurvePoint::new(base().add_days(300), dec!(0.05)),
            ],
            CurveAlgorithm::FastLinearZero,
        )
        .unwrap();

        let mid = curve.zero_rate(base().add_days(200));
        assert_eq!(mid, (dec!(0.04) + dec!(0.05)) / dec!(2));
    }

    #[test]
    fn test_mid_term_discount_factor_closed_form() {
        let curve = two_point_curve();

        // Half the quoted span: t = 0.5 exactly (182.5 days is not a date,
        // so use 146 days = t 0.4): r = 0.02, DF = exp(-0.02 * 0.4).
        let date = base().add_days(146);
        let t = dec!(146) / dec!(365);
        let expected = (-dec!(0.02) * t).exp();
        assert_eq!(curve.discount_factor(date), expected);
    }

    #[test]
    fn test_flat_extrapolation_holds_last_zero_rate() {
        let curve = two_point_curve();

        let last = base().add_days(365);
        let far = last.add_years(10).unwrap();

        // Extrapolation policy: the implied zero rate past the last pillar
        // stays at the last pillar's rate.
        assert_eq!(curve.zero_rate(far), curve.zero_rate(last));
        assert_eq!(curve.zero_rate(far), dec!(0.05));

        let t_far = Decimal::from(base().days_between(&far)) / dec!(365);
        assert_eq!(curve.discount_factor(far), (-dec!(0.05) * t_far).exp());
    }

    #[test]
    fn test_flat_extrapolation_before_first_pillar() {
        let curve = ZeroCurve::new(
            identity(),
            base(),
            vec![
                CurvePoint::new(base().add_days(100), dec!(0.04)),
                CurvePoint::new(base().add_days(300), dec!(0.05)),
            ],
            CurveAlgorithm::FastLinearZero,
        )
        .unwrap();

        assert_eq!(curve.zero_rate(base().add_days(10)), dec!(0.04));
    }

    #[test]
    fn test_single_pillar_curve_is_flat() {
        let curve = ZeroCurve::new(
            identity(),
            base(),
            vec![CurvePoint::new(base().add_days(365), dec!(0.03))],
            CurveAlgorithm::FastLinearZero,
        )
        .unwrap();

        assert_eq!(curve.zero_rate(base().add_days(100)), dec!(0.03));
        assert_eq!(curve.zero_rate(base().add_days(1000)), dec!(0.03));
    }

    #[test]
    fn test_log_linear_discount_matches_pillars() {
        let points = vec![
            CurvePoint::new(base().add_days(100), dec!(0.04)),
            CurvePoint::new(base().add_days(300), dec!(0.05)),
        ];
        let curve = ZeroCurve::new(
            identity(),
            base(),
            points.clone(),
            CurveAlgorithm::LogLinearDiscount,
        )
        .unwrap();

        // At the pillars both algorithms agree with the quoted mids.
        for point in &points {
            let t = Act365Fixed.year_fraction(base(), point.term);
            assert_eq!(curve.discount_factor(point.term), (-point.mid * t).exp());
        }
    }

    #[test]
    fn test_log_linear_flat_extrapolation() {
        let curve = ZeroCurve::new(
            identity(),
            base(),
            vec![
                CurvePoint::new(base().add_days(100), dec!(0.04)),
                CurvePoint::new(base().add_days(300), dec!(0.05)),
            ],
            CurveAlgorithm::LogLinearDiscount,
        )
        .unwrap();

        assert_eq!(curve.zero_rate(base().add_days(3000)), dec!(0.05));
    }

    #[test]
    fn test_empty_points_rejected() {
        let result = ZeroCurve::new(identity(), base(), vec![], CurveAlgorithm::FastLinearZero);
        assert!(matches!(result, Err(CurveError::EmptyCurve)));
    }

    #[test]
    fn test_unordered_points_rejected() {
        let result = ZeroCurve::new(
            identity(),
            base(),
            vec![
                CurvePoint::new(base().add_days(300), dec!(0.05)),
                CurvePoint::new(base().add_days(100), dec!(0.04)),
            ],
            CurveAlgorithm::FastLinearZero,
        );
        assert!(matches!(
            result,
            Err(CurveError::NonMonotonicTerms { index: 1, .. })
        ));
    }

    #[test]
    fn test_term_before_base_rejected() {
        let result = ZeroCurve::new(
            identity(),
            base(),
            vec![CurvePoint::new(base().add_days(-10), dec!(0.04))],
            CurveAlgorithm::FastLinearZero,
        );
        assert!(matches!(
            result,
            Err(CurveError::TermBeforeBaseDate { index: 0, .. })
        ));
    }

    #[test]
    fn test_forward_discount_factor() {
        let curve = two_point_curve();
        let d1 = base().add_days(100);
        let d2 = base().add_days(300);

        let fwd = curve.forward_discount_factor(d1, d2);
        assert_eq!(fwd, curve.discount_factor(d2) / curve.discount_factor(d1));
        assert!(fwd < Decimal::ONE);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Anywhere on or after the first pillar, the implied zero rate
            /// stays inside the envelope of the quoted mids and the factor
            /// stays in (0, 1].
            #[test]
            fn prop_rate_envelope_and_factor_range(offset in 1i64..=4000) {
                let curve = ZeroCurve::new(
                    identity(),
                    base(),
                    vec![
                        CurvePoint::new(base().add_days(100), dec!(0.04)),
                        CurvePoint::new(base().add_days(300), dec!(0.05)),
                    ],
                    CurveAlgorithm::FastLinearZero,
                )
                .unwrap();

                let date = base().add_days(offset);
                let rate = curve.zero_rate(date);
                prop_assert!(rate >= dec!(0.04));
                prop_assert!(rate <= dec!(0.05));

                let df = curve.discount_factor(date);
                prop_assert!(df > Decimal::ZERO);
                prop_assert!(df < Decimal::ONE);
            }
        }
    }
}

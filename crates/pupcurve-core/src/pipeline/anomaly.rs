//! Anomaly checker: heuristic sanity checks over the adjusted curve.
//!
//! Three independent checks, each re-evaluated from scratch per request.
//! None blocks or alters the curve; their union is the request's
//! [`WarningSet`].

use tracing::debug;

use crate::config::AnomalyThresholds;
use crate::types::{AdjustedCurve, GrowthWarning, WarningSet};

/// Run all three checks.
///
/// - Negative trend: OLS slope of point estimate vs age < 0.
/// - Weight discrepancy: scaling factor outside the plausible band.
/// - Unrealistic rate: any local week-over-week rate outside bounds.
pub fn check_curve(
    curve: &AdjustedCurve,
    scaling_factor: f32,
    thresholds: &AnomalyThresholds,
) -> WarningSet {
    let mut warnings = WarningSet::new();

    if let Some(slope) = ols_slope(curve) {
        if slope < 0.0 {
            debug!(slope, "negative trend detected");
            warnings.push(GrowthWarning::NegativeTrend { slope });
        }
    }

    if scaling_factor < thresholds.discrepancy_low || scaling_factor > thresholds.discrepancy_high {
        debug!(scaling_factor, "weight discrepancy detected");
        warnings.push(GrowthWarning::WeightDiscrepancy { scaling_factor });
    }

    if let Some((age_weeks, rate)) = first_unrealistic_rate(curve, thresholds) {
        debug!(age_weeks, rate, "unrealistic growth rate detected");
        warnings.push(GrowthWarning::UnrealisticRate {
            age_weeks,
            rate_lbs_per_week: rate,
        });
    }

    warnings
}

/// Ordinary least-squares slope of point estimate against age over the
/// full curve. `None` when the curve has fewer than two rows.
fn ols_slope(curve: &AdjustedCurve) -> Option<f32> {
    let points = curve.points();
    let n = points.len();
    if n < 2 {
        return None;
    }

    let n_f = n as f32;
    let mean_x = points.iter().map(|p| p.age_weeks as f32).sum::<f32>() / n_f;
    let mean_y = points.iter().map(|p| p.point).sum::<f32>() / n_f;

    let mut covariance = 0.0_f32;
    let mut variance = 0.0_f32;
    for p in points {
        let dx = p.age_weeks as f32 - mean_x;
        covariance += dx * (p.point - mean_y);
        variance += dx * dx;
    }
    if variance == 0.0 {
        return None;
    }
    Some(covariance / variance)
}

/// First local growth rate outside `[rate_min, rate_max]`, as
/// (age at the start of the offending step, rate in lbs/week).
fn first_unrealistic_rate(
    curve: &AdjustedCurve,
    thresholds: &AnomalyThresholds,
) -> Option<(u32, f32)> {
    curve.points().windows(2).find_map(|pair| {
        let dt = (pair[1].age_weeks - pair[0].age_weeks) as f32;
        if dt == 0.0 {
            return None;
        }
        let rate = (pair[1].point - pair[0].point) / dt;
        if rate < thresholds.rate_min || rate > thresholds.rate_max {
            Some((pair[0].age_weeks, rate))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AdjustedPoint;

    fn curve_from_points(points: &[(u32, f32)]) -> AdjustedCurve {
        AdjustedCurve::new(
            points
                .iter()
                .map(|&(age_weeks, point)| AdjustedPoint {
                    age_weeks,
                    point,
                    low: point * 0.9,
                    high: point * 1.1,
                })
                .collect(),
        )
    }

    fn thresholds() -> AnomalyThresholds {
        AnomalyThresholds::default()
    }

    #[test]
    fn increasing_curve_with_plausible_factor_is_clean() {
        let curve = curve_from_points(&[(0, 2.0), (10, 20.0), (20, 38.0), (30, 55.0)]);
        let warnings = check_curve(&curve, 1.0625, &thresholds());
        assert!(warnings.is_empty());
    }

    #[test]
    fn decreasing_curve_fires_negative_trend() {
        let curve = curve_from_points(&[(0, 50.0), (10, 45.0), (20, 40.0), (30, 35.0)]);
        let warnings = check_curve(&curve, 1.0, &thresholds());
        assert!(warnings.contains(crate::types::WarningKind::NegativeTrend));
    }

    #[test]
    fn factor_outside_band_fires_discrepancy() {
        let curve = curve_from_points(&[(0, 2.0), (10, 20.0), (20, 38.0)]);
        for factor in [2.5, 0.4] {
            let warnings = check_curve(&curve, factor, &thresholds());
            assert!(
                warnings.contains(crate::types::WarningKind::WeightDiscrepancy),
                "factor {factor} should fire"
            );
        }
        // boundary values do not fire
        for factor in [0.5, 1.5] {
            let warnings = check_curve(&curve, factor, &thresholds());
            assert!(!warnings.contains(crate::types::WarningKind::WeightDiscrepancy));
        }
    }

    #[test]
    fn steep_step_fires_unrealistic_rate() {
        // 30 lbs gained in 2 weeks = 15 lbs/week
        let curve = curve_from_points(&[(0, 5.0), (2, 35.0), (4, 40.0)]);
        let warnings = check_curve(&curve, 1.0, &thresholds());
        assert!(warnings.contains(crate::types::WarningKind::UnrealisticRate));
    }

    #[test]
    fn shallow_decline_fires_rate_not_required() {
        // -0.5 lbs/week is within [-1, 10]
        let curve = curve_from_points(&[(0, 40.0), (10, 35.0), (20, 30.0)]);
        let warnings = check_curve(&curve, 1.0, &thresholds());
        assert!(!warnings.contains(crate::types::WarningKind::UnrealisticRate));
        // but the overall trend is still negative
        assert!(warnings.contains(crate::types::WarningKind::NegativeTrend));
    }

    #[test]
    fn checks_are_independent() {
        // Increasing, realistic curve; only the factor changes.
        let curve = curve_from_points(&[(0, 2.0), (10, 20.0), (20, 38.0), (30, 55.0)]);

        let with_discrepancy = check_curve(&curve, 2.0, &thresholds());
        let without = check_curve(&curve, 1.0, &thresholds());

        assert!(with_discrepancy.contains(crate::types::WarningKind::WeightDiscrepancy));
        assert!(!without.contains(crate::types::WarningKind::WeightDiscrepancy));

        // Forcing the discrepancy changed nothing else.
        for set in [&with_discrepancy, &without] {
            assert!(!set.contains(crate::types::WarningKind::NegativeTrend));
            assert!(!set.contains(crate::types::WarningKind::UnrealisticRate));
        }
    }

    #[test]
    fn single_row_curve_skips_slope_and_rate() {
        let curve = curve_from_points(&[(5, 10.0)]);
        let warnings = check_curve(&curve, 1.0, &thresholds());
        assert!(warnings.is_empty());
    }

    #[test]
    fn ols_slope_matches_hand_computation() {
        // y = 2x + 1 exactly
        let curve = curve_from_points(&[(0, 1.0), (1, 3.0), (2, 5.0), (3, 7.0)]);
        let slope = ols_slope(&curve).unwrap();
        assert!((slope - 2.0).abs() < 1e-6);
    }
}

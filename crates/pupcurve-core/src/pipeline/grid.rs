//! Trajectory builder: covariate grid construction.

use crate::config::GridPolicy;
use crate::types::{CovariateGrid, ValidQuery};

/// Build the covariate grid for a validated query under the deployment's
/// grid policy. Always succeeds: the grid spans `0..=upper` with every
/// integer age, carrying the query's fixed breed/sex.
pub fn build_grid(query: &ValidQuery, policy: GridPolicy) -> CovariateGrid {
    let upper = policy.upper_weeks(query.age_weeks);
    CovariateGrid::from_upper(query.breed.clone(), query.sex, upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sex;

    fn query(age_weeks: u32) -> ValidQuery {
        ValidQuery {
            breed: "Beagle".to_string(),
            sex: Sex::Female,
            age_weeks,
            current_weight_lbs: 20.0,
            breed_is_known: true,
        }
    }

    #[test]
    fn fixed_policy_ignores_current_age() {
        let grid = build_grid(&query(250), GridPolicy::Fixed { upper_weeks: 100 });
        assert_eq!(grid.upper_weeks(), 100);
        assert_eq!(grid.len(), 101);
    }

    #[test]
    fn adaptive_policy_keeps_current_age_on_grid() {
        let grid = build_grid(&query(250), GridPolicy::Adaptive);
        assert_eq!(grid.upper_weeks(), 300);
        assert!(grid.index_of_age(250).is_some());
    }

    #[test]
    fn grid_carries_query_covariates() {
        let grid = build_grid(&query(10), GridPolicy::default());
        assert_eq!(grid.breed, "Beagle");
        assert_eq!(grid.sex, Sex::Female);
    }
}

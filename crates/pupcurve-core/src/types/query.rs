//! Prediction request and its validation.
//!
//! A [`Query`] is the immutable per-request input to the pipeline. There is
//! no hidden "current dog" state anywhere: validation is one explicit call
//! producing a [`ValidQuery`], and everything downstream takes that value.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::types::BreedRegistry;

/// Dog sex covariate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// How the current age was supplied.
///
/// The interactive surface offers two input modes; both resolve to whole
/// weeks before the pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeInput {
    /// Direct entry in weeks (the "slider" mode).
    Weeks(u32),
    /// Derive age as elapsed whole weeks between this date and today.
    Birthdate(NaiveDate),
}

/// Raw prediction request as received from the surface.
///
/// # Example
///
/// ```
/// use pupcurve_core::types::{AgeInput, BreedRegistry, Query, Sex};
///
/// let query = Query {
///     breed: "Beagle".to_string(),
///     sex: Sex::Female,
///     age: AgeInput::Weeks(40),
///     current_weight_lbs: 19.5,
/// };
/// let valid = query.validate(&BreedRegistry::new(), false).unwrap();
/// assert_eq!(valid.age_weeks, 40);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub breed: String,
    pub sex: Sex,
    pub age: AgeInput,
    pub current_weight_lbs: f32,
}

impl Query {
    /// Validate against today's date.
    pub fn validate(
        &self,
        registry: &BreedRegistry,
        allow_unseen_breeds: bool,
    ) -> Result<ValidQuery, QueryError> {
        self.validate_at(registry, allow_unseen_breeds, chrono::Utc::now().date_naive())
    }

    /// Validate with an explicit "today", resolving birthdate input to
    /// whole weeks. Split out so age resolution stays testable.
    pub fn validate_at(
        &self,
        registry: &BreedRegistry,
        allow_unseen_breeds: bool,
        today: NaiveDate,
    ) -> Result<ValidQuery, QueryError> {
        let breed = self.breed.trim();
        if breed.is_empty() {
            return Err(QueryError::EmptyBreed);
        }
        if !registry.is_known(breed) && !allow_unseen_breeds {
            return Err(QueryError::UnknownBreed {
                breed: breed.to_string(),
            });
        }

        if !(self.current_weight_lbs > 0.0) || !self.current_weight_lbs.is_finite() {
            return Err(QueryError::NonPositiveWeight {
                weight_lbs: self.current_weight_lbs,
            });
        }

        let age_weeks = match self.age {
            AgeInput::Weeks(weeks) => weeks,
            AgeInput::Birthdate(birthdate) => {
                let days = (today - birthdate).num_days();
                if days < 0 {
                    return Err(QueryError::AgeInFuture { birthdate });
                }
                (days / 7) as u32
            }
        };
        if age_weeks < 1 {
            return Err(QueryError::AgeTooYoung { age_weeks });
        }

        Ok(ValidQuery {
            breed: breed.to_string(),
            sex: self.sex,
            age_weeks,
            current_weight_lbs: self.current_weight_lbs,
            breed_is_known: registry.is_known(breed),
        })
    }
}

/// A query that passed validation, with the age resolved to weeks.
///
/// Only this type is accepted by the pipeline stages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidQuery {
    pub breed: String,
    pub sex: Sex,
    pub age_weeks: u32,
    pub current_weight_lbs: f32,
    /// False when the breed is an unseen level the config let through.
    pub breed_is_known: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> BreedRegistry {
        BreedRegistry::new()
    }

    fn base_query() -> Query {
        Query {
            breed: "Labrador Retriever".to_string(),
            sex: Sex::Male,
            age: AgeInput::Weeks(60),
            current_weight_lbs: 85.0,
        }
    }

    #[test]
    fn valid_query_passes() {
        let valid = base_query().validate(&registry(), false).unwrap();
        assert_eq!(valid.age_weeks, 60);
        assert!(valid.breed_is_known);
    }

    #[test]
    fn zero_weight_rejected() {
        let mut query = base_query();
        query.current_weight_lbs = 0.0;
        assert_eq!(
            query.validate(&registry(), false),
            Err(QueryError::NonPositiveWeight { weight_lbs: 0.0 })
        );
    }

    #[test]
    fn nan_weight_rejected() {
        let mut query = base_query();
        query.current_weight_lbs = f32::NAN;
        assert!(matches!(
            query.validate(&registry(), false),
            Err(QueryError::NonPositiveWeight { .. })
        ));
    }

    #[test]
    fn age_below_one_week_rejected() {
        let mut query = base_query();
        query.age = AgeInput::Weeks(0);
        assert_eq!(
            query.validate(&registry(), false),
            Err(QueryError::AgeTooYoung { age_weeks: 0 })
        );
    }

    #[test]
    fn birthdate_resolves_to_whole_weeks() {
        let mut query = base_query();
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        // 100 days ago = 14 whole weeks
        query.age = AgeInput::Birthdate(today - chrono::Duration::days(100));
        let valid = query.validate_at(&registry(), false, today).unwrap();
        assert_eq!(valid.age_weeks, 14);
    }

    #[test]
    fn future_birthdate_rejected() {
        let mut query = base_query();
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let future = today + chrono::Duration::days(1);
        query.age = AgeInput::Birthdate(future);
        assert_eq!(
            query.validate_at(&registry(), false, today),
            Err(QueryError::AgeInFuture { birthdate: future })
        );
    }

    #[test]
    fn unseen_breed_gated_by_flag() {
        let mut query = base_query();
        query.breed = "Direwolf".to_string();

        assert!(matches!(
            query.validate(&registry(), false),
            Err(QueryError::UnknownBreed { .. })
        ));

        let valid = query.validate(&registry(), true).unwrap();
        assert!(!valid.breed_is_known);
    }

    #[test]
    fn empty_breed_rejected() {
        let mut query = base_query();
        query.breed = "   ".to_string();
        assert_eq!(
            query.validate(&registry(), false),
            Err(QueryError::EmptyBreed)
        );
    }
}

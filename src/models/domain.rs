use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use validator::{Validate, ValidationError};

use crate::models::explanation::Dimension;
use crate::models::vocabulary::{CommunicationStyle, CoreValue, FamilyGoal, Timeline};

/// Lowest and highest importance rating a value dimension accepts
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Participant profile as handed over by the collection flow
///
/// Profiles are immutable once built: a revision produces a new `Profile`.
/// Ordered collections keep every score computation deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    #[validate(custom(function = "validate_ratings"))]
    pub values: BTreeMap<CoreValue, u8>,
    pub communication_style: CommunicationStyle,
    #[serde(default)]
    pub family_goals: BTreeSet<FamilyGoal>,
    pub timeline: Timeline,
}

fn validate_ratings(values: &BTreeMap<CoreValue, u8>) -> Result<(), ValidationError> {
    if values
        .values()
        .all(|rating| (MIN_RATING..=MAX_RATING).contains(rating))
    {
        Ok(())
    } else {
        let mut err = ValidationError::new("rating_out_of_range");
        err.message = Some("value ratings must be between 1 and 5".into());
        Err(err)
    }
}

/// Pairwise compatibility result
///
/// All scores are in [0.0, 1.0] and rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityScore {
    pub subject_id: String,
    pub candidate_id: String,
    pub overall_score: f64,
    pub values_score: f64,
    pub goals_score: f64,
    pub communication_score: f64,
    pub timeline_score: f64,
    pub explanation_summary: String,
}

impl CompatibilityScore {
    /// Sub-score for a single dimension
    pub fn dimension_score(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Values => self.values_score,
            Dimension::Goals => self.goals_score,
            Dimension::Communication => self.communication_score,
            Dimension::Timeline => self.timeline_score,
        }
    }

    /// Overall score as a whole percentage, truncated
    pub fn percent(&self) -> u8 {
        (self.overall_score * 100.0).clamp(0.0, 100.0) as u8
    }
}

/// Round to two decimal places, half away from zero
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

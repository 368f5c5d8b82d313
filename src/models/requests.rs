use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CompatibilityScore, Profile};

/// Request to score a single pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(nested)]
    pub subject: Profile,
    #[validate(nested)]
    pub candidate: Profile,
}

/// Request to rank candidates for a subject
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TopMatchesRequest {
    #[validate(nested)]
    pub subject: Profile,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<Profile>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to summarize a batch of scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub scores: Vec<CompatibilityScore>,
}

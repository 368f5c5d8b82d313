// Model exports
pub mod domain;
pub mod explanation;
pub mod requests;
pub mod responses;
pub mod vocabulary;

pub use domain::{round2, CompatibilityScore, Profile, MAX_RATING, MIN_RATING};
pub use explanation::{
    Assessment, AssessmentTier, Dimension, DimensionBreakdown, Explanation, InterpretationLevel,
    MatchSummary,
};
pub use requests::{ScoreRequest, SummaryRequest, TopMatchesRequest};
pub use responses::{ErrorResponse, HealthResponse, TopMatchesResponse};
pub use vocabulary::{CommunicationStyle, CoreValue, FamilyGoal, Timeline};

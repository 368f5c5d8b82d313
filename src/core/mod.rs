// Core algorithm exports
pub mod compatibility;
pub mod engine;
pub mod error;
pub mod explain;
pub mod weights;

pub use compatibility::{communication_score, goals_score, timeline_score, values_score};
pub use engine::{summary_sentence, CompatibilityEngine};
pub use error::CompatibilityError;
pub use explain::ExplainabilityEngine;
pub use weights::ScoringWeights;

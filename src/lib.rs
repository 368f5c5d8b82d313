//! Kindred Match - explainable compatibility scoring for family planning partnerships
//!
//! This library scores two profiles across values, family goals,
//! communication style and timeline, ranks candidates, and turns the numbers
//! into a narrative users can act on.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CompatibilityEngine, CompatibilityError, ExplainabilityEngine, ScoringWeights};
pub use crate::models::{CompatibilityScore, Explanation, MatchSummary, Profile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let engine = CompatibilityEngine::default();
        assert_eq!(*engine.weights(), ScoringWeights::STANDARD);
    }
}

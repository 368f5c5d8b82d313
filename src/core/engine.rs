use crate::core::compatibility::{communication_score, goals_score, timeline_score, values_score};
use crate::core::error::CompatibilityError;
use crate::core::weights::ScoringWeights;
use crate::models::{round2, CompatibilityScore, Dimension, Profile};

/// Compatibility calculator and ranker
///
/// Scoring is a pure function of the two profiles. The engine holds no
/// mutable state, so one instance can be shared freely across workers.
#[derive(Debug, Clone, Default)]
pub struct CompatibilityEngine {
    weights: ScoringWeights,
}

impl CompatibilityEngine {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::STANDARD,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a candidate against a subject
    ///
    /// Sub-scores are combined unrounded, then every figure is rounded to
    /// two decimals. Swapping the arguments yields the same numbers.
    pub fn score(&self, subject: &Profile, candidate: &Profile) -> CompatibilityScore {
        let values = values_score(&subject.values, &candidate.values);
        let goals = goals_score(&subject.family_goals, &candidate.family_goals);
        let communication =
            communication_score(&subject.communication_style, &candidate.communication_style);
        let timeline = timeline_score(&subject.timeline, &candidate.timeline);

        let overall = self.weights.combine(values, goals, communication, timeline);

        CompatibilityScore {
            subject_id: subject.id.clone(),
            candidate_id: candidate.id.clone(),
            overall_score: round2(overall.clamp(0.0, 1.0)),
            values_score: round2(values),
            goals_score: round2(goals),
            communication_score: round2(communication),
            timeline_score: round2(timeline),
            explanation_summary: summary_sentence(values, goals, communication, timeline),
        }
    }

    /// Rank candidates by overall score, best first
    ///
    /// Candidates sharing the subject's id are skipped. Ties keep the
    /// candidates' input order.
    pub fn top_matches(
        &self,
        subject: &Profile,
        candidates: &[Profile],
        n: usize,
    ) -> Result<Vec<CompatibilityScore>, CompatibilityError> {
        if n == 0 {
            return Err(CompatibilityError::InvalidLimit(n));
        }

        let mut scores: Vec<CompatibilityScore> = candidates
            .iter()
            .filter(|candidate| candidate.id != subject.id)
            .map(|candidate| self.score(subject, candidate))
            .collect();

        let eligible = scores.len();

        // sort_by is stable, so equal scores keep input order
        scores.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));
        scores.truncate(n);

        tracing::debug!(
            "Ranked {} eligible candidates for {}, returning {}",
            eligible,
            subject.id,
            scores.len()
        );

        Ok(scores)
    }
}

/// One canned phrase per dimension: (strong, moderate, weak)
fn summary_phrases(dimension: Dimension) -> (&'static str, &'static str, &'static str) {
    match dimension {
        Dimension::Values => (
            "Strong alignment on core values",
            "Moderate values compatibility",
            "Different value priorities",
        ),
        Dimension::Goals => (
            "highly compatible family goals",
            "some shared family aspirations",
            "different family planning approaches",
        ),
        Dimension::Communication => (
            "complementary communication styles",
            "workable communication differences",
            "potentially challenging communication dynamics",
        ),
        Dimension::Timeline => (
            "aligned timing preferences",
            "workable timeline differences",
            "different timeline expectations",
        ),
    }
}

/// Build the one-sentence summary stored on a score
pub fn summary_sentence(values: f64, goals: f64, communication: f64, timeline: f64) -> String {
    let scores = [values, goals, communication, timeline];
    let phrases: Vec<&str> = Dimension::ALL
        .iter()
        .zip(scores)
        .map(|(dimension, score)| {
            let (strong, moderate, weak) = summary_phrases(*dimension);
            if score >= 0.7 {
                strong
            } else if score >= 0.5 {
                moderate
            } else {
                weak
            }
        })
        .collect();

    format!("{}.", phrases.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommunicationStyle, CoreValue, FamilyGoal, Timeline};

    fn create_profile(id: &str, style: &str, timeline: &str) -> Profile {
        Profile {
            id: id.to_string(),
            name: format!("User {}", id),
            age: 30,
            location: "Seattle, WA".to_string(),
            values: [(CoreValue::FamilyFirst, 5), (CoreValue::CareerBalance, 4)]
                .into_iter()
                .collect(),
            communication_style: CommunicationStyle::from(style),
            family_goals: [FamilyGoal::BiologicalChildren].into_iter().collect(),
            timeline: Timeline::from(timeline),
        }
    }

    #[test]
    fn test_score_identical_profiles() {
        let engine = CompatibilityEngine::new();
        let a = create_profile("a", "direct_honest", "1_to_3_years");

        let score = engine.score(&a, &a);

        assert_eq!(score.values_score, 1.0);
        assert_eq!(score.goals_score, 1.0);
        assert_eq!(score.communication_score, 1.0);
        assert_eq!(score.timeline_score, 1.0);
        assert_eq!(score.overall_score, 1.0);
        assert_eq!(
            score.explanation_summary,
            "Strong alignment on core values; highly compatible family goals; \
             complementary communication styles; aligned timing preferences."
        );
    }

    #[test]
    fn test_score_is_weighted_combination() {
        let engine = CompatibilityEngine::new();
        let a = create_profile("a", "direct_honest", "within_1_year");
        let mut b = create_profile("b", "emotional_expressive", "5_plus_years");
        b.family_goals = [FamilyGoal::Adoption].into_iter().collect();

        let score = engine.score(&a, &b);

        assert_eq!(score.values_score, 1.0);
        assert_eq!(score.goals_score, 0.0);
        assert_eq!(score.communication_score, 0.4);
        assert_eq!(score.timeline_score, 0.2);
        // 0.35 + 0 + 0.08 + 0.03
        assert_eq!(score.overall_score, 0.46);
        assert_eq!(
            score.explanation_summary,
            "Strong alignment on core values; different family planning approaches; \
             potentially challenging communication dynamics; different timeline expectations."
        );
    }

    #[test]
    fn test_top_matches_excludes_self_and_sorts() {
        let engine = CompatibilityEngine::new();
        let subject = create_profile("me", "direct_honest", "1_to_3_years");

        let candidates = vec![
            create_profile("far", "emotional_expressive", "5_plus_years"),
            create_profile("me", "direct_honest", "1_to_3_years"),
            create_profile("close", "direct_honest", "1_to_3_years"),
            create_profile("mid", "analytical_logical", "3_to_5_years"),
        ];

        let matches = engine.top_matches(&subject, &candidates, 10).unwrap();

        assert_eq!(matches.len(), 3);
        assert!(matches.iter().all(|m| m.candidate_id != "me"));
        assert_eq!(matches[0].candidate_id, "close");
        assert_eq!(matches[2].candidate_id, "far");
    }

    #[test]
    fn test_top_matches_respects_limit() {
        let engine = CompatibilityEngine::new();
        let subject = create_profile("me", "direct_honest", "1_to_3_years");
        let candidates: Vec<Profile> = (0..10)
            .map(|i| create_profile(&i.to_string(), "gentle_supportive", "3_to_5_years"))
            .collect();

        let matches = engine.top_matches(&subject, &candidates, 3).unwrap();
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_top_matches_ties_keep_input_order() {
        let engine = CompatibilityEngine::new();
        let subject = create_profile("me", "direct_honest", "1_to_3_years");
        let candidates: Vec<Profile> = ["x", "y", "z"]
            .iter()
            .map(|id| create_profile(id, "gentle_supportive", "3_to_5_years"))
            .collect();

        let matches = engine.top_matches(&subject, &candidates, 3).unwrap();
        let ids: Vec<&str> = matches.iter().map(|m| m.candidate_id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_top_matches_zero_limit_rejected() {
        let engine = CompatibilityEngine::new();
        let subject = create_profile("me", "direct_honest", "1_to_3_years");

        let result = engine.top_matches(&subject, &[], 0);
        assert_eq!(result, Err(CompatibilityError::InvalidLimit(0)));
    }

    #[test]
    fn test_summary_sentence_moderate_tier() {
        assert_eq!(
            summary_sentence(0.5, 0.6, 0.69, 0.5),
            "Moderate values compatibility; some shared family aspirations; \
             workable communication differences; workable timeline differences."
        );
    }
}

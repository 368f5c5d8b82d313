use crate::core::error::CompatibilityError;
use crate::models::{
    round2, Assessment, AssessmentTier, CompatibilityScore, Dimension, DimensionBreakdown,
    Explanation, InterpretationLevel, MatchSummary,
};

/// Sub-score at or above which a dimension counts as a strength
pub const STRENGTH_THRESHOLD: f64 = 0.7;
/// Sub-score below which a dimension needs discussion
pub const CONSIDERATION_THRESHOLD: f64 = 0.5;

const NO_MATCHES_MESSAGE: &str = "No matches found. Consider expanding your criteria.";

/// Turns numeric scores into the narrative shown to users
///
/// All text comes from fixed tables keyed by enums, so the output for a
/// given score is fully reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplainabilityEngine;

impl ExplainabilityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build the structured explanation for one score
    pub fn explain(&self, score: &CompatibilityScore) -> Result<Explanation, CompatibilityError> {
        check_score(score)?;

        Ok(Explanation {
            overall_assessment: assess(score.overall_score),
            strengths: strengths(score),
            considerations: considerations(score),
            detailed_breakdown: breakdown(score),
            next_steps: next_steps(score),
        })
    }

    /// Summarize a batch of scores for a dashboard
    pub fn summarize(&self, scores: &[CompatibilityScore]) -> Result<MatchSummary, CompatibilityError> {
        if scores.is_empty() {
            return Ok(MatchSummary::Empty {
                message: NO_MATCHES_MESSAGE.to_string(),
            });
        }

        for score in scores {
            check_score(score)?;
        }

        let total: f64 = scores.iter().map(|s| s.overall_score).sum();
        let average = total / scores.len() as f64;
        let best = scores
            .iter()
            .map(|s| s.overall_score)
            .fold(f64::MIN, f64::max);

        let recommendation = if best >= 0.8 {
            "You have some excellent potential matches!"
        } else if best >= 0.6 {
            "You have several promising connections to explore."
        } else {
            "Consider expanding your search criteria or location range."
        };

        Ok(MatchSummary::Ranked {
            total_matches: scores.len(),
            average_compatibility: round2(average),
            best_match_score: round2(best),
            recommendation: recommendation.to_string(),
        })
    }
}

/// Reject scores that could not have come from the engine
fn check_score(score: &CompatibilityScore) -> Result<(), CompatibilityError> {
    let fields = [
        ("overallScore", score.overall_score),
        ("valuesScore", score.values_score),
        ("goalsScore", score.goals_score),
        ("communicationScore", score.communication_score),
        ("timelineScore", score.timeline_score),
    ];

    for (field, value) in fields {
        if !(0.0..=1.0).contains(&value) {
            return Err(CompatibilityError::ScoreOutOfRange { field, value });
        }
    }

    Ok(())
}

fn assess(overall: f64) -> Assessment {
    let tier = if overall >= 0.8 {
        AssessmentTier::Excellent
    } else if overall >= 0.65 {
        AssessmentTier::Good
    } else if overall >= 0.5 {
        AssessmentTier::Moderate
    } else {
        AssessmentTier::Lower
    };

    let description = match tier {
        AssessmentTier::Excellent => {
            "Excellent compatibility - This match shows strong potential for a successful family partnership."
        }
        AssessmentTier::Good => {
            "Good compatibility - This match shares important foundations with some areas to explore."
        }
        AssessmentTier::Moderate => {
            "Moderate compatibility - There are both shared elements and differences to consider."
        }
        AssessmentTier::Lower => {
            "Lower compatibility - Significant differences may require careful consideration."
        }
    };

    Assessment {
        tier,
        description: description.to_string(),
    }
}

fn strength_statement(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Values => "Strong alignment on core life values",
        Dimension::Goals => "Shared vision for family structure and goals",
        Dimension::Communication => "Compatible communication and conflict resolution styles",
        Dimension::Timeline => "Aligned timeline for family planning",
    }
}

fn relative_strength_statement(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Values => "Some shared core values",
        Dimension::Goals => "Some compatible family goals",
        Dimension::Communication => "Workable communication styles",
        Dimension::Timeline => "Flexible timing compatibility",
    }
}

fn consideration_statement(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Values => "Different core values may require open discussion about priorities",
        Dimension::Goals => "Different family goals would benefit from detailed exploration",
        Dimension::Communication => {
            "Communication style differences may need intentional bridge-building"
        }
        Dimension::Timeline => {
            "Timeline misalignment requires honest conversation about expectations"
        }
    }
}

fn interpretation(dimension: Dimension, level: InterpretationLevel) -> &'static str {
    use InterpretationLevel::{High, Low, Medium};

    match (dimension, level) {
        (Dimension::Values, High) => "You both prioritize similar life values and principles",
        (Dimension::Values, Medium) => {
            "You share some core values with room for complementary differences"
        }
        (Dimension::Values, Low) => {
            "Your value systems have notable differences that merit discussion"
        }
        (Dimension::Goals, High) => "Your family planning goals are highly aligned",
        (Dimension::Goals, Medium) => {
            "You have overlapping family goals with some unique elements"
        }
        (Dimension::Goals, Low) => "Your family planning approaches differ significantly",
        (Dimension::Communication, High) => {
            "Your communication styles complement each other well"
        }
        (Dimension::Communication, Medium) => {
            "Your communication approaches can work together with some adaptation"
        }
        (Dimension::Communication, Low) => {
            "Your communication styles may require extra effort to bridge"
        }
        (Dimension::Timeline, High) => "Your family planning timelines align well",
        (Dimension::Timeline, Medium) => {
            "Your timelines are compatible with some flexibility needed"
        }
        (Dimension::Timeline, Low) => "Your preferred timelines have significant differences",
    }
}

fn strengths(score: &CompatibilityScore) -> Vec<String> {
    let strong: Vec<String> = Dimension::ALL
        .iter()
        .filter(|d| score.dimension_score(**d) >= STRENGTH_THRESHOLD)
        .map(|d| strength_statement(*d).to_string())
        .collect();

    if !strong.is_empty() {
        return strong;
    }

    // Strictly greater keeps the earlier dimension on ties
    let mut best = Dimension::Values;
    for dimension in Dimension::ALL {
        if score.dimension_score(dimension) > score.dimension_score(best) {
            best = dimension;
        }
    }

    if score.dimension_score(best) >= CONSIDERATION_THRESHOLD {
        vec![relative_strength_statement(best).to_string()]
    } else {
        vec![]
    }
}

fn considerations(score: &CompatibilityScore) -> Vec<String> {
    Dimension::ALL
        .iter()
        .filter(|d| score.dimension_score(**d) < CONSIDERATION_THRESHOLD)
        .map(|d| consideration_statement(*d).to_string())
        .collect()
}

fn level_for(score: f64) -> InterpretationLevel {
    if score >= 0.7 {
        InterpretationLevel::High
    } else if score >= 0.5 {
        InterpretationLevel::Medium
    } else {
        InterpretationLevel::Low
    }
}

fn breakdown(score: &CompatibilityScore) -> Vec<DimensionBreakdown> {
    Dimension::ALL
        .iter()
        .map(|dimension| {
            let value = score.dimension_score(*dimension);
            let level = level_for(value);
            DimensionBreakdown {
                dimension: *dimension,
                score: value,
                level,
                interpretation: interpretation(*dimension, level).to_string(),
            }
        })
        .collect()
}

fn next_steps(score: &CompatibilityScore) -> Vec<String> {
    let tier_steps: [&str; 3] = if score.overall_score >= 0.7 {
        [
            "Schedule a video call to explore your connection further",
            "Discuss your family planning timeline in detail",
            "Share more about your personal backgrounds and experiences",
        ]
    } else if score.overall_score >= 0.5 {
        [
            "Have an honest conversation about your differences",
            "Explore areas of alignment more deeply",
            "Consider whether differences are complementary or conflicting",
        ]
    } else {
        [
            "Reflect on whether differences can be bridged",
            "Focus on finding common ground if you choose to connect",
            "Consider whether this match aligns with your priorities",
        ]
    };

    let mut steps: Vec<String> = tier_steps.iter().map(|s| s.to_string()).collect();

    if score.values_score < CONSIDERATION_THRESHOLD {
        steps.push("Discuss core values and life priorities in depth".to_string());
    }

    if score.communication_score < CONSIDERATION_THRESHOLD {
        steps.push("Explore how you each handle conflict and make decisions".to_string());
    }

    steps
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compatibility dimensions scored by the engine
///
/// Declaration order doubles as the tie-break priority when picking a
/// single strongest dimension. Serialized names follow the breakdown keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "values_compatibility")]
    Values,
    #[serde(rename = "family_goals_alignment")]
    Goals,
    #[serde(rename = "communication_compatibility")]
    Communication,
    #[serde(rename = "timeline_alignment")]
    Timeline,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Values,
        Dimension::Goals,
        Dimension::Communication,
        Dimension::Timeline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Values => "values",
            Dimension::Goals => "goals",
            Dimension::Communication => "communication",
            Dimension::Timeline => "timeline",
        }
    }
}

/// Overall assessment tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentTier {
    Excellent,
    Good,
    Moderate,
    Lower,
}

/// Qualitative level of a single dimension score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpretationLevel {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub tier: AssessmentTier,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionBreakdown {
    pub dimension: Dimension,
    pub score: f64,
    pub level: InterpretationLevel,
    pub interpretation: String,
}

/// Structured narrative for one compatibility score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub overall_assessment: Assessment,
    pub strengths: Vec<String>,
    pub considerations: Vec<String>,
    pub detailed_breakdown: Vec<DimensionBreakdown>,
    pub next_steps: Vec<String>,
}

/// Renders the chat-style text the conversational layer sends back
impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Overall Assessment: {}", self.overall_assessment.description)?;

        if !self.strengths.is_empty() {
            f.write_str("\n\nStrengths:")?;
            for strength in &self.strengths {
                write!(f, "\n• {}", strength)?;
            }
        }

        if !self.considerations.is_empty() {
            f.write_str("\n\nThings to Consider:")?;
            for consideration in &self.considerations {
                write!(f, "\n• {}", consideration)?;
            }
        }

        Ok(())
    }
}

/// Dashboard summary over a batch of scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchSummary {
    #[serde(rename_all = "camelCase")]
    Ranked {
        total_matches: usize,
        average_compatibility: f64,
        best_match_score: f64,
        recommendation: String,
    },
    Empty {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explanation(strengths: &[&str], considerations: &[&str]) -> Explanation {
        Explanation {
            overall_assessment: Assessment {
                tier: AssessmentTier::Good,
                description: "Good compatibility".to_string(),
            },
            strengths: strengths.iter().map(|s| s.to_string()).collect(),
            considerations: considerations.iter().map(|s| s.to_string()).collect(),
            detailed_breakdown: vec![],
            next_steps: vec![],
        }
    }

    #[test]
    fn test_display_with_both_sections() {
        let text = explanation(&["Shared goals"], &["Timeline gap"]).to_string();
        assert_eq!(
            text,
            "Overall Assessment: Good compatibility\n\nStrengths:\n• Shared goals\n\nThings to Consider:\n• Timeline gap"
        );
    }

    #[test]
    fn test_display_omits_empty_sections() {
        let text = explanation(&[], &[]).to_string();
        assert_eq!(text, "Overall Assessment: Good compatibility");
    }

    #[test]
    fn test_dimension_serializes_as_breakdown_key() {
        let json = serde_json::to_string(&Dimension::Goals).unwrap();
        assert_eq!(json, "\"family_goals_alignment\"");
    }

    #[test]
    fn test_summary_shapes() {
        let empty = MatchSummary::Empty {
            message: "none".to_string(),
        };
        assert_eq!(serde_json::to_value(&empty).unwrap(), serde_json::json!({"message": "none"}));

        let ranked = MatchSummary::Ranked {
            total_matches: 2,
            average_compatibility: 0.7,
            best_match_score: 0.8,
            recommendation: "go".to_string(),
        };
        let value = serde_json::to_value(&ranked).unwrap();
        assert_eq!(value["totalMatches"], 2);
        assert_eq!(value["bestMatchScore"], 0.8);
    }
}

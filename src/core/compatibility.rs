use std::collections::{BTreeMap, BTreeSet};

use crate::models::{CommunicationStyle, CoreValue, FamilyGoal, Timeline, MAX_RATING, MIN_RATING};

/// Neutral score when one side has no data for a dimension
pub const NEUTRAL_SCORE: f64 = 0.5;
/// Values score when both sides rated values but none overlap
pub const DISJOINT_VALUES_SCORE: f64 = 0.3;
/// Communication score for distinct styles outside the pair table
pub const DEFAULT_COMMUNICATION_SCORE: f64 = 0.4;
/// Timeline score when either side is flexible
pub const FLEXIBLE_TIMELINE_SCORE: f64 = 0.9;
/// Floor for maximally distant timelines
pub const MIN_TIMELINE_SCORE: f64 = 0.2;
/// Penalty per step of timeline distance
pub const TIMELINE_STEP_PENALTY: f64 = 0.3;

/// Symmetric table of distinct style pairs that work together
pub const COMPATIBLE_STYLE_PAIRS: [(CommunicationStyle, CommunicationStyle, f64); 5] = [
    (CommunicationStyle::DirectHonest, CommunicationStyle::AnalyticalLogical, 0.8),
    (CommunicationStyle::GentleSupportive, CommunicationStyle::EmotionalExpressive, 0.8),
    (CommunicationStyle::CollaborativeConsensus, CommunicationStyle::GentleSupportive, 0.7),
    (CommunicationStyle::DirectHonest, CommunicationStyle::CollaborativeConsensus, 0.6),
    (CommunicationStyle::AnalyticalLogical, CommunicationStyle::CollaborativeConsensus, 0.6),
];

/// Calculate values alignment (0-1)
///
/// Mean over the shared dimensions of `1 - |r1 - r2| / 4`. Ratings are
/// clamped into the 1-5 scale first so the result never leaves [0, 1].
pub fn values_score(a: &BTreeMap<CoreValue, u8>, b: &BTreeMap<CoreValue, u8>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return NEUTRAL_SCORE;
    }

    let max_diff = (MAX_RATING - MIN_RATING) as f64;
    let alignments: Vec<f64> = a
        .iter()
        .filter_map(|(key, rating_a)| {
            b.get(key).map(|rating_b| {
                let diff = (clamp_rating(*rating_a) - clamp_rating(*rating_b)).abs();
                1.0 - diff / max_diff
            })
        })
        .collect();

    if alignments.is_empty() {
        return DISJOINT_VALUES_SCORE;
    }

    alignments.iter().sum::<f64>() / alignments.len() as f64
}

#[inline]
fn clamp_rating(rating: u8) -> f64 {
    rating.clamp(MIN_RATING, MAX_RATING) as f64
}

/// Calculate family goals overlap (0-1) as the Jaccard index
pub fn goals_score(a: &BTreeSet<FamilyGoal>, b: &BTreeSet<FamilyGoal>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return NEUTRAL_SCORE;
    }

    let overlap = a.intersection(b).count();
    let total_unique = a.union(b).count();

    if total_unique == 0 {
        return NEUTRAL_SCORE;
    }

    overlap as f64 / total_unique as f64
}

/// Calculate communication style compatibility (0-1)
///
/// Identical recognized styles score 1.0, table pairs score their entry in
/// either order, everything else (unrecognized styles included) gets 0.4.
pub fn communication_score(a: &CommunicationStyle, b: &CommunicationStyle) -> f64 {
    if !a.is_recognized() || !b.is_recognized() {
        return DEFAULT_COMMUNICATION_SCORE;
    }

    if a == b {
        return 1.0;
    }

    COMPATIBLE_STYLE_PAIRS
        .iter()
        .find(|(x, y, _)| (x == a && y == b) || (x == b && y == a))
        .map(|(_, _, score)| *score)
        .unwrap_or(DEFAULT_COMMUNICATION_SCORE)
}

/// Calculate timeline alignment (0-1)
///
/// Unrecognized timelines score neutral before the flexible rule applies.
pub fn timeline_score(a: &Timeline, b: &Timeline) -> f64 {
    let (Some(idx_a), Some(idx_b)) = (a.position(), b.position()) else {
        return NEUTRAL_SCORE;
    };

    if *a == Timeline::FlexibleTiming || *b == Timeline::FlexibleTiming {
        return FLEXIBLE_TIMELINE_SCORE;
    }

    let diff = idx_a.abs_diff(idx_b) as f64;
    (1.0 - diff * TIMELINE_STEP_PENALTY).max(MIN_TIMELINE_SCORE)
}

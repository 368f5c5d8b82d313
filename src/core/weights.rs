/// Fixed weights combining the four sub-scores
///
/// Weights are held as whole percentage points so the sum can be checked
/// exactly at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    values: u32,
    goals: u32,
    communication: u32,
    timeline: u32,
}

impl ScoringWeights {
    /// values 35%, goals 30%, communication 20%, timeline 15%
    pub const STANDARD: ScoringWeights = ScoringWeights::from_percent(35, 30, 20, 15);

    const fn from_percent(values: u32, goals: u32, communication: u32, timeline: u32) -> Self {
        assert!(
            values + goals + communication + timeline == 100,
            "scoring weights must sum to 100%"
        );
        Self {
            values,
            goals,
            communication,
            timeline,
        }
    }

    pub fn values(&self) -> f64 {
        self.values as f64 / 100.0
    }

    pub fn goals(&self) -> f64 {
        self.goals as f64 / 100.0
    }

    pub fn communication(&self) -> f64 {
        self.communication as f64 / 100.0
    }

    pub fn timeline(&self) -> f64 {
        self.timeline as f64 / 100.0
    }

    /// Weighted linear combination of the four sub-scores
    #[inline]
    pub fn combine(&self, values: f64, goals: f64, communication: f64, timeline: f64) -> f64 {
        values * self.values()
            + goals * self.goals()
            + communication * self.communication()
            + timeline * self.timeline()
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.values(), 0.35);
        assert_eq!(weights.goals(), 0.30);
        assert_eq!(weights.communication(), 0.20);
        assert_eq!(weights.timeline(), 0.15);
    }

    #[test]
    fn test_combine_all_ones_is_one() {
        let total = ScoringWeights::STANDARD.combine(1.0, 1.0, 1.0, 1.0);
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_combine_all_zeros_is_zero() {
        assert_eq!(ScoringWeights::STANDARD.combine(0.0, 0.0, 0.0, 0.0), 0.0);
    }
}

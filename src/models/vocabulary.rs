use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a closed vocabulary of wire tags.
///
/// Every generated enum carries an `Unrecognized` variant so that unknown
/// tags survive deserialisation instead of failing the whole profile. The
/// scorer treats `Unrecognized` values with the documented fallbacks.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Tag outside the fixed vocabulary, kept verbatim.
            Unrecognized(String),
        }

        impl $name {
            /// Wire tags of the fixed vocabulary, in declaration order.
            pub const TAGS: &'static [&'static str] = &[$($tag),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $tag, )+
                    $name::Unrecognized(raw) => raw.as_str(),
                }
            }

            pub fn is_recognized(&self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }

            /// Position of the tag within the fixed vocabulary.
            pub fn position(&self) -> Option<usize> {
                if !self.is_recognized() {
                    return None;
                }
                Self::TAGS.iter().position(|tag| *tag == self.as_str())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                let known = match raw.as_str() {
                    $( $tag => Some($name::$variant), )+
                    _ => None,
                };
                match known {
                    Some(tag) => tag,
                    None => $name::Unrecognized(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(tag: $name) -> String {
                match tag {
                    $name::Unrecognized(raw) => raw,
                    other => other.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

vocabulary! {
    /// Life-priority dimensions rated 1-5 on a profile
    pub enum CoreValue {
        FamilyFirst => "family_first",
        CareerBalance => "career_balance",
        FinancialSecurity => "financial_security",
        EmotionalIntimacy => "emotional_intimacy",
        SharedParenting => "shared_parenting",
        PersonalGrowth => "personal_growth",
        CommunityInvolvement => "community_involvement",
        SpiritualConnection => "spiritual_connection",
    }
}

vocabulary! {
    /// Preferred communication approach
    pub enum CommunicationStyle {
        DirectHonest => "direct_honest",
        GentleSupportive => "gentle_supportive",
        AnalyticalLogical => "analytical_logical",
        EmotionalExpressive => "emotional_expressive",
        CollaborativeConsensus => "collaborative_consensus",
    }
}

vocabulary! {
    /// Family formation goals
    pub enum FamilyGoal {
        BiologicalChildren => "biological_children",
        Adoption => "adoption",
        BlendedFamily => "blended_family",
        SingleParentSupport => "single_parent_support",
        CoParenting => "co_parenting",
        ExtendedFamilyClose => "extended_family_close",
    }
}

vocabulary! {
    /// Timeline for starting a family.
    ///
    /// Declaration order is the timeline order; `FlexibleTiming` sits last
    /// and is special-cased by the scorer.
    pub enum Timeline {
        Within1Year => "within_1_year",
        OneToThreeYears => "1_to_3_years",
        ThreeToFiveYears => "3_to_5_years",
        FivePlusYears => "5_plus_years",
        FlexibleTiming => "flexible_timing",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_parse() {
        assert_eq!(CoreValue::from("family_first"), CoreValue::FamilyFirst);
        assert_eq!(Timeline::from("5_plus_years"), Timeline::FivePlusYears);
        assert_eq!(
            CommunicationStyle::from("collaborative_consensus"),
            CommunicationStyle::CollaborativeConsensus
        );
    }

    #[test]
    fn test_unknown_tag_is_kept_verbatim() {
        let style = CommunicationStyle::from("passive_aggressive");
        assert_eq!(style, CommunicationStyle::Unrecognized("passive_aggressive".to_string()));
        assert!(!style.is_recognized());
        assert_eq!(String::from(style), "passive_aggressive");
    }

    #[test]
    fn test_timeline_positions() {
        assert_eq!(Timeline::Within1Year.position(), Some(0));
        assert_eq!(Timeline::FivePlusYears.position(), Some(3));
        assert_eq!(Timeline::FlexibleTiming.position(), Some(4));
        assert_eq!(Timeline::from("someday").position(), None);
        // A hand-built Unrecognized never borrows a real slot
        assert_eq!(Timeline::Unrecognized("1_to_3_years".to_string()).position(), None);
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let json = serde_json::to_string(&FamilyGoal::CoParenting).unwrap();
        assert_eq!(json, "\"co_parenting\"");

        let goal: FamilyGoal = serde_json::from_str("\"fostering\"").unwrap();
        assert_eq!(goal, FamilyGoal::Unrecognized("fostering".to_string()));
    }

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(CoreValue::TAGS.len(), 8);
        assert_eq!(CommunicationStyle::TAGS.len(), 5);
        assert_eq!(FamilyGoal::TAGS.len(), 6);
        assert_eq!(Timeline::TAGS.len(), 5);
    }
}

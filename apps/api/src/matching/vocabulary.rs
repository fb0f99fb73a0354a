//! Closed vocabularies for skill levels and requirement priorities.
//!
//! Storage and the wire carry these as free-form strings. They are parsed into
//! [`ProficiencyLevel`] / [`Priority`] at the boundary; anything outside the
//! vocabulary is kept as [`Vocab::Unrecognized`] so the matcher can flag it
//! instead of silently defaulting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("unrecognized proficiency level '{0}'")]
    Level(String),

    #[error("unrecognized priority '{0}'")]
    Priority(String),
}

/// Ordinal skill strength shared by employee proficiency and project requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    pub fn rank(self) -> u8 {
        match self {
            ProficiencyLevel::Beginner => 1,
            ProficiencyLevel::Intermediate => 2,
            ProficiencyLevel::Advanced => 3,
            ProficiencyLevel::Expert => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "beginner",
            ProficiencyLevel::Intermediate => "intermediate",
            ProficiencyLevel::Advanced => "advanced",
            ProficiencyLevel::Expert => "expert",
        }
    }
}

impl FromStr for ProficiencyLevel {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(ProficiencyLevel::Beginner),
            "intermediate" => Ok(ProficiencyLevel::Intermediate),
            "advanced" => Ok(ProficiencyLevel::Advanced),
            "expert" => Ok(ProficiencyLevel::Expert),
            _ => Err(VocabularyError::Level(s.to_string())),
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much a project cares about one of its required skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Required,
    Preferred,
    NiceToHave,
}

impl Priority {
    pub fn weight(self) -> f64 {
        match self {
            Priority::Required => 3.0,
            Priority::Preferred => 2.0,
            Priority::NiceToHave => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Required => "required",
            Priority::Preferred => "preferred",
            Priority::NiceToHave => "nice_to_have",
        }
    }
}

impl FromStr for Priority {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "required" => Ok(Priority::Required),
            "preferred" => Ok(Priority::Preferred),
            "nice_to_have" => Ok(Priority::NiceToHave),
            _ => Err(VocabularyError::Priority(s.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vocabulary value as read from storage or the wire.
///
/// Serializes as the canonical lowercase spelling for known values and the raw
/// string otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vocab<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: Copy> Vocab<T> {
    pub fn known(&self) -> Option<T> {
        match self {
            Vocab::Known(v) => Some(*v),
            Vocab::Unrecognized(_) => None,
        }
    }
}

impl<T: FromStr> From<String> for Vocab<T> {
    fn from(raw: String) -> Self {
        match raw.parse::<T>() {
            Ok(v) => Vocab::Known(v),
            Err(_) => Vocab::Unrecognized(raw),
        }
    }
}

impl<T: FromStr> From<&str> for Vocab<T> {
    fn from(raw: &str) -> Self {
        Vocab::from(raw.to_string())
    }
}

impl<T: fmt::Display> fmt::Display for Vocab<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vocab::Known(v) => fmt::Display::fmt(v, f),
            Vocab::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

impl<T: fmt::Display> Serialize for Vocab<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T: FromStr> Deserialize<'de> for Vocab<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Vocab::from)
    }
}

pub type LevelValue = Vocab<ProficiencyLevel>;
pub type PriorityValue = Vocab<Priority>;

impl LevelValue {
    /// Ordinal rank; unrecognized levels rank 0, below every real level.
    pub fn rank(&self) -> u8 {
        self.known().map(ProficiencyLevel::rank).unwrap_or(0)
    }
}

impl PriorityValue {
    /// Priority weight; unrecognized priorities weigh the same as `nice_to_have`.
    pub fn weight(&self) -> f64 {
        self.known().map(Priority::weight).unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_parse_case_insensitively() {
        assert_eq!(
            "Advanced".parse::<ProficiencyLevel>(),
            Ok(ProficiencyLevel::Advanced)
        );
        assert_eq!(
            " EXPERT ".parse::<ProficiencyLevel>(),
            Ok(ProficiencyLevel::Expert)
        );
    }

    #[test]
    fn test_level_ranks_are_ordinal() {
        let ranks: Vec<u8> = [
            ProficiencyLevel::Beginner,
            ProficiencyLevel::Intermediate,
            ProficiencyLevel::Advanced,
            ProficiencyLevel::Expert,
        ]
        .iter()
        .map(|l| l.rank())
        .collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_unknown_level_is_an_error() {
        assert_eq!(
            "guru".parse::<ProficiencyLevel>(),
            Err(VocabularyError::Level("guru".to_string()))
        );
    }

    #[test]
    fn test_priority_weights() {
        assert_eq!(PriorityValue::from("required").weight(), 3.0);
        assert_eq!(PriorityValue::from("Preferred").weight(), 2.0);
        assert_eq!(PriorityValue::from("NICE_TO_HAVE").weight(), 1.0);
        assert_eq!(PriorityValue::from("critical").weight(), 1.0);
    }

    #[test]
    fn test_unrecognized_level_ranks_zero_and_keeps_raw_text() {
        let level = LevelValue::from("Guru");
        assert_eq!(level.rank(), 0);
        assert_eq!(level.to_string(), "Guru");
    }

    #[test]
    fn test_vocab_serde_uses_plain_strings() {
        let known: LevelValue = serde_json::from_str("\"Intermediate\"").unwrap();
        assert_eq!(known, Vocab::Known(ProficiencyLevel::Intermediate));
        assert_eq!(serde_json::to_string(&known).unwrap(), "\"intermediate\"");

        let odd: PriorityValue = serde_json::from_str("\"must\"").unwrap();
        assert_eq!(odd, Vocab::Unrecognized("must".to_string()));
        assert_eq!(serde_json::to_string(&odd).unwrap(), "\"must\"");
    }
}

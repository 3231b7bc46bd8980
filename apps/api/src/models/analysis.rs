use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scores above this are `severe_toxic`.
pub const SEVERE_THRESHOLD: f64 = 0.8;
/// Scores above this (and not severe) are `toxic`.
pub const TOXIC_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Safe,
    Toxic,
    SevereToxic,
}

impl Classification {
    /// The only way a classification is produced: `> 0.8` severe, `> 0.5` toxic, else safe.
    pub fn from_score(score: f64) -> Self {
        if score > SEVERE_THRESHOLD {
            Classification::SevereToxic
        } else if score > TOXIC_THRESHOLD {
            Classification::Toxic
        } else {
            Classification::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Safe => "safe",
            Classification::Toxic => "toxic",
            Classification::SevereToxic => "severe_toxic",
        }
    }

    pub fn is_toxic(&self) -> bool {
        !matches!(self, Classification::Safe)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CategoryScores {
    pub toxicity: f64,
    pub severe_toxicity: f64,
    pub obscene: f64,
    pub threat: f64,
    pub insult: f64,
    pub identity_attack: f64,
}

impl CategoryScores {
    fn clamped(self) -> Self {
        Self {
            toxicity: unit(self.toxicity),
            severe_toxicity: unit(self.severe_toxicity),
            obscene: unit(self.obscene),
            threat: unit(self.threat),
            insult: unit(self.insult),
            identity_attack: unit(self.identity_attack),
        }
    }
}

/// One classified comment. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub id: String,
    pub text: String,
    pub score: f64,
    pub classification: Classification,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    pub categories: CategoryScores,
}

impl AnalysisResult {
    /// Builds a result whose classification is derived from `score`.
    /// `categories.toxicity` is overwritten with `score`.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        score: f64,
        confidence: f64,
        timestamp: DateTime<Utc>,
        categories: CategoryScores,
    ) -> Self {
        let score = unit(score);
        Self {
            id: id.into(),
            text: text.into(),
            score,
            classification: Classification::from_score(score),
            confidence: unit(confidence),
            timestamp,
            categories: CategoryScores {
                toxicity: score,
                ..categories
            }
            .clamped(),
        }
    }

    /// Re-applies the construction invariants to a record read back from storage.
    pub fn normalized(self) -> Self {
        Self::new(
            self.id,
            self.text,
            self.score,
            self.confidence,
            self.timestamp,
            self.categories,
        )
    }
}

fn unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> CategoryScores {
        CategoryScores {
            toxicity: 0.0,
            severe_toxicity: 0.1,
            obscene: 0.1,
            threat: 0.1,
            insult: 0.1,
            identity_attack: 0.1,
        }
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(Classification::from_score(0.0), Classification::Safe);
        assert_eq!(Classification::from_score(0.5), Classification::Safe);
        assert_eq!(Classification::from_score(0.51), Classification::Toxic);
        assert_eq!(Classification::from_score(0.8), Classification::Toxic);
        assert_eq!(Classification::from_score(0.81), Classification::SevereToxic);
        assert_eq!(Classification::from_score(1.0), Classification::SevereToxic);
    }

    #[test]
    fn test_new_derives_classification_and_toxicity() {
        let r = AnalysisResult::new("a", "text", 0.74, 0.9, Utc::now(), categories());
        assert_eq!(r.classification, Classification::Toxic);
        assert_eq!(r.categories.toxicity, 0.74);
    }

    #[test]
    fn test_normalized_fixes_inconsistent_label() {
        let mut r = AnalysisResult::new("a", "text", 0.87, 0.9, Utc::now(), categories());
        r.classification = Classification::Toxic;
        r.score = 1.7;
        let fixed = r.normalized();
        assert_eq!(fixed.score, 1.0);
        assert_eq!(fixed.classification, Classification::SevereToxic);
    }

    #[test]
    fn test_serialized_shape() {
        let r = AnalysisResult::new("abc", "Hi", 0.9, 0.95, Utc::now(), categories());
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["classification"], "severe_toxic");
        assert!(value["categories"]["identity_attack"].is_number());
        assert!(value["timestamp"].is_string());
    }
}

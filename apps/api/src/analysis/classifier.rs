//! Classifier: pluggable, trait-based toxicity scorer.
//!
//! Default: `LexiconClassifier`, a placeholder that flags a fixed word list and
//! draws scores at random inside a band chosen by the match. It is not a model.
//!
//! `AppState` holds an `Arc<dyn Classifier>`, so a real backend or a
//! deterministic fake can be swapped in without touching handlers.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::models::analysis::{AnalysisResult, CategoryScores, Classification};

/// Words that push a comment into the elevated score band.
pub const TOXIC_LEXICON: [&str; 8] = [
    "hate", "stupid", "idiot", "kill", "die", "worst", "terrible", "awful",
];

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Total over any non-empty text. Blank input is rejected by callers.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, text: &str) -> AnalysisResult;

    /// Backend label for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// LexiconClassifier, the default mock backend
// ────────────────────────────────────────────────────────────────────────────

/// Mock classifier with simulated model latency.
///
/// Algorithm:
/// 1. Lower-case the text and split it into alphanumeric tokens
/// 2. Any token in `TOXIC_LEXICON` → score ∈ [0.7, 1.0), else score ∈ [0.0, 0.3)
/// 3. Classification from the canonical thresholds (see `Classification::from_score`)
/// 4. Confidence ∈ [0.85, 1.0), independent of score
pub struct LexiconClassifier {
    latency: Duration,
}

impl LexiconClassifier {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl Classifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> AnalysisResult {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        score_text(text, &mut rand::thread_rng())
    }

    fn backend(&self) -> &'static str {
        "lexicon"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Endings accepted after a lexicon word ("idiots", "hateful", "killing").
const INFLECTIONS: [&str; 11] = [
    "s", "es", "d", "ed", "ing", "er", "ers", "est", "ful", "ly", "ity",
];

pub fn contains_toxic_word(text: &str) -> bool {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| TOXIC_LEXICON.iter().any(|word| is_inflection_of(token, word)))
}

fn is_inflection_of(token: &str, word: &str) -> bool {
    if token == word {
        return true;
    }
    if let Some(rest) = token.strip_prefix(word) {
        return INFLECTIONS.contains(&rest);
    }
    // Silent e dropped before a vowel ending ("hating").
    match word.strip_suffix('e') {
        Some(stem) => token
            .strip_prefix(stem)
            .is_some_and(|rest| rest.starts_with(['i', 'e']) && INFLECTIONS.contains(&rest)),
        None => false,
    }
}

/// Scores `text` with randomness drawn from `rng`. The stored text keeps its casing.
pub fn score_text<R: Rng + ?Sized>(text: &str, rng: &mut R) -> AnalysisResult {
    let flagged = contains_toxic_word(text);

    let score = if flagged {
        rng.gen_range(0.7..1.0)
    } else {
        rng.gen_range(0.0..0.3)
    };
    let classification = Classification::from_score(score);

    let severe_toxicity = if classification == Classification::SevereToxic {
        score * 0.9
    } else {
        score * 0.3
    };
    let insult = if flagged {
        score * 0.8
    } else {
        rng.gen_range(0.0..0.2)
    };

    let categories = CategoryScores {
        toxicity: score,
        severe_toxicity,
        obscene: rng.gen_range(0.0..0.5),
        threat: rng.gen_range(0.0..0.4),
        insult,
        identity_attack: rng.gen_range(0.0..0.3),
    };

    AnalysisResult::new(
        Uuid::new_v4().simple().to_string(),
        text,
        score,
        rng.gen_range(0.85..1.0),
        Utc::now(),
        categories,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAFE_TEXT: &str = "This is a great post! Thanks for sharing your insights.";
    const TOXIC_TEXT: &str = "You are such an idiot for posting this garbage.";

    fn assert_well_formed(r: &AnalysisResult) {
        assert!((0.0..=1.0).contains(&r.score), "score {}", r.score);
        assert!((0.0..=1.0).contains(&r.confidence), "confidence {}", r.confidence);
        let c = r.categories;
        for v in [c.toxicity, c.severe_toxicity, c.obscene, c.threat, c.insult, c.identity_attack] {
            assert!((0.0..=1.0).contains(&v), "category {v}");
        }
        assert_eq!(r.classification, Classification::from_score(r.score));
        assert_eq!(r.categories.toxicity, r.score);
    }

    #[test]
    fn test_lexicon_match_is_case_insensitive() {
        assert!(contains_toxic_word("What an IDIOT."));
        assert!(contains_toxic_word("i hope you die in a fire"));
        assert!(!contains_toxic_word("Great tutorial, thanks!"));
    }

    #[test]
    fn test_lexicon_matches_whole_words_only() {
        assert!(!contains_toxic_word("I studied the diet plan"));
        assert!(!contains_toxic_word("skillful work"));
        assert!(!contains_toxic_word("a diesel engine"));
    }

    #[test]
    fn test_lexicon_matches_common_inflections() {
        assert!(contains_toxic_word("You idiots"));
        assert!(contains_toxic_word("hateful comments"));
        assert!(contains_toxic_word("stop killing it"));
        assert!(contains_toxic_word("I'm hating this"));
        assert!(contains_toxic_word("the stupidest idea"));
        assert!(contains_toxic_word("that was awfully rude"));
    }

    #[test]
    fn test_inflected_text_scores_elevated() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..50 {
            let r = score_text("You idiots are killing this thread", &mut rng);
            assert!(r.score >= 0.7, "score {}", r.score);
        }
    }

    #[test]
    fn test_safe_example_is_safe() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let r = score_text(SAFE_TEXT, &mut rng);
            assert_eq!(r.classification, Classification::Safe);
            assert!(r.score < 0.5);
            assert_well_formed(&r);
        }
    }

    #[test]
    fn test_toxic_example_is_elevated() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let r = score_text(TOXIC_TEXT, &mut rng);
            assert!(r.score >= 0.7, "score {}", r.score);
            assert!(r.classification.is_toxic());
            assert!((r.categories.insult - r.score * 0.8).abs() < 1e-12);
            assert_well_formed(&r);
        }
    }

    #[test]
    fn test_severe_toxicity_tracks_classification() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let r = score_text("worst take ever", &mut rng);
            let factor = if r.classification == Classification::SevereToxic {
                0.9
            } else {
                0.3
            };
            assert!((r.categories.severe_toxicity - r.score * factor).abs() < 1e-12);
        }
    }

    #[test]
    fn test_text_keeps_original_casing() {
        let mut rng = StdRng::seed_from_u64(1);
        let r = score_text("You Are AWFUL", &mut rng);
        assert_eq!(r.text, "You Are AWFUL");
    }

    #[test]
    fn test_ids_are_unique_alphanumeric() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = score_text("hello", &mut rng);
        let b = score_text("hello", &mut rng);
        assert_ne!(a.id, b.id);
        assert!(a.id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_classifier_waits_for_simulated_latency() {
        let classifier = LexiconClassifier::new(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        let r = classifier.classify(TOXIC_TEXT).await;
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert!(r.classification.is_toxic());
        assert_eq!(classifier.backend(), "lexicon");
    }
}

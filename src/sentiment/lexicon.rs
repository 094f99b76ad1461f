//! Offline keyword-valence sentiment classifier.
//!
//! A deliberately small lexicon classifier so analysis works without any
//! model download. Counts positive and negative vocabulary hits over the
//! whitespace-tokenized transcript and reports the majority valence.
//! Richer backends can be plugged in through [`SentimentClassifier`].

use crate::error::Result;
use crate::sentiment::classifier::{Emotion, SentimentClassifier};

/// Positive-valence vocabulary (English + Indonesian).
const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "happy", "glad", "love", "best", "wonderful", "amazing",
    "confident", "success", "proud", "excited", "bagus", "hebat", "senang", "mantap", "berhasil",
    "sukses", "semangat",
];

/// Negative-valence vocabulary (English + Indonesian).
const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "sad", "hate", "worst", "angry", "fear", "afraid", "nervous",
    "fail", "failure", "wrong", "buruk", "jelek", "sedih", "takut", "gagal", "salah", "marah",
];

/// Lexicon-backed sentiment classifier.
#[derive(Debug, Clone, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Count how many tokens of `text` appear in `vocabulary`.
    fn hits(text: &str, vocabulary: &[&str]) -> usize {
        text.split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|word| vocabulary.contains(word))
            .count()
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<Emotion> {
        let lowered = text.to_lowercase();
        let positive = Self::hits(&lowered, POSITIVE_WORDS);
        let negative = Self::hits(&lowered, NEGATIVE_WORDS);

        let emotion = if positive > negative {
            Emotion::Positive
        } else if negative > positive {
            Emotion::Negative
        } else {
            Emotion::Neutral
        };

        Ok(emotion)
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}

use crate::error::{OrateError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Emotion detected in a transcript.
///
/// `Negative` doubles as the catch-all bucket: any label a backend emits
/// that is neither positive nor neutral lands here, never in an error.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Emotion {
    Positive,
    Neutral,
    Negative,
}

impl Emotion {
    /// Map an adapter label onto the three buckets.
    ///
    /// Matching is case-insensitive. Unrecognized labels fall into the
    /// `Negative` bucket by contract; a classifier with a richer label set
    /// must never make a run fail.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Emotion::Positive,
            "NEUTRAL" => Emotion::Neutral,
            _ => Emotion::Negative,
        }
    }

    /// Fixed emotion sub-score for this bucket.
    pub fn bucket_score(self) -> u8 {
        match self {
            Emotion::Positive => 80,
            Emotion::Neutral => 60,
            Emotion::Negative => 40,
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Emotion::Positive => "positive",
            Emotion::Neutral => "neutral",
            Emotion::Negative => "negative",
        };
        write!(f, "{}", label)
    }
}

/// Trait for sentiment classification of a transcript.
///
/// Called once per analysis run, on the full transcript (not per sentence).
pub trait SentimentClassifier: Send + Sync {
    /// Classify a text span into an emotion bucket.
    fn classify(&self, text: &str) -> Result<Emotion>;

    /// Get the name of the classifier backend
    fn name(&self) -> &str;
}

/// Implement SentimentClassifier for Arc<T> to allow sharing across tasks.
impl<T: SentimentClassifier> SentimentClassifier for Arc<T> {
    fn classify(&self, text: &str) -> Result<Emotion> {
        (**self).classify(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Mock classifier for testing
#[derive(Debug, Clone)]
pub struct MockClassifier {
    emotion: Emotion,
    should_fail: bool,
}

impl MockClassifier {
    /// Create a mock that always returns the given emotion
    pub fn new(emotion: Emotion) -> Self {
        Self {
            emotion,
            should_fail: false,
        }
    }

    /// Configure the mock to fail on classify
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl SentimentClassifier for MockClassifier {
    fn classify(&self, _text: &str) -> Result<Emotion> {
        if self.should_fail {
            Err(OrateError::Sentiment {
                message: "mock classification failure".to_string(),
            })
        } else {
            Ok(self.emotion)
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

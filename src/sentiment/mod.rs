//! Sentiment adapter boundary.
//!
//! The pipeline makes a single classification call per run, on the full
//! transcript. Whatever label set the backing model emits, scoring only
//! distinguishes three buckets; see [`Emotion::bucket_score`].

pub mod classifier;
pub mod lexicon;

pub use classifier::{Emotion, MockClassifier, SentimentClassifier};
pub use lexicon::LexiconClassifier;

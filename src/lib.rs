//! orate - Public speaking feedback for the command line
//!
//! Scores one recorded speech sample: transcript, delivery metrics,
//! a 0–100 composite score with skill tier, and a per-dimension breakdown.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod analysis;
#[cfg(feature = "cli")]
pub mod app;
pub mod audio;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod defaults;
pub mod error;
pub mod history;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod stt;

// Core data model
pub use analysis::normalize::SubScores;
pub use analysis::score::{CompositeResult, Tier};
pub use analysis::{AnalysisSettings, RawMetrics};
pub use audio::AudioSample;

// Adapter boundaries (speech-to-text, sentiment)
pub use sentiment::{Emotion, SentimentClassifier};
pub use stt::transcriber::Transcriber;

// Pipeline
pub use pipeline::{AnalysisOutcome, Analyzer};

// History and reporting
pub use history::{CsvHistoryStore, HistoryEntry, HistoryStore, MemoryHistoryStore};
pub use report::{ReportLanguage, format_report};

// Error handling
pub use error::{OrateError, Result};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.0+abc1234"` when git hash is available, `"0.1.0"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}

//! Speech delivery analysis.
//!
//! Turns a transcript and waveform into four raw delivery metrics, then maps
//! them onto two deliberately separate outputs:
//!
//! - [`normalize::SubScores`]: five bounded per-dimension scores, used only
//!   for the radar visualization;
//! - [`score::CompositeResult`]: the single 0–100 penalty score and skill
//!   tier, computed from the raw metrics directly.
//!
//! The two paths never feed each other. The composite thresholds were tuned
//! against the raw metrics, so "unifying" them through the sub-scores would
//! silently change every historical score.

pub mod features;
pub mod normalize;
pub mod score;

use crate::defaults;
use serde::{Deserialize, Serialize};

/// Raw delivery metrics extracted from one recording.
///
/// All values are non-negative; `speaking_rate` is 0 for zero-duration audio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawMetrics {
    /// Speaking rate in words per minute.
    pub speaking_rate: f64,
    /// Approximate number of pauses detected in the waveform.
    pub pause_count: u32,
    /// Filler-word occurrences in the transcript.
    pub filler_count: u32,
    /// Crude grammar issues detected in the transcript.
    pub grammar_issue_count: u32,
}

/// Tunables for feature extraction.
///
/// Defaults reproduce the reference behavior the composite-score thresholds
/// were tuned against; changing them invalidates comparisons with existing
/// score history.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    /// Silence threshold on the signed 16-bit amplitude scale.
    pub silence_threshold: u16,
    /// Window size in seconds for bucketing silence into pause events.
    pub pause_window_secs: f64,
    /// Filler vocabulary, matched as substrings of the lowercased transcript.
    pub filler_words: Vec<String>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            silence_threshold: defaults::SILENCE_THRESHOLD,
            pause_window_secs: defaults::PAUSE_WINDOW_SECS,
            filler_words: defaults::FILLER_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}

//! Sub-score normalization for the radar visualization.
//!
//! Each dimension maps one raw metric (or the emotion bucket) onto a bounded
//! 0–100 scale with its own curve. These five values feed only the radar
//! chart; the composite score in [`crate::analysis::score`] is computed from
//! the raw metrics independently.

use crate::analysis::RawMetrics;
use crate::defaults;
use crate::sentiment::Emotion;
use serde::{Deserialize, Serialize};

/// Dimension labels in fixed radar order.
pub const DIMENSIONS: [&str; 5] = ["Tempo", "Pause", "Filler", "Grammar", "Emotion"];

/// Five independently normalized dimension scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub tempo: u8,
    pub pause: u8,
    pub filler: u8,
    pub grammar: u8,
    pub emotion: u8,
}

/// Clamp a raw curve value into [0, 100] and truncate to an integer score.
fn clamp_score(value: f64) -> u8 {
    value.clamp(0.0, 100.0) as u8
}

impl SubScores {
    /// Normalize raw metrics and the emotion bucket into sub-scores.
    pub fn from_metrics(metrics: &RawMetrics, emotion: Emotion) -> Self {
        Self {
            // Peaks at the target rate, falls off 1 point per word/min deviation
            tempo: clamp_score(150.0 - (defaults::TARGET_RATE_WPM - metrics.speaking_rate).abs()),
            // Deliberate pausing is rewarded, capped at 10 pauses
            pause: clamp_score(metrics.pause_count as f64 * 10.0),
            // Each filler word costs 10 points
            filler: clamp_score(100.0 - metrics.filler_count as f64 * 10.0),
            // Each grammar issue costs 8 points
            grammar: clamp_score(100.0 - metrics.grammar_issue_count as f64 * 8.0),
            emotion: emotion.bucket_score(),
        }
    }

    /// The scores in fixed radar order {tempo, pause, filler, grammar, emotion}.
    pub fn as_array(&self) -> [u8; 5] {
        [self.tempo, self.pause, self.filler, self.grammar, self.emotion]
    }
}

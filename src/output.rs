//! Terminal rendering for analysis results.
//!
//! The report text goes to stdout (it is the program's output); charts and
//! decoration go with it but stay presentation-only. Everything here is
//! built from the numeric series the core exposes, with no scoring logic.

use crate::analysis::normalize::{DIMENSIONS, SubScores};
use crate::history::HistoryEntry;

const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Width of a full score bar.
const BAR_WIDTH: usize = 25;

/// Glyphs for the history sparkline, lowest to highest.
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Return the ANSI color code for a 0–100 score.
fn score_color(score: u8) -> &'static str {
    if score >= 80 {
        GREEN
    } else if score >= 50 {
        YELLOW
    } else {
        RED
    }
}

/// Render one labelled 0–100 score bar.
fn format_score_bar(score: u8) -> String {
    let filled = (score as usize * BAR_WIDTH).div_ceil(100).min(BAR_WIDTH);
    let bar: String = (0..BAR_WIDTH)
        .map(|i| if i < filled { '█' } else { '░' })
        .collect();
    format!("{}{}{} {:>3}", score_color(score), bar, RESET, score)
}

/// Render the five sub-scores as labelled bars in fixed radar order.
pub fn render_sub_scores(scores: &SubScores) -> String {
    let mut out = String::new();
    out.push_str("Skill overview\n");
    for (label, score) in DIMENSIONS.iter().zip(scores.as_array()) {
        out.push_str(&format!("  {:<8}{}\n", label, format_score_bar(score)));
    }
    out
}

/// Render the score history as a sparkline plus a per-session table.
pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No sessions recorded yet.\n".to_string();
    }

    let spark: String = entries
        .iter()
        .map(|e| {
            // 0..=100 onto the 8 glyph levels
            let level = (e.score as usize * (SPARK_LEVELS.len() - 1)) / 100;
            SPARK_LEVELS[level]
        })
        .collect();

    let mut out = format!("Score trend  {}\n\n", spark);
    for entry in entries {
        out.push_str(&format!(
            "  {}#{:<4}{} {}\n",
            DIM,
            entry.index,
            RESET,
            format_score_bar(entry.score)
        ));
    }
    out
}

//! Composite scoring and skill tiers.
//!
//! The composite score starts at 100 and subtracts flat penalties based on
//! thresholds over the raw metrics. It deliberately does not read the
//! normalized sub-scores; see the module docs in [`crate::analysis`].

use crate::analysis::RawMetrics;
use serde::{Deserialize, Serialize};

/// Speaking faster than this costs 10 points.
const FAST_RATE_WPM: f64 = 150.0;
/// More fillers than this costs 10 points.
const MAX_FILLERS: u32 = 5;
/// More grammar issues than this costs 10 points.
const MAX_GRAMMAR_ISSUES: u32 = 5;
/// Fewer pauses than this costs 5 points.
const MIN_PAUSES: u32 = 3;

/// Coarse skill tier derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Beginner,
    Intermediate,
    Professional,
}

impl Tier {
    /// Tier for a composite score.
    pub fn from_score(score: u8) -> Self {
        if score <= 60 {
            Tier::Beginner
        } else if score <= 85 {
            Tier::Intermediate
        } else {
            Tier::Professional
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Professional => "Professional",
        };
        write!(f, "{}", label)
    }
}

/// The single 0–100 penalty-based score and its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeResult {
    pub score: u8,
    pub tier: Tier,
}

impl CompositeResult {
    /// Score one run's raw metrics.
    ///
    /// Penalties are independent and additive. With the current thresholds
    /// the minimum reachable score is 65; the floor at 0 stays anyway as a
    /// safety invariant for future threshold changes.
    pub fn from_metrics(metrics: &RawMetrics) -> Self {
        let mut score: i32 = 100;

        if metrics.speaking_rate > FAST_RATE_WPM {
            score -= 10;
        }
        if metrics.filler_count > MAX_FILLERS {
            score -= 10;
        }
        if metrics.grammar_issue_count > MAX_GRAMMAR_ISSUES {
            score -= 10;
        }
        if metrics.pause_count < MIN_PAUSES {
            score -= 5;
        }

        let score = score.max(0) as u8;
        Self {
            score,
            tier: Tier::from_score(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(rate: f64, pauses: u32, fillers: u32, grammar: u32) -> RawMetrics {
        RawMetrics {
            speaking_rate: rate,
            pause_count: pauses,
            filler_count: fillers,
            grammar_issue_count: grammar,
        }
    }

    #[test]
    fn clean_delivery_scores_100() {
        let result = CompositeResult::from_metrics(&metrics(130.0, 5, 0, 0));
        assert_eq!(result.score, 100);
        assert_eq!(result.tier, Tier::Professional);
    }

    #[test]
    fn all_penalties_stack_to_65() {
        // {rate=160, fillers=6, grammar=6, pauses=1} => 100-10-10-10-5
        let result = CompositeResult::from_metrics(&metrics(160.0, 1, 6, 6));
        assert_eq!(result.score, 65);
        assert_eq!(result.tier, Tier::Intermediate);
    }

    #[test]
    fn fast_rate_threshold_is_exclusive() {
        assert_eq!(
            CompositeResult::from_metrics(&metrics(150.0, 5, 0, 0)).score,
            100
        );
        assert_eq!(
            CompositeResult::from_metrics(&metrics(150.01, 5, 0, 0)).score,
            90
        );
    }

    #[test]
    fn filler_threshold_is_exclusive() {
        assert_eq!(
            CompositeResult::from_metrics(&metrics(130.0, 5, 5, 0)).score,
            100
        );
        assert_eq!(
            CompositeResult::from_metrics(&metrics(130.0, 5, 6, 0)).score,
            90
        );
    }

    #[test]
    fn grammar_threshold_is_exclusive() {
        assert_eq!(
            CompositeResult::from_metrics(&metrics(130.0, 5, 0, 5)).score,
            100
        );
        assert_eq!(
            CompositeResult::from_metrics(&metrics(130.0, 5, 0, 6)).score,
            90
        );
    }

    #[test]
    fn few_pauses_cost_five_points() {
        assert_eq!(
            CompositeResult::from_metrics(&metrics(130.0, 3, 0, 0)).score,
            100
        );
        assert_eq!(
            CompositeResult::from_metrics(&metrics(130.0, 2, 0, 0)).score,
            95
        );
        assert_eq!(
            CompositeResult::from_metrics(&metrics(130.0, 0, 0, 0)).score,
            95
        );
    }

    #[test]
    fn penalties_are_monotonic_per_metric() {
        // Crossing any single threshold upward never increases the score
        let base = metrics(130.0, 5, 0, 0);
        let base_score = CompositeResult::from_metrics(&base).score;

        let faster = CompositeResult::from_metrics(&metrics(200.0, 5, 0, 0)).score;
        let more_fillers = CompositeResult::from_metrics(&metrics(130.0, 5, 20, 0)).score;
        let more_issues = CompositeResult::from_metrics(&metrics(130.0, 5, 0, 20)).score;
        let fewer_pauses = CompositeResult::from_metrics(&metrics(130.0, 0, 0, 0)).score;

        assert!(faster <= base_score);
        assert!(more_fillers <= base_score);
        assert!(more_issues <= base_score);
        assert!(fewer_pauses <= base_score);
    }

    #[test]
    fn score_always_in_bounds() {
        let rates = [0.0, 130.0, 151.0, 1e12];
        let counts = [0u32, 3, 6, u32::MAX];
        for &rate in &rates {
            for &p in &counts {
                for &f in &counts {
                    for &g in &counts {
                        let result = CompositeResult::from_metrics(&metrics(rate, p, f, g));
                        assert!(result.score <= 100);
                    }
                }
            }
        }
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_score(0), Tier::Beginner);
        assert_eq!(Tier::from_score(60), Tier::Beginner);
        assert_eq!(Tier::from_score(61), Tier::Intermediate);
        assert_eq!(Tier::from_score(85), Tier::Intermediate);
        assert_eq!(Tier::from_score(86), Tier::Professional);
        assert_eq!(Tier::from_score(100), Tier::Professional);
    }

    #[test]
    fn tier_display_labels() {
        assert_eq!(Tier::Beginner.to_string(), "Beginner");
        assert_eq!(Tier::Intermediate.to_string(), "Intermediate");
        assert_eq!(Tier::Professional.to_string(), "Professional");
    }
}

//! Feature extractors: pure functions deriving raw metrics from the
//! transcript and waveform.
//!
//! The transcript-side heuristics are intentionally crude: substring filler
//! matching, period-splitting, a first-character capitalization check. The
//! composite-score thresholds were tuned against exactly this extraction, so
//! the coarseness is part of the contract, not an implementation accident.

use crate::analysis::{AnalysisSettings, RawMetrics};
use crate::audio::AudioSample;
use crate::defaults;

/// Number of whitespace-separated words in a transcript.
pub fn word_count(transcript: &str) -> usize {
    transcript.split_whitespace().count()
}

/// Speaking rate in words per minute.
///
/// Zero duration is a legal degenerate input and yields a rate of 0 rather
/// than a division error.
pub fn speaking_rate(transcript: &str, duration_seconds: f64) -> f64 {
    if duration_seconds == 0.0 {
        return 0.0;
    }
    word_count(transcript) as f64 / (duration_seconds / 60.0)
}

/// Approximate pause count from the raw waveform.
///
/// Counts samples below the silence threshold and buckets them into windows
/// of `pause_window_secs` (default 300ms); each full window counts as one
/// pause. This does not distinguish one long pause from many short ones,
/// a known coarseness of the metric.
pub fn pause_count(audio: &AudioSample, window_secs: f64, silence_threshold: u16) -> u32 {
    let window_samples = audio.sample_rate() as f64 * window_secs;
    if window_samples <= 0.0 {
        return 0;
    }

    let silent = audio
        .samples()
        .iter()
        .filter(|s| s.unsigned_abs() < silence_threshold)
        .count();

    (silent as f64 / window_samples).floor() as u32
}

/// Filler-word occurrences in the transcript.
///
/// Each vocabulary token is counted as a non-overlapping substring of the
/// lowercased transcript, so a token can match inside unrelated words and a
/// long hesitation ("ummm") can hit several tokens at once. Preserved
/// exactly for score compatibility.
pub fn filler_count<S: AsRef<str>>(transcript: &str, filler_words: &[S]) -> u32 {
    let lowered = transcript.to_lowercase();
    filler_words
        .iter()
        .map(|w| lowered.matches(w.as_ref()).count() as u32)
        .sum()
}

/// Crude grammar-issue count.
///
/// Splits the transcript on '.' into naive sentence spans. A span earns one
/// issue for running past the long-sentence limit and one more if its first
/// character is lowercase; both can fire on the same span. Empty spans
/// (consecutive or trailing periods) contribute nothing. The capitalization
/// test looks at the raw span's first character, so a span starting with a
/// space never triggers it.
pub fn grammar_issue_count(transcript: &str) -> u32 {
    let mut issues = 0u32;
    for span in transcript.split('.') {
        if word_count(span) > defaults::LONG_SENTENCE_WORDS {
            issues += 1;
        }
        if !span.trim().is_empty()
            && let Some(first) = span.chars().next()
            && first.is_lowercase()
        {
            issues += 1;
        }
    }
    issues
}

/// Extract all raw metrics for one recording.
pub fn extract(transcript: &str, audio: &AudioSample, settings: &AnalysisSettings) -> RawMetrics {
    RawMetrics {
        speaking_rate: speaking_rate(transcript, audio.duration_seconds()),
        pause_count: pause_count(
            audio,
            settings.pause_window_secs,
            settings.silence_threshold,
        ),
        filler_count: filler_count(transcript, &settings.filler_words),
        grammar_issue_count: grammar_issue_count(transcript),
    }
}

//! Default configuration constants for orate.
//!
//! This module provides shared constants used across different configuration types
//! to ensure consistency and eliminate duplication.

/// Sample rate expected by the transcription backend, in Hz.
///
/// 16kHz is the standard for speech recognition and provides a good balance
/// between quality and computational efficiency for voice applications.
pub const TRANSCRIPTION_SAMPLE_RATE: u32 = 16000;

/// Default silence threshold on the signed 16-bit amplitude scale.
///
/// Samples whose absolute amplitude falls below this value count as silence
/// for pause detection. Tuned against typical close-mic recordings.
pub const SILENCE_THRESHOLD: u16 = 500;

/// Default pause window in seconds.
///
/// Silence samples are bucketed into windows of this size; each full window
/// counts as one pause. This approximates pause events rather than detecting
/// silence segments: one long pause and several short ones of the same total
/// length produce the same count. Kept configurable so scores stay
/// reproducible against existing history files if it is ever retuned.
pub const PAUSE_WINDOW_SECS: f64 = 0.3;

/// Default filler-word vocabulary.
///
/// Short hesitation tokens counted as substrings of the lowercased
/// transcript. Mixed English/Indonesian list matching the speech the
/// scoring thresholds were tuned on. Substring matching means a token can
/// match inside an unrelated word ("um" in "umbrella"), a known coarseness
/// of the fluency metric, not something callers should correct for.
pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "umm", "emm", "em", "eee", "anu", "kayak", "gitu",
];

/// Word count above which a sentence span counts as a grammar issue.
pub const LONG_SENTENCE_WORDS: usize = 20;

/// Default language code for transcription.
///
/// "auto" lets Whisper detect the spoken language automatically.
/// Set to a specific code (e.g., "en", "id") to force a language.
pub const DEFAULT_LANGUAGE: &str = "auto";

/// Language value that triggers automatic language detection.
pub const AUTO_LANGUAGE: &str = "auto";

/// Default adapter timeout in seconds.
///
/// Applies to the transcription and sentiment adapters, both of which may
/// block on model inference. A run that exceeds this fails rather than
/// hanging the terminal.
pub const ADAPTER_TIMEOUT_SECS: u64 = 30;

/// File name of the score history table inside the data directory.
pub const HISTORY_FILE_NAME: &str = "score_history.csv";

/// Speaking rate (words/min) at which the tempo sub-score peaks.
pub const TARGET_RATE_WPM: f64 = 130.0;

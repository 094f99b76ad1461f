//! Bilingual feedback report rendering.
//!
//! A pure function of the analysis outputs and an explicit language flag.
//! Both templates carry the same fields in the same order: tier, score,
//! transcript, then the four raw metrics and the emotion label. They differ
//! only in wording.

use crate::analysis::RawMetrics;
use crate::analysis::score::CompositeResult;
use crate::sentiment::Emotion;
use serde::{Deserialize, Serialize};

/// Output language for the feedback report.
///
/// Selected explicitly by the caller, never inferred from the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLanguage {
    #[default]
    English,
    Indonesian,
}

impl std::str::FromStr for ReportLanguage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(ReportLanguage::English),
            "id" | "indonesian" | "bahasa" => Ok(ReportLanguage::Indonesian),
            other => Err(format!(
                "unsupported report language '{}' (expected 'en' or 'id')",
                other
            )),
        }
    }
}

/// Render the feedback report for one analysis run.
pub fn format_report(
    result: &CompositeResult,
    metrics: &RawMetrics,
    emotion: Emotion,
    transcript: &str,
    language: ReportLanguage,
) -> String {
    match language {
        ReportLanguage::English => format!(
            "======================\n\
             FEEDBACK REPORT\n\
             ======================\n\
             Level : {tier}\n\
             Score : {score}/100\n\
             Transcription : {transcript}\n\
             Analysis details:\n\
             - Speaking rate    : {rate:.1} WPM\n\
             - Pause count      : {pauses}\n\
             - Filler words     : {fillers}\n\
             - Grammar issues   : {grammar}\n\
             - Detected emotion : {emotion}\n",
            tier = result.tier,
            score = result.score,
            transcript = transcript,
            rate = metrics.speaking_rate,
            pauses = metrics.pause_count,
            fillers = metrics.filler_count,
            grammar = metrics.grammar_issue_count,
            emotion = emotion,
        ),
        ReportLanguage::Indonesian => format!(
            "======================\n\
             LAPORAN FEEDBACK\n\
             ======================\n\
             Level : {tier}\n\
             Skor  : {score}/100\n\
             Transkripsi : {transcript}\n\
             Detail analisis:\n\
             - Tempo bicara     : {rate:.1} kata/menit\n\
             - Jumlah jeda      : {pauses} kali\n\
             - Kata filler      : {fillers}\n\
             - Grammar (ringkas): {grammar} kesalahan\n\
             - Emosi suara      : {emotion}\n",
            tier = result.tier,
            score = result.score,
            transcript = transcript,
            rate = metrics.speaking_rate,
            pauses = metrics.pause_count,
            fillers = metrics.filler_count,
            grammar = metrics.grammar_issue_count,
            emotion = emotion,
        ),
    }
}

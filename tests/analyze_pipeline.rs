//! End-to-end pipeline tests over mock adapters.
//!
//! Drives the full flow, from decoded waveform through transcription,
//! metrics, scores, and history, without any model inference.

use orate::analysis::score::Tier;
use orate::audio::{AudioSample, wav};
use orate::history::{HistoryStore, MemoryHistoryStore};
use orate::pipeline::Analyzer;
use orate::report::{ReportLanguage, format_report};
use orate::sentiment::{Emotion, MockClassifier};
use orate::stt::transcriber::MockTranscriber;
use std::sync::Arc;

/// 10 seconds of 16kHz audio: mostly speech-level noise with two silent gaps.
fn speech_with_pauses() -> AudioSample {
    let mut samples = Vec::with_capacity(160_000);
    for i in 0..160_000usize {
        // Two 1.5s silent stretches, loud elsewhere
        let silent = (48_000..72_000).contains(&i) || (120_000..144_000).contains(&i);
        if silent {
            samples.push(0);
        } else {
            // Offset keeps every non-silent sample well above the threshold
            samples.push(((i % 61) as i16 - 30) * 400 + 15000);
        }
    }
    AudioSample::new(samples, 16000)
}

#[tokio::test]
async fn full_run_produces_consistent_outcome() {
    let audio = speech_with_pauses();
    let transcriber = Arc::new(
        MockTranscriber::new("mock").with_response("Today I want to talk about speaking well."),
    );
    let classifier = Arc::new(MockClassifier::new(Emotion::Positive));
    let mut history = MemoryHistoryStore::new();

    let outcome = Analyzer::default()
        .run(&audio, transcriber, classifier, &mut history)
        .await
        .unwrap();

    // 8 words over 10s = 48 wpm
    assert_eq!(outcome.metrics.speaking_rate, 48.0);
    // Two 24000-sample silent stretches = 48000 silent samples = 10 windows
    assert_eq!(outcome.metrics.pause_count, 10);
    assert_eq!(outcome.metrics.filler_count, 0);
    assert_eq!(outcome.metrics.grammar_issue_count, 0);

    // No composite penalty fires
    assert_eq!(outcome.composite.score, 100);
    assert_eq!(outcome.composite.tier, Tier::Professional);

    // Sub-scores follow their own curves, not the composite
    assert_eq!(outcome.sub_scores.tempo, 68); // 150 - |130-48|
    assert_eq!(outcome.sub_scores.pause, 100);
    assert_eq!(outcome.sub_scores.emotion, 80);

    assert_eq!(outcome.session_index, 1);
}

#[tokio::test]
async fn empty_transcript_scores_without_errors() {
    let audio = speech_with_pauses();
    let transcriber = Arc::new(MockTranscriber::new("mock").with_response(""));
    let classifier = Arc::new(MockClassifier::new(Emotion::Neutral));
    let mut history = MemoryHistoryStore::new();

    let outcome = Analyzer::default()
        .run(&audio, transcriber, classifier, &mut history)
        .await
        .unwrap();

    assert_eq!(outcome.metrics.speaking_rate, 0.0);
    assert_eq!(outcome.metrics.filler_count, 0);
    assert_eq!(outcome.metrics.grammar_issue_count, 0);
}

#[tokio::test]
async fn six_fillers_cost_the_filler_penalty() {
    let audio = speech_with_pauses();
    let transcriber = Arc::new(MockTranscriber::new("mock").with_response("um um um um um um"));
    let classifier = Arc::new(MockClassifier::new(Emotion::Neutral));
    let mut history = MemoryHistoryStore::new();

    let outcome = Analyzer::default()
        .run(&audio, transcriber, classifier, &mut history)
        .await
        .unwrap();

    assert_eq!(outcome.metrics.filler_count, 6);
    assert_eq!(outcome.sub_scores.filler, 40); // 100 - 60
    assert_eq!(outcome.composite.score, 90); // filler penalty only
}

#[tokio::test]
async fn history_grows_monotonically_across_runs() {
    let audio = speech_with_pauses();
    let classifier = Arc::new(MockClassifier::new(Emotion::Neutral));
    let mut history = MemoryHistoryStore::new();
    let analyzer = Analyzer::default();

    for expected_index in 1..=5u32 {
        let transcriber = Arc::new(MockTranscriber::new("mock").with_response("Quick check."));
        let outcome = analyzer
            .run(&audio, transcriber, classifier.clone(), &mut history)
            .await
            .unwrap();
        assert_eq!(outcome.session_index, expected_index);
    }

    let entries = history.load_all().unwrap();
    let indices: Vec<u32> = entries.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn decoded_wav_flows_through_the_pipeline() {
    // Build a WAV in memory, decode it, and analyze the decoded sample
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = std::io::Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
    for _ in 0..32_000 {
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();
    let wav_bytes = cursor.into_inner();

    let audio = wav::read_wav(Box::new(std::io::Cursor::new(wav_bytes))).unwrap();
    assert_eq!(audio.duration_seconds(), 2.0);

    let transcriber = Arc::new(MockTranscriber::new("mock").with_response("Short clip."));
    let classifier = Arc::new(MockClassifier::new(Emotion::Neutral));
    let mut history = MemoryHistoryStore::new();

    let outcome = Analyzer::default()
        .run(&audio, transcriber, classifier, &mut history)
        .await
        .unwrap();

    // 2 words over 2s = 60 wpm; 32000 silent samples = 6 full pause windows
    assert_eq!(outcome.metrics.speaking_rate, 60.0);
    assert_eq!(outcome.metrics.pause_count, 6);
}

#[tokio::test]
async fn report_renders_the_outcome_in_both_languages() {
    let audio = speech_with_pauses();
    let transcriber = Arc::new(MockTranscriber::new("mock").with_response("Halo semuanya."));
    let classifier = Arc::new(MockClassifier::new(Emotion::Positive));
    let mut history = MemoryHistoryStore::new();

    let outcome = Analyzer::default()
        .run(&audio, transcriber, classifier, &mut history)
        .await
        .unwrap();

    let english = format_report(
        &outcome.composite,
        &outcome.metrics,
        outcome.emotion,
        &outcome.transcript,
        ReportLanguage::English,
    );
    let indonesian = format_report(
        &outcome.composite,
        &outcome.metrics,
        outcome.emotion,
        &outcome.transcript,
        ReportLanguage::Indonesian,
    );

    assert!(english.contains("Halo semuanya."));
    assert!(indonesian.contains("Halo semuanya."));
    assert!(english.contains(&format!("{}/100", outcome.composite.score)));
    assert!(indonesian.contains(&format!("{}/100", outcome.composite.score)));
}

#[tokio::test]
async fn failed_transcription_leaves_no_history_entry() {
    let audio = speech_with_pauses();
    let transcriber = Arc::new(MockTranscriber::new("mock").with_failure());
    let classifier = Arc::new(MockClassifier::new(Emotion::Neutral));
    let mut history = MemoryHistoryStore::new();

    let result = Analyzer::default()
        .run(&audio, transcriber, classifier, &mut history)
        .await;

    assert!(result.is_err());
    assert!(history.load_all().unwrap().is_empty());
}

#[tokio::test]
async fn outcome_serializes_to_json() {
    let audio = speech_with_pauses();
    let transcriber = Arc::new(MockTranscriber::new("mock").with_response("JSON check."));
    let classifier = Arc::new(MockClassifier::new(Emotion::Neutral));
    let mut history = MemoryHistoryStore::new();

    let outcome = Analyzer::default()
        .run(&audio, transcriber, classifier, &mut history)
        .await
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&outcome).unwrap()).unwrap();

    assert_eq!(json["transcript"], "JSON check.");
    assert_eq!(json["session_index"], 1);
    assert!(json["metrics"]["speaking_rate"].is_number());
    assert!(json["sub_scores"]["tempo"].is_number());
    assert!(json["composite"]["score"].is_number());
}

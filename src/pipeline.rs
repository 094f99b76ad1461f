//! The analysis pipeline: one complete recording in, one assessment out.
//!
//! Steps run in a fixed order (transcribe, extract features, classify
//! sentiment, normalize, score, append history) with one exception: the
//! waveform-only pause count has no data dependency on the transcript, so it
//! runs concurrently with transcription. Adapter calls (transcription,
//! sentiment) get a deadline so a stuck model inference fails the run
//! instead of hanging it.

use crate::analysis::features;
use crate::analysis::normalize::SubScores;
use crate::analysis::score::CompositeResult;
use crate::analysis::{AnalysisSettings, RawMetrics};
use crate::audio::AudioSample;
use crate::defaults;
use crate::error::{OrateError, Result};
use crate::history::HistoryStore;
use crate::sentiment::{Emotion, SentimentClassifier};
use crate::stt::transcriber::Transcriber;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Everything one analysis run produces.
///
/// `sub_scores` and `composite` come from two separate scoring paths: the
/// sub-scores feed visualization only, the composite feeds the report and
/// tier. They are not derived from each other.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub transcript: String,
    pub metrics: RawMetrics,
    pub emotion: Emotion,
    pub sub_scores: SubScores,
    pub composite: CompositeResult,
    /// 1-based index of this run in the score history.
    pub session_index: u32,
}

/// Runs the analysis pipeline over injected adapters and history store.
#[derive(Debug, Clone)]
pub struct Analyzer {
    settings: AnalysisSettings,
    adapter_timeout: Duration,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalysisSettings::default())
    }
}

impl Analyzer {
    pub fn new(settings: AnalysisSettings) -> Self {
        Self {
            settings,
            adapter_timeout: Duration::from_secs(defaults::ADAPTER_TIMEOUT_SECS),
        }
    }

    /// Sets the deadline for each adapter call.
    pub fn with_adapter_timeout(mut self, timeout: Duration) -> Self {
        self.adapter_timeout = timeout;
        self
    }

    /// Analyze one recording, obtaining the transcript from the
    /// transcription adapter.
    ///
    /// Transcription runs concurrently with pause detection; an adapter
    /// failure or timeout is fatal for this run (no partial scoring).
    pub async fn run(
        &self,
        audio: &AudioSample,
        transcriber: Arc<dyn Transcriber>,
        classifier: Arc<dyn SentimentClassifier>,
        history: &mut dyn HistoryStore,
    ) -> Result<AnalysisOutcome> {
        let transcription_audio = audio.to_transcription_rate();
        let transcription_task = tokio::task::spawn_blocking(move || {
            transcriber.transcribe(&transcription_audio)
        });

        let pause_audio = audio.clone();
        let window = self.settings.pause_window_secs;
        let threshold = self.settings.silence_threshold;
        let pause_task = tokio::task::spawn_blocking(move || {
            features::pause_count(&pause_audio, window, threshold)
        });

        let (transcript, pause_count) = tokio::join!(
            self.with_deadline("transcription", transcription_task),
            join_task(pause_task),
        );
        let transcript = transcript??;
        let pause_count = pause_count?;

        self.finish(transcript, pause_count, audio, classifier, history)
            .await
    }

    /// Analyze one recording with a caller-supplied transcript, skipping
    /// the transcription adapter.
    pub async fn run_with_transcript(
        &self,
        audio: &AudioSample,
        transcript: String,
        classifier: Arc<dyn SentimentClassifier>,
        history: &mut dyn HistoryStore,
    ) -> Result<AnalysisOutcome> {
        let pause_count =
            features::pause_count(audio, self.settings.pause_window_secs, self.settings.silence_threshold);
        self.finish(transcript, pause_count, audio, classifier, history)
            .await
    }

    /// Classify, normalize, score and persist, the shared tail of both entry
    /// points.
    async fn finish(
        &self,
        transcript: String,
        pause_count: u32,
        audio: &AudioSample,
        classifier: Arc<dyn SentimentClassifier>,
        history: &mut dyn HistoryStore,
    ) -> Result<AnalysisOutcome> {
        let classify_text = transcript.clone();
        let classify_task =
            tokio::task::spawn_blocking(move || classifier.classify(&classify_text));
        let emotion = self.with_deadline("sentiment", classify_task).await??;

        let metrics = RawMetrics {
            speaking_rate: features::speaking_rate(&transcript, audio.duration_seconds()),
            pause_count,
            filler_count: features::filler_count(&transcript, &self.settings.filler_words),
            grammar_issue_count: features::grammar_issue_count(&transcript),
        };

        let sub_scores = SubScores::from_metrics(&metrics, emotion);
        let composite = CompositeResult::from_metrics(&metrics);

        let session_index = history.append(composite.score)?;

        Ok(AnalysisOutcome {
            transcript,
            metrics,
            emotion,
            sub_scores,
            composite,
            session_index,
        })
    }

    /// Await a blocking adapter task under the configured deadline.
    async fn with_deadline<T>(
        &self,
        adapter: &'static str,
        task: tokio::task::JoinHandle<T>,
    ) -> Result<T> {
        match tokio::time::timeout(self.adapter_timeout, task).await {
            Ok(joined) => joined.map_err(|e| OrateError::Other(format!("{} task failed: {}", adapter, e))),
            Err(_) => Err(OrateError::AdapterTimeout {
                adapter,
                secs: self.adapter_timeout.as_secs(),
            }),
        }
    }
}

/// Await a non-adapter blocking task (no deadline).
async fn join_task<T>(task: tokio::task::JoinHandle<T>) -> Result<T> {
    task.await
        .map_err(|e| OrateError::Other(format!("analysis task failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistoryStore;
    use crate::sentiment::MockClassifier;
    use crate::stt::transcriber::MockTranscriber;

    fn ten_seconds_of_silence() -> AudioSample {
        AudioSample::new(vec![0i16; 160_000], 16000)
    }

    #[tokio::test]
    async fn run_produces_scores_and_appends_history() {
        let audio = ten_seconds_of_silence();
        let transcriber = Arc::new(MockTranscriber::new("mock").with_response("Hello everyone"));
        let classifier = Arc::new(MockClassifier::new(Emotion::Positive));
        let mut history = MemoryHistoryStore::new();

        let outcome = Analyzer::default()
            .run(&audio, transcriber, classifier, &mut history)
            .await
            .unwrap();

        assert_eq!(outcome.transcript, "Hello everyone");
        assert_eq!(outcome.metrics.speaking_rate, 12.0); // 2 words / (10s/60)
        assert_eq!(outcome.metrics.pause_count, 33); // 160000 silent / 4800
        assert_eq!(outcome.emotion, Emotion::Positive);
        assert_eq!(outcome.sub_scores.emotion, 80);
        // No penalty fires (33 pauses, slow rate, no fillers or issues)
        assert_eq!(outcome.composite.score, 100);
        assert_eq!(outcome.session_index, 1);
        assert_eq!(history.load_all().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn transcription_failure_is_fatal_and_appends_nothing() {
        let audio = ten_seconds_of_silence();
        let transcriber = Arc::new(MockTranscriber::new("mock").with_failure());
        let classifier = Arc::new(MockClassifier::new(Emotion::Neutral));
        let mut history = MemoryHistoryStore::new();

        let result = Analyzer::default()
            .run(&audio, transcriber, classifier, &mut history)
            .await;

        assert!(matches!(result, Err(OrateError::Transcription { .. })));
        assert!(history.load_all().unwrap().is_empty());
    }

    #[tokio::test]
    async fn sentiment_failure_is_fatal_and_appends_nothing() {
        let audio = ten_seconds_of_silence();
        let transcriber = Arc::new(MockTranscriber::new("mock"));
        let classifier = Arc::new(MockClassifier::new(Emotion::Neutral).with_failure());
        let mut history = MemoryHistoryStore::new();

        let result = Analyzer::default()
            .run(&audio, transcriber, classifier, &mut history)
            .await;

        assert!(matches!(result, Err(OrateError::Sentiment { .. })));
        assert!(history.load_all().unwrap().is_empty());
    }

    #[tokio::test]
    async fn zero_duration_audio_scores_without_division_error() {
        let audio = AudioSample::new(Vec::new(), 16000);
        let transcriber = Arc::new(MockTranscriber::new("mock").with_response("words anyway"));
        let classifier = Arc::new(MockClassifier::new(Emotion::Neutral));
        let mut history = MemoryHistoryStore::new();

        let outcome = Analyzer::default()
            .run(&audio, transcriber, classifier, &mut history)
            .await
            .unwrap();

        assert_eq!(outcome.metrics.speaking_rate, 0.0);
        assert_eq!(outcome.metrics.pause_count, 0);
    }

    #[tokio::test]
    async fn run_with_transcript_skips_the_adapter() {
        let audio = ten_seconds_of_silence();
        let classifier = Arc::new(MockClassifier::new(Emotion::Neutral));
        let mut history = MemoryHistoryStore::new();

        let outcome = Analyzer::default()
            .run_with_transcript(&audio, "um um um um um um".to_string(), classifier, &mut history)
            .await
            .unwrap();

        assert_eq!(outcome.metrics.filler_count, 6);
        assert_eq!(outcome.sub_scores.filler, 40);
        // filler penalty fires: 100 - 10
        assert_eq!(outcome.composite.score, 90);
    }

    #[tokio::test]
    async fn session_indices_grow_across_runs() {
        let audio = ten_seconds_of_silence();
        let classifier = Arc::new(MockClassifier::new(Emotion::Neutral));
        let mut history = MemoryHistoryStore::new();
        let analyzer = Analyzer::default();

        for expected in 1..=3u32 {
            let outcome = analyzer
                .run_with_transcript(&audio, "Hi there.".to_string(), classifier.clone(), &mut history)
                .await
                .unwrap();
            assert_eq!(outcome.session_index, expected);
        }
    }

    #[tokio::test]
    async fn slow_adapter_times_out() {
        struct SlowClassifier;
        impl SentimentClassifier for SlowClassifier {
            fn classify(&self, _text: &str) -> crate::error::Result<Emotion> {
                std::thread::sleep(Duration::from_millis(200));
                Ok(Emotion::Neutral)
            }
            fn name(&self) -> &str {
                "slow"
            }
        }

        let audio = ten_seconds_of_silence();
        let mut history = MemoryHistoryStore::new();

        let result = Analyzer::default()
            .with_adapter_timeout(Duration::from_millis(10))
            .run_with_transcript(&audio, "Hi.".to_string(), Arc::new(SlowClassifier), &mut history)
            .await;

        assert!(matches!(
            result,
            Err(OrateError::AdapterTimeout {
                adapter: "sentiment",
                ..
            })
        ));
        assert!(history.load_all().unwrap().is_empty());
    }
}

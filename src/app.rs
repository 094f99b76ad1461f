//! Application entry points for the CLI.
//!
//! Orchestrates one complete analysis: decode audio → run the pipeline over
//! the configured adapters → render the report, charts and history.

use crate::analysis::AnalysisSettings;
use crate::audio::{AudioSample, wav};
use crate::config::Config;
use crate::error::{OrateError, Result};
use crate::history::{CsvHistoryStore, HistoryStore};
use crate::output;
use crate::pipeline::Analyzer;
use crate::report::{ReportLanguage, format_report};
use crate::sentiment::LexiconClassifier;
use crate::stt::transcriber::Transcriber;
use crate::stt::whisper::{WhisperConfig, WhisperTranscriber};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Per-invocation overrides collected from the command line.
#[derive(Debug, Default)]
pub struct AnalyzeArgs {
    /// WAV file to analyze; stdin pipe mode when absent
    pub file: Option<PathBuf>,
    /// Caller-supplied transcript, skipping the transcription adapter
    pub transcript: Option<String>,
    pub model: Option<PathBuf>,
    pub language: Option<String>,
    pub report_language: Option<ReportLanguage>,
    pub timeout_secs: Option<u64>,
    pub json: bool,
    pub quiet: bool,
    pub verbose: u8,
}

/// Run the analyze command: decode → transcribe → score → render.
pub async fn run_analyze_command(mut config: Config, args: AnalyzeArgs) -> Result<()> {
    // Apply CLI overrides
    if let Some(model) = args.model {
        config.stt.model_path = Some(model);
    }
    if let Some(language) = args.language {
        config.stt.language = language;
    }
    if let Some(language) = args.report_language {
        config.report.language = language;
    }
    if let Some(secs) = args.timeout_secs {
        config.analysis.adapter_timeout_secs = secs;
    }

    let audio = load_audio(args.file.as_deref())?;

    if args.verbose >= 1 {
        eprintln!(
            "orate: {:.1}s of audio at {}Hz",
            audio.duration_seconds(),
            audio.sample_rate()
        );
    }

    let analyzer = Analyzer::new(AnalysisSettings {
        silence_threshold: config.audio.silence_threshold,
        pause_window_secs: config.audio.pause_window_secs,
        filler_words: config.analysis.filler_words.clone(),
    })
    .with_adapter_timeout(Duration::from_secs(config.analysis.adapter_timeout_secs));

    let classifier = Arc::new(LexiconClassifier::new());
    let mut history = CsvHistoryStore::new(config.history_path());

    let outcome = match args.transcript {
        Some(transcript) => {
            analyzer
                .run_with_transcript(&audio, transcript, classifier, &mut history)
                .await?
        }
        None => {
            let transcriber = build_transcriber(&config, args.verbose)?;
            analyzer
                .run(&audio, transcriber, classifier, &mut history)
                .await?
        }
    };

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).map_err(|e| OrateError::Other(format!(
                "Failed to serialize result: {}",
                e
            )))?
        );
        return Ok(());
    }

    print!(
        "{}",
        format_report(
            &outcome.composite,
            &outcome.metrics,
            outcome.emotion,
            &outcome.transcript,
            config.report.language,
        )
    );

    if !args.quiet {
        println!();
        print!("{}", output::render_sub_scores(&outcome.sub_scores));
        println!();
        println!(
            "Session #{} saved to {}",
            outcome.session_index,
            history.path().display()
        );
    }

    Ok(())
}

/// Run the history command: load all entries and render the trend.
pub fn run_history_command(config: Config, json: bool, quiet: bool) -> Result<()> {
    let history = CsvHistoryStore::new(config.history_path());
    let entries = history.load_all()?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).map_err(|e| OrateError::Other(format!(
                "Failed to serialize history: {}",
                e
            )))?
        );
        return Ok(());
    }

    print!("{}", output::render_history(&entries));
    if !quiet && !entries.is_empty() {
        println!();
        println!("History file: {}", history.path().display());
    }

    Ok(())
}

/// Decode the recording from a file path or stdin pipe.
fn load_audio(file: Option<&std::path::Path>) -> Result<AudioSample> {
    match file {
        Some(path) => wav::read_wav_file(path),
        None => {
            if std::io::stdin().is_terminal() {
                return Err(OrateError::AudioRead {
                    message: "no input: pass a WAV file or pipe WAV data to stdin".to_string(),
                });
            }
            wav::read_wav_stdin()
        }
    }
}

/// Build the transcription adapter from configuration.
fn build_transcriber(config: &Config, verbose: u8) -> Result<Arc<dyn Transcriber>> {
    let Some(model_path) = config.stt.model_path.clone() else {
        return Err(OrateError::Transcription {
            message: concat!(
                "no transcription model configured.\n",
                "Set stt.model_path in the config file, pass --model, ",
                "or supply the transcript with --transcript"
            )
            .to_string(),
        });
    };

    let transcriber = WhisperTranscriber::new(WhisperConfig {
        model_path,
        language: config.stt.language.clone(),
        threads: config.stt.threads,
    })?;

    if verbose >= 1 {
        eprintln!("orate: transcribing with model {}", transcriber.model_name());
    }

    Ok(Arc::new(transcriber))
}

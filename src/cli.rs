//! Command-line interface for orate
//!
//! Provides argument parsing using clap derive macros.

use crate::report::ReportLanguage;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Public speaking feedback for the command line
#[derive(Parser, Debug)]
#[command(
    name = "orate",
    version,
    about = "Public speaking feedback for the command line"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress decoration (report text only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (backend and file details)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// WAV recording to analyze (reads stdin when piped)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Supply the transcript directly, skipping speech recognition
    #[arg(long, value_name = "TEXT")]
    pub transcript: Option<String>,

    /// Whisper model file for transcription
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Language code for transcription (default: auto-detect). Examples: auto, en, id
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Report language: en or id
    #[arg(long, value_name = "LANG")]
    pub report_language: Option<ReportLanguage>,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Adapter timeout (default: 30s). Examples: 90s, 5m
    #[arg(long, value_name = "DURATION", value_parser = parse_timeout_secs)]
    pub timeout: Option<u64>,
}

/// Parse a timeout duration string into seconds.
///
/// Supports any duration format accepted by `humantime`: bare numbers
/// (seconds), single-unit (`30s`, `5m`), and compound (`1m30s`).
fn parse_timeout_secs(s: &str) -> Result<u64, String> {
    let s = s.trim();
    // Bare number → seconds
    if let Ok(secs) = s.parse::<u64>() {
        return Ok(secs);
    }
    humantime::parse_duration(s)
        .map(|d| d.as_secs())
        .map_err(|e| e.to_string())
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the score history and trend
    History,

    /// Manage configuration
    Config {
        /// Action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration as TOML
    Show,

    /// Print the configuration file path
    Path,
}

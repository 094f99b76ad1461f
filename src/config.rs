use crate::defaults;
use crate::report::ReportLanguage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub audio: AudioConfig,
    pub stt: SttConfig,
    pub analysis: AnalysisConfig,
    pub history: HistoryConfig,
    pub report: ReportConfig,
}

/// Waveform analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Silence threshold on the signed 16-bit amplitude scale
    pub silence_threshold: u16,
    /// Pause window in seconds (how much silence counts as one pause)
    pub pause_window_secs: f64,
}

/// Speech-to-text configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SttConfig {
    /// Path to the Whisper model file
    pub model_path: Option<PathBuf>,
    pub language: String,
    /// Inference threads (None = auto-detect)
    pub threads: Option<usize>,
}

/// Feature extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Filler vocabulary, matched as substrings of the lowercased transcript
    pub filler_words: Vec<String>,
    /// Deadline in seconds for each adapter call
    pub adapter_timeout_secs: u64,
}

/// Score history configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct HistoryConfig {
    /// Path of the CSV score table (default: data dir)
    pub path: Option<PathBuf>,
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ReportConfig {
    pub language: ReportLanguage,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            silence_threshold: defaults::SILENCE_THRESHOLD,
            pause_window_secs: defaults::PAUSE_WINDOW_SECS,
        }
    }
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            language: defaults::DEFAULT_LANGUAGE.to_string(),
            threads: None,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            filler_words: defaults::FILLER_WORDS
                .iter()
                .map(|w| w.to_string())
                .collect(),
            adapter_timeout_secs: defaults::ADAPTER_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(e) => {
                if e.downcast_ref::<std::io::Error>()
                    .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false)
                {
                    Ok(Self::default())
                } else {
                    Err(e)
                }
            }
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - ORATE_MODEL → stt.model_path
    /// - ORATE_LANGUAGE → stt.language
    /// - ORATE_HISTORY → history.path
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(model) = std::env::var("ORATE_MODEL")
            && !model.is_empty()
        {
            self.stt.model_path = Some(PathBuf::from(model));
        }

        if let Ok(language) = std::env::var("ORATE_LANGUAGE")
            && !language.is_empty()
        {
            self.stt.language = language;
        }

        if let Ok(history) = std::env::var("ORATE_HISTORY")
            && !history.is_empty()
        {
            self.history.path = Some(PathBuf::from(history));
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/orate/config.toml on Linux
    #[cfg(feature = "cli")]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("orate")
            .join("config.toml")
    }

    /// Resolve the score history file path.
    ///
    /// Uses the configured path if set, otherwise the platform data dir
    /// (~/.local/share/orate/score_history.csv on Linux).
    #[cfg(feature = "cli")]
    pub fn history_path(&self) -> PathBuf {
        self.history.path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("orate")
                .join(defaults::HISTORY_FILE_NAME)
        })
    }

    /// Render the effective configuration as TOML.
    pub fn to_display_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

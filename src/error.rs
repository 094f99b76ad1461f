//! Error types for orate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrateError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Audio decoding errors
    #[error("Failed to read audio: {message}")]
    AudioRead { message: String },

    // Transcription adapter errors
    #[error("Transcription model not found at {path}")]
    TranscriptionModelNotFound { path: String },

    #[error("Transcription failed: {message}")]
    Transcription { message: String },

    // Sentiment adapter errors
    #[error("Sentiment classification failed: {message}")]
    Sentiment { message: String },

    // Adapter timeout (transcription or sentiment exceeded the deadline)
    #[error("{adapter} adapter timed out after {secs}s")]
    AdapterTimeout { adapter: &'static str, secs: u64 },

    // History store errors
    #[error("Score history error: {message}")]
    History { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, OrateError>;

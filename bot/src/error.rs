//! Error types for the bot collaborators.
//!
//! Each concern has its own error: loading configuration, fetching a fortune
//! and rendering a cow. Fortune and render errors end up in chat replies, so
//! their `Display` text is written for the chat user.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors from the external fortune program.
#[derive(Debug, Error)]
pub enum FortuneError {
    /// The program could not be started.
    #[error("could not start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting on the running program failed.
    #[error("failed waiting for fortune: {0}")]
    Wait(#[source] std::io::Error),

    /// The program did not exit in time and was killed.
    #[error("fortune timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// The program exited unsuccessfully.
    #[error("fortune failed ({status}): {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    /// The program printed nothing.
    #[error("fortune produced no output")]
    Empty,
}

/// Errors raised while drawing a cow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// `-f` named a face that does not exist.
    #[error("Could not find {0} cowfile!")]
    UnknownFace(String),

    /// `-W` was zero or negative.
    #[error("wrap width must be positive, got {0}")]
    InvalidWrap(i64),
}

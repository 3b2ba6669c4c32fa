use std::path::PathBuf;

/// Core error types for voicecost.
///
/// The cost engine itself is fail-soft and never returns an error from
/// `compute` (see `engine`); errors here cover the surrounding plumbing,
/// mainly loading stack definitions from disk.
#[derive(Debug, thiserror::Error)]
pub enum VoicecostError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Stack file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse stack file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid stack config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, VoicecostError>;

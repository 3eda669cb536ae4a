use crate::config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read directory {path:?}: {reason}")]
    ReadDir { path: PathBuf, reason: String },

    #[error("Failed to create directory {path:?}: {reason}")]
    CreateDir { path: PathBuf, reason: String },

    #[error("No episode number left for {path:?}")]
    EpisodeNumbersExhausted { path: PathBuf },

    #[error("No extra number left in {dir:?}")]
    ExtraNumbersExhausted { dir: PathBuf },

    #[error("Failed to move file {from:?} to {to:?}: {reason}")]
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AppError>;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid size '{value}': expected a number optionally followed by B, K, M or G")]
    InvalidSize { value: String },

    #[error("Invalid size suffix '{suffix}' in '{value}': expected one of B, K, M, G")]
    InvalidSizeSuffix { value: String, suffix: char },

    #[error("Invalid missing-episode range '{value}': {reason}")]
    InvalidRange { value: String, reason: String },

    #[error("Extras directory must be specified if a minimum size is defined")]
    MissingExtrasDir,

    #[error("Invalid season '{value}': expected a number")]
    InvalidSeason { value: String },

    #[error("Invalid title '{value}': {reason}")]
    InvalidTitle { value: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

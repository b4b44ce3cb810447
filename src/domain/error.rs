//! Domain error types

use thiserror::Error;

/// Error when a notification tag does not parse to a channel number
#[derive(Debug, Clone, Error)]
#[error("Invalid tag: \"{input}\". A tag must be a decimal channel number (e.g., 42)")]
pub struct TagParseError {
    pub input: String,
}

/// Error when an unknown sound name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid sound: \"{input}\". Valid sounds are: bing, crackle, down, hand, ripple, upstairs")]
pub struct InvalidSoundError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

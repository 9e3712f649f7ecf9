//! Error types for Bistro

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BistroError>;

#[derive(Error, Debug)]
pub enum BistroError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl BistroError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BistroError::InvalidInput(_) => 3,
            BistroError::Provider(_) => 1,
            BistroError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failures of a meal data provider.
///
/// Kept `Clone` so the fetch service can both return the error and publish it
/// on the event bus.
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {0}: {1}")]
    Status(u16, String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(palkkaseuranta::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(palkkaseuranta::config))]
    Config(String),

    #[error("Calendar resolution error: {0}")]
    #[diagnostic(code(palkkaseuranta::calendar))]
    Calendar(String),

    #[error(transparent)]
    #[diagnostic(code(palkkaseuranta::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(palkkaseuranta::serialization))]
    Serialization(String),
}

// Implement From for TOML serialization errors
impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

// Implement From for TOML deserialization errors
impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Missing environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create calendar resolution errors
pub fn calendar_error(message: &str) -> Error {
    Error::Calendar(message.to_string())
}

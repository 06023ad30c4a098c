use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("HTTP error: {0}")]
    #[diagnostic(code(lukkari::http))]
    Http(#[from] reqwest::Error),

    #[error("Environment error: {0}")]
    #[diagnostic(code(lukkari::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(lukkari::config))]
    Config(String),

    #[error("Data source error: {0}")]
    #[diagnostic(code(lukkari::data_source))]
    DataSource(String),

    #[error("Component error: {0}")]
    #[diagnostic(code(lukkari::component))]
    Component(String),

    #[error("Invalid command: {0}")]
    #[diagnostic(code(lukkari::command), help("type `help` to list the available commands"))]
    Command(String),

    #[error(transparent)]
    #[diagnostic(code(lukkari::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(lukkari::serialization))]
    Serialization(String),

    #[error("Other error: {0}")]
    #[diagnostic(code(lukkari::other))]
    Other(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
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

/// Helper to create data source errors
pub fn data_source_error(message: &str) -> Error {
    Error::DataSource(message.to_string())
}

/// Helper to create component errors
pub fn component_error(message: &str) -> Error {
    Error::Component(message.to_string())
}

/// Helper to create command errors
pub fn command_error(message: &str) -> Error {
    Error::Command(message.to_string())
}

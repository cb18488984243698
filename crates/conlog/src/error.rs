//! Error types for the console logger.

/// Errors produced while parsing severities or loading configuration.
///
/// The logging operations themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid severity '{input}': expected one of debug, info, warn, error")]
    InvalidSeverity { input: String },

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}

//! Logger configuration.
//!
//! Configuration is plain data, typically embedded in a host application's
//! own TOML file:
//!
//! ```toml
//! min_severity = "debug"
//! color = "auto"
//! error_stream = "stderr"
//! ```

use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::severity::Severity;
use crate::sink::Stream;

/// When labels and timestamps are wrapped in ANSI color codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Always,
    Never,
    /// Color only when standard output is a terminal.
    Auto,
}

impl ColorMode {
    /// Resolves the mode against the current process.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

/// Console logger configuration. Every field is optional in TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Lines below this severity are dropped.
    #[serde(default)]
    pub min_severity: Severity,

    #[serde(default)]
    pub color: ColorMode,

    /// Stream that receives `Error` lines. All other severities go to stdout.
    #[serde(default)]
    pub error_stream: Stream,
}

impl LoggerConfig {
    /// Parses a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        let config: LoggerConfig = toml::from_str(content)?;
        Ok(config)
    }
}

//! Leveled console logger.
//!
//! Renders `<LABEL> <TIMESTAMP> <MESSAGE>` lines, colors the label and
//! timestamp with ANSI codes, and drops lines below a per-logger threshold.
//! Loggers are plain values: construct one and hand it (or an `Arc` of it)
//! to the code that needs it, typed as [`Logger`] or the narrower
//! [`MinimumLogger`].

mod clock;
mod config;
mod error;
mod logger;
mod macros;
mod severity;
mod sink;

pub mod color;
pub mod label;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ColorMode, LoggerConfig};
pub use error::Error;
pub use logger::{ConsoleLogger, Logger, MinimumLogger};
pub use severity::Severity;
pub use sink::{ConsoleSink, MemorySink, Sink, Stream};

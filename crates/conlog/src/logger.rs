//! Severity-gated console logger and the capability traits it implements.

use std::fmt::{self, Write as _};
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::clock::{Clock, SystemClock};
use crate::config::LoggerConfig;
use crate::label;
use crate::severity::Severity;
use crate::sink::{ConsoleSink, Sink, Stream};

/// Narrow logging capability: informational and error lines only.
///
/// Take this instead of [`Logger`] where callers must not emit debug or
/// warning output.
pub trait MinimumLogger {
    fn info(&self, args: fmt::Arguments<'_>);
    fn error(&self, args: fmt::Arguments<'_>);
}

/// Full logging capability over all four severities.
pub trait Logger: MinimumLogger {
    fn debug(&self, args: fmt::Arguments<'_>);
    fn warn(&self, args: fmt::Arguments<'_>);
}

macro_rules! forward_logger_impls {
    ($($wrapper:ty),+) => {
        $(
            impl<T: MinimumLogger + ?Sized> MinimumLogger for $wrapper {
                fn info(&self, args: fmt::Arguments<'_>) {
                    (**self).info(args);
                }

                fn error(&self, args: fmt::Arguments<'_>) {
                    (**self).error(args);
                }
            }

            impl<T: Logger + ?Sized> Logger for $wrapper {
                fn debug(&self, args: fmt::Arguments<'_>) {
                    (**self).debug(args);
                }

                fn warn(&self, args: fmt::Arguments<'_>) {
                    (**self).warn(args);
                }
            }
        )+
    };
}

forward_logger_impls!(&T, Box<T>, Arc<T>);

/// Leveled logger writing `<LABEL> <TIMESTAMP> <MESSAGE>\n` lines.
///
/// The threshold lives in an atomic, so a logger shared behind an [`Arc`]
/// can be retuned from any thread without locking. Each logger owns its own
/// threshold; there is no process-wide instance.
pub struct ConsoleLogger {
    min_severity: AtomicU8,
    colored: bool,
    error_stream: Stream,
    clock: Box<dyn Clock>,
    sink: Box<dyn Sink>,
}

impl ConsoleLogger {
    /// Creates a logger with the default configuration: threshold `Info`,
    /// colored output, everything on stdout.
    pub fn new() -> Self {
        Self::from_config(&LoggerConfig::default())
    }

    /// Creates a logger writing to the real console with the system clock.
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::with_parts(config, SystemClock, ConsoleSink)
    }

    /// Creates a logger with an injected clock and sink.
    pub fn with_parts(
        config: &LoggerConfig,
        clock: impl Clock + 'static,
        sink: impl Sink + 'static,
    ) -> Self {
        let colored = config.color.enabled();
        tracing::debug!(
            min_severity = %config.min_severity,
            colored,
            error_stream = ?config.error_stream,
            "console logger created"
        );

        Self {
            min_severity: AtomicU8::new(config.min_severity.as_u8()),
            colored,
            error_stream: config.error_stream,
            clock: Box::new(clock),
            sink: Box::new(sink),
        }
    }

    /// Returns the current threshold.
    pub fn min_severity(&self) -> Severity {
        Severity::from_u8(self.min_severity.load(Ordering::Relaxed))
    }

    /// Sets the threshold. Takes effect for the next call.
    pub fn set_min_severity(&self, severity: Severity) {
        self.min_severity.store(severity.as_u8(), Ordering::Relaxed);
        tracing::debug!(%severity, "console logger threshold updated");
    }

    /// Whether a line at `severity` passes the threshold (inclusive).
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.min_severity()
    }

    /// Renders a complete line without filtering or writing it.
    pub fn render(&self, severity: Severity, args: fmt::Arguments<'_>) -> String {
        let mut line = String::with_capacity(64);
        line.push_str(&label::label(severity, self.colored));
        line.push(' ');
        line.push_str(&label::date_format(&self.clock.now(), self.colored));
        line.push(' ');
        // A failing Display impl truncates the message instead of aborting.
        let _ = line.write_fmt(args);
        line.push('\n');
        line
    }

    /// Renders and writes a line if `severity` passes the threshold.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if !self.enabled(severity) {
            return;
        }
        let line = self.render(severity, args);
        self.sink.write_line(self.stream_for(severity), &line);
    }

    fn stream_for(&self, severity: Severity) -> Stream {
        match severity {
            Severity::Error => self.error_stream,
            _ => Stream::Stdout,
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("min_severity", &self.min_severity())
            .field("colored", &self.colored)
            .field("error_stream", &self.error_stream)
            .finish_non_exhaustive()
    }
}

impl MinimumLogger for ConsoleLogger {
    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Debug, args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warn, args);
    }
}

//! Label and timestamp rendering.
//!
//! Every function here is pure: the same inputs always produce the same
//! string.

use chrono::{DateTime, FixedOffset};

use crate::clock::Clock;
use crate::color::{self, with_color};
use crate::severity::Severity;

/// `strftime` pattern for line timestamps, e.g. `2024-03-05T07:08:09 +0900`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S %z";

/// Color applied to a severity's label. `Debug` is never colored.
pub fn severity_color(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Debug => None,
        Severity::Info => Some(color::CYAN),
        Severity::Warn => Some(color::YELLOW),
        Severity::Error => Some(color::RED),
    }
}

/// Bracketed label for `severity`, e.g. `[WARN]`.
pub fn label(severity: Severity, colored: bool) -> String {
    let text = format!("[{}]", severity.tag());
    match severity_color(severity) {
        Some(code) if colored => with_color(code, &text),
        _ => text,
    }
}

pub fn debug_label() -> String {
    label(Severity::Debug, true)
}

pub fn info_label() -> String {
    label(Severity::Info, true)
}

pub fn warn_label() -> String {
    label(Severity::Warn, true)
}

pub fn error_label() -> String {
    label(Severity::Error, true)
}

/// Formats `time` with [`TIMESTAMP_FORMAT`], wrapped in gray when `colored`.
pub fn date_format(time: &DateTime<FixedOffset>, colored: bool) -> String {
    let stamp = time.format(TIMESTAMP_FORMAT).to_string();
    if colored {
        with_color(color::GRAY, &stamp)
    } else {
        stamp
    }
}

/// Colored timestamp for the clock's current time.
pub fn date_label(clock: &dyn Clock) -> String {
    date_format(&clock.now(), true)
}

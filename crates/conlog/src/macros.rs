//! `format!`-style front ends for the logging operations.
//!
//! Each macro takes a logger expression (anything implementing the matching
//! trait, including references, `Box` and `Arc`) followed by a format string
//! and its arguments.

/// Logs at `Debug` severity.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Logger::debug(&$logger, ::std::format_args!($($arg)+))
    };
}

/// Logs at `Info` severity.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::MinimumLogger::info(&$logger, ::std::format_args!($($arg)+))
    };
}

/// Logs at `Warn` severity.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::Logger::warn(&$logger, ::std::format_args!($($arg)+))
    };
}

/// Logs at `Error` severity.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::MinimumLogger::error(&$logger, ::std::format_args!($($arg)+))
    };
}

//! Output destinations for rendered lines.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Standard stream a line is written to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Receives fully rendered lines. Implementations must not panic or block
/// indefinitely; failures are swallowed.
pub trait Sink: Send + Sync {
    fn write_line(&self, stream: Stream, line: &str);
}

/// Writes to the process's real standard output and error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write_line(&self, stream: Stream, line: &str) {
        // One locked write per line keeps a line contiguous.
        let result = match stream {
            Stream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line.as_bytes()).and_then(|()| out.flush())
            }
            Stream::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(line.as_bytes()).and_then(|()| err.flush())
            }
        };
        // A closed stream is not the caller's problem.
        let _ = result;
    }
}

/// In-memory sink that records each line with its stream.
///
/// Clones share the same buffer, so a test can hand one clone to the logger
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<(Stream, String)>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded line, in write order.
    pub fn lines(&self) -> Vec<(Stream, String)> {
        self.lock().clone()
    }

    /// Concatenation of the lines written to `stream`.
    pub fn contents(&self, stream: Stream) -> String {
        self.lock()
            .iter()
            .filter(|(s, _)| *s == stream)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    /// Drains and returns all recorded lines.
    pub fn take(&self) -> Vec<(Stream, String)> {
        std::mem::take(&mut *self.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Stream, String)>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn write_line(&self, stream: Stream, line: &str) {
        self.lock().push((stream, line.to_owned()));
    }
}

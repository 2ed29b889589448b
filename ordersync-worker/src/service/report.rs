//! Report sink
//!
//! Every failed detail attempt and every processed high-value order produces
//! one plain-text line. Production writes those lines to stdout; tests keep
//! them in memory.

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

/// Longest error text carried into a retry line
const MAX_ERROR_CHARS: usize = 200;

/// One reportable outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    /// A detail fetch attempt failed and will be followed by a delay
    Retry {
        order_id: String,
        attempt: u32,
        error: String,
    },

    /// A high-value order was fetched in detail
    Order {
        order_id: String,
        status: String,
        total: String,
    },
}

impl fmt::Display for ReportEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportEvent::Retry {
                order_id,
                attempt,
                error,
            } => write!(
                f,
                "[retry] order={} attempt={} err={}",
                without_breaks(order_id),
                attempt,
                single_line(error, MAX_ERROR_CHARS)
            ),
            ReportEvent::Order {
                order_id,
                status,
                total,
            } => write!(
                f,
                "[order] {} {} {}",
                without_breaks(order_id),
                without_breaks(status),
                without_breaks(total)
            ),
        }
    }
}

/// Replaces control characters (line breaks included) with spaces
fn without_breaks(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Folds all whitespace runs into single spaces and caps the length
fn single_line(text: &str, max_chars: usize) -> String {
    let folded = without_breaks(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if folded.chars().count() <= max_chars {
        return folded;
    }

    let mut cut: String = folded.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

/// Destination for report lines
pub trait ReportSink: Send + Sync {
    fn report(&self, event: ReportEvent);
}

/// Writes each event as one line on stdout
///
/// Write failures (e.g. a closed pipe) drop the line; the first one is
/// logged as a warning.
#[derive(Debug, Default)]
pub struct StdoutReportSink {
    write_failed: AtomicBool,
}

impl StdoutReportSink {
    fn write_event(&self, out: &mut impl Write, event: &ReportEvent) {
        if let Err(e) = writeln!(out, "{}", event) {
            if !self.write_failed.swap(true, Ordering::Relaxed) {
                warn!("Failed to write report line to stdout: {}", e);
            }
        }
    }
}

impl ReportSink for StdoutReportSink {
    fn report(&self, event: ReportEvent) {
        self.write_event(&mut std::io::stdout().lock(), &event);
    }
}

/// Keeps events in memory
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct InMemoryReportSink {
    events: std::sync::Arc<std::sync::Mutex<Vec<ReportEvent>>>,
}

#[cfg(test)]
impl InMemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.events().iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
impl ReportSink for InMemoryReportSink {
    fn report(&self, event: ReportEvent) {
        self.events.lock().unwrap().push(event);
    }
}

//! Where internal-failure diagnostics go.
//!
//! Validators write exactly one line per `ErrorException` outcome; the display
//! formatter writes one line when it absorbs a failure. Emission is
//! best-effort and never changes a result.

use std::sync::Arc;

use parking_lot::Mutex;

/// Receives diagnostic lines from validators.
pub trait DiagnosticSink {
    /// Records one diagnostic line produced by `operation`.
    fn emit(&self, operation: &'static str, line: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn emit(&self, operation: &'static str, line: &str) {
        (**self).emit(operation, line);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Box<T> {
    fn emit(&self, operation: &'static str, line: &str) {
        (**self).emit(operation, line);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn emit(&self, operation: &'static str, line: &str) {
        (**self).emit(operation, line);
    }
}

// ============================================================================
// TRACING SINK
// ============================================================================

/// Forwards diagnostics to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, operation: &'static str, line: &str) {
        tracing::debug!(target: "nebula_registration", operation, "{line}");
    }
}

// ============================================================================
// SILENT SINK
// ============================================================================

/// Drops every diagnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn emit(&self, _operation: &'static str, _line: &str) {}
}

// ============================================================================
// MEMORY SINK
// ============================================================================

/// Keeps every diagnostic in memory, prefixed with the operation name.
///
/// # Examples
///
/// ```
/// use nebula_registration::{MemorySink, Registration, ValidationResult};
///
/// let sink = MemorySink::new();
/// let registration = Registration::new().with_sink(&sink);
///
/// assert_eq!(registration.validate_date("20240230", true), ValidationResult::ErrorException);
/// assert_eq!(sink.len(), 1);
/// assert!(sink.lines()[0].starts_with("validate_date: "));
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A snapshot of the recorded lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, operation: &'static str, line: &str) {
        self.lines.lock().push(format!("{operation}: {line}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.emit("validate_id", "first");
        sink.emit("display_mobile", "second");

        assert_eq!(
            sink.lines(),
            vec!["validate_id: first".to_owned(), "display_mobile: second".to_owned()]
        );

        sink.clear();
        assert_eq!(sink.len(), 0);
    }

    #[test]
    fn shared_memory_sink() {
        let sink = Arc::new(MemorySink::new());
        let as_dyn: Arc<dyn DiagnosticSink> = sink.clone();
        as_dyn.emit("validate_date", "boom");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn silent_and_tracing_sinks_do_not_panic() {
        SilentSink.emit("validate_id", "ignored");
        TracingSink.emit("validate_id", "no subscriber installed");
    }
}

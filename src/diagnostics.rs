//! Non-fatal diagnostics emitted while resolving inputs.
//!
//! Resolution never aborts on a missing directory or an empty pattern; it
//! reports a [`Diagnostic`] to whatever [`DiagnosticSink`] the caller hands
//! in and carries on. The binary uses [`LogSink`]; tests and embedding hosts
//! use [`DiagnosticCollector`] to inspect what was reported.

use std::fmt;

/// What went wrong with a single input entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A walked root directory does not exist.
    MissingRoot,
    /// A glob pattern matched no files.
    NoMatches,
}

/// A warning about one input entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// The input entry as the caller wrote it.
    pub input: String,
}

impl Diagnostic {
    pub fn missing_root(input: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::MissingRoot,
            input: input.into(),
        }
    }

    pub fn no_matches(input: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::NoMatches,
            input: input.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::MissingRoot => write!(f, "directory not found: {}", self.input),
            DiagnosticKind::NoMatches => write!(f, "pattern matched no files: {}", self.input),
        }
    }
}

/// Receiver for warning-level diagnostics.
pub trait DiagnosticSink {
    fn warn(&mut self, diagnostic: Diagnostic);
}

/// Writes every diagnostic through `log!("warning"; ..)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&mut self, diagnostic: Diagnostic) {
        crate::log!("warning"; "{}", diagnostic);
    }
}

/// Keeps diagnostics in memory, in the order they were reported.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

impl DiagnosticSink for DiagnosticCollector {
    fn warn(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let missing = Diagnostic::missing_root("public/generated");
        assert_eq!(missing.to_string(), "directory not found: public/generated");

        let empty = Diagnostic::no_matches("assets/**/*.webp");
        assert_eq!(empty.to_string(), "pattern matched no files: assets/**/*.webp");
    }

    #[test]
    fn test_collector_keeps_order() {
        let mut collector = DiagnosticCollector::new();
        collector.warn(Diagnostic::missing_root("a"));
        collector.warn(Diagnostic::no_matches("b/*"));

        assert_eq!(collector.len(), 2);
        assert_eq!(collector.diagnostics()[0].kind, DiagnosticKind::MissingRoot);
        assert_eq!(collector.diagnostics()[1].input, "b/*");
    }
}

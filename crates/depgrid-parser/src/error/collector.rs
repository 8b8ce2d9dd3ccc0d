//! Collector for accumulating diagnostics during a processing phase.

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics so a phase can report every problem at once
/// instead of stopping at the first.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Moves every diagnostic of `other` into this collector.
    pub fn absorb(&mut self, other: DiagnosticCollector) {
        self.has_errors |= other.has_errors;
        self.diagnostics.extend(other.diagnostics);
    }

    /// Finish collection.
    ///
    /// - If any error was emitted, returns `Err(ParseError)` with all diagnostics.
    /// - Otherwise returns the warnings, so callers can still surface them.
    pub fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(self.diagnostics)
        }
    }
}

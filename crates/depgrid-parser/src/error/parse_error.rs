//! The ParseError type for wrapping parsing diagnostics.

use std::fmt;

use crate::error::Diagnostic;

/// Error returned when a graph description cannot be parsed.
///
/// Holds every diagnostic collected in the failing pass, errors and
/// warnings alike, in source order.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity().is_error())
            .count()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{}", first)?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_error_display_single() {
        let err: ParseError = Diagnostic::error("unexpected token")
            .with_code(ErrorCode::E100)
            .into();

        assert_eq!(err.to_string(), "error[E100]: unexpected token");
        assert_eq!(err.error_count(), 1);
    }

    #[test]
    fn test_parse_error_display_multiple() {
        let err: ParseError = vec![
            Diagnostic::error("first error"),
            Diagnostic::warning("a warning"),
            Diagnostic::error("second error"),
        ]
        .into();

        assert_eq!(err.to_string(), "error: first error (+2 more)");
        assert_eq!(err.error_count(), 2);
    }
}

//! The core diagnostic type for the depgrid error system.
//!
//! A [`Diagnostic`] represents a single error or warning with optional
//! error code, multiple labeled source spans, and help text.

use std::fmt;

use crate::{
    error::{Severity, error_code::ErrorCode, label::Label},
    span::Span,
};

/// A rich diagnostic message with source location information.
///
/// # Example
///
/// ```
/// # use depgrid_parser::error::{Diagnostic, ErrorCode};
/// # use depgrid_parser::Span;
///
/// let diag = Diagnostic::error("missing edge target")
///     .with_code(ErrorCode::E101)
///     .with_label(Span::new(0..10), "expected a name after `->`")
///     .with_help("write the dependent after the arrow: `lib.sol -> app.sol`");
///
/// assert_eq!(diag.to_string(), "error[E101]: missing edge target");
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// All labels, primary first in the order they were added.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// The span of the first primary label, if any.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(Label::span)
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_defaults() {
        let diag = Diagnostic::error("test error");

        assert!(diag.severity().is_error());
        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
        assert!(diag.primary_span().is_none());
    }

    #[test]
    fn test_diagnostic_labels() {
        let diag = Diagnostic::error("node `a` is declared multiple times")
            .with_code(ErrorCode::E200)
            .with_secondary_label(Span::new(5..6), "first declared here")
            .with_label(Span::new(12..13), "duplicate declaration");

        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_secondary());
        assert_eq!(diag.primary_span(), Some(Span::new(12..13)));
    }

    #[test]
    fn test_diagnostic_display() {
        let with_code = Diagnostic::error("unterminated string literal").with_code(ErrorCode::E001);
        let without_code = Diagnostic::warning("edge names undeclared node `x`");

        assert_eq!(with_code.to_string(), "error[E001]: unterminated string literal");
        assert_eq!(
            without_code.to_string(),
            "warning: edge names undeclared node `x`"
        );
    }

    #[test]
    fn test_diagnostic_help() {
        let diag = Diagnostic::warning("unused").with_help("remove it");

        assert!(diag.severity().is_warning());
        assert_eq!(diag.help(), Some("remove it"));
    }
}

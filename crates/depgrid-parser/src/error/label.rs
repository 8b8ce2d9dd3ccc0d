//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a span of the graph description.
///
/// A diagnostic usually carries one primary label (where the problem is)
/// and optionally secondary labels for related locations, such as the
/// first declaration of a node declared twice:
///
/// ```text
/// error[E200]: node `lib.sol` is declared multiple times
///   |
/// 1 | node lib.sol
///   |      ------- first declared here
/// 4 | node lib.sol
///   |      ^^^^^^^ duplicate declaration
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(5..12), "duplicate declaration");

        assert_eq!(label.span(), Span::new(5..12));
        assert_eq!(label.message(), "duplicate declaration");
        assert!(label.is_primary());
        assert!(!label.is_secondary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(0..4), "first declared here");

        assert!(label.is_secondary());
        assert_eq!(label.span().len(), 4);
    }
}

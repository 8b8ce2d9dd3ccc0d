//! Error codes for the depgrid diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Token errors (names, strings, stray characters)
//! - `E1xx` - Statement errors
//! - `E2xx` - Declaration errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Token Errors (E0xx)
    // =========================================================================
    /// Unterminated string literal.
    ///
    /// A quoted node name was opened but never closed on the same line.
    E001,

    /// Unexpected character.
    ///
    /// Something other than whitespace, a comment, `;` or a newline follows
    /// a complete statement.
    E002,

    /// Invalid escape sequence.
    ///
    /// Only `\"` and `\\` are allowed inside quoted names.
    E003,

    // =========================================================================
    // Statement Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// A line does not start a `root`, `node` or edge statement.
    E100,

    /// Missing edge target.
    ///
    /// An edge arrow `->` is not followed by the dependent's name.
    E101,

    /// Missing declared name.
    ///
    /// A `root` or `node` keyword is not followed by a name.
    E102,

    // =========================================================================
    // Declaration Errors (E2xx)
    // =========================================================================
    /// Duplicate node declaration.
    ///
    /// The same name was declared with `node` more than once.
    E200,

    /// Duplicate root declaration.
    ///
    /// The same name was declared with `root` more than once.
    E201,

    /// Undeclared edge endpoint.
    ///
    /// An edge names a node that is never declared. Reported as a warning;
    /// the endpoint becomes a dangling reference.
    E202,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unterminated string literal",
            ErrorCode::E002 => "unexpected character",
            ErrorCode::E003 => "invalid escape sequence",
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "missing edge target",
            ErrorCode::E102 => "missing declared name",
            ErrorCode::E200 => "duplicate node declaration",
            ErrorCode::E201 => "duplicate root declaration",
            ErrorCode::E202 => "undeclared edge endpoint",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
        assert_eq!(ErrorCode::E202.to_string(), "E202");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "unterminated string literal");
        assert_eq!(ErrorCode::E200.description(), "duplicate node declaration");
    }
}

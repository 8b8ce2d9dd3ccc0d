//! Error and diagnostic system for the depgrid parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Example
//!
//! ```
//! # use depgrid_parser::error::{Diagnostic, ErrorCode};
//! # use depgrid_parser::Span;
//!
//! let diag = Diagnostic::error("node `app.sol` is declared multiple times")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(30..41), "duplicate declaration")
//!     .with_secondary_label(Span::new(5..16), "first declared here")
//!     .with_help("remove one of the declarations");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;

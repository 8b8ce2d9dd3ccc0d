//! Parser for the depgrid graph description language.
//!
//! A description declares nodes with `root NAME` / `node NAME` and
//! dependencies with `DEPENDENCY -> DEPENDENT`:
//!
//! ```
//! let doc = depgrid_parser::parse(
//!     "root app.sol\nnode lib.sol\nlib.sol -> app.sol\n",
//! )
//! .unwrap();
//!
//! assert_eq!(doc.nodes().len(), 2);
//! assert_eq!(doc.roots().count(), 1);
//! assert_eq!(doc.edges().len(), 1);
//! ```
//!
//! Parsing runs two passes. The statement pass reports syntax errors and
//! recovers at the end of each broken line; the validation pass reports
//! duplicate declarations and warns about undeclared edge endpoints.
//! Diagnostics from both passes are returned together.

mod document;
pub mod error;
mod parser;
mod span;
mod validate;

use log::{debug, info};

pub use document::{GraphDocument, NodeDecl};
pub use error::ParseError;
pub use span::Span;

/// Parse a graph description.
///
/// # Errors
///
/// Returns a [`ParseError`] holding every diagnostic when the source has
/// at least one error. Warnings alone do not fail parsing; they are
/// available from [`GraphDocument::warnings`].
pub fn parse(source: &str) -> Result<GraphDocument, ParseError> {
    let (statements, mut diagnostics) = parser::parse_statements(source);
    debug!(statements = statements.len(); "Parsed statements");

    let (document, validation) = validate::build_document(statements);
    diagnostics.absorb(validation);

    let warnings = diagnostics.finish()?;
    info!(
        nodes = document.nodes().len(),
        edges = document.edges().len(),
        warnings = warnings.len();
        "Graph description parsed"
    );

    Ok(document.with_warnings(warnings))
}

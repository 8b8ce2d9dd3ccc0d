//! Error types for depgrid operations.

use std::io;

use thiserror::Error;

use depgrid_core::identifier::Id;
use depgrid_parser::ParseError;

/// The main error type for depgrid operations.
///
/// The `Parse` variant keeps the source text next to the diagnostics so a
/// front end can render labelled snippets.
#[derive(Debug, Error)]
pub enum DepgridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Dependency cycle between {}", format_members(.members))]
    Cycle { members: Vec<Id> },

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for DepgridError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl DepgridError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

fn format_members(members: &[Id]) -> String {
    members
        .iter()
        .map(|id| format!("`{id}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

//! Export of laid-out graphs.
//!
//! This module provides the [`Exporter`] trait that turns a [`Dag`] into
//! text. It is the last stage of the depgrid pipeline.
//!
//! ```text
//! Source Text
//!     ↓ parse
//! GraphDocument
//!     ↓ layout
//! Dag
//!     ↓ export (this module)
//! JSON / text grid
//! ```
//!
//! # Available Backends
//!
//! - [`json`]: the `Dag` structure via `serde_json`
//! - [`text`]: a fixed-width table of the grid
//!
//! Export operations return [`Error`], which converts into
//! [`DepgridError::Export`](crate::DepgridError::Export) at the crate boundary.

pub mod json;
pub mod text;

use serde::Serialize;

use depgrid_core::graph::Dag;

use crate::config::{OutputConfig, OutputFormat};

/// Abstraction for export backends.
pub trait Exporter {
    /// Renders `dag` in the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the DAG cannot be converted.
    fn export<T: Serialize>(&self, dag: &Dag<T>) -> Result<String, Error>;
}

/// Exports `dag` with the backend selected by `config`.
pub fn export_with<T: Serialize>(dag: &Dag<T>, config: &OutputConfig) -> Result<String, Error> {
    match config.format() {
        OutputFormat::Json => json::JsonExporter::new(config.pretty()).export(dag),
        OutputFormat::Text => text::TextExporter::new().export(dag),
    }
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// Serialization of the DAG failed.
    Serialize(serde_json::Error),
    /// A rendering failure described by `message`.
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "Serialization error: {err}"),
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Render(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}

//! The parsed form of a graph description.

use serde::Serialize;

use depgrid_core::{graph::Edge, identifier::Id};

use crate::{error::Diagnostic, span::Span};

/// A declared entity.
///
/// This is the payload the CLI lays out; it serializes as
/// `{"id": "...", "root": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDecl {
    id: Id,
    #[serde(skip)]
    span: Span,
    #[serde(rename = "root")]
    pub(crate) is_root: bool,
}

impl NodeDecl {
    pub(crate) fn new(id: Id, span: Span, is_root: bool) -> Self {
        Self { id, span, is_root }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// Span of the name in the first declaration.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns `true` if the node was declared with `root`.
    pub fn is_root(&self) -> bool {
        self.is_root
    }
}

/// Declared nodes and edges of one graph description, in source order.
#[derive(Debug, Clone, Default)]
pub struct GraphDocument {
    nodes: Vec<NodeDecl>,
    edges: Vec<Edge>,
    warnings: Vec<Diagnostic>,
}

impl GraphDocument {
    pub(crate) fn new(nodes: Vec<NodeDecl>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn with_warnings(mut self, warnings: Vec<Diagnostic>) -> Self {
        self.warnings = warnings;
        self
    }

    /// Every declared node, ordered by first declaration.
    pub fn nodes(&self) -> &[NodeDecl] {
        &self.nodes
    }

    /// Every edge, in source order. Endpoints may be undeclared.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Nodes declared with `root`, in declaration order.
    pub fn roots(&self) -> impl Iterator<Item = &NodeDecl> {
        self.nodes.iter().filter(|node| node.is_root)
    }

    /// Returns `true` if at least one node was declared with `root`.
    pub fn has_roots(&self) -> bool {
        self.roots().next().is_some()
    }

    /// Looks up a declared node.
    pub fn node(&self, id: Id) -> Option<&NodeDecl> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Non-fatal diagnostics produced while parsing.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}

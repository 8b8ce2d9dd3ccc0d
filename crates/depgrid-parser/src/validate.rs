//! Turns parsed statements into a [`GraphDocument`].

use std::collections::{HashMap, HashSet};

use log::debug;

use depgrid_core::{graph::Edge, identifier::Id};

use crate::{
    document::{GraphDocument, NodeDecl},
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    parser::{DeclKind, Name, Statement},
    span::Span,
};

/// Build the document, reporting duplicate declarations and edges that
/// name undeclared nodes.
///
/// Declaring a node both with `node` and with `root` is allowed and
/// marks it as a root. Edges may name nodes declared later in the source.
pub(crate) fn build_document(statements: Vec<Statement>) -> (GraphDocument, DiagnosticCollector) {
    let mut diagnostics = DiagnosticCollector::new();
    let mut nodes: Vec<NodeDecl> = Vec::new();
    let mut index_of: HashMap<Id, usize> = HashMap::new();
    let mut first_root: HashMap<Id, Span> = HashMap::new();
    let mut first_node: HashMap<Id, Span> = HashMap::new();
    let mut edges = Vec::new();
    let mut endpoints: Vec<Name> = Vec::new();

    for statement in statements {
        match statement {
            Statement::Declare { kind, name } => {
                let id = Id::new(&name.value);
                let (seen, code, keyword) = match kind {
                    DeclKind::Root => (&mut first_root, ErrorCode::E201, "root"),
                    DeclKind::Node => (&mut first_node, ErrorCode::E200, "node"),
                };

                if let Some(first) = seen.get(&id) {
                    diagnostics.emit(
                        Diagnostic::error(format!(
                            "`{}` is declared with `{keyword}` more than once",
                            name.value
                        ))
                        .with_code(code)
                        .with_secondary_label(*first, "first declared here")
                        .with_label(name.span, "declared again here")
                        .with_help("remove the repeated declaration"),
                    );
                    continue;
                }
                seen.insert(id, name.span);

                match index_of.get(&id) {
                    Some(&index) => {
                        if kind == DeclKind::Root {
                            nodes[index].is_root = true;
                        }
                    }
                    None => {
                        index_of.insert(id, nodes.len());
                        nodes.push(NodeDecl::new(id, name.span, kind == DeclKind::Root));
                    }
                }
            }
            Statement::Edge { from, to } => {
                edges.push(Edge::new(Id::new(&from.value), Id::new(&to.value)));
                endpoints.push(from);
                endpoints.push(to);
            }
        }
    }

    let mut reported = HashSet::new();
    for name in endpoints {
        let id = Id::new(&name.value);
        if index_of.contains_key(&id) || !reported.insert(id) {
            continue;
        }
        debug!(name = name.value.as_str(); "Edge endpoint is not declared");
        diagnostics.emit(
            Diagnostic::warning(format!("edge names undeclared node `{}`", name.value))
                .with_code(ErrorCode::E202)
                .with_label(name.span, "not declared")
                .with_help("declare it with `node`, otherwise it is kept as a dangling reference"),
        );
    }

    (GraphDocument::new(nodes, edges), diagnostics)
}

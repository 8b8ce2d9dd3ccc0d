//! depgrid - deterministic grid layout for dependency graphs.
//!
//! Turns a possibly disconnected directed graph of named entities (files
//! and their imports, contracts and their bases) into a sparse 2D grid:
//! roots in column 0, every dependency to the right of everything that
//! depends on it, and each connected part of the graph on its own band of
//! rows.
//!
//! The engine is generic over the entity payload; see [`layout::build_dag`].
//! [`GridBuilder`] wraps it with configuration, cycle validation, root
//! inference and export, and can read the plain-text `.dep` format.

pub mod config;
pub mod export;
pub mod grid;
pub mod layout;
pub mod structure;

mod error;

pub use depgrid_core::{graph, identifier};
pub use depgrid_parser::{GraphDocument, NodeDecl};

pub use error::DepgridError;

use log::{debug, info, trace, warn};
use serde::Serialize;

use config::{AppConfig, CyclePolicy};
use graph::{Dag, Edge};
use identifier::Id;
use structure::DependencyGraph;

/// Builder for parsing, laying out and exporting dependency graphs.
///
/// # Examples
///
/// ```
/// use depgrid::{GridBuilder, config::AppConfig};
///
/// let source = "root app.sol\nnode lib.sol\nlib.sol -> app.sol\n";
///
/// let builder = GridBuilder::new(AppConfig::default());
/// let document = builder.parse(source).expect("Failed to parse");
/// let dag = builder.layout(&document).expect("Failed to lay out");
/// let json = builder.export(&dag).expect("Failed to export");
///
/// assert!(json.contains("\"xPos\": 1"));
/// ```
#[derive(Debug, Default)]
pub struct GridBuilder {
    config: AppConfig,
}

impl GridBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a `.dep` graph description.
    ///
    /// Warnings (edges naming undeclared nodes) do not fail parsing; they are
    /// kept on the returned document for the caller to report.
    ///
    /// # Errors
    ///
    /// Returns [`DepgridError::Parse`] with every diagnostic and the source
    /// if the description has errors.
    pub fn parse(&self, source: &str) -> Result<GraphDocument, DepgridError> {
        info!("Parsing graph description");

        let document = depgrid_parser::parse(source)
            .map_err(|err| DepgridError::new_parse_error(err, source))?;

        debug!(warnings = document.warnings().len(); "Graph description parsed successfully");
        trace!(document:?; "Parsed document");

        Ok(document)
    }

    /// Lay out a parsed document, using its `root` declarations as roots.
    ///
    /// # Errors
    ///
    /// See [`GridBuilder::build`].
    pub fn layout(&self, document: &GraphDocument) -> Result<Dag<NodeDecl>, DepgridError> {
        let roots: Vec<Id> = document.roots().map(NodeDecl::id).collect();
        self.build(document.nodes(), &roots, document.edges(), NodeDecl::id)
    }

    /// Lay out arbitrary entities.
    ///
    /// `id` extracts the identity of an entity. When `roots` is empty and
    /// root inference is enabled, the roots are the entities no other
    /// entity depends on.
    ///
    /// # Errors
    ///
    /// Returns [`DepgridError::Cycle`] if the edges contain a cycle and the
    /// cycle policy is [`CyclePolicy::Reject`], and [`DepgridError::Layout`]
    /// if there is nothing to seed the layout with.
    ///
    /// # Examples
    ///
    /// ```
    /// use depgrid::{GridBuilder, graph::Edge, identifier::Id};
    ///
    /// #[derive(Clone)]
    /// struct SourceFile {
    ///     path: &'static str,
    /// }
    ///
    /// let files = [SourceFile { path: "app.sol" }, SourceFile { path: "lib.sol" }];
    /// let edges = [Edge::new("lib.sol", "app.sol")];
    ///
    /// let dag = GridBuilder::default()
    ///     .build(&files, &[], &edges, |file| Id::new(file.path))
    ///     .unwrap();
    ///
    /// assert_eq!(dag.node(Id::new("app.sol")).unwrap().x_pos(), 0);
    /// assert_eq!(dag.node(Id::new("lib.sol")).unwrap().x_pos(), 1);
    /// ```
    pub fn build<T: Clone>(
        &self,
        entities: &[T],
        roots: &[Id],
        edges: &[Edge],
        id: impl Fn(&T) -> Id,
    ) -> Result<Dag<T>, DepgridError> {
        info!(entities = entities.len(), edges = edges.len(); "Building grid layout");
        let graph = DependencyGraph::new(entities, edges, id);

        if let Some(members) = structure::find_cycle(&graph) {
            match self.config.layout().cycle_policy() {
                CyclePolicy::Reject => return Err(DepgridError::Cycle { members }),
                CyclePolicy::Allow => {
                    warn!(members:?; "Dependency cycle, its members will be left out");
                }
            }
        }

        let roots = self.resolve_roots(roots, &graph)?;
        let dag = layout::assemble(entities, &roots, &graph);

        info!(
            nodes = dag.len(),
            layers = dag.max_x().map_or(0, |x| x + 1),
            rows = dag.max_y().map_or(0, |y| y + 1);
            "Grid layout calculated"
        );
        Ok(dag)
    }

    /// Entities no other entity depends on, in input order.
    pub fn infer_roots<T>(entities: &[T], edges: &[Edge], id: impl Fn(&T) -> Id) -> Vec<Id> {
        DependencyGraph::new(entities, edges, id).roots().collect()
    }

    /// Render `dag` in the configured output format, filling placeholders
    /// first if configured.
    ///
    /// # Errors
    ///
    /// Returns [`DepgridError::Export`] if rendering fails.
    pub fn export<T: Clone + Serialize>(&self, dag: &Dag<T>) -> Result<String, DepgridError> {
        let output = self.config.output();
        info!(format:% = output.format(); "Exporting grid");

        let rendered = if output.fill_placeholders() {
            let occupancy = grid::occupancy(dag);
            debug!(
                occupied = occupancy.occupied(),
                empty = occupancy.empty();
                "Filling empty grid cells"
            );
            export::export_with(&grid::fill_placeholders(dag), output)?
        } else {
            export::export_with(dag, output)?
        };
        Ok(rendered)
    }

    fn resolve_roots(
        &self,
        roots: &[Id],
        graph: &DependencyGraph<'_>,
    ) -> Result<Vec<Id>, DepgridError> {
        if !roots.is_empty() {
            for &root in roots.iter().filter(|&&root| graph.is_dependency(root)) {
                warn!(root:%; "Root is a dependency of another entity");
            }
            return Ok(roots.to_vec());
        }

        if graph.entity_count() == 0 {
            return Ok(Vec::new());
        }

        if !self.config.layout().infer_roots() {
            return Err(DepgridError::Layout(
                "no roots given and root inference is disabled".to_string(),
            ));
        }

        let inferred: Vec<Id> = graph.roots().collect();
        debug!(roots = inferred.len(); "Inferred roots");
        if inferred.is_empty() {
            return Err(DepgridError::Layout(
                "every entity is a dependency of another, no root can be inferred".to_string(),
            ));
        }
        Ok(inferred)
    }
}

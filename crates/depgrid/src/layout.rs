//! Grid layout of dependency graphs.
//!
//! The layout runs in three steps:
//!
//! ```text
//! roots + edges
//!     ↓ partition      (layout::partition)
//! clusters of roots
//!     ↓ assign_layers  (layout::layering), once per cluster
//! per-cluster nodes with local rows
//!     ↓ stack clusters (this module)
//! Dag
//! ```
//!
//! `x_pos` is the layer: roots sit in layer 0 and every dependency sits in a
//! higher layer than all of its dependents. Clusters are stacked top to
//! bottom in ascending cluster index, each on its own band of rows.

pub mod layering;
pub mod partition;

use std::collections::HashSet;

use log::{debug, trace};

use depgrid_core::{
    graph::{Dag, Edge, GraphNode},
    identifier::Id,
};

pub use layering::assign_layers;
pub use partition::{ClusterMap, partition};

use crate::structure::DependencyGraph;

/// Lays out `entities` on a grid, seeded by `roots`.
///
/// `id` extracts the identity of an entity. Edges point from a dependency
/// to its dependent and may name ids that are not entities; those are
/// placed without an element. Entities that no root depends on,
/// transitively, are left out. Repeated roots are ignored after their
/// first occurrence.
///
/// The output is fully determined by the order of the inputs. This never
/// fails and always terminates, even when the edges contain cycles.
///
/// # Examples
///
/// ```
/// use depgrid::layout::build_dag;
/// use depgrid_core::{graph::Edge, identifier::Id};
///
/// let files = ["app.sol", "lib.sol"];
/// let edges = [Edge::new("lib.sol", "app.sol")];
///
/// let dag = build_dag(&files, &[Id::new("app.sol")], &edges, |f| Id::new(f));
///
/// let lib = dag.node(Id::new("lib.sol")).unwrap();
/// assert_eq!((lib.x_pos(), lib.y_pos()), (1, 0));
/// ```
pub fn build_dag<T: Clone>(
    entities: &[T],
    roots: &[Id],
    edges: &[Edge],
    id: impl Fn(&T) -> Id,
) -> Dag<T> {
    let graph = DependencyGraph::new(entities, edges, id);
    assemble(entities, roots, &graph)
}

/// [`build_dag`] over an already indexed graph.
pub(crate) fn assemble<T: Clone>(
    entities: &[T],
    roots: &[Id],
    graph: &DependencyGraph<'_>,
) -> Dag<T> {
    let mut seen = HashSet::new();
    let roots: Vec<Id> = roots.iter().copied().filter(|id| seen.insert(*id)).collect();

    let clusters = partition(&roots, graph);
    let mut indices: Vec<usize> = clusters.values().copied().collect();
    indices.sort_unstable();
    indices.dedup();
    debug!(roots = roots.len(), clusters = indices.len(); "Partitioned roots");

    let mut nodes = Vec::new();
    let mut offset = 0;
    for index in indices {
        let cluster_roots: Vec<Id> = roots
            .iter()
            .copied()
            .filter(|id| clusters.get(id) == Some(&index))
            .collect();

        let cluster_nodes = assign_layers(entities, &cluster_roots, graph);
        let Some(max_y) = cluster_nodes.iter().map(GraphNode::y_pos).max() else {
            continue;
        };

        trace!(cluster = index, offset, nodes = cluster_nodes.len(); "Cluster laid out");
        nodes.extend(cluster_nodes.into_iter().map(|node| node.offset_by(offset)));
        offset += max_y + 1;
    }

    let placed: HashSet<Id> = nodes.iter().map(GraphNode::id).collect();
    for id in graph.entity_ids().filter(|id| !placed.contains(id)) {
        debug!(id:%; "Entity is not reachable from any root");
    }

    Dag::new(nodes, graph.edges().to_vec())
}

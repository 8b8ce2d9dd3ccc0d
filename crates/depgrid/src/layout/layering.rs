//! Layer assignment within one cluster.

use std::collections::HashSet;

use log::trace;

use depgrid_core::{graph::GraphNode, identifier::Id};

use crate::structure::DependencyGraph;

/// Places `roots` in layer 0 and everything they transitively depend on in
/// the layers after it.
///
/// A dependency joins layer `k + 1` once every entity depending on it sits
/// in a layer `<= k`, so each dependency lands strictly to the right of all
/// of its dependents. Candidates are visited in edge input order and rows
/// are handed out in that order; nothing is sorted.
///
/// Ids that appear only in edges are placed with no element. A dependent
/// is ignored when checking whether a dependency is ready only if it can
/// never be placed, that is, no entity is reachable from it through its
/// own dependents.
pub fn assign_layers<T: Clone>(
    entities: &[T],
    roots: &[Id],
    graph: &DependencyGraph<'_>,
) -> Vec<GraphNode<T>> {
    let mut placed: HashSet<Id> = HashSet::new();
    let mut nodes = Vec::new();

    let mut seen = HashSet::new();
    let mut layer: Vec<Id> = roots
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect();

    let mut x_pos = 0;
    while !layer.is_empty() {
        trace!(x_pos, width = layer.len(); "Placing layer");
        for (y_relative, &id) in layer.iter().enumerate() {
            placed.insert(id);
            let element = graph
                .entity_index(id)
                .and_then(|index| entities.get(index))
                .cloned();
            nodes.push(GraphNode::new(id, x_pos, y_relative, element));
        }

        layer = next_layer(&placed, graph);
        x_pos += 1;
    }

    nodes
}

/// Dependencies of placed ids whose every placeable dependent is placed.
fn next_layer(placed: &HashSet<Id>, graph: &DependencyGraph<'_>) -> Vec<Id> {
    let mut seen = HashSet::new();
    graph
        .edges()
        .iter()
        .filter(|edge| placed.contains(&edge.to()))
        .map(|edge| edge.from())
        .filter(|id| seen.insert(*id))
        .filter(|id| !placed.contains(id))
        .filter(|&id| {
            graph
                .dependents(id)
                .filter(|&dependent| graph.is_placeable(dependent))
                .all(|dependent| placed.contains(&dependent))
        })
        .collect()
}

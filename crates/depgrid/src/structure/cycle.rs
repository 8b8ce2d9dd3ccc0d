//! Dependency cycle detection.

use indexmap::IndexMap;
use log::trace;
use petgraph::{
    algo::{tarjan_scc, toposort},
    graph::{DiGraph, NodeIndex},
};

use depgrid_core::identifier::Id;

use super::DependencyGraph;

/// Finds one dependency cycle among the edges of `graph`.
///
/// Returns the members of the strongly connected component that contains
/// the cycle, ordered by first appearance in the edge list, or `None` when
/// the edges form a DAG. A self loop is a cycle of one.
pub fn find_cycle(graph: &DependencyGraph<'_>) -> Option<Vec<Id>> {
    let mut digraph: DiGraph<Id, ()> = DiGraph::new();
    let mut node_map: IndexMap<Id, NodeIndex> = IndexMap::new();

    for edge in graph.edges() {
        let from = *node_map
            .entry(edge.from())
            .or_insert_with(|| digraph.add_node(edge.from()));
        let to = *node_map
            .entry(edge.to())
            .or_insert_with(|| digraph.add_node(edge.to()));
        digraph.add_edge(from, to, ());
    }

    let offending = toposort(&digraph, None).err()?.node_id();
    trace!(node:% = digraph[offending]; "Edges are not acyclic");

    let mut component = tarjan_scc(&digraph)
        .into_iter()
        .find(|component| component.contains(&offending))?;
    // Node indices follow first appearance in the edge list.
    component.sort();

    Some(component.into_iter().map(|idx| digraph[idx]).collect())
}

#[cfg(test)]
mod tests {
    use depgrid_core::graph::Edge;

    use super::*;

    fn cycle_of(edges: &[Edge]) -> Option<Vec<String>> {
        let graph = DependencyGraph::from_ids(Vec::new(), edges);
        find_cycle(&graph).map(|members| members.iter().map(Id::to_string).collect())
    }

    #[test]
    fn test_acyclic() {
        let edges = vec![
            Edge::new("b", "a"),
            Edge::new("c", "a"),
            Edge::new("d", "b"),
            Edge::new("d", "c"),
        ];

        assert_eq!(cycle_of(&edges), None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(cycle_of(&[]), None);
    }

    #[test]
    fn test_two_node_cycle() {
        let edges = vec![Edge::new("a", "b"), Edge::new("b", "a")];

        assert_eq!(cycle_of(&edges), Some(vec!["a".into(), "b".into()]));
    }

    #[test]
    fn test_self_loop() {
        let edges = vec![Edge::new("x", "y"), Edge::new("y", "y")];

        assert_eq!(cycle_of(&edges), Some(vec!["y".into()]));
    }

    #[test]
    fn test_reports_only_cycle_members() {
        let edges = vec![
            Edge::new("entry", "p"),
            Edge::new("p", "q"),
            Edge::new("q", "r"),
            Edge::new("r", "p"),
            Edge::new("r", "exit"),
        ];

        assert_eq!(
            cycle_of(&edges),
            Some(vec!["p".into(), "q".into(), "r".into()])
        );
    }
}

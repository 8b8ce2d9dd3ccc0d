//! Grid helpers for consumers that render one cell per `(x_pos, y_pos)`.
//!
//! A laid-out [`Dag`] is sparse. Renderers that need a dense grid call
//! [`fill_placeholders`] to synthesize a node for every hole.

use std::collections::HashSet;

use log::debug;

use depgrid_core::graph::{Dag, GraphNode};

/// Cell counts of the fillable region of a grid.
///
/// The region spans layers `1..=max_x` and rows `0..=max_y`; layer 0 holds
/// only roots and is never filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Occupancy {
    occupied: usize,
    empty: usize,
}

impl Occupancy {
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    pub fn empty(&self) -> usize {
        self.empty
    }

    pub fn total(&self) -> usize {
        self.occupied + self.empty
    }
}

/// Counts occupied and empty cells of the fillable region.
pub fn occupancy<T>(dag: &Dag<T>) -> Occupancy {
    let (Some(max_x), Some(max_y)) = (dag.max_x(), dag.max_y()) else {
        return Occupancy::default();
    };

    let occupied = occupied_cells(dag)
        .into_iter()
        .filter(|&(x, _)| x >= 1)
        .count();
    let total = max_x * (max_y + 1);

    Occupancy {
        occupied,
        empty: total - occupied,
    }
}

/// Returns a copy of `dag` in which every empty cell of layers `1..=max_x`
/// and rows `0..=max_y` holds a placeholder node.
///
/// Placeholders have the id [`Id::placeholder`](depgrid_core::identifier::Id::placeholder),
/// no element, and `y_relative == y_pos`. They follow the real nodes,
/// column by column. Edges are kept unchanged.
pub fn fill_placeholders<T: Clone>(dag: &Dag<T>) -> Dag<T> {
    let mut nodes = dag.nodes().to_vec();

    if let (Some(max_x), Some(max_y)) = (dag.max_x(), dag.max_y()) {
        let occupied = occupied_cells(dag);
        for x in 1..=max_x {
            for y in 0..=max_y {
                if !occupied.contains(&(x, y)) {
                    nodes.push(GraphNode::placeholder(x, y));
                }
            }
        }
    }

    debug!(
        nodes = dag.len(),
        placeholders = nodes.len() - dag.len();
        "Filled grid with placeholders"
    );
    Dag::new(nodes, dag.edges().to_vec())
}

fn occupied_cells<T>(dag: &Dag<T>) -> HashSet<(usize, usize)> {
    dag.nodes().iter().map(GraphNode::cell).collect()
}

#[cfg(test)]
mod tests {
    use depgrid_core::{graph::Edge, identifier::Id};

    use super::*;
    use crate::layout::build_dag;

    fn diamond_with_tail() -> Dag<&'static str> {
        // a <- b <- d, a <- c; c has no further dependency.
        let edges = [Edge::new("b", "a"), Edge::new("c", "a"), Edge::new("d", "b")];
        build_dag(&["a", "b", "c", "d"], &[Id::new("a")], &edges, |n| Id::new(n))
    }

    #[test]
    fn test_fill_covers_holes_only() {
        let dag = diamond_with_tail();
        let filled = fill_placeholders(&dag);

        // Layers 1..=2, rows 0..=1: (1,0) b, (1,1) c, (2,0) d, (2,1) empty.
        assert_eq!(filled.len(), dag.len() + 1);
        let placeholder = filled.nodes().last().unwrap();
        assert_eq!(placeholder.cell(), (2, 1));
        assert!(placeholder.id().is_placeholder());
        assert!(placeholder.element().is_none());
        assert_eq!(placeholder.y_relative(), 1);
        assert_eq!(filled.edges(), dag.edges());
    }

    #[test]
    fn test_fill_never_touches_layer_zero() {
        let dag = build_dag(&["a", "b"], &[Id::new("a"), Id::new("b")], &[], |n| Id::new(n));
        let filled = fill_placeholders(&dag);

        assert_eq!(filled.len(), 2);
    }

    #[test]
    fn test_fill_empty_dag() {
        let dag: Dag<&str> = Dag::new(Vec::new(), Vec::new());

        assert!(fill_placeholders(&dag).is_empty());
        assert_eq!(occupancy(&dag), Occupancy::default());
    }

    #[test]
    fn test_occupancy_matches_fill() {
        let dag = diamond_with_tail();
        let before = occupancy(&dag);

        assert_eq!(before.occupied(), 3);
        assert_eq!(before.empty(), 1);
        assert_eq!(before.total(), 4);

        let after = occupancy(&fill_placeholders(&dag));
        assert_eq!(after.empty(), 0);
        assert_eq!(after.occupied(), 4);
    }

    #[test]
    fn test_placeholders_are_column_major() {
        let edges = [Edge::new("b", "a"), Edge::new("c", "b")];
        let dag = build_dag(
            &["a", "b", "c", "z"],
            &[Id::new("a"), Id::new("z")],
            &edges,
            |n| Id::new(n),
        );
        let filled = fill_placeholders(&dag);

        let cells: Vec<_> = filled.nodes()[dag.len()..]
            .iter()
            .map(GraphNode::cell)
            .collect();
        // `z` is on row 0 and the chain on row 1.
        assert_eq!(cells, vec![(1, 0), (2, 0)]);
    }
}

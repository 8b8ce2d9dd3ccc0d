//! Graph structures built from the caller's entities and edges.
//!
//! - [`DependencyGraph`]: adjacency index over the edge list plus the
//!   entity lookup table, built once per layout call
//! - [`find_cycle`]: dependency cycle detection used before layout

mod cycle;
mod dependency_graph;

pub use cycle::find_cycle;
pub use dependency_graph::DependencyGraph;

//! Cluster partitioning.
//!
//! Groups root ids into clusters so that each weakly connected part of the
//! graph is laid out on its own band of rows.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use log::trace;

use depgrid_core::identifier::Id;

use crate::structure::DependencyGraph;

/// Cluster index of every id reached from a root, in the order ids were
/// first assigned.
pub type ClusterMap = IndexMap<Id, usize>;

/// Assigns every id reachable from `root_ids` to a cluster.
///
/// Roots are taken from the end of the list first. Each unassigned root
/// seeds a neighbourhood: the root, everything it transitively depends on,
/// and everything transitively depending on it. A neighbourhood that
/// touches existing clusters joins the smallest of them and absorbs the
/// rest; otherwise it opens a new cluster.
///
/// Cluster indices are not necessarily contiguous after merges.
pub fn partition(root_ids: &[Id], graph: &DependencyGraph<'_>) -> ClusterMap {
    let mut clusters = ClusterMap::new();
    let mut next_index = 0;

    for &seed in root_ids.iter().rev() {
        if clusters.contains_key(&seed) {
            continue;
        }

        let members = neighbourhood(seed, graph);
        let touched: IndexSet<usize> = members
            .iter()
            .filter_map(|id| clusters.get(id).copied())
            .collect();

        let index = match touched.iter().min() {
            Some(&index) => index,
            None => {
                next_index += 1;
                next_index - 1
            }
        };

        if touched.len() > 1 {
            trace!(into = index, merged:? = touched; "Merging clusters");
            for cluster in clusters.values_mut() {
                if touched.contains(&*cluster) {
                    *cluster = index;
                }
            }
        }

        for id in members {
            clusters.insert(id, index);
        }
    }

    clusters
}

/// The seed, its transitive dependencies, then its transitive dependents.
fn neighbourhood(seed: Id, graph: &DependencyGraph<'_>) -> IndexSet<Id> {
    let mut members = IndexSet::new();
    members.insert(seed);
    members.extend(walk(seed, |id| graph.dependencies(id).collect()));
    members.extend(walk(seed, |id| graph.dependents(id).collect()));
    members
}

/// Ids transitively reachable from `start` through `next`, in visit order.
fn walk(start: Id, next: impl Fn(Id) -> Vec<Id>) -> Vec<Id> {
    let mut visited = HashSet::from([start]);
    let mut stack = vec![start];
    let mut reached = Vec::new();

    while let Some(id) = stack.pop() {
        for neighbour in next(id) {
            if visited.insert(neighbour) {
                reached.push(neighbour);
                stack.push(neighbour);
            }
        }
    }

    reached
}

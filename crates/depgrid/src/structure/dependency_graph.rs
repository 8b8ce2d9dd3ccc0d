//! Adjacency index over a dependency edge list.
//!
//! Edges point from a dependency to its dependent, so for any id:
//! - its *dependencies* are the `from` ids of edges whose `to` is the id
//! - its *dependents* are the `to` ids of edges whose `from` is the id
//!
//! Both lists keep edge input order. Ids that appear only in edges (dangling
//! references) are indexed like any other id but are not entities.
//!
//! An id is *placeable* when following its dependents eventually reaches an
//! entity. Only placeable ids can ever land on the grid, so only they are
//! waited for during layering and root inference.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use depgrid_core::{graph::Edge, identifier::Id};

/// Read-only index over the entities and edges of one layout call.
#[derive(Debug)]
pub struct DependencyGraph<'a> {
    entities: IndexMap<Id, usize>,
    edges: &'a [Edge],
    dependencies: HashMap<Id, Vec<Id>>,
    dependents: HashMap<Id, Vec<Id>>,
    placeable: HashSet<Id>,
}

impl<'a> DependencyGraph<'a> {
    /// Indexes `entities` by the id returned from `id` and `edges` by endpoint.
    ///
    /// When two entities share an id, the first one wins.
    pub fn new<T>(entities: &[T], edges: &'a [Edge], id: impl Fn(&T) -> Id) -> Self {
        Self::from_ids(entities.iter().map(id), edges)
    }

    /// Indexes entity ids in iteration order; the position of an id is its
    /// index into the caller's entity slice.
    pub fn from_ids(ids: impl IntoIterator<Item = Id>, edges: &'a [Edge]) -> Self {
        let mut entities = IndexMap::new();
        for (index, id) in ids.into_iter().enumerate() {
            entities.entry(id).or_insert(index);
        }

        let mut dependencies: HashMap<Id, Vec<Id>> = HashMap::new();
        let mut dependents: HashMap<Id, Vec<Id>> = HashMap::new();
        for edge in edges {
            dependencies.entry(edge.to()).or_default().push(edge.from());
            dependents.entry(edge.from()).or_default().push(edge.to());
        }

        let placeable = placeable_ids(entities.keys().copied(), &dependencies);

        Self {
            entities,
            edges,
            dependencies,
            dependents,
            placeable,
        }
    }

    pub fn edges(&self) -> &'a [Edge] {
        self.edges
    }

    /// Returns `true` if `id` names a supplied entity.
    pub fn contains_entity(&self, id: Id) -> bool {
        self.entities.contains_key(&id)
    }

    /// Position of the entity with this id in the caller's slice.
    pub fn entity_index(&self, id: Id) -> Option<usize> {
        self.entities.get(&id).copied()
    }

    /// Entity ids in input order, without duplicates.
    pub fn entity_ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.entities.keys().copied()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Ids this id depends on, one per incoming edge.
    pub fn dependencies(&self, id: Id) -> impl Iterator<Item = Id> + '_ {
        self.dependencies.get(&id).into_iter().flatten().copied()
    }

    /// Ids depending on this id, one per outgoing edge.
    pub fn dependents(&self, id: Id) -> impl Iterator<Item = Id> + '_ {
        self.dependents.get(&id).into_iter().flatten().copied()
    }

    /// Returns `true` if `id` is an entity or transitively a dependency of one.
    pub fn is_placeable(&self, id: Id) -> bool {
        self.placeable.contains(&id)
    }

    /// Returns `true` if some placeable id depends on `id`.
    pub fn is_dependency(&self, id: Id) -> bool {
        self.dependents(id).any(|dependent| self.is_placeable(dependent))
    }

    /// Entities no other entity depends on, in input order.
    ///
    /// For an import graph these are the files nothing else imports.
    pub fn roots(&self) -> impl Iterator<Item = Id> + '_ {
        self.entity_ids().filter(|&id| !self.is_dependency(id))
    }
}

/// Entities plus everything they transitively depend on.
fn placeable_ids(
    entities: impl Iterator<Item = Id>,
    dependencies: &HashMap<Id, Vec<Id>>,
) -> HashSet<Id> {
    let mut placeable: HashSet<Id> = entities.collect();
    let mut stack: Vec<Id> = placeable.iter().copied().collect();

    while let Some(id) = stack.pop() {
        for &dependency in dependencies.get(&id).into_iter().flatten() {
            if placeable.insert(dependency) {
                stack.push(dependency);
            }
        }
    }

    placeable
}

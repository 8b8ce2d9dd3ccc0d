//! Grid-positioned dependency graph types.
//!
//! These types form the output contract of the layout engine:
//!
//! - [`Edge`]: a directed dependency between two entity ids
//! - [`GraphNode`]: an entity placed at a grid cell
//! - [`Dag`]: all placed nodes together with the edges they were laid out from
//!
//! Edges point from the depended-upon entity (an imported file, a base
//! contract) to the dependent entity (the importer, the derived contract).

use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// A directed dependency edge between two entity ids.
///
/// `from` is the dependency (base), `to` is the dependent (derived).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    from: Id,
    to: Id,
}

impl Edge {
    /// Creates an edge stating that `to` depends on `from`.
    pub fn new(from: impl Into<Id>, to: impl Into<Id>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The depended-upon entity.
    pub fn from(&self) -> Id {
        self.from
    }

    /// The dependent entity.
    pub fn to(&self) -> Id {
        self.to
    }

    /// Returns `true` if both endpoints are the same id.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// An entity placed on the layout grid.
///
/// `x_pos` is the layer (column). `y_relative` is the row inside that layer
/// for the entity's own cluster, and `y_pos` is the global row once clusters
/// have been stacked on top of each other.
///
/// `element` is `None` for nodes that were materialized from an edge endpoint
/// with no matching entity, and for placeholder cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphNode<T> {
    id: Id,
    x_pos: usize,
    y_pos: usize,
    y_relative: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    element: Option<T>,
}

impl<T> GraphNode<T> {
    /// Creates a node in layer `x_pos` at row `y_relative`.
    ///
    /// The global row starts out equal to the local row; see [`GraphNode::offset_by`].
    pub fn new(id: Id, x_pos: usize, y_relative: usize, element: Option<T>) -> Self {
        Self {
            id,
            x_pos,
            y_pos: y_relative,
            y_relative,
            element,
        }
    }

    /// Creates an element-less placeholder node filling cell `(x, y)`.
    pub fn placeholder(x: usize, y: usize) -> Self {
        Self::new(Id::placeholder(x, y), x, y, None)
    }

    /// Returns the node shifted down by `offset` global rows.
    ///
    /// The local row is left untouched.
    pub fn offset_by(mut self, offset: usize) -> Self {
        self.y_pos += offset;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn x_pos(&self) -> usize {
        self.x_pos
    }

    pub fn y_pos(&self) -> usize {
        self.y_pos
    }

    pub fn y_relative(&self) -> usize {
        self.y_relative
    }

    /// The caller payload, if the node stands for a supplied entity.
    pub fn element(&self) -> Option<&T> {
        self.element.as_ref()
    }

    /// Consumes the node and returns its payload.
    pub fn into_element(self) -> Option<T> {
        self.element
    }

    /// Grid cell `(x_pos, y_pos)` occupied by this node.
    pub fn cell(&self) -> (usize, usize) {
        (self.x_pos, self.y_pos)
    }
}

/// Positioned nodes plus the edges they were laid out from.
///
/// A `Dag` is built once and not modified afterwards. It can be fed back
/// into a second layout pass through [`Dag::into_parts`], for example to
/// derive a contract graph from an already laid out file graph.
///
/// # Examples
///
/// ```
/// use depgrid_core::graph::{Dag, Edge, GraphNode};
/// use depgrid_core::identifier::Id;
///
/// let dag = Dag::new(
///     vec![
///         GraphNode::new(Id::new("app"), 0, 0, Some("app")),
///         GraphNode::new(Id::new("lib"), 1, 0, Some("lib")),
///     ],
///     vec![Edge::new("lib", "app")],
/// );
///
/// assert_eq!(dag.max_x(), Some(1));
/// assert_eq!(dag.node(Id::new("lib")).map(|n| n.x_pos()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dag<T> {
    nodes: Vec<GraphNode<T>>,
    edges: Vec<Edge>,
}

impl<T> Dag<T> {
    pub fn new(nodes: Vec<GraphNode<T>>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// All placed nodes, cluster by cluster, layer by layer.
    pub fn nodes(&self) -> &[GraphNode<T>] {
        &self.nodes
    }

    /// The edge list the layout was computed from, in input order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a node by id.
    pub fn node(&self, id: Id) -> Option<&GraphNode<T>> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Returns `true` if a node with the given id was placed.
    pub fn contains(&self, id: Id) -> bool {
        self.node(id).is_some()
    }

    /// Payloads of all nodes that carry one, in node order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter().filter_map(GraphNode::element)
    }

    /// Highest layer used, or `None` for an empty DAG.
    pub fn max_x(&self) -> Option<usize> {
        self.nodes.iter().map(GraphNode::x_pos).max()
    }

    /// Highest global row used, or `None` for an empty DAG.
    pub fn max_y(&self) -> Option<usize> {
        self.nodes.iter().map(GraphNode::y_pos).max()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Hands back ownership of nodes and edges.
    pub fn into_parts(self) -> (Vec<GraphNode<T>>, Vec<Edge>) {
        (self.nodes, self.edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let edge = Edge::new("base", "derived");

        assert_eq!(edge.from(), "base");
        assert_eq!(edge.to(), "derived");
        assert!(!edge.is_self_loop());
        assert!(Edge::new("x", "x").is_self_loop());
    }

    #[test]
    fn test_node_offset_keeps_relative_row() {
        let node = GraphNode::new(Id::new("n"), 2, 3, Some(7u32)).offset_by(10);

        assert_eq!(node.x_pos(), 2);
        assert_eq!(node.y_pos(), 13);
        assert_eq!(node.y_relative(), 3);
        assert_eq!(node.element(), Some(&7));
        assert_eq!(node.cell(), (2, 13));
    }

    #[test]
    fn test_placeholder_node() {
        let node: GraphNode<()> = GraphNode::placeholder(4, 1);

        assert!(node.id().is_placeholder());
        assert_eq!(node.cell(), (4, 1));
        assert!(node.element().is_none());
    }

    #[test]
    fn test_dag_bounds() {
        let empty: Dag<()> = Dag::new(Vec::new(), Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.max_x(), None);
        assert_eq!(empty.max_y(), None);

        let dag = Dag::new(
            vec![
                GraphNode::new(Id::new("a"), 0, 0, Some('a')),
                GraphNode::new(Id::new("b"), 3, 1, None),
                GraphNode::new(Id::new("c"), 1, 0, Some('c')).offset_by(4),
            ],
            vec![],
        );

        assert_eq!(dag.len(), 3);
        assert_eq!(dag.max_x(), Some(3));
        assert_eq!(dag.max_y(), Some(4));
        assert_eq!(dag.elements().copied().collect::<Vec<_>>(), vec!['a', 'c']);
        assert!(dag.contains(Id::new("b")));
        assert!(!dag.contains(Id::new("z")));
    }

    #[test]
    fn test_node_serializes_camel_case() {
        let node = GraphNode::new(Id::new("A"), 1, 2, Some("payload")).offset_by(1);
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "A",
                "xPos": 1,
                "yPos": 3,
                "yRelative": 2,
                "element": "payload",
            })
        );
    }

    #[test]
    fn test_dangling_node_omits_element() {
        let node: GraphNode<String> = GraphNode::new(Id::new("missing"), 1, 0, None);
        let json = serde_json::to_value(&node).unwrap();

        assert!(json.get("element").is_none());
    }
}

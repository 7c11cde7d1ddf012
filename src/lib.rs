//! Shortest-path search over weighted graphs.
//!
//! The crate has two parts:
//!
//! - [`PriorityQueue`]: a min-heap keyed by a numeric priority that supports
//!   re-prioritizing items that are already enqueued. Usable standalone by
//!   other schedulers.
//! - [`a_star`]: A* search over an [`AdjacencyList`], using the queue as its
//!   open-set frontier. [`shortest_path`] is the zero-heuristic (Dijkstra)
//!   variant.
//!
//! Graphs are arenas: [`AdjacencyList::add_node`] mints opaque [`Node`]
//! handles and edges store handles, so two nodes are equal only if they came
//! from the same `add_node` call. Edge weights must be non-negative; that is
//! a caller obligation and is not checked.

mod astar;
mod fmt;
mod map;
mod queue;

pub use astar::{a_star, shortest_path, Heuristic};
pub use fmt::to_dot;
pub use map::NodeMap;
pub use queue::{PriorityQueue, QueueError};

/// An ordered sequence of nodes from start to goal, both inclusive.
pub type Path = Vec<Node>;

/// An opaque handle to a node in an [`AdjacencyList`].
///
/// Handles are only meaningful together with the graph that minted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node(usize);

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("N{}", self.0))
    }
}

impl Node {
    pub(crate) fn index(&self) -> usize {
        self.0
    }
}

pub type Weight = f32;

/// A directed edge: `weight` to reach `node`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub node: Node,
    pub weight: Weight,
}

fn edge(n: Node, weight: Weight) -> Edge {
    Edge { node: n, weight }
}

impl From<(Node, Weight)> for Edge {
    fn from((node, weight): (Node, Weight)) -> Self {
        Edge { node, weight }
    }
}

/// A directed weighted graph, stored as per-node lists of outgoing edges.
///
/// Nodes live in an arena owned by the graph. Parallel edges are allowed and
/// each is relaxed independently during search.
#[derive(Clone, Default)]
pub struct AdjacencyList {
    nodes: Vec<Vec<Edge>>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cap),
        }
    }

    pub fn add_node(&mut self) -> Node {
        let n = Node(self.nodes.len());
        self.nodes.push(Vec::new());
        n
    }

    fn is_valid(&self, n: Node) -> bool {
        n.0 < self.nodes.len()
    }

    /// Add a directed edge from `a` to `b` with weight `c`.
    ///
    /// Weights must be non-negative; negative weights silently break the
    /// shortest-path guarantee.
    pub fn add_edge(&mut self, a: Node, b: Node, c: Weight) {
        assert!(self.is_valid(a) && self.is_valid(b));
        assert!(!c.is_nan(), "NaN edge weight");
        self.nodes[a.0].push(edge(b, c));
    }

    /// Add a pair of directed edges between `a` and `b`, one per direction,
    /// with the shared weight `c`.
    pub fn add_bidirectional_edge(&mut self, a: Node, b: Node, c: Weight) {
        self.add_edge(a, b, c);
        self.add_edge(b, a, c);
    }

    pub fn has_edge(&self, a: Node, b: Node) -> bool {
        if !self.is_valid(a) || !self.is_valid(b) {
            return false;
        }

        self.nodes[a.0].iter().any(|edge| edge.node == b)
    }

    /// Return the outgoing edges from n
    pub fn edges(&self, n: Node) -> impl Iterator<Item = &Edge> {
        assert!(self.is_valid(n));
        self.nodes[n.0].iter()
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        (0..self.nodes.len()).map(Node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod test {
    use crate::AdjacencyList;

    #[test]
    fn add_edge() {
        let mut g = AdjacencyList::new();

        let a = g.add_node();
        let b = g.add_node();
        g.add_edge(a, b, 1.0);
        assert!(g.has_edge(a, b));
        assert!(!g.has_edge(b, a));
    }

    #[test]
    fn add_bidirectional() {
        let mut g = AdjacencyList::new();

        let a = g.add_node();
        let b = g.add_node();
        g.add_bidirectional_edge(a, b, 2.0);
        assert!(g.has_edge(a, b));
        assert!(g.has_edge(b, a));
        assert_eq!(g.edges(a).count(), 1);
        assert_eq!(g.edges(b).count(), 1);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut g = AdjacencyList::new();

        let a = g.add_node();
        let b = g.add_node();
        g.add_edge(a, b, 1.0);
        g.add_edge(a, b, 3.0);
        assert_eq!(g.edges(a).count(), 2);
    }

    #[test]
    fn distinct_nodes_are_never_equal() {
        let mut g = AdjacencyList::new();
        let a = g.add_node();
        let b = g.add_node();
        assert_ne!(a, b);
    }

    #[test]
    fn nodes_iterates_in_creation_order() {
        let mut g = AdjacencyList::with_capacity(4);
        let created: Vec<_> = (0..4).map(|_| g.add_node()).collect();
        let listed: Vec<_> = g.nodes().collect();
        assert_eq!(created, listed);
    }
}

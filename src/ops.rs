/*!
# Graph Operations

The query/mutation contract shared by every representation. Algorithms should only ever be
written against these traits (and [`DegreeQueries`](crate::degree::DegreeQueries)), never
against a concrete storage type.

Reading queries that name a node outside of `1..=n` panic like slice indexing does, whereas
every mutation validates its arguments and reports a [`GraphError`] instead.
*/

use std::ops::Range;

use itertools::Itertools;

use crate::{
    error::{check_node, Result},
    *,
};

/// Marker trait for the orientation of a graph
pub trait Direction {
    const IS_DIRECTED: bool;
}

/// Edges have an orientation: `(u, v)` and `(v, u)` are distinct edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Directed;

/// Edges have no orientation: `(u, v)` and `(v, u)` are the same edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Undirected;

impl Direction for Directed {
    const IS_DIRECTED: bool = true;
}

impl Direction for Undirected {
    const IS_DIRECTED: bool = false;
}

/// Associates a graph representation with its orientation
pub trait GraphType {
    type Dir: Direction;

    /// Returns *true* if the graph is directed
    fn is_directed(&self) -> bool {
        Self::Dir::IS_DIRECTED
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the contiguous range `1..=n` of all nodes.
    /// The range does not borrow `self` and can thus be used while mutating the graph.
    fn vertices(&self) -> Range<Node> {
        node_range(self.number_of_nodes())
    }

    /// Returns *true* if `u` lies within the vertex range of the graph
    fn has_vertex(&self, u: Node) -> bool {
        is_valid_node(u, self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the canonical edge set of the graph.
    /// Undirected graphs store every edge once in normalized orientation.
    fn edge_set(&self) -> &EdgeSet;

    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges {
        self.edge_set().len() as NumEdges
    }

    /// Returns an iterator over all edges in the graph in arbitrary order
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edge_set().iter().copied()
    }

    /// Returns all edges in the graph in sorted order
    fn ordered_edges(&self) -> Vec<Edge> {
        self.edges().sorted_unstable().collect()
    }

    /// Returns *true* if the graph has no edges
    fn has_no_edges(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphType + Sized {
    /// Returns an iterator over the forward adjacency of `u`, i.e. all `v` with an edge `(u, v)`.
    /// ** Panics if `u` is not a node **
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over the backward adjacency of `u`, i.e. all `v` with an edge `(v, u)`.
    /// For undirected graphs this coincides with the forward adjacency.
    /// ** Panics if `u` is not a node **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of outgoing neighbors of `u`
    /// ** Panics if `u` is not a node **
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_neighbors_of(u).count() as NumNodes
    }

    /// Returns the number of incoming neighbors of `u`
    /// ** Panics if `u` is not a node **
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_neighbors_of(u).count() as NumNodes
    }

    /// Returns an iterator over the (open) neighborhood of `u`.
    ///
    /// For directed graphs these are the **out**-neighbors only; use
    /// [`AdjacencyList::in_neighbors_of`] or [`AdjacencyList::all_neighbors_of`] if incoming
    /// edges matter.
    /// ** Panics if `u` is not a node **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_neighbors_of(u)
    }

    /// Returns all nodes connected to `u` by an edge in either direction, sorted and without
    /// duplicates.
    /// ** Panics if `u` is not a node **
    fn all_neighbors_of(&self, u: Node) -> Vec<Node> {
        if self.is_directed() {
            self.out_neighbors_of(u)
                .chain(self.in_neighbors_of(u))
                .sorted_unstable()
                .dedup()
                .collect()
        } else {
            self.out_neighbors_of(u).sorted_unstable().collect()
        }
    }

    /// Returns an iterator over all edges `(u, v)` leaving `u`
    /// ** Panics if `u` is not a node **
    fn out_edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.out_neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges `(v, u)` arriving at `u`
    /// ** Panics if `u` is not a node **
    fn in_edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.in_neighbors_of(u).map(move |v| Edge(v, u))
    }
}

/// Trait for accessing the adjacency of nodes as slices.
/// Only representations storing explicit neighbor arrays implement this.
pub trait NeighborsSlice {
    /// Returns the forward adjacency of `u` as a slice
    /// ** Panics if `u` is not a node **
    fn as_out_neighbors_slice(&self, u: Node) -> &[Node];

    /// Returns the backward adjacency of `u` as a slice
    /// ** Panics if `u` is not a node **
    fn as_in_neighbors_slice(&self, u: Node) -> &[Node];
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge `(u, v)` exists in the graph.
    /// For undirected graphs, this is symmetric in `u` and `v`.
    /// Returns *false* if either endpoint is not a node.
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if the self-loop `(u, u)` exists
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with `n` singleton nodes `1..=n`
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to grow the vertex range
pub trait GraphNodeEditing: GraphNodeOrder {
    /// Appends a new singleton node and returns it (the new node equals the new number of nodes)
    fn add_vertex(&mut self) -> Node;

    /// Appends `k` new singleton nodes and returns the new number of nodes
    fn add_vertices(&mut self, k: NumNodes) -> NumNodes {
        for _ in 0..k {
            self.add_vertex();
        }
        self.number_of_nodes()
    }
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNodeOrder + AdjacencyTest {
    /// Adds the edge `(u, v)` without validating it.
    /// Neighbors are appended to the end of the adjacency of `u` and `v`.
    ///
    /// The caller guarantees that both endpoints are nodes and that the edge is new;
    /// otherwise the edge set and adjacencies may disagree (or the call panics).
    /// Adjacency-list graphs assert that the edge is new in debug builds.
    fn add_edge_unchecked(&mut self, u: Node, v: Node);

    /// Adds the edge `(u, v)` to the graph.
    ///
    /// # Errors
    /// - [`GraphError::Bounds`] if `u` or `v` is not a node,
    /// - [`GraphError::DuplicateEdge`] if the edge is already present.
    ///
    /// Sparse matrix representations override this to **overwrite** existing edges instead of
    /// failing, see [`SparseGraph`](crate::repr::SparseGraph).
    fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        let n = self.number_of_nodes();
        check_node(u, n)?;
        check_node(v, n)?;

        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge(Edge(u, v)));
        }

        self.add_edge_unchecked(u, v);
        Ok(())
    }

    /// Adds all edges in the collection, stopping at the first edge that can not be added.
    /// Edges before the failing one remain in the graph.
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the edge `(u, v)` from the graph. For directed graphs, this is the edge FROM u TO v.
    ///
    /// # Errors
    /// [`GraphError::MissingEdge`] if the edge is not present (including edges naming
    /// nodes outside of the graph).
    fn rem_edge(&mut self, u: Node, v: Node) -> Result<()>;

    /// Removes all edges in the collection, stopping at the first missing edge
    fn rem_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.rem_edge(u, v)?;
        }
        Ok(())
    }
}

/// Edge editing for representations that attach a weight to every edge
pub trait WeightedEdgeEditing<W>: GraphEdgeEditing {
    /// Sets the weight of the edge `(u, v)`, inserting the edge if necessary.
    /// Returns the previous weight if the edge was present.
    ///
    /// Re-adding an existing edge overwrites its weight and never fails.
    ///
    /// # Errors
    /// - [`GraphError::Bounds`] if `u` or `v` is not a node,
    /// - [`GraphError::ZeroWeight`] if `weight` is zero.
    fn add_weighted_edge(&mut self, u: Node, v: Node, weight: W) -> Result<Option<W>>;

    /// Returns the weight of the edge `(u, v)` or `None` if the edge does not exist
    fn weight_of(&self, u: Node, v: Node) -> Option<W>;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and an iterator over Edges
    ///
    /// # Errors
    /// Fails with the first error reported by [`GraphEdgeEditing::add_edge`]
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<Self> {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}

/// Structural properties and comparisons available on every graph
pub trait GraphProperties: GraphNodeOrder + GraphEdgeOrder + GraphType {
    /// Returns *true* if the vertex range of `self` lies within the bounds of the vertex range
    /// of `other` and every edge of `self` is an edge of `other`.
    ///
    /// This is structural containment, not an isomorphism test: both graphs must agree on
    /// node ids and on the canonical orientation of their edges. Graphs of different
    /// orientation are never compared:
    ///
    /// ```compile_fail
    /// use simplegraphs::prelude::*;
    ///
    /// let undirected = Graph::from_edges(2, [(2, 1)]).unwrap();
    /// let directed = DiGraph::from_edges(2, [(1, 2)]).unwrap();
    /// undirected.is_subgraph_of(&directed);
    /// ```
    fn is_subgraph_of<H>(&self, other: &H) -> bool
    where
        H: GraphNodeOrder + GraphEdgeOrder + GraphType<Dir = Self::Dir>,
    {
        let (inner, outer) = (self.vertices(), other.vertices());
        let nodes_contained =
            inner.is_empty() || (outer.start <= inner.start && inner.end <= outer.end);

        nodes_contained && self.edge_set().is_subset(other.edge_set())
    }

    /// Returns *true* if any node has an edge to itself
    fn has_self_loops(&self) -> bool {
        self.edges().any(|e| e.is_loop())
    }

    /// Returns the number of self-loops in the graph
    fn number_of_self_loops(&self) -> NumEdges {
        self.edges().filter(|e| e.is_loop()).count() as NumEdges
    }

    /// Returns the ratio of present edges to possible edges (without self-loops).
    /// Graphs with less than two nodes have density `0`.
    fn density(&self) -> f64 {
        let n = self.number_of_nodes() as f64;
        if n < 2.0 {
            return 0.0;
        }

        let m = self.number_of_edges() as f64;
        if self.is_directed() {
            m / (n * (n - 1.0))
        } else {
            2.0 * m / (n * (n - 1.0))
        }
    }
}

impl<G: GraphNodeOrder + GraphEdgeOrder + GraphType> GraphProperties for G {}

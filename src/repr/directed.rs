/*!
# Directed Graph Representations

A directed graph is represented by parameterizing [`DirectedGraph`] with two [`Neighborhood`]
types, which control how outgoing and incoming adjacency is stored.

- [`AdjArray`]: adjacency arrays (`Vec<Node>`) in both directions.
- [`SmallAdjArray`]: inline small vectors (`SmallVec<[Node; 8]>`) in both directions.

Both directions are stored explicitly, so in-neighbors and in-degrees are as cheap as their
outgoing counterparts.
*/

use crate::{
    error::Result, node::slot, repr::macros::impl_common_graph_ops, testing::test_graph_ops,
};

use super::*;

/// A directed graph storing **both outgoing and incoming neighborhoods**.
///
/// - The edge set stores every edge `(u, v)` exactly as it was inserted.
/// - Outgoing adjacency is stored in `out_nbs`, incoming adjacency in `in_nbs`.
///
/// # Type parameters
/// - `OutNbs`: [`Neighborhood`] implementation used for outgoing adjacency.
/// - `InNbs`: [`Neighborhood`] implementation used for incoming adjacency.
#[derive(Debug, Clone)]
pub struct DirectedGraph<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    out_nbs: Vec<OutNbs>,
    in_nbs: Vec<InNbs>,
    edges: EdgeSet,
}

/// Directed graph using adjacency arrays for both outgoing and incoming neighborhoods.
pub type AdjArray = DirectedGraph<ArrNeighborhood, ArrNeighborhood>;

/// Directed graph using small inline adjacency arrays for both directions.
pub type SmallAdjArray = DirectedGraph<SmallNeighborhood, SmallNeighborhood>;

impl_common_graph_ops!(DirectedGraph<out_nbs : OutNbs, in_nbs : InNbs> => Directed);

impl<OutNbs, InNbs> AdjacencyList for DirectedGraph<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs[slot(u)].neighbors()
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.in_nbs[slot(u)].neighbors()
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[slot(u)].num_of_neighbors()
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_nbs[slot(u)].num_of_neighbors()
    }
}

impl<OutNbs, InNbs> NeighborsSlice for DirectedGraph<OutNbs, InNbs>
where
    OutNbs: NeighborhoodSlice,
    InNbs: NeighborhoodSlice,
{
    fn as_out_neighbors_slice(&self, u: Node) -> &[Node] {
        self.out_nbs[slot(u)].as_slice()
    }

    fn as_in_neighbors_slice(&self, u: Node) -> &[Node] {
        self.in_nbs[slot(u)].as_slice()
    }
}

impl<OutNbs, InNbs> AdjacencyTest for DirectedGraph<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edges.contains(&Edge(u, v))
    }
}

impl<OutNbs, InNbs> GraphEdgeEditing for DirectedGraph<OutNbs, InNbs>
where
    OutNbs: Neighborhood,
    InNbs: Neighborhood,
{
    fn add_edge_unchecked(&mut self, u: Node, v: Node) {
        debug_assert!(!self.out_nbs[slot(u)].has_neighbor(v));
        self.out_nbs[slot(u)].add_neighbor(v);
        self.in_nbs[slot(v)].add_neighbor(u);
        self.edges.insert(Edge(u, v));
    }

    fn rem_edge(&mut self, u: Node, v: Node) -> Result<()> {
        if !self.edges.remove(&Edge(u, v)) {
            return Err(GraphError::MissingEdge(Edge(u, v)));
        }

        let removed_out = self.out_nbs[slot(u)].try_remove_neighbor(v);
        let removed_in = self.in_nbs[slot(v)].try_remove_neighbor(u);
        debug_assert!(removed_out && removed_in);
        Ok(())
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_array,
    AdjArray,
    false,
    (
        GraphNew,
        GraphNodeEditing,
        AdjacencyList,
        GraphEdgeEditing,
        DegreeQueries,
        GraphProperties
    )
);

test_graph_ops!(
    test_small_adj_array,
    SmallAdjArray,
    false,
    (
        GraphNew,
        GraphNodeEditing,
        AdjacencyList,
        GraphEdgeEditing,
        DegreeQueries,
        GraphProperties
    )
);

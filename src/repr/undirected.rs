use crate::{
    error::Result, node::slot, repr::macros::impl_common_graph_ops, testing::test_graph_ops,
};

use super::*;

/// An undirected graph storing one neighbor array per node.
///
/// - The edge set stores every edge `{u, v}` once as the normalized `Edge(min, max)`.
/// - A non-loop edge is recorded in the neighborhood of both endpoints, a self-loop once.
/// - Forward and backward adjacency are the same array.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    edges: EdgeSet,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using an Adjacency-Array with inline storage for small neighborhoods
pub type SmallAdjArrayUndir = UndirectedGraph<SmallNeighborhood>;

impl_common_graph_ops!(UndirectedGraph<nbs : Nbs> => Undirected);

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[slot(u)].neighbors()
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[slot(u)].neighbors()
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.nbs[slot(u)].num_of_neighbors()
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.nbs[slot(u)].num_of_neighbors()
    }
}

impl<Nbs: NeighborhoodSlice> NeighborsSlice for UndirectedGraph<Nbs> {
    fn as_out_neighbors_slice(&self, u: Node) -> &[Node] {
        self.nbs[slot(u)].as_slice()
    }

    fn as_in_neighbors_slice(&self, u: Node) -> &[Node] {
        self.nbs[slot(u)].as_slice()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edges.contains(&Edge(u, v).normalized())
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_edge_unchecked(&mut self, u: Node, v: Node) {
        debug_assert!(!self.nbs[slot(u)].has_neighbor(v));
        self.nbs[slot(u)].add_neighbor(v);
        if u != v {
            self.nbs[slot(v)].add_neighbor(u);
        }
        self.edges.insert(Edge(u, v).normalized());
    }

    fn rem_edge(&mut self, u: Node, v: Node) -> Result<()> {
        if !self.edges.remove(&Edge(u, v).normalized()) {
            return Err(GraphError::MissingEdge(Edge(u, v)));
        }

        let removed = self.nbs[slot(u)].try_remove_neighbor(v);
        debug_assert!(removed);
        if u != v {
            let removed = self.nbs[slot(v)].try_remove_neighbor(u);
            debug_assert!(removed);
        }
        Ok(())
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_adj_array_undir,
    AdjArrayUndir,
    true,
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
    test_small_adj_array_undir,
    SmallAdjArrayUndir,
    true,
    (
        GraphNew,
        GraphNodeEditing,
        AdjacencyList,
        GraphEdgeEditing,
        DegreeQueries,
        GraphProperties
    )
);

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use itertools::Itertools;

    #[test]
    fn grow_then_connect() {
        let mut graph = Graph::new(0);
        assert!(graph.vertices().is_empty());

        assert_eq!(graph.add_vertices(3), 3);
        assert_eq!(graph.vertices().collect_vec(), vec![1, 2, 3]);

        graph.add_edge(1, 2).unwrap();
        assert!(graph.has_edge(1, 2));
        assert!(graph.has_edge(2, 1));
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.ordered_edges(), vec![Edge(1, 2)]);
    }

    #[test]
    fn canonical_orientation_is_normalized() {
        let mut graph = Graph::new(3);
        graph.add_edge(3, 1).unwrap();

        assert_eq!(graph.ordered_edges(), vec![Edge(1, 3)]);
        assert_eq!(graph.as_out_neighbors_slice(3), &[1]);
        assert_eq!(graph.as_in_neighbors_slice(1), &[3]);
        assert_eq!(graph.in_edges_of(1).collect_vec(), vec![Edge(3, 1)]);
        assert_eq!(graph.out_edges_of(1).collect_vec(), vec![Edge(1, 3)]);
    }

    #[test]
    fn duplicate_edges_are_rejected_in_both_orientations() {
        let mut graph = Graph::new(2);
        graph.add_edge(1, 2).unwrap();

        assert_eq!(
            graph.add_edge(1, 2),
            Err(GraphError::DuplicateEdge(Edge(1, 2)))
        );
        assert_eq!(
            graph.add_edge(2, 1),
            Err(GraphError::DuplicateEdge(Edge(2, 1)))
        );
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.degrees(None), vec![1, 1]);
    }

    #[test]
    fn out_of_range_edges_are_rejected() {
        let mut graph = Graph::new(2);

        assert_eq!(
            graph.add_edge(1, 3),
            Err(GraphError::Bounds { node: 3, n: 2 })
        );
        assert_eq!(
            graph.add_edge(0, 1),
            Err(GraphError::Bounds { node: 0, n: 2 })
        );
        assert!(graph.has_no_edges());
        assert!(!graph.has_edge(1, 3));
    }

    #[test]
    fn missing_edges_leave_graph_untouched() {
        let mut graph = Graph::from_edges(3, [(1, 2), (2, 3)]).unwrap();
        let before = graph.clone();

        assert_eq!(graph.rem_edge(5, 6), Err(GraphError::MissingEdge(Edge(5, 6))));
        assert_eq!(graph.rem_edge(1, 3), Err(GraphError::MissingEdge(Edge(1, 3))));
        assert_eq!(graph, before);
        for u in graph.vertices() {
            assert_eq!(
                graph.as_out_neighbors_slice(u),
                before.as_out_neighbors_slice(u)
            );
        }

        graph.rem_edge(3, 2).unwrap();
        assert!(!graph.has_edge(2, 3));
        assert_eq!(graph.degrees(None), vec![1, 1, 0]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn unchecked_reverse_duplicate_is_caught_in_debug_builds() {
        let mut graph = Graph::new(2);
        graph.add_edge_unchecked(1, 2);
        graph.add_edge_unchecked(2, 1);
    }

    #[test]
    fn self_loops() {
        let mut graph = Graph::new(2);
        assert!(!graph.has_self_loops());

        graph.add_edge(2, 2).unwrap();
        assert!(graph.has_self_loop(2));
        assert!(graph.has_self_loops());
        assert_eq!(graph.number_of_self_loops(), 1);
        assert_eq!(graph.as_out_neighbors_slice(2), &[2]);

        graph.rem_edge(2, 2).unwrap();
        assert!(!graph.has_self_loops());
        assert_eq!(graph.out_degree_of(2), 0);
    }

    #[test]
    fn equality_ignores_neighbor_order() {
        let a = Graph::from_edges(3, [(1, 2), (1, 3)]).unwrap();
        let b = Graph::from_edges(3, [(3, 1), (2, 1)]).unwrap();
        let c = Graph::from_edges(4, [(1, 2), (1, 3)]).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.is_subgraph_of(&c));
        assert!(!c.is_subgraph_of(&a));
    }

    #[test]
    fn density() {
        let graph = Graph::from_edges(4, [(1, 2), (2, 3), (3, 4)]).unwrap();
        assert!((graph.density() - 0.5).abs() < 1e-12);
        assert_eq!(Graph::new(1).density(), 0.0);
    }
}

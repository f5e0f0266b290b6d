/*!
# Sparse Matrix Graphs

Weighted graphs backed by a [`SparseMatrix`]:

- [`SparseGraph`]: undirected, the matrix is kept symmetric.
- [`SparseDiGraph`]: directed, cell `(u, v)` holds the weight of edge `(u, v)`.

A stored cell is always nonzero, and the set of stored cells always matches the edge set.
The forward adjacency of a node is its matrix row, the backward adjacency its matrix column.

### Duplicate edges
Unlike the adjacency-list graphs, sparse graphs never reject an edge that is already present:
[`add_edge`](GraphEdgeEditing::add_edge) and
[`add_weighted_edge`](WeightedEdgeEditing::add_weighted_edge) assign the cell and thereby
**overwrite** the previous weight.

```
use simplegraphs::prelude::*;

let mut graph = SparseDiGraph::<f64>::new(2);
graph.add_weighted_edge(1, 2, 3.0).unwrap();
assert_eq!(graph.add_weighted_edge(1, 2, 7.0), Ok(Some(3.0)));

assert_eq!(graph.number_of_edges(), 1);
assert_eq!(graph.weight_of(1, 2), Some(7.0));
```
*/

use tracing::debug;

use crate::{
    error::{check_node, Result},
    testing::test_graph_ops,
};

use super::*;

/// An undirected weighted graph backed by a symmetric [`SparseMatrix`].
///
/// The edge set stores the normalized edge, the matrix stores both cells `(u, v)` and `(v, u)`.
#[derive(Debug, Clone)]
pub struct SparseGraph<W: Weight = f64> {
    matrix: SparseMatrix<W>,
    edges: EdgeSet,
}

/// A directed weighted graph backed by a [`SparseMatrix`].
#[derive(Debug, Clone)]
pub struct SparseDiGraph<W: Weight = f64> {
    matrix: SparseMatrix<W>,
    edges: EdgeSet,
}

macro_rules! impl_common_sparse_graph_ops {
    ($struct:ident, $directed:ident) => {
        impl<W: Weight> $struct<W> {
            /// Returns the underlying weight matrix
            pub fn matrix(&self) -> &SparseMatrix<W> {
                &self.matrix
            }
        }

        impl<W: Weight> GraphType for $struct<W> {
            type Dir = $directed;
        }

        impl<W: Weight> GraphNodeOrder for $struct<W> {
            fn number_of_nodes(&self) -> NumNodes {
                self.matrix.dim()
            }
        }

        impl<W: Weight> GraphEdgeOrder for $struct<W> {
            fn edge_set(&self) -> &EdgeSet {
                &self.edges
            }
        }

        impl<W: Weight> GraphNew for $struct<W> {
            fn new(n: NumNodes) -> Self {
                Self {
                    matrix: SparseMatrix::new(n),
                    edges: EdgeSet::default(),
                }
            }
        }

        impl<W: Weight> GraphNodeEditing for $struct<W> {
            fn add_vertex(&mut self) -> Node {
                self.matrix.grow(1);
                self.number_of_nodes()
            }
        }

        impl<W: Weight> AdjacencyTest for $struct<W> {
            fn has_edge(&self, u: Node, v: Node) -> bool {
                self.matrix.contains(u, v)
            }
        }

        impl<W: Weight> GraphEdgeEditing for $struct<W> {
            fn add_edge_unchecked(&mut self, u: Node, v: Node) {
                self.assign(u, v, W::one());
            }

            /// Adds the edge `(u, v)` with weight one, **overwriting** the weight of an existing
            /// edge instead of failing.
            fn add_edge(&mut self, u: Node, v: Node) -> Result<()> {
                self.add_weighted_edge(u, v, W::one()).map(|_| ())
            }

            fn rem_edge(&mut self, u: Node, v: Node) -> Result<()> {
                if self.unassign(u, v) {
                    Ok(())
                } else {
                    Err(GraphError::MissingEdge(Edge(u, v)))
                }
            }
        }

        impl<W: Weight> WeightedEdgeEditing<W> for $struct<W> {
            fn add_weighted_edge(&mut self, u: Node, v: Node, weight: W) -> Result<Option<W>> {
                let n = self.number_of_nodes();
                check_node(u, n)?;
                check_node(v, n)?;

                if weight.is_zero() {
                    return Err(GraphError::ZeroWeight(Edge(u, v)));
                }
                if weight.is_nan() {
                    return Err(GraphError::NanWeight(Edge(u, v)));
                }

                Ok(self.assign(u, v, weight))
            }

            fn weight_of(&self, u: Node, v: Node) -> Option<W> {
                self.matrix.get(u, v)
            }
        }

        /// Graphs are equal if they have the same nodes, edges and weights
        impl<W: Weight> PartialEq for $struct<W> {
            fn eq(&self, other: &Self) -> bool {
                self.edges == other.edges && self.matrix == other.matrix
            }
        }
    };
}

impl_common_sparse_graph_ops!(SparseGraph, Undirected);
impl_common_sparse_graph_ops!(SparseDiGraph, Directed);

impl<W: Weight> SparseGraph<W> {
    /// Builds an unweighted (all weights one) sparse copy of an undirected graph
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: GraphNodeOrder + GraphEdgeOrder + GraphType<Dir = Undirected>,
    {
        Self::from_graph_weighted(graph, &UnitWeights)
    }

    /// Builds a sparse copy of an undirected graph where edge `{u, v}` (with `u <= v`) gets
    /// weight `weights.weight(u, v)`. The weight is mirrored to keep the matrix symmetric.
    /// Edges with weight zero or NaN are omitted.
    ///
    /// # Panics
    /// Panics if `weights` panics for an edge of `graph`, e.g. a [`DenseWeights`] smaller than
    /// `n x n`.
    pub fn from_graph_weighted<G, E>(graph: &G, weights: &E) -> Self
    where
        G: GraphNodeOrder + GraphEdgeOrder + GraphType<Dir = Undirected>,
        E: EdgeWeights<W>,
    {
        let n = graph.number_of_nodes();
        let mut edges = EdgeSet::default();
        let mut cells = Vec::with_capacity(2 * graph.number_of_edges() as usize);

        for Edge(u, v) in graph.edges().map(|e| e.normalized()) {
            let weight = weights.weight(u, v);
            if weight.is_zero() || weight.is_nan() {
                continue;
            }

            cells.push((u, v, weight));
            if u != v {
                cells.push((v, u, weight));
            }
            edges.insert(Edge(u, v));
        }

        let matrix = SparseMatrix::from_triplets(n, cells);
        debug!(
            nodes = n,
            edges = edges.len(),
            dropped = graph.number_of_edges() as usize - edges.len(),
            "built undirected sparse graph"
        );

        Self { matrix, edges }
    }

    /// Stores `weight` in both cells of `{u, v}` and returns the previous weight
    fn assign(&mut self, u: Node, v: Node, weight: W) -> Option<W> {
        let previous = self.matrix.set(u, v, weight);
        if u != v {
            self.matrix.set(v, u, weight);
        }
        self.edges.insert(Edge(u, v).normalized());
        previous
    }

    /// Removes both cells of `{u, v}`; returns *false* if the edge did not exist
    fn unassign(&mut self, u: Node, v: Node) -> bool {
        if self.matrix.remove(u, v).is_none() {
            return false;
        }
        if u != v {
            self.matrix.remove(v, u);
        }
        self.edges.remove(&Edge(u, v).normalized());
        true
    }
}

impl<W: Weight> AdjacencyList for SparseGraph<W> {
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.matrix.row_indices(u).iter().copied()
    }

    /// The matrix is symmetric, so the column of `u` is read off its row
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.matrix.row_indices(u).iter().copied()
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.matrix.row_nnz(u) as NumNodes
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.matrix.row_nnz(u) as NumNodes
    }
}

impl<W: Weight> SparseDiGraph<W> {
    /// Builds an unweighted (all weights one) sparse copy of a directed graph
    pub fn from_graph<G>(graph: &G) -> Self
    where
        G: GraphNodeOrder + GraphEdgeOrder + GraphType<Dir = Directed>,
    {
        Self::from_graph_weighted(graph, &UnitWeights)
    }

    /// Builds a sparse copy of a directed graph where edge `(u, v)` gets weight
    /// `weights.weight(u, v)`. Edges with weight zero or NaN are omitted.
    ///
    /// # Panics
    /// Panics if `weights` panics for an edge of `graph`, e.g. a [`DenseWeights`] smaller than
    /// `n x n`.
    pub fn from_graph_weighted<G, E>(graph: &G, weights: &E) -> Self
    where
        G: GraphNodeOrder + GraphEdgeOrder + GraphType<Dir = Directed>,
        E: EdgeWeights<W>,
    {
        let n = graph.number_of_nodes();
        let mut edges = EdgeSet::default();
        let mut cells = Vec::with_capacity(graph.number_of_edges() as usize);

        for Edge(u, v) in graph.edges() {
            let weight = weights.weight(u, v);
            if weight.is_zero() || weight.is_nan() {
                continue;
            }

            cells.push((u, v, weight));
            edges.insert(Edge(u, v));
        }

        let matrix = SparseMatrix::from_triplets(n, cells);
        debug!(
            nodes = n,
            edges = edges.len(),
            dropped = graph.number_of_edges() as usize - edges.len(),
            "built directed sparse graph"
        );

        Self { matrix, edges }
    }

    /// Stores `weight` in cell `(u, v)` and returns the previous weight
    fn assign(&mut self, u: Node, v: Node, weight: W) -> Option<W> {
        self.edges.insert(Edge(u, v));
        self.matrix.set(u, v, weight)
    }

    /// Removes cell `(u, v)`; returns *false* if the edge did not exist
    fn unassign(&mut self, u: Node, v: Node) -> bool {
        self.matrix.remove(u, v).is_some() && self.edges.remove(&Edge(u, v))
    }
}

impl<W: Weight> AdjacencyList for SparseDiGraph<W> {
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.matrix.row_indices(u).iter().copied()
    }

    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.matrix.column(u).map(|(v, _)| v)
    }

    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.matrix.row_nnz(u) as NumNodes
    }
}

// ---------- Testing ----------

test_graph_ops!(
    test_sparse_graph,
    SparseGraph<f64>,
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
    test_sparse_di_graph,
    SparseDiGraph<u32>,
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

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use itertools::Itertools;

    #[test]
    fn re_adding_overwrites_weight() {
        let mut graph = SparseGraph::<f64>::new(2);

        assert_eq!(graph.add_weighted_edge(1, 2, 3.0), Ok(None));
        assert_eq!(graph.add_weighted_edge(1, 2, 7.0), Ok(Some(3.0)));

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.ordered_edges(), vec![Edge(1, 2)]);
        assert_eq!(graph.weight_of(1, 2), Some(7.0));
        assert_eq!(graph.weight_of(2, 1), Some(7.0));
        assert!(graph.matrix().is_symmetric());
    }

    #[test]
    fn unweighted_insertions_overwrite_too() {
        let mut graph = SparseDiGraph::<f64>::new(2);
        graph.add_weighted_edge(1, 2, 4.0).unwrap();

        // contrary to adjacency-list graphs this is not a duplicate-edge error
        assert_eq!(graph.add_edge(1, 2), Ok(()));
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.weight_of(1, 2), Some(1.0));

        let mut list = DiGraph::new(2);
        list.add_edge(1, 2).unwrap();
        assert!(list.add_edge(1, 2).is_err());
    }

    #[test]
    fn invalid_insertions_change_nothing() {
        let mut graph = SparseGraph::<f64>::new(2);
        graph.add_weighted_edge(1, 2, 2.0).unwrap();
        let before = graph.clone();

        assert_eq!(
            graph.add_weighted_edge(1, 3, 1.0),
            Err(GraphError::Bounds { node: 3, n: 2 })
        );
        assert_eq!(
            graph.add_weighted_edge(1, 2, 0.0),
            Err(GraphError::ZeroWeight(Edge(1, 2)))
        );
        assert_eq!(graph.rem_edge(5, 6), Err(GraphError::MissingEdge(Edge(5, 6))));
        assert_eq!(graph.rem_edge(1, 1), Err(GraphError::MissingEdge(Edge(1, 1))));
        assert_eq!(graph, before);
    }

    #[test]
    fn nan_weights_are_rejected() {
        let mut graph = SparseGraph::<f64>::new(2);

        assert_eq!(
            graph.add_weighted_edge(1, 2, f64::NAN),
            Err(GraphError::NanWeight(Edge(1, 2)))
        );
        assert!(graph.has_no_edges());

        graph.add_weighted_edge(1, 2, 2.0).unwrap();
        assert_eq!(
            graph.add_weighted_edge(2, 1, f64::NAN),
            Err(GraphError::NanWeight(Edge(2, 1)))
        );
        assert_eq!(graph.weight_of(2, 1), Some(2.0));
        assert!(graph.matrix().is_symmetric());
        assert_eq!(graph.clone(), graph);
    }

    #[test]
    fn from_graph_weighted_skips_nan() {
        let graph = DiGraph::from_edges(2, [(1, 2), (2, 1)]).unwrap();
        let sparse = SparseDiGraph::from_graph_weighted(&graph, &|u: Node, _v: Node| {
            if u == 1 {
                f64::NAN
            } else {
                3.0
            }
        });

        assert_eq!(sparse.ordered_edges(), vec![Edge(2, 1)]);
        assert_eq!(sparse.clone(), sparse);
    }

    #[test]
    #[should_panic]
    fn from_graph_weighted_with_too_small_dense_weights() {
        let graph = Graph::from_edges(3, [(1, 3)]).unwrap();
        SparseGraph::from_graph_weighted(&graph, &DenseWeights(vec![vec![1.0; 2]; 2]));
    }

    #[test]
    fn subgraphs_across_representations() {
        let list = DiGraph::from_edges(3, [(1, 2), (3, 1)]).unwrap();
        let mut sparse = SparseDiGraph::<f64>::from_graph(&list);
        assert!(list.is_subgraph_of(&sparse) && sparse.is_subgraph_of(&list));

        sparse.rem_edge(1, 2).unwrap();
        sparse.add_edge(2, 1).unwrap();
        // same endpoints, opposite orientation
        assert!(!list.is_subgraph_of(&sparse));
        assert!(!sparse.is_subgraph_of(&list));
    }

    #[test]
    fn undirected_removal_clears_both_cells() {
        let mut graph = SparseGraph::<f64>::from_edges(3, [(1, 2), (3, 2), (3, 3)]).unwrap();
        assert_eq!(graph.matrix().nnz(), 5);

        graph.rem_edge(2, 3).unwrap();
        assert!(!graph.has_edge(3, 2));
        assert!(!graph.has_edge(2, 3));
        assert_eq!(graph.matrix().nnz(), 3);

        graph.rem_edge(3, 3).unwrap();
        assert_eq!(graph.ordered_edges(), vec![Edge(1, 2)]);
        assert!(graph.matrix().is_symmetric());
    }

    #[test]
    fn from_graph_uses_unit_weights() {
        let graph = Graph::from_edges(4, [(1, 2), (3, 2), (4, 4)]).unwrap();
        let sparse = SparseGraph::<f64>::from_graph(&graph);

        assert_eq!(sparse.number_of_nodes(), 4);
        assert_eq!(sparse.edge_set(), graph.edge_set());
        assert_eq!(sparse.weight_of(2, 3), Some(1.0));
        assert_eq!(sparse.weight_of(4, 4), Some(1.0));
        assert!(sparse.matrix().is_symmetric());
        assert_eq!(sparse.degrees(None), graph.degrees(None));
        assert!(graph.is_subgraph_of(&sparse) && sparse.is_subgraph_of(&graph));
    }

    #[test]
    fn from_graph_weighted_combines_elementwise() {
        let graph = DiGraph::from_edges(3, [(1, 2), (2, 1), (2, 3), (3, 3)]).unwrap();

        let dense = DenseWeights(vec![
            vec![9.0, 0.5, 9.0],
            vec![2.0, 9.0, 0.0],
            vec![9.0, 9.0, 4.0],
        ]);
        let sparse = SparseDiGraph::from_graph_weighted(&graph, &dense);

        // cells without an edge are ignored, the zero weight of (2, 3) drops that edge
        assert_eq!(sparse.ordered_edges(), vec![Edge(1, 2), Edge(2, 1), Edge(3, 3)]);
        assert_eq!(sparse.weight_of(1, 2), Some(0.5));
        assert_eq!(sparse.weight_of(2, 1), Some(2.0));
        assert_eq!(sparse.weight_of(3, 3), Some(4.0));
        assert_eq!(sparse.weight_of(1, 3), None);
        assert_eq!(sparse.matrix().nnz(), sparse.number_of_edges() as usize);
    }

    #[test]
    fn from_graph_weighted_stays_symmetric() {
        let graph = Graph::from_edges(3, [(2, 1), (2, 3)]).unwrap();
        let sparse = SparseGraph::from_graph_weighted(&graph, &|u: Node, v: Node| (10 * u + v) as f64);

        // weights are sampled at the normalized edge
        assert_eq!(sparse.weight_of(1, 2), Some(12.0));
        assert_eq!(sparse.weight_of(2, 1), Some(12.0));
        assert_eq!(sparse.weight_of(3, 2), Some(23.0));
        assert!(sparse.matrix().is_symmetric());
    }

    #[test]
    fn adjacency_is_read_from_rows_and_columns() {
        let graph = SparseDiGraph::<f64>::from_edges(4, [(1, 3), (2, 3), (3, 1), (4, 3)]).unwrap();

        assert_eq!(graph.out_neighbors_of(3).collect_vec(), vec![1]);
        assert_eq!(graph.in_neighbors_of(3).collect_vec(), vec![1, 2, 4]);
        assert_eq!(graph.in_edges_of(3).collect_vec(), vec![Edge(1, 3), Edge(2, 3), Edge(4, 3)]);
        assert_eq!(graph.in_degree_of(3), 3);
        assert_eq!(graph.degree_of(3), 4);
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![3]);
    }

    #[test]
    fn growing_and_copying() {
        let mut graph = SparseGraph::<f64>::from_edges(2, [(1, 2)]).unwrap();
        let copy = graph.clone();

        assert_eq!(graph.add_vertex(), 3);
        graph.add_weighted_edge(3, 1, 0.25).unwrap();

        assert_eq!(copy.number_of_nodes(), 2);
        assert_eq!(copy.number_of_edges(), 1);
        assert!(!copy.has_edge(1, 3));
        assert!(copy.is_subgraph_of(&graph));
        assert!(!graph.is_subgraph_of(&copy));
        assert_eq!(graph.weight_of(1, 3), Some(0.25));
    }
}

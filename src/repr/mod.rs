/*!
# Graph Representations

Two storage families implement the contract of [`ops`](crate::ops):

- **Adjacency lists** ([`UndirectedGraph`], [`DirectedGraph`]) keep a canonical edge set plus
  explicit per-node neighbor arrays. Membership tests are set lookups, neighbor enumeration is
  a slice traversal. Neighbor storage is pluggable via [`Neighborhood`]:
  [`ArrNeighborhood`] (`Vec<Node>`) or [`SmallNeighborhood`] (`SmallVec<[Node; N]>`).
  Adding an edge twice is an error.
- **Sparse matrices** ([`SparseGraph`], [`SparseDiGraph`]) keep a canonical edge set plus a
  weighted [`SparseMatrix`]. Edge insertion costs `O(m)` in the worst case, but storage is
  compact and weights are first-class. Adding an edge twice overwrites its weight.

```
use simplegraphs::prelude::*;

let mut graph = Graph::new(3);
graph.add_edge(1, 2).unwrap();
assert!(graph.has_edge(2, 1));
assert!(graph.add_edge(2, 1).is_err());

let mut weighted = SparseGraph::<f64>::from_graph(&graph);
weighted.add_weighted_edge(2, 1, 5.0).unwrap();
assert_eq!(weighted.weight_of(1, 2), Some(5.0));
assert_eq!(weighted.number_of_edges(), 1);
```
*/

use crate::{ops::*, *};

mod directed;
mod neighborhood;
mod sparse;
mod sparse_matrix;
mod undirected;
mod weights;

pub use directed::*;
pub use neighborhood::*;
pub use sparse::*;
pub use sparse_matrix::*;
pub use undirected::*;
pub use weights::*;

/// The default undirected graph
pub type Graph = AdjArrayUndir;

/// The default directed graph
pub type DiGraph = AdjArray;

pub(crate) mod macros {
    /// Implements everything adjacency-list graphs share: orientation, vertex range, edge set,
    /// construction, vertex growth and equality. `$field`s are the per-node neighbor arrays.
    macro_rules! impl_common_graph_ops {
        ($struct:ident<$first_field:ident : $first_generic:ident $(, $field:ident : $generic:ident)*> => $directed:ident) => {
            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphType for $struct<$first_generic, $($generic),*> {
                type Dir = $directed;
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphNodeOrder for $struct<$first_generic, $($generic),*> {
                fn number_of_nodes(&self) -> NumNodes {
                    self.$first_field.len() as NumNodes
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphEdgeOrder for $struct<$first_generic, $($generic),*> {
                fn edge_set(&self) -> &EdgeSet {
                    &self.edges
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphNew for $struct<$first_generic, $($generic),*> {
                fn new(n: NumNodes) -> Self {
                    Self {
                        edges: EdgeSet::default(),
                        $first_field: vec![$first_generic::default(); n as usize],
                        $(
                            $field: vec![$generic::default(); n as usize],
                        )*
                    }
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> GraphNodeEditing for $struct<$first_generic, $($generic),*> {
                fn add_vertex(&mut self) -> Node {
                    self.$first_field.push($first_generic::default());
                    $(
                        self.$field.push($generic::default());
                    )*

                    let u = self.number_of_nodes();
                    tracing::trace!(node = u, "added vertex");
                    u
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> PartialEq for $struct<$first_generic, $($generic),*> {
                fn eq(&self, other: &Self) -> bool {
                    self.number_of_nodes() == other.number_of_nodes() && self.edges == other.edges
                }
            }

            impl<$first_generic: Neighborhood, $($generic: Neighborhood),*> Eq for $struct<$first_generic, $($generic),*> {}
        };
    }

    pub(crate) use impl_common_graph_ops;
}

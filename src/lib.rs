/*!
`simplegraphs` provides simple graph representations behind one query/mutation contract.
Graphs are
- **simple** : At most one edge per (ordered) pair of nodes, self-loops are allowed
- **1-based** : Nodes are numbered `1` to `n` and the vertex range only ever grows
- **directed or undirected** : Both orientations share every query and mutation

# Representation

We represent **nodes** as `u32` in the range `1..=n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

### Directed vs Undirected

- In an **undirected** graph, `Edge(u, v)` is treated as equivalent to `Edge(v, u)`. Edge sets
  store the normalized edge `Edge(min, max)`.
- In a **directed** graph, the edge has orientation, so `Edge(u, v)` and `Edge(v, u)` are distinct.

### Available Representations

See the [`repr`] module for the full list of graph storage backends:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir) / [`Graph`](crate::repr::Graph)
- [`AdjArray`](crate::repr::AdjArray) / [`DiGraph`](crate::repr::DiGraph)
- [`SparseGraph`](crate::repr::SparseGraph) and [`SparseDiGraph`](crate::repr::SparseDiGraph) (weighted)

Adjacency-list graphs reject duplicate edges, sparse matrix graphs overwrite the weight instead.

# Errors

Queries never fail (but panic on nodes outside the graph like slice indexing).
Mutations validate their arguments and return a [`GraphError`] leaving the graph unchanged.

# Usage

In most use-cases, `use simplegraphs::prelude::*;` suffices for your needs.

```
use simplegraphs::prelude::*;

let mut graph = Graph::new(3);
graph.add_edge(1, 2).unwrap();
graph.add_edge(2, 3).unwrap();

assert_eq!(graph.degree_of(2), 2);
assert_eq!(graph.add_edge(3, 2), Err(GraphError::DuplicateEdge(Edge(3, 2))));
assert_eq!(graph.rem_edge(1, 3), Err(GraphError::MissingEdge(Edge(1, 3))));
```
*/

pub mod degree;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::GraphError;
pub use node::*;

/// `simplegraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{degree::*, edge::*, error::GraphError, node::*, ops::*, repr::*};
}

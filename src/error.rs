use thiserror::Error;

use crate::{Edge, Node, NumNodes};

/// Errors reported by the mutation contract.
///
/// Every mutation validates its arguments before touching storage, so a returned error
/// implies that the graph is unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A node outside of the vertex range `1..=n` was referenced
    #[error("node {node} is out of bounds for a graph with {n} nodes")]
    Bounds { node: Node, n: NumNodes },

    /// The edge is already present in an adjacency-list graph
    #[error("edge {0} is already present")]
    DuplicateEdge(Edge),

    /// The edge to remove does not exist
    #[error("edge {0} is not present")]
    MissingEdge(Edge),

    /// A sparse matrix cell can not store a zero weight, as zero denotes a missing edge
    #[error("edge {0} can not carry a zero weight")]
    ZeroWeight(Edge),

    /// A weight that is not equal to itself (NaN) can not be stored
    #[error("edge {0} can not carry a NaN weight")]
    NanWeight(Edge),
}

/// Result type of all fallible graph operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Returns `Err(GraphError::Bounds)` if `u` is not a node of a graph with `n` nodes
#[inline]
pub(crate) fn check_node(u: Node, n: NumNodes) -> Result<()> {
    if crate::is_valid_node(u, n) {
        Ok(())
    } else {
        Err(GraphError::Bounds { node: u, n })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            GraphError::Bounds { node: 5, n: 3 }.to_string(),
            "node 5 is out of bounds for a graph with 3 nodes"
        );
        assert_eq!(
            GraphError::DuplicateEdge(Edge(1, 2)).to_string(),
            "edge (1,2) is already present"
        );
        assert_eq!(
            GraphError::MissingEdge(Edge(5, 6)).to_string(),
            "edge (5,6) is not present"
        );
        assert_eq!(
            GraphError::NanWeight(Edge(1, 2)).to_string(),
            "edge (1,2) can not carry a NaN weight"
        );
    }

    #[test]
    fn node_checks() {
        assert!(check_node(1, 1).is_ok());
        assert_eq!(check_node(0, 1), Err(GraphError::Bounds { node: 0, n: 1 }));
        assert_eq!(check_node(2, 1), Err(GraphError::Bounds { node: 2, n: 1 }));
    }
}

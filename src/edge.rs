use std::fmt::{Debug, Display};

use fxhash::FxHashSet;

use crate::Node;

/// An edge is defined by two nodes/endpoints `(source, destination)`.
///
/// Equality is ordered-pair equality: `Edge(1, 2) != Edge(2, 1)`. Undirected graphs
/// therefore store the [normalized](Edge::normalized) edge and answer queries in both
/// directions themselves.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// The canonical edge set every graph owns
pub type EdgeSet = FxHashSet<Edge>;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the source of the edge
    #[inline]
    pub fn src(&self) -> Node {
        self.0
    }

    /// Returns the destination of the edge
    #[inline]
    pub fn dst(&self) -> Node {
        self.1
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_ordered() {
        assert_eq!(Edge(1, 2), Edge::from((1, 2)));
        assert_ne!(Edge(1, 2), Edge(2, 1));
        assert_eq!(Edge(2, 1).reverse(), Edge(1, 2));

        let set: EdgeSet = [Edge(1, 2), Edge(2, 1), Edge(1, 2)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn normalization() {
        assert_eq!(Edge(5, 3).normalized(), Edge(3, 5));
        assert!(Edge(3, 5).is_normalized());
        assert!(!Edge(5, 3).is_normalized());
        assert!(Edge(4, 4).is_normalized());
        assert!(Edge(4, 4).is_loop());
        assert_eq!(Edge(7, 2).src(), 7);
        assert_eq!(Edge(7, 2).dst(), 2);
        assert_eq!(format!("{:?}", Edge(7, 2)), "(7,2)");
    }
}

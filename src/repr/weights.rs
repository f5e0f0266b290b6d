use std::fmt::Debug;

use num::{One, Zero};

use crate::node::slot;

use super::*;

/// Values that can be stored in a [`SparseMatrix`]: zero denotes a missing cell and one is the
/// weight of an unweighted edge
pub trait Weight: Copy + PartialEq + Debug + Zero + One {
    /// Returns *true* if the weight is not equal to itself (a floating point NaN).
    /// Such weights break equality of cells and are never stored.
    #[allow(clippy::eq_op)]
    fn is_nan(&self) -> bool {
        self != self
    }
}

impl<W> Weight for W where W: Copy + PartialEq + Debug + Zero + One {}

/// A source of edge weights used to build weighted graphs
pub trait EdgeWeights<W> {
    /// Returns the weight of edge `(u, v)`
    fn weight(&self, u: Node, v: Node) -> W;
}

/// Assigns weight (distance) `1` to every edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitWeights;

impl<W: Weight> EdgeWeights<W> for UnitWeights {
    fn weight(&self, _u: Node, _v: Node) -> W {
        W::one()
    }
}

impl<W, F> EdgeWeights<W> for F
where
    F: Fn(Node, Node) -> W,
{
    fn weight(&self, u: Node, v: Node) -> W {
        self(u, v)
    }
}

/// A dense row-major weight matrix: the weight of `(u, v)` is `self.0[u - 1][v - 1]`.
///
/// # Panics
/// Querying an edge outside of the matrix panics. A `DenseWeights` passed to
/// `from_graph_weighted` must thus cover every edge of the graph, i.e. be at least `n x n`.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseWeights<W>(pub Vec<Vec<W>>);

impl<W: Copy> EdgeWeights<W> for DenseWeights<W> {
    fn weight(&self, u: Node, v: Node) -> W {
        self.0[slot(u)][slot(v)]
    }
}

/// Cells that are not stored have weight zero
impl<W: Weight> EdgeWeights<W> for SparseMatrix<W> {
    fn weight(&self, u: Node, v: Node) -> W {
        self.get(u, v).unwrap_or_else(W::zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weight_of<W, E: EdgeWeights<W>>(weights: &E, u: Node, v: Node) -> W {
        weights.weight(u, v)
    }

    #[test]
    fn weight_sources() {
        assert_eq!(weight_of::<f64, _>(&UnitWeights, 3, 9), 1.0);
        assert_eq!(weight_of::<u8, _>(&UnitWeights, 1, 1), 1);

        let by_sum = |u: Node, v: Node| (u + v) as f32;
        assert_eq!(weight_of(&by_sum, 2, 5), 7.0);

        let dense = DenseWeights(vec![vec![0, 2], vec![3, 4]]);
        assert_eq!(weight_of(&dense, 1, 2), 2);
        assert_eq!(weight_of(&dense, 2, 1), 3);

        let sparse = SparseMatrix::from_triplets(2, [(1, 2, 0.5)]);
        assert_eq!(weight_of(&sparse, 1, 2), 0.5);
        assert_eq!(weight_of(&sparse, 2, 1), 0.0);
    }

    #[test]
    fn nan_weights() {
        assert!(Weight::is_nan(&f32::NAN));
        assert!(!Weight::is_nan(&1.5f64));
        assert!(!Weight::is_nan(&0u32));
    }

    #[test]
    #[should_panic]
    fn dense_weights_smaller_than_query() {
        let dense = DenseWeights(vec![vec![1.0]]);
        weight_of(&dense, 1, 2);
    }
}

use std::{iter::Copied, slice::Iter};

use itertools::Itertools;
use smallvec::{Array, SmallVec};

use super::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone + Default {
    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if `u` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Appends a neighbor to the Neighborhood without checking if this neighbor exists beforehand
    fn add_neighbor(&mut self, u: Node);

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    /// The order of the remaining neighbors is not preserved.
    fn try_remove_neighbor(&mut self, u: Node) -> bool;
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborhoodSlice: Neighborhood {
    /// Returns a slice-reference of the neighborhood
    fn as_slice(&self) -> &[Node];
}

/// Basic Neighborhood-Impl. using `Vec<Node>`
#[derive(Debug, Default, Clone)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == u) {
            self.0.swap_remove(pos);
            true
        } else {
            false
        }
    }
}

impl NeighborhoodSlice for ArrNeighborhood {
    fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

/// Like [`ArrNeighborhood`] but uses `SmallVec<[Node; N]>` instead.
/// Prefer this if most nodes are known to have at most `N` neighbors.
#[derive(Debug, Default, Clone)]
pub struct SmallNeighborhood<const N: usize = 8>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> Neighborhood for SmallNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == u) {
            self.0.swap_remove(pos);
            true
        } else {
            false
        }
    }
}

impl<const N: usize> NeighborhoodSlice for SmallNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<Nbs: NeighborhoodSlice>() {
        let mut nbs = Nbs::default();
        assert_eq!(nbs.num_of_neighbors(), 0);

        for u in [3, 1, 4, 5] {
            nbs.add_neighbor(u);
        }
        assert_eq!(nbs.num_of_neighbors(), 4);
        assert_eq!(nbs.as_slice(), &[3, 1, 4, 5]);
        assert!(nbs.has_neighbor(4));
        assert!(!nbs.has_neighbor(2));

        assert!(nbs.try_remove_neighbor(1));
        assert!(!nbs.try_remove_neighbor(1));
        assert_eq!(nbs.neighbors().sorted().collect_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn arr_neighborhood() {
        exercise::<ArrNeighborhood>();
    }

    #[test]
    fn small_neighborhood() {
        exercise::<SmallNeighborhood>();
        exercise::<SmallNeighborhood<2>>();
    }
}

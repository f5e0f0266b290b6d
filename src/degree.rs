/*!
# Degree & Neighbor Queries

Representation-agnostic queries built exclusively on [`AdjacencyList`]. Every graph of this
crate gets them via a blanket implementation of [`DegreeQueries`].

```
use simplegraphs::prelude::*;

let mut graph = DiGraph::new(3);
graph.add_edge(1, 2).unwrap();
graph.add_edge(3, 2).unwrap();

assert_eq!(graph.degree_of(2), 2);
assert_eq!(graph.max_in_degree(), Some(2));
assert_eq!(graph.min_out_degree(), Some(0));
assert_eq!(graph.degrees(Some(&[3, 1][..])), vec![1, 1]);
```
*/

use fxhash::FxHashSet;
use itertools::Itertools;

use crate::{ops::*, *};

/// Applies `f` to every node of `nodes` (or of the graph if `None`), preserving input order
fn map_nodes<G, F>(graph: &G, nodes: Option<&[Node]>, f: F) -> Vec<NumNodes>
where
    G: GraphNodeOrder,
    F: Fn(Node) -> NumNodes,
{
    match nodes {
        Some(nodes) => nodes.iter().map(|&u| f(u)).collect(),
        None => graph.vertices().map(f).collect(),
    }
}

/// Single pass over all nodes keeping the current extreme of `degree`.
/// A node replaces the current extreme only if `replaces(new, current)` holds strictly.
fn scan_extreme<G, D, C>(graph: &G, degree: D, replaces: C) -> Option<NumNodes>
where
    G: GraphNodeOrder,
    D: Fn(Node) -> NumNodes,
    C: Fn(NumNodes, NumNodes) -> bool,
{
    let mut nodes = graph.vertices();
    let mut extreme = degree(nodes.next()?);
    for u in nodes {
        let d = degree(u);
        if replaces(d, extreme) {
            extreme = d;
        }
    }
    Some(extreme)
}

/// Degree and neighborhood queries for any [`AdjacencyList`].
///
/// All scalar queries ** panic if the node is not part of the graph **.
/// Extremal queries return `None` for the empty graph.
pub trait DegreeQueries: AdjacencyList {
    /// Returns the degree of `u`.
    ///
    /// For directed graphs this is `in_degree + out_degree`. For undirected graphs it is the
    /// size of the neighborhood, so a self-loop contributes `1`.
    fn degree_of(&self, u: Node) -> NumNodes {
        if self.is_directed() {
            self.out_degree_of(u) + self.in_degree_of(u)
        } else {
            self.out_degree_of(u)
        }
    }

    /// Returns the out-degrees of `nodes` (all nodes if `None`) in input order
    fn out_degrees(&self, nodes: Option<&[Node]>) -> Vec<NumNodes> {
        map_nodes(self, nodes, |u| self.out_degree_of(u))
    }

    /// Returns the in-degrees of `nodes` (all nodes if `None`) in input order
    fn in_degrees(&self, nodes: Option<&[Node]>) -> Vec<NumNodes> {
        map_nodes(self, nodes, |u| self.in_degree_of(u))
    }

    /// Returns the degrees of `nodes` (all nodes if `None`) in input order
    fn degrees(&self, nodes: Option<&[Node]>) -> Vec<NumNodes> {
        map_nodes(self, nodes, |u| self.degree_of(u))
    }

    /// Returns the maximum out-degree in the graph
    fn max_out_degree(&self) -> Option<NumNodes> {
        scan_extreme(self, |u| self.out_degree_of(u), |d, e| d > e)
    }

    /// Returns the minimum out-degree in the graph
    fn min_out_degree(&self) -> Option<NumNodes> {
        scan_extreme(self, |u| self.out_degree_of(u), |d, e| d < e)
    }

    /// Returns the maximum in-degree in the graph
    fn max_in_degree(&self) -> Option<NumNodes> {
        scan_extreme(self, |u| self.in_degree_of(u), |d, e| d > e)
    }

    /// Returns the minimum in-degree in the graph
    fn min_in_degree(&self) -> Option<NumNodes> {
        scan_extreme(self, |u| self.in_degree_of(u), |d, e| d < e)
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> Option<NumNodes> {
        scan_extreme(self, |u| self.degree_of(u), |d, e| d > e)
    }

    /// Returns the minimum degree in the graph
    fn min_degree(&self) -> Option<NumNodes> {
        scan_extreme(self, |u| self.degree_of(u), |d, e| d < e)
    }

    /// Returns the number of nodes per degree: entry `d` counts the nodes of degree `d`.
    ///
    /// There is one bucket for every degree `0..n` a simple graph on `n` nodes can have.
    /// The histogram grows beyond that only if a larger degree occurs (total degrees of directed
    /// graphs, self-loops).
    fn degree_histogram(&self) -> Vec<NumNodes> {
        let mut histogram = vec![0; self.len()];
        for u in self.vertices() {
            let d = self.degree_of(u) as usize;
            if d >= histogram.len() {
                histogram.resize(d + 1, 0);
            }
            histogram[d] += 1;
        }
        histogram
    }

    /// Returns the neighbors shared by `u` and `v` in sorted order.
    /// For directed graphs these are common **out**-neighbors (see [`AdjacencyList::neighbors_of`]).
    fn common_neighbors(&self, u: Node, v: Node) -> Vec<Node> {
        let nbs_u: FxHashSet<Node> = self.neighbors_of(u).collect();
        self.neighbors_of(v)
            .filter(|w| nbs_u.contains(w))
            .sorted_unstable()
            .dedup()
            .collect()
    }
}

impl<G: AdjacencyList> DegreeQueries for G {}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn star_with_tail() -> Graph {
        // 1 is the center of a star over 2, 3, 4; 4 - 5 is the tail
        Graph::from_edges(5, [(1, 2), (1, 3), (1, 4), (4, 5)]).unwrap()
    }

    #[test]
    fn undirected_degrees() {
        let graph = star_with_tail();

        assert_eq!(graph.degrees(None), vec![3, 1, 1, 2, 1]);
        assert_eq!(graph.degrees(Some(&[5, 1, 4][..])), vec![1, 3, 2]);
        assert_eq!(graph.out_degrees(None), graph.in_degrees(None));
        assert_eq!(graph.max_degree(), Some(3));
        assert_eq!(graph.min_degree(), Some(1));

        let sum: NumNodes = graph.degrees(None).into_iter().sum();
        assert_eq!(sum, 2 * graph.number_of_edges());
    }

    #[test]
    fn self_loops_count_once_undirected() {
        let mut graph = Graph::new(2);
        graph.add_edge(1, 1).unwrap();
        graph.add_edge(1, 2).unwrap();

        assert_eq!(graph.degree_of(1), 2);
        assert_eq!(graph.degree_of(2), 1);
        assert_eq!(graph.degree_histogram(), vec![0, 1, 1]);
    }

    #[test]
    fn directed_degrees() {
        let graph = DiGraph::from_edges(4, [(1, 2), (1, 3), (2, 3), (4, 3)]).unwrap();

        assert_eq!(graph.out_degrees(None), vec![2, 1, 0, 1]);
        assert_eq!(graph.in_degrees(None), vec![0, 1, 3, 0]);
        assert_eq!(graph.degrees(None), vec![2, 2, 3, 1]);

        assert_eq!(graph.max_out_degree(), Some(2));
        assert_eq!(graph.min_out_degree(), Some(0));
        assert_eq!(graph.max_in_degree(), Some(3));
        assert_eq!(graph.min_in_degree(), Some(0));
        assert_eq!(graph.max_degree(), Some(3));
        assert_eq!(graph.min_degree(), Some(1));

        for u in graph.vertices() {
            assert!(graph.min_degree().unwrap() <= graph.degree_of(u));
            assert!(graph.degree_of(u) <= graph.max_degree().unwrap());
        }
    }

    #[test]
    fn extremes_of_empty_graph() {
        let graph = DiGraph::new(0);
        assert_eq!(graph.max_degree(), None);
        assert_eq!(graph.min_in_degree(), None);
        assert!(graph.degree_histogram().is_empty());
        assert!(graph.degrees(None).is_empty());
    }

    #[test]
    fn histogram() {
        let graph = star_with_tail();
        assert_eq!(graph.degree_histogram(), vec![0, 3, 1, 1, 0]);

        // a total degree of 4 exceeds the `n - 1 = 1` simple bound
        let graph = DiGraph::from_edges(2, [(1, 2), (2, 1), (1, 1)]).unwrap();
        assert_eq!(graph.degrees(None), vec![4, 2]);
        assert_eq!(graph.degree_histogram(), vec![0, 0, 1, 0, 1]);

        let histogram = star_with_tail().degree_histogram();
        assert_eq!(histogram.iter().sum::<NumNodes>(), 5);
    }

    #[test]
    fn neighbors_are_out_neighbors() {
        let graph = DiGraph::from_edges(3, [(1, 2)]).unwrap();

        assert_eq!(graph.neighbors_of(1).collect::<Vec<_>>(), vec![2]);
        assert_eq!(graph.neighbors_of(2).count(), 0);
        assert_eq!(graph.all_neighbors_of(2), vec![1]);
    }

    #[test]
    fn common_neighbors() {
        let graph = star_with_tail();
        assert_eq!(graph.common_neighbors(2, 3), vec![1]);
        assert_eq!(graph.common_neighbors(1, 5), vec![4]);
        assert!(graph.common_neighbors(2, 5).is_empty());

        let graph = DiGraph::from_edges(4, [(1, 3), (1, 4), (2, 4), (3, 4), (4, 3)]).unwrap();
        assert_eq!(graph.common_neighbors(1, 2), vec![4]);
        // only out-neighbors are considered
        assert!(graph.common_neighbors(3, 4).is_empty());
    }
}

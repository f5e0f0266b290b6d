/// Runs the same randomized checks against every graph representation.
///
/// Usage: `test_graph_ops!(module_name, GraphType, undirected, (Trait, ...))` where each listed
/// trait selects a group of tests.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ty, $undirected:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::test_graph_ops};
            use fxhash::FxHashSet;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            type G = $graph;

            /// Creates a list of at most `m_ub` distinct random edges for nodes `1..=n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(1..=n);
                    let v = rng.random_range(1..=n);

                    if $undirected {
                        Edge(u, v).normalized()
                    } else {
                        Edge(u, v)
                    }
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            /// Reference adjacency: `(out, in)` neighbor sets per node (index `0` unused)
            fn reference_adjacency(n: NumNodes, edges: &[Edge]) -> (Vec<FxHashSet<Node>>, Vec<FxHashSet<Node>>) {
                let mut out_nbs = vec![FxHashSet::default(); n as usize + 1];
                let mut in_nbs = vec![FxHashSet::default(); n as usize + 1];
                for &Edge(u, v) in edges {
                    out_nbs[u as usize].insert(v);
                    in_nbs[v as usize].insert(u);
                    if $undirected {
                        out_nbs[v as usize].insert(u);
                        in_nbs[u as usize].insert(v);
                    }
                }
                (out_nbs, in_nbs)
            }

            fn random_graph(seed: u64, n: NumNodes, m_ub: NumEdges) -> (G, Vec<Edge>) {
                let rng = &mut Pcg64Mcg::seed_from_u64(seed);
                let edges = random_edges(rng, n, m_ub);
                let graph = G::from_edges(n, edges.iter()).unwrap();
                (graph, edges)
            }

            $(
                test_graph_ops!(G<$undirected>: $trait);
            )*
        }
    };
    ($graph:ident<$undirected:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.is_directed(), !$undirected);

                assert_eq!(graph.vertices().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (1..=n).collect_vec());
                assert!(!graph.has_vertex(0));
                assert!(!graph.has_vertex(n + 1));
                assert!(graph.vertices().all(|u| graph.has_vertex(u)));
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphNodeEditing) => {
        #[test]
        fn graph_node_editing() {
            let mut graph = <$graph>::new(0);
            assert!(graph.is_empty());

            assert_eq!(graph.add_vertices(3), 3);
            assert_eq!(graph.vertices().collect_vec(), vec![1, 2, 3]);
            assert_eq!(
                graph.add_edge(1, 4),
                Err(GraphError::Bounds { node: 4, n: 3 })
            );

            graph.add_edge(1, 2).unwrap();
            assert!(graph.has_edge(1, 2));
            assert_eq!(graph.has_edge(2, 1), $undirected);
            assert_eq!(graph.number_of_edges(), 1);

            assert_eq!(graph.add_vertex(), 4);
            assert_eq!(graph.out_degree_of(4), 0);
            assert_eq!(graph.in_degree_of(4), 0);
            graph.add_edge(1, 4).unwrap();
            assert_eq!(graph.ordered_edges(), vec![Edge(1, 2), Edge(1, 4)]);

            assert_eq!(graph.add_vertices(0), 4);
            assert_eq!(graph.add_vertices(2), 6);
            assert_eq!(graph.number_of_edges(), 2);
        }
    };
    ($graph:ident<$undirected:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for seed in 0..5 {
                        let (graph, edges) = random_graph(seed, n, m_ub as NumEdges);
                        let (out_nbs, in_nbs) = reference_adjacency(n, &edges);

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(graph.edges().count(), edges.len());
                        assert_eq!(graph.ordered_edges(), edges);

                        for &Edge(u, v) in &edges {
                            assert!(graph.has_edge(u, v));
                            assert!(graph.out_neighbors_of(u).contains(&v));
                            assert!(graph.in_neighbors_of(v).contains(&u));
                        }

                        for u in graph.vertices() {
                            let out: FxHashSet<Node> = graph.out_neighbors_of(u).collect();
                            let inc: FxHashSet<Node> = graph.in_neighbors_of(u).collect();

                            assert_eq!(out, out_nbs[u as usize]);
                            assert_eq!(inc, in_nbs[u as usize]);
                            assert_eq!(graph.out_degree_of(u) as usize, out.len());
                            assert_eq!(graph.in_degree_of(u) as usize, inc.len());

                            assert!(graph.out_edges_of(u).all(|e| e.src() == u && graph.has_edge(e.0, e.1)));
                            assert!(graph.in_edges_of(u).all(|e| e.dst() == u && graph.has_edge(e.0, e.1)));
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for seed in 0..5 {
                        let rng = &mut Pcg64Mcg::seed_from_u64(seed);
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut graph = <$graph>::new(n);
                        let mut present: FxHashSet<Edge> = FxHashSet::default();

                        for &Edge(u, v) in &edges {
                            graph.add_edge(u, v).unwrap();
                            present.insert(Edge(u, v));
                        }
                        assert_eq!(graph.number_of_edges(), present.len() as NumEdges);

                        let mut m = graph.number_of_edges();
                        for _ in 0..(m / 2) {
                            let u = rng.random_range(1..=n);
                            let v = rng.random_range(1..=n);
                            let key = if $undirected { Edge(u, v).normalized() } else { Edge(u, v) };

                            if present.remove(&key) {
                                graph.rem_edge(u, v).unwrap();
                                m -= 1;
                            } else {
                                assert_eq!(graph.rem_edge(u, v), Err(GraphError::MissingEdge(Edge(u, v))));
                            }

                            assert_eq!(m, graph.number_of_edges());
                            assert!(!graph.has_edge(u, v));
                        }

                        let (out_nbs, _) = reference_adjacency(n, &present.iter().copied().collect_vec());
                        for u in graph.vertices() {
                            let out: FxHashSet<Node> = graph.out_neighbors_of(u).collect();
                            assert_eq!(out, out_nbs[u as usize]);
                        }

                        graph.rem_edges(present.iter().copied()).unwrap();
                        assert!(graph.has_no_edges());
                        assert!(graph.vertices().all(|u| graph.out_degree_of(u) == 0 && graph.in_degree_of(u) == 0));
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: DegreeQueries) => {
        #[test]
        fn test_degree_queries() {
            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n, n * 5] {
                    for seed in 0..5 {
                        let (graph, _) = random_graph(seed, n, m_ub as NumEdges);
                        let m = graph.number_of_edges();
                        let loops = graph.number_of_self_loops();

                        let total: NumNodes = graph.degrees(None).into_iter().sum();
                        if $undirected {
                            assert_eq!(total, 2 * m - loops);
                        } else {
                            assert_eq!(total, 2 * m);
                            assert_eq!(graph.out_degrees(None).into_iter().sum::<NumNodes>(), m);
                            assert_eq!(graph.in_degrees(None).into_iter().sum::<NumNodes>(), m);
                        }

                        let (min, max) = (graph.min_degree().unwrap(), graph.max_degree().unwrap());
                        for u in graph.vertices() {
                            assert!(min <= graph.degree_of(u) && graph.degree_of(u) <= max);
                            assert!(graph.min_out_degree().unwrap() <= graph.out_degree_of(u));
                            assert!(graph.out_degree_of(u) <= graph.max_out_degree().unwrap());
                            assert!(graph.min_in_degree().unwrap() <= graph.in_degree_of(u));
                            assert!(graph.in_degree_of(u) <= graph.max_in_degree().unwrap());
                        }
                        assert_eq!(Some(max), graph.degrees(None).into_iter().max());
                        assert_eq!(Some(min), graph.degrees(None).into_iter().min());

                        let histogram = graph.degree_histogram();
                        assert!(histogram.len() >= n as usize);
                        assert_eq!(histogram.iter().sum::<NumNodes>(), n);
                        for (d, &count) in histogram.iter().enumerate() {
                            let expected = graph.vertices().filter(|&u| graph.degree_of(u) as usize == d).count();
                            assert_eq!(count as usize, expected);
                        }

                        let subset = graph.vertices().rev().step_by(3).collect_vec();
                        assert_eq!(
                            graph.degrees(Some(subset.as_slice())),
                            subset.iter().map(|&u| graph.degree_of(u)).collect_vec()
                        );

                        for (u, v) in [(1, 2), (3, n), (n, n - 1)] {
                            let expected = graph.neighbors_of(u)
                                .filter(|w| graph.neighbors_of(v).contains(w))
                                .sorted()
                                .dedup()
                                .collect_vec();
                            assert_eq!(graph.common_neighbors(u, v), expected);
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$undirected:literal>: GraphProperties) => {
        #[test]
        fn test_graph_properties() {
            for n in [10 as NumNodes, 20] {
                for seed in 0..5 {
                    let (graph, edges) = random_graph(seed, n, 3 * n);

                    // copies are structurally equal but independent
                    let mut copy = graph.clone();
                    assert!(copy == graph);
                    assert!(graph.is_subgraph_of(&graph));

                    let &Edge(u, v) = edges.first().unwrap();
                    copy.rem_edge(u, v).unwrap();
                    copy.add_vertex();
                    assert!(copy != graph);
                    assert!(graph.has_edge(u, v));
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);

                    // subgraphs stay subgraphs when edges are added to the supergraph
                    let half = <$graph>::from_edges(n, edges.iter().step_by(2)).unwrap();
                    let mut full = <$graph>::new(n + 1);
                    full.add_edges(edges.iter().step_by(2)).unwrap();
                    assert!(half.is_subgraph_of(&full));
                    for e in edges.iter().skip(1).step_by(2) {
                        full.add_edge(e.0, e.1).unwrap();
                        assert!(half.is_subgraph_of(&full));
                    }
                    full.add_edge(n + 1, 1).unwrap();
                    assert!(half.is_subgraph_of(&full));
                    assert!(graph.is_subgraph_of(&full));
                    assert!(!full.is_subgraph_of(&graph));

                    assert_eq!(graph.has_self_loops(), edges.iter().any(|e| e.is_loop()));
                    assert!(graph.density() > 0.0 && graph.density() <= 1.0 + 1e-9);
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

use std::collections::{HashMap, HashSet, VecDeque};

use common::error::ErrorKind;
use common::types::Traits;
use graph_walk_core::{
    AdjacencyGraph, Graph, creates_cycle, find_all_paths, shortest_path,
    shortest_path_with_weight, strongly_connected_components,
};
use proptest::prelude::*;
use proptest::strategy::Strategy;

const NUM_NODES_STRATEGY: std::ops::Range<usize> = 1usize..8;

type Edges = Vec<(usize, usize, f64)>;

fn graph_strategy() -> impl Strategy<Value = (usize, Edges)> {
    NUM_NODES_STRATEGY.prop_flat_map(|num_nodes| {
        let edge_generator = (0usize..num_nodes, 0usize..num_nodes, 0.0f64..10.0);
        let edges_generator = prop::collection::vec(edge_generator, 0..20);

        (proptest::strategy::Just(num_nodes), edges_generator)
    })
}

fn build(traits: Traits, num_nodes: usize, edges: &Edges) -> AdjacencyGraph<usize, ()> {
    AdjacencyGraph::from_edge_list(traits, 0..num_nodes, edges.iter().copied())
        .expect("every endpoint is a vertex")
}

/// Forward BFS reference: all vertices reachable from `start`, hop counts included.
fn bfs_hops(graph: &AdjacencyGraph<usize, ()>, start: usize) -> HashMap<usize, usize> {
    let adjacency = graph.adjacency_map();
    let mut hops = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);

    while let Some(v) = queue.pop_front() {
        for &w in adjacency[&v].keys() {
            if !hops.contains_key(&w) {
                hops.insert(w, hops[&v] + 1);
                queue.push_back(w);
            }
        }
    }
    hops
}

/// Brute-force minimum weight between two vertices (Bellman-Ford style).
fn reference_distance(num_nodes: usize, edges: &Edges, source: usize, target: usize) -> f64 {
    let mut distance = vec![f64::INFINITY; num_nodes];
    distance[source] = 0.0;
    for _ in 0..num_nodes {
        for &(u, v, w) in edges {
            if distance[u] + w < distance[v] {
                distance[v] = distance[u] + w;
            }
        }
    }
    distance[target]
}

proptest! {
    /// Property: adding a self-loop always closes a cycle.
    #[test]
    fn self_loop_always_creates_cycle((num_nodes, edges) in graph_strategy()) {
        let graph = build(Traits::directed(), num_nodes, &edges);
        for v in 0..num_nodes {
            prop_assert!(creates_cycle(&graph, &v, &v).unwrap());
        }
    }

    /// Property: creates_cycle(a, b) is false exactly when b cannot reach a.
    #[test]
    fn creates_cycle_matches_reverse_reachability((num_nodes, edges) in graph_strategy()) {
        let graph = build(Traits::directed(), num_nodes, &edges);
        for a in 0..num_nodes {
            for b in 0..num_nodes {
                let b_reaches_a = bfs_hops(&graph, b).contains_key(&a);
                prop_assert_eq!(creates_cycle(&graph, &a, &b).unwrap(), b_reaches_a);
            }
        }
    }

    /// Property: shortest paths are valid edge walks of minimal weight, and
    /// fail exactly when the target is not forward-reachable.
    #[test]
    fn shortest_path_is_valid_and_minimal((num_nodes, edges) in graph_strategy()) {
        let graph = build(Traits::directed().weighted(), num_nodes, &edges);
        let adjacency = graph.adjacency_map();
        // Parallel edges collapse to the last weight, so compare against the
        // edges the graph actually holds.
        let effective: Edges = adjacency
            .values()
            .flat_map(|out| out.values().map(|e| (e.source, e.target, e.weight)))
            .collect();

        for source in 0..num_nodes {
            let reachable = bfs_hops(&graph, source);
            for target in 0..num_nodes {
                match shortest_path_with_weight(&graph, &source, &target) {
                    Ok(found) => {
                        prop_assert!(reachable.contains_key(&target));
                        prop_assert_eq!(found.path.first(), Some(&source));
                        prop_assert_eq!(found.path.last(), Some(&target));

                        let mut total = 0.0;
                        for pair in found.path.windows(2) {
                            let edge = adjacency[&pair[0]].get(&pair[1]);
                            prop_assert!(edge.is_some());
                            total += edge.map_or(0.0, |e| e.weight);
                        }
                        prop_assert!((total - found.weight).abs() < 1e-9);

                        let best = reference_distance(num_nodes, &effective, source, target);
                        prop_assert!((found.weight - best).abs() < 1e-9);
                    }
                    Err(err) => {
                        prop_assert_eq!(err.kind, ErrorKind::TargetNotReachable);
                        prop_assert!(!reachable.contains_key(&target));
                    }
                }
            }
        }
    }

    /// Property: repeated calls on an unchanged graph agree on total weight.
    #[test]
    fn shortest_path_is_idempotent((num_nodes, edges) in graph_strategy()) {
        let graph = build(Traits::directed().weighted(), num_nodes, &edges);
        let target = num_nodes - 1;

        let first = shortest_path_with_weight(&graph, &0, &target).map(|p| p.weight);
        let second = shortest_path_with_weight(&graph, &0, &target).map(|p| p.weight);
        prop_assert_eq!(first, second);
    }

    /// Property: on unweighted graphs the path has the minimum edge count.
    #[test]
    fn unweighted_shortest_path_has_fewest_hops((num_nodes, edges) in graph_strategy()) {
        let graph = build(Traits::directed(), num_nodes, &edges);
        let hops = bfs_hops(&graph, 0);

        for target in 0..num_nodes {
            match shortest_path(&graph, &0, &target) {
                Ok(path) => prop_assert_eq!(path.len() - 1, hops[&target]),
                Err(_) => prop_assert!(!hops.contains_key(&target)),
            }
        }
    }

    /// Property: SCCs partition the vertex set into mutually reachable groups.
    #[test]
    fn scc_partitions_vertices((num_nodes, edges) in graph_strategy()) {
        let graph = build(Traits::directed(), num_nodes, &edges);
        let components = strongly_connected_components(&graph).unwrap();

        let mut seen = HashSet::new();
        for component in &components {
            prop_assert!(!component.is_empty());
            for &v in component {
                prop_assert!(seen.insert(v), "vertex {} in two components", v);
            }
        }
        prop_assert_eq!(seen.len(), num_nodes);

        let reach: Vec<HashMap<usize, usize>> = (0..num_nodes).map(|v| bfs_hops(&graph, v)).collect();
        let mut component_of = vec![0; num_nodes];
        for (id, component) in components.iter().enumerate() {
            for &v in component {
                component_of[v] = id;
            }
        }
        for a in 0..num_nodes {
            for b in 0..num_nodes {
                let mutual = reach[a].contains_key(&b) && reach[b].contains_key(&a);
                prop_assert_eq!(component_of[a] == component_of[b], mutual);
            }
        }
    }

    /// Property: SCCs are only defined for directed graphs.
    #[test]
    fn scc_rejects_undirected((num_nodes, edges) in graph_strategy()) {
        let graph = build(Traits::undirected(), num_nodes, &edges);
        let err = strongly_connected_components(&graph).unwrap_err();
        prop_assert_eq!(err.kind, ErrorKind::InvalidGraphKind);
    }

    /// Property: enumerated paths are simple, distinct, follow edges and end at the target.
    #[test]
    fn all_paths_are_simple((num_nodes, edges) in graph_strategy()) {
        let graph = build(Traits::directed(), num_nodes, &edges);
        let adjacency = graph.adjacency_map();
        let target = num_nodes - 1;

        let paths = find_all_paths(&graph, &0, &target).unwrap();
        let distinct: HashSet<&Vec<usize>> = paths.iter().collect();
        prop_assert_eq!(distinct.len(), paths.len());

        for path in &paths {
            let unique: HashSet<&usize> = path.iter().collect();
            prop_assert_eq!(unique.len(), path.len());
            prop_assert_eq!(path.first(), Some(&0));
            prop_assert_eq!(path.last(), Some(&target));
            for pair in path.windows(2) {
                prop_assert!(adjacency[&pair[0]].contains_key(&pair[1]));
            }
        }

        // Some path exists exactly when the target is reachable (and distinct from the source).
        let reachable = target != 0 && bfs_hops(&graph, 0).contains_key(&target);
        prop_assert_eq!(!paths.is_empty(), reachable);
    }
}

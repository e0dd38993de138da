//! Random graphs and random queries for benchmarking and cross checking the search variants.

use rand::prelude::*;
use std::time::Duration;

use crate::{
    algo::{dijkstra::*, *},
    datastr::{graph::*, index_heap::IndexdMinHeap},
    error::{GraphError, Result},
    report::*,
};

/// Number of dijkstra queries performed for experiments.
/// Can be overriden through the NUM_DIJKSTRA_QUERIES env var.
pub fn num_dijkstra_queries() -> usize {
    std::env::var("NUM_DIJKSTRA_QUERIES").ok().and_then(|num| num.parse().ok()).unwrap_or(1000)
}

/// Seed for random graphs and queries.
/// Can be overriden through the RANDOM_GRAPH_SEED env var.
pub fn random_seed() -> u64 {
    std::env::var("RANDOM_GRAPH_SEED").ok().and_then(|seed| seed.parse().ok()).unwrap_or(0)
}

pub fn rng(seed: u64) -> StdRng {
    report!("seed", seed);
    StdRng::seed_from_u64(seed)
}

/// A graph with `num_nodes` vertices and exactly `num_arcs` distinct arcs with costs in `0..max_cost`.
pub fn random_graph(num_nodes: usize, num_arcs: usize, max_cost: Weight, rng: &mut StdRng) -> Result<HashGraph> {
    if num_nodes > NodeId::max_value() as usize {
        return Err(GraphError::InvalidArgument(format!("num_nodes = {}", num_nodes)));
    }
    if num_nodes.checked_mul(num_nodes).map_or(true, |pairs| num_arcs > pairs) {
        return Err(GraphError::InvalidArgument(format!("num_arcs = {} for {} vertices", num_arcs, num_nodes)));
    }
    if max_cost == 0 {
        return Err(GraphError::InvalidArgument("max_cost = 0".to_string()));
    }
    let mut graph = HashGraph::new(num_nodes);

    while graph.num_edges() < num_arcs {
        let from = rng.gen_range(0..num_nodes as NodeId);
        let to = rng.gen_range(0..num_nodes as NodeId);
        let cost = rng.gen_range(0..max_cost);
        graph.add_edge(from, to, cost)?;
    }

    Ok(graph)
}

/// `num_queries` source target pairs drawn uniformly from `0..num_nodes`.
pub fn random_queries(num_nodes: usize, num_queries: usize, rng: &mut StdRng) -> Result<Vec<Query>> {
    if num_queries == 0 {
        return Ok(Vec::new());
    }
    if num_nodes == 0 || num_nodes > NodeId::max_value() as usize {
        return Err(GraphError::InvalidArgument(format!("no queries possible on {} vertices", num_nodes)));
    }

    Ok(std::iter::repeat_with(|| Query {
        from: rng.gen_range(0..num_nodes as NodeId),
        to: rng.gen_range(0..num_nodes as NodeId),
    })
    .take(num_queries)
    .collect())
}

/// Run every query with both the linear scan and the heap based search, report timings and results
/// and assert that both produce the same shortest path tree.
pub fn run_queries<Ops>(graph: &HashGraph, queries: &[Query], reporting_context: &mut CollectionContextGuard) -> Result<()>
where
    Ops: DijkstraOps + Default,
{
    let mut linear_scan = ShortestPath::<HashGraph, Ops, LinearScan>::new(graph);
    let mut heap = ShortestPath::<HashGraph, Ops, IndexdMinHeap<State<Distance>>>::new(graph);

    let mut total_linear_scan_time = Duration::ZERO;
    let mut total_heap_time = Duration::ZERO;

    for &Query { from, to } in queries {
        let _query_ctxt = reporting_context.push_collection_item();

        report!("from", from);
        report!("to", to);

        let linear_scan_time = run_query(&mut linear_scan, from, to, "linear_scan")?;
        let heap_time = run_query(&mut heap, from, to, "index_heap")?;
        assert_eq!(linear_scan.tree(), heap.tree());

        total_linear_scan_time += linear_scan_time;
        total_heap_time += heap_time;
    }

    if !queries.is_empty() {
        eprintln!("Avg. linear scan query time {:?}", total_linear_scan_time / queries.len() as u32);
        eprintln!("Avg. heap query time {:?}", total_heap_time / queries.len() as u32);
    }

    Ok(())
}

fn run_query<Ops, Selection>(server: &mut ShortestPath<HashGraph, Ops, Selection>, from: NodeId, to: NodeId, key: &str) -> Result<Duration>
where
    Ops: DijkstraOps,
    Selection: NodeSelection,
{
    let _ctxt = push_context(key.to_string());

    let (res, time) = measure(|| server.compute(from).map(|_| ()));
    res?;
    report!("running_time_ms", time.as_secs_f64() * 1000.0);
    // one per query, kept off stderr
    report_silent!("result", server.distance_to(to).ok());

    Ok(time)
}

use sparse_router::{
    algo::dijkstra::{EdgeCostOps, HopCountOps},
    cli::{parse_arg, CliErr},
    experiments,
    report::*,
    report,
};
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    let _reporter = enable_reporting("random_queries");

    let mut args = env::args().skip(1);
    let num_nodes: usize = parse_arg(args.next(), "No valid number of vertices given")?;
    let num_arcs: usize = parse_arg(args.next(), "No valid number of arcs given")?;
    let max_cost: u32 = args.next().map_or(Ok(100), |arg| parse_arg(Some(arg), "No valid maximum cost given"))?;

    if num_nodes == 0 {
        return Err(Box::new(CliErr("Queries need at least one vertex")));
    }
    if num_nodes.checked_mul(num_nodes).map_or(true, |pairs| num_arcs > pairs) {
        return Err(Box::new(CliErr("More arcs requested than vertex pairs exist")));
    }
    if max_cost == 0 {
        return Err(Box::new(CliErr("Maximum cost has to be positive")));
    }

    let mut rng = experiments::rng(experiments::random_seed());
    let graph = report_time_with_key("generating graph", "graph_generation_ms", || {
        experiments::random_graph(num_nodes, num_arcs, max_cost, &mut rng)
    })?;
    report!("graph", { "num_nodes": graph.num_vertices(), "num_arcs": graph.num_edges(), "max_cost": max_cost });

    let queries = experiments::random_queries(num_nodes, experiments::num_dijkstra_queries(), &mut rng)?;

    {
        let _ctxt = push_context("hops".to_string());
        let mut algo_runs_ctxt = push_collection_context("algo_runs".to_string());
        experiments::run_queries::<HopCountOps>(&graph, &queries, &mut algo_runs_ctxt)?;
    }
    {
        let _ctxt = push_context("costs".to_string());
        let mut algo_runs_ctxt = push_collection_context("algo_runs".to_string());
        experiments::run_queries::<EdgeCostOps>(&graph, &queries, &mut algo_runs_ctxt)?;
    }

    Ok(())
}

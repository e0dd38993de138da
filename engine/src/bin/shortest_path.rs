use sparse_router::{
    algo::dijkstra::*,
    cli::{parse_arg, CliErr},
    datastr::graph::*,
    io::load_edge_list,
    report::*,
    report, GraphError,
};
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    let _reporter = enable_reporting("shortest_path");

    let mut args = env::args().skip(1);
    let start: NodeId = parse_arg(args.next(), "No valid start vertex arg given")?;
    let end: NodeId = parse_arg(args.next(), "No valid end vertex arg given")?;
    let path = args.next().ok_or(CliErr("No edge list file arg given"))?;
    let relaxation = args.next().unwrap_or_else(|| "hops".to_string());

    let graph = report_time_with_key("loading graph", "graph_loading_ms", || load_edge_list(&path))?;
    report!("graph", { "num_nodes": graph.num_vertices(), "num_arcs": graph.num_edges() });
    report!("relaxation", relaxation);

    match relaxation.as_str() {
        "hops" => run(ShortestPath::<HashGraph, HopCountOps>::new(&graph), start, end),
        "costs" => run(ShortestPath::<HashGraph, EdgeCostOps>::new(&graph), start, end),
        _ => {
            print_usage();
            Err(Box::new(CliErr("Relaxation has to be either hops or costs")))
        }
    }
}

fn run<Ops: DijkstraOps>(mut server: ShortestPath<HashGraph, Ops>, start: NodeId, end: NodeId) -> Result<(), Box<dyn Error>> {
    report_time("dijkstra", || server.compute(start).map(|_| ()))?;
    if let Some(tree) = server.tree() {
        report!("tree", tree);
    }

    match server.distance_to(end) {
        Ok(distance) => {
            println!("The shortest distance from vertex {} to vertex {} was {}", start, end, distance);
            println!("The path taken was {:?}", server.path_to(end)?);
            Ok(())
        }
        Err(GraphError::Unreachable(_)) => {
            println!("Vertex {} was unreachable from vertex {}", end, start);
            Err(Box::new(GraphError::Unreachable(end)))
        }
        Err(err) => Err(Box::new(err)),
    }
}

fn print_usage() {
    eprintln!(
        "Usage: shortest_path start end edge_list_file [hops|costs]

Finds the shortest path between two vertices of the graph in edge_list_file.
With hops (the default) every edge counts as one, with costs the edge costs from the file are used.
"
    );
}

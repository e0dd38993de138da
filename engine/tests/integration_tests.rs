use rand::prelude::*;
use sparse_router::{
    algo::dijkstra::*,
    datastr::{graph::*, index_heap::IndexdMinHeap},
    experiments::random_graph,
    io::read_edge_list,
    GraphError,
};

fn graph() -> HashGraph {
    // This is the directed graph we're going to use.
    // The node numbers correspond to the different states,
    // and the edge weights symbolize the cost of moving
    // from one node to another.
    // Note that the edges are one-way and node 5 has no edges at all.
    //
    //                  7
    //          +-----------------+
    //          |                 |
    //          v   1        2    |  2
    //          0 -----> 1 -----> 3 ---> 4
    //          |        ^        ^      ^
    //          |        | 1      |      |
    //          |        |        | 3    | 1
    //          +------> 2 -------+      |
    //           10      |               |
    //                   +---------------+
    //
    let mut graph = HashGraph::new(6);
    for &(from, to, cost) in &[(0, 2, 10), (0, 1, 1), (1, 3, 2), (2, 1, 1), (2, 3, 3), (2, 4, 1), (3, 0, 7), (3, 4, 2)] {
        graph.add_edge(from, to, cost).unwrap();
    }
    graph
}

#[test]
fn star_graph_inspection() {
    let mut graph = HashGraph::new(5);
    graph.add_unweighted_edge(0, 1).unwrap();
    graph.add_edge(0, 2, 200).unwrap();
    graph.add_edge(0, 3, 200).unwrap();
    graph.add_edge(0, 4, 200).unwrap();

    assert_eq!(graph.num_edges(), 4);
    assert_eq!(graph.degree(0), Ok(4));
    assert_eq!(graph.has_edge(0, 2), Ok(true));
    assert_eq!(graph.cost(0, 2), Ok(200));
}

#[test]
fn hop_count_on_chain() {
    let mut graph = HashGraph::new(4);
    graph.add_edge(0, 1, 100).unwrap();
    graph.add_edge(1, 2, 0).unwrap();
    graph.add_unweighted_edge(2, 3).unwrap();

    let mut server: ShortestPath = ShortestPath::new(&graph);
    assert_eq!(server.compute(0).unwrap().distances(), &[0, 1, 2, 3]);
    assert_eq!(server.path_to(3), Ok(vec![0, 1, 2, 3]));
}

#[test]
fn hop_count_distances() {
    let graph = graph();
    let mut server: ShortestPath = ShortestPath::new(&graph);

    server.compute(0).unwrap();
    assert_eq!(server.distance_to(1), Ok(1));
    assert_eq!(server.distance_to(3), Ok(2));
    assert_eq!(server.distance_to(4), Ok(2));
    assert_eq!(server.path_to(3), Ok(vec![0, 1, 3]));
    assert_eq!(server.path_to(4), Ok(vec![0, 2, 4]));

    server.compute(3).unwrap();
    assert_eq!(server.distance_to(0), Ok(1));
    assert_eq!(server.path_to(1), Ok(vec![3, 0, 1]));

    server.compute(4).unwrap();
    assert_eq!(server.distance_to(0), Err(GraphError::Unreachable(0)));
}

#[test]
fn edge_cost_distances() {
    let graph = graph();
    let mut server = ShortestPath::<HashGraph, EdgeCostOps>::new(&graph);

    server.compute(0).unwrap();
    assert_eq!(server.distance_to(1), Ok(1));
    assert_eq!(server.distance_to(3), Ok(3));
    assert_eq!(server.distance_to(4), Ok(5));
    assert_eq!(server.path_to(4), Ok(vec![0, 1, 3, 4]));

    server.compute(3).unwrap();
    assert_eq!(server.distance_to(0), Ok(7));

    server.compute(4).unwrap();
    assert_eq!(server.distance_to(0), Err(GraphError::Unreachable(0)));
}

#[test]
fn isolated_vertex_is_unreachable() {
    let graph = graph();
    let mut server: ShortestPath = ShortestPath::new(&graph);
    let tree = server.compute(0).unwrap();

    assert_eq!(tree.distances()[5], INFINITY);
    assert_eq!(tree.predecessor(5), None);
    assert_eq!(server.distance_to(5), Err(GraphError::Unreachable(5)));
    assert_eq!(server.path_to(5), Err(GraphError::Unreachable(5)));
}

#[test]
fn ties_go_to_lower_vertex_ids() {
    let mut graph = HashGraph::new(4);
    graph.add_edge(0, 2, 1).unwrap();
    graph.add_edge(0, 1, 1).unwrap();
    graph.add_edge(2, 3, 1).unwrap();
    graph.add_edge(1, 3, 1).unwrap();

    for _ in 0..3 {
        let mut server: ShortestPath = ShortestPath::new(&graph);
        assert_eq!(server.compute(0).unwrap().predecessor(3), Some(1));

        let mut heap_server = ShortestPath::<HashGraph, HopCountOps, IndexdMinHeap<State<Distance>>>::new(&graph);
        assert_eq!(heap_server.compute(0).unwrap().predecessor(3), Some(1));
    }
}

#[test]
fn compute_is_idempotent() {
    let graph = graph();
    let mut server: ShortestPath = ShortestPath::new(&graph);
    let first = server.compute(2).unwrap().clone();
    let second = server.compute(2).unwrap();
    assert_eq!(&first, second);
}

#[test]
fn search_on_edge_list_input() {
    let input = "// triangle with a tail\n5\n0 1 3\n1 2 3\n0 2 10\n2 3 1\n";
    let graph = read_edge_list(input.as_bytes()).unwrap();
    assert_eq!(graph.num_edges(), 8);

    let mut server: ShortestPath = ShortestPath::new(&graph);
    server.compute(3).unwrap();
    assert_eq!(server.path_to(0), Ok(vec![3, 2, 0]));
    assert_eq!(server.distance_to(4), Err(GraphError::Unreachable(4)));

    let mut server = ShortestPath::<HashGraph, EdgeCostOps>::new(&graph);
    server.compute(3).unwrap();
    assert_eq!(server.path_to(0), Ok(vec![3, 2, 1, 0]));
    assert_eq!(server.distance_to(0), Ok(7));
}

#[test]
fn predecessor_chains_on_random_graphs() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(50, 120, 20, &mut rng).unwrap();
        let source = rng.gen_range(0..50);

        let mut server: ShortestPath = ShortestPath::new(&graph);
        let mut heap_server = ShortestPath::<HashGraph, HopCountOps, IndexdMinHeap<State<Distance>>>::new(&graph);
        server.compute(source).unwrap();
        heap_server.compute(source).unwrap();
        assert_eq!(server.tree(), heap_server.tree());

        for target in 0..50 {
            match server.distance_to(target) {
                Ok(distance) => {
                    let path = server.path_to(target).unwrap();
                    assert_eq!(path.len(), distance as usize + 1);
                    assert_eq!(path.first(), Some(&source));
                    assert_eq!(path.last(), Some(&target));
                    for hop in path.windows(2) {
                        assert_eq!(graph.has_edge(hop[0], hop[1]), Ok(true));
                    }
                }
                Err(err) => {
                    assert_eq!(err, GraphError::Unreachable(target));
                    assert_eq!(server.path_to(target), Err(GraphError::Unreachable(target)));
                }
            }
        }
    }
}

use super::*;
use crate::{datastr::graph::HashGraph, error::check_node};

/// Single source shortest paths over a borrowed graph.
///
/// Starts out without a result. `compute` runs a complete search from a source and caches
/// the resulting tree, which `distance_to` and `path_to` then answer queries from.
/// Computing again replaces the cached tree.
/// The graph stays borrowed for the lifetime of this struct, so it can not change between
/// `compute` and the queries.
pub struct ShortestPath<'g, Graph = HashGraph, Ops = HopCountOps, Selection = LinearScan> {
    dijkstra: GenericDijkstra<'g, Graph, Ops, Selection>,
    tree: Option<ShortestPathTree>,
}

impl<'g, Graph, Ops, Selection> ShortestPath<'g, Graph, Ops, Selection>
where
    Graph: for<'a> LinkIterable<'a, Link>,
    Ops: DijkstraOps,
    Selection: NodeSelection,
{
    pub fn new(graph: &'g Graph) -> Self
    where
        Ops: Default,
    {
        ShortestPath {
            dijkstra: GenericDijkstra::new(graph),
            tree: None,
        }
    }

    pub fn with_ops(graph: &'g Graph, ops: Ops) -> Self {
        ShortestPath {
            dijkstra: GenericDijkstra::with_ops(graph, ops),
            tree: None,
        }
    }

    /// Compute distances and predecessors of all vertices for paths from `source`.
    pub fn compute(&mut self, source: NodeId) -> Result<&ShortestPathTree> {
        check_node(source, self.num_vertices(), "source")?;

        report!("algo", "Dijkstra");
        report!("source", source);

        self.dijkstra.initialize_query(source);
        self.dijkstra.run_to_completion();

        report!("num_settled_nodes", self.dijkstra.num_settled_nodes());
        report!("num_relaxed_arcs", self.dijkstra.num_relaxed_arcs());
        report!("num_distance_updates", self.dijkstra.num_distance_updates());

        self.tree = self.dijkstra.tree();
        self.tree.as_ref().ok_or(GraphError::NotComputed)
    }

    /// The result of the last `compute` call.
    pub fn tree(&self) -> Option<&ShortestPathTree> {
        self.tree.as_ref()
    }

    pub fn source(&self) -> Option<NodeId> {
        self.tree.as_ref().map(ShortestPathTree::source)
    }

    /// Length of the shortest path to `target`, `Unreachable` if there is none.
    pub fn distance_to(&self, target: NodeId) -> Result<Distance> {
        let tree = self.computed_tree(target)?;
        tree.distance(target).ok_or(GraphError::Unreachable(target))
    }

    /// Vertices along the shortest path from the source to `target`, both inclusive.
    pub fn path_to(&self, target: NodeId) -> Result<Vec<NodeId>> {
        self.computed_tree(target)?.node_path(target)
    }

    pub fn num_vertices(&self) -> usize {
        self.dijkstra.graph().num_nodes()
    }

    fn computed_tree(&self, target: NodeId) -> Result<&ShortestPathTree> {
        let tree = self.tree.as_ref().ok_or(GraphError::NotComputed)?;
        check_node(tree.source(), self.num_vertices(), "source")?;
        check_node(target, self.num_vertices(), "target")?;
        Ok(tree)
    }
}

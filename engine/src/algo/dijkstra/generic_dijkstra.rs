//! Basic variant of dijkstras algorithm, stepping one settled vertex at a time.

use super::*;

pub struct GenericDijkstra<'g, Graph, Ops = HopCountOps, Selection = LinearScan> {
    graph: &'g Graph,

    distances: Vec<Distance>,
    predecessors: Vec<Option<NodeId>>,
    queue: Selection,

    ops: Ops,
    source: Option<NodeId>,

    num_settled_nodes: usize,
    num_relaxed_arcs: usize,
    num_distance_updates: usize,
}

impl<'g, Graph, Ops, Selection> GenericDijkstra<'g, Graph, Ops, Selection>
where
    Graph: for<'a> LinkIterable<'a, Link>,
    Ops: DijkstraOps,
    Selection: NodeSelection,
{
    pub fn new(graph: &'g Graph) -> Self
    where
        Ops: Default,
    {
        Self::with_ops(graph, Default::default())
    }

    pub fn with_ops(graph: &'g Graph, ops: Ops) -> Self {
        let n = graph.num_nodes();

        GenericDijkstra {
            graph,

            distances: vec![INFINITY; n],
            predecessors: vec![None; n],
            queue: Selection::new(n),

            ops,
            source: None,

            num_settled_nodes: 0,
            num_relaxed_arcs: 0,
            num_distance_updates: 0,
        }
    }

    /// Reset all state and start a new search from `source`, which has to be a valid vertex.
    pub fn initialize_query(&mut self, source: NodeId) {
        self.distances.iter_mut().for_each(|dist| *dist = INFINITY);
        self.predecessors.iter_mut().for_each(|pred| *pred = None);
        self.queue.reset(source);

        self.num_settled_nodes = 0;
        self.num_relaxed_arcs = 0;
        self.num_distance_updates = 0;

        self.distances[source as usize] = 0;
        self.source = Some(source);
    }

    #[inline]
    fn settle_next_node(&mut self) -> Option<NodeId> {
        let node = self.queue.pop_min(&self.distances)?;
        self.num_settled_nodes += 1;

        let distance = self.distances[node as usize];
        // nothing to relax from an unreached vertex
        if distance == INFINITY {
            return Some(node);
        }

        let graph = self.graph;
        for link in graph.link_iter(node) {
            self.num_relaxed_arcs += 1;
            let linked = self.ops.link(distance, &link);

            if self.ops.merge(&mut self.distances[link.node as usize], linked) {
                self.num_distance_updates += 1;
                self.predecessors[link.node as usize] = Some(node);
                self.queue.improved(link.node, linked);
            }
        }

        Some(node)
    }

    /// Run the current search until every vertex the selection strategy knows about is settled.
    pub fn run_to_completion(&mut self) {
        while self.settle_next_node().is_some() {}
    }

    pub fn source(&self) -> Option<NodeId> {
        self.source
    }

    pub fn tentative_distance(&self, node: NodeId) -> Distance {
        self.distances[node as usize]
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors[node as usize]
    }

    /// Snapshot of the current distances and predecessors.
    /// Only a shortest path tree once the search ran to completion.
    pub fn tree(&self) -> Option<ShortestPathTree> {
        self.source
            .map(|source| ShortestPathTree::new(source, self.distances.clone(), self.predecessors.clone()))
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn num_settled_nodes(&self) -> usize {
        self.num_settled_nodes
    }

    pub fn num_relaxed_arcs(&self) -> usize {
        self.num_relaxed_arcs
    }

    pub fn num_distance_updates(&self) -> usize {
        self.num_distance_updates
    }
}

impl<'g, Graph, Ops, Selection> Iterator for GenericDijkstra<'g, Graph, Ops, Selection>
where
    Graph: for<'a> LinkIterable<'a, Link>,
    Ops: DijkstraOps,
    Selection: NodeSelection,
{
    type Item = NodeId;

    #[inline]
    fn next(&mut self) -> Option<NodeId> {
        self.settle_next_node()
    }
}

//! Dijkstras algorithm and the building blocks it is parameterized with.
//!
//! The relaxation step is pluggable through `DijkstraOps` and the choice of the next vertex
//! to settle through `NodeSelection`. Both selection strategies settle vertices in the same
//! order, the minimal tentative distance with ties broken by the lower vertex id.

use super::*;
use crate::{
    datastr::index_heap::*,
    error::{GraphError, Result},
};
use serde::Serialize;

pub mod generic_dijkstra;
pub mod query;

pub use generic_dijkstra::GenericDijkstra;
pub use query::dijkstra::ShortestPath;

/// Priority Queue entries
#[derive(Copy, Clone, Eq, PartialEq, Debug, PartialOrd, Ord)]
pub struct State<W> {
    pub key: W,
    pub node: NodeId,
}

impl<W> Indexing for State<W> {
    #[inline]
    fn as_index(&self) -> usize {
        self.node as usize
    }
}

/// How a tentative distance is extended along a link and merged into the distance of its head.
pub trait DijkstraOps {
    fn link(&self, label: Distance, link: &Link) -> Distance;

    /// Returns true if `linked` improved `label`.
    #[inline(always)]
    fn merge(&self, label: &mut Distance, linked: Distance) -> bool {
        if linked < *label {
            *label = linked;
            return true;
        }
        false
    }
}

/// Every link counts as a single hop, stored costs are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct HopCountOps();

impl DijkstraOps for HopCountOps {
    #[inline(always)]
    fn link(&self, label: Distance, _link: &Link) -> Distance {
        label.saturating_add(1)
    }
}

/// Links cost their stored weight, unweighted links (`NO_COST`) count as one hop.
/// Sums only saturate when relaxing from `INFINITY`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeCostOps();

impl DijkstraOps for EdgeCostOps {
    #[inline(always)]
    fn link(&self, label: Distance, link: &Link) -> Distance {
        let weight = if link.weight == NO_COST { 1 } else { link.weight };
        label.saturating_add(Distance::from(weight))
    }
}

/// Strategy for picking the next vertex to settle.
pub trait NodeSelection {
    fn new(num_nodes: usize) -> Self;
    /// Forget everything and start over with only `source` reached.
    fn reset(&mut self, source: NodeId);
    /// Remove and return the unsettled vertex with the smallest distance, lowest id among equals.
    fn pop_min(&mut self, distances: &[Distance]) -> Option<NodeId>;
    /// Called whenever the tentative distance of `node` decreased.
    fn improved(&mut self, node: NodeId, distance: Distance);
}

/// Scans all vertices for the minimum. `O(n)` per selection, `O(n²)` in total.
/// Unreachable vertices get settled too, once only vertices with infinite distance remain.
#[derive(Debug, Clone)]
pub struct LinearScan {
    settled: Vec<bool>,
    num_settled: usize,
}

impl NodeSelection for LinearScan {
    fn new(num_nodes: usize) -> Self {
        LinearScan {
            settled: vec![false; num_nodes],
            num_settled: 0,
        }
    }

    fn reset(&mut self, _source: NodeId) {
        self.settled.iter_mut().for_each(|settled| *settled = false);
        self.num_settled = 0;
    }

    fn pop_min(&mut self, distances: &[Distance]) -> Option<NodeId> {
        if self.num_settled == self.settled.len() {
            return None;
        }

        let mut min: Option<(Distance, usize)> = None;
        for (node, (&distance, &settled)) in distances.iter().zip(self.settled.iter()).enumerate() {
            if settled {
                continue;
            }
            // strict comparison keeps the lowest id among equal distances
            if min.map_or(true, |(min_distance, _)| distance < min_distance) {
                min = Some((distance, node));
            }
        }

        min.map(|(_, node)| {
            self.settled[node] = true;
            self.num_settled += 1;
            node as NodeId
        })
    }

    fn improved(&mut self, _node: NodeId, _distance: Distance) {}
}

/// Only reached vertices are queued, `O((n + m) log n)` in total.
impl NodeSelection for IndexdMinHeap<State<Distance>> {
    fn new(num_nodes: usize) -> Self {
        IndexdMinHeap::new(num_nodes)
    }

    fn reset(&mut self, source: NodeId) {
        self.clear();
        self.push(State { key: 0, node: source });
    }

    fn pop_min(&mut self, _distances: &[Distance]) -> Option<NodeId> {
        self.pop().map(|State { node, .. }| node)
    }

    fn improved(&mut self, node: NodeId, distance: Distance) {
        self.push_or_decrease(State { key: distance, node });
    }
}

/// Distances and predecessors of one completed single source search.
/// Immutable once built, a search from another source produces a new tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathTree {
    source: NodeId,
    distances: Vec<Distance>,
    predecessors: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    pub(crate) fn new(source: NodeId, distances: Vec<Distance>, predecessors: Vec<Option<NodeId>>) -> Self {
        debug_assert_eq!(distances.len(), predecessors.len());
        ShortestPathTree {
            source,
            distances,
            predecessors,
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn num_nodes(&self) -> usize {
        self.distances.len()
    }

    /// Raw distances, `INFINITY` for unreached vertices.
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<NodeId>] {
        &self.predecessors
    }

    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        match self.distances[node as usize] {
            INFINITY => None,
            dist => Some(dist),
        }
    }

    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors[node as usize]
    }

    /// Vertices on the path from the source to `target`, both inclusive.
    /// `target` has to be a valid vertex.
    pub fn node_path(&self, target: NodeId) -> Result<Vec<NodeId>> {
        let mut path = vec![target];
        let mut node = target;

        while node != self.source {
            node = self.predecessors[node as usize].ok_or(GraphError::Unreachable(target))?;
            path.push(node);
            // a chain longer than the number of vertices can only be a cycle
            assert!(path.len() <= self.num_nodes(), "cycle in predecessor chain");
        }

        path.reverse();

        Ok(path)
    }
}

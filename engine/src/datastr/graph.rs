//! Graph representations.

pub mod hash_graph;

pub use self::hash_graph::{HashGraph, Neighbors};

/// Vertex ids are 32bit unsigned ints
pub type NodeId = u32;
/// Edge costs are 32bit unsigned ints
pub type Weight = u32;
/// Path lengths are 64bit, wide enough for the sum of any simple path of 32bit costs.
pub type Distance = u64;
/// Distance of unreached vertices.
/// A simple path has less than `2^32` arcs each costing less than `2^32`, so no real path length gets here.
pub const INFINITY: Distance = std::u64::MAX;
/// Cost sentinel for edges inserted without an explicit cost.
/// Distinct from every real cost including zero.
pub const NO_COST: Weight = std::u32::MAX;

/// Simple struct for weighted links.
/// No behaviour, just a pure data struct.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Link {
    pub node: NodeId,
    pub weight: Weight,
}

/// Base trait for graphs.
/// Interesting behaviour will be added through subtraits.
pub trait Graph {
    fn num_nodes(&self) -> usize;
    fn num_arcs(&self) -> usize;
}

/// Trait for graph data structures which allow iterating over outgoing links of a node.
/// `node` has to be a valid vertex, implementations may panic otherwise.
pub trait LinkIterable<'a, L>: Graph {
    type Iter: Iterator<Item = L> + 'a;
    fn link_iter(&'a self, node: NodeId) -> Self::Iter;
}

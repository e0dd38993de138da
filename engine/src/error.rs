//! Errors surfaced by the graph and the shortest path search.

use crate::datastr::graph::NodeId;

/// Everything that can go wrong when calling into the graph or the shortest path search.
/// All of these are local failures, nothing is retried or recovered internally.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no more neighbors to iterate")]
    NoSuchElement,

    #[error("vertex {0} is unreachable from the source")]
    Unreachable(NodeId),

    #[error("no shortest path tree was computed yet")]
    NotComputed,
}

pub type Result<T> = std::result::Result<T, GraphError>;

/// Check that `node` is a valid vertex index of a graph with `num_nodes` vertices.
pub(crate) fn check_node(node: NodeId, num_nodes: usize, what: &str) -> Result<()> {
    if (node as usize) < num_nodes {
        Ok(())
    } else {
        Err(GraphError::InvalidArgument(format!("{} = {} (graph has {} vertices)", what, node, num_nodes)))
    }
}

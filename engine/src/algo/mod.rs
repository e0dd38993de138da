//! Shortest path algorithms.

use crate::datastr::graph::*;

pub mod dijkstra;

/// Simply a source-target pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub from: NodeId,
    pub to: NodeId,
}

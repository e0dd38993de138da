//! A sparse, hash map backed directed graph and single source shortest path search on top of it.
//!
//! The usual workflow: build a [`HashGraph`](datastr::graph::HashGraph), run
//! [`ShortestPath::compute`](algo::dijkstra::ShortestPath::compute) once for a source and then
//! query distances and paths to any number of targets.

#[macro_use]
pub mod report;

pub mod algo;
pub mod cli;
pub mod datastr;
pub mod error;
pub mod experiments;
pub mod io;

pub use error::GraphError;

/// Info about the build environment, generated by the build script.
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

//! Query interfaces on top of the search engines.

use super::*;

pub mod dijkstra;

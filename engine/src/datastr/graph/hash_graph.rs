//! Sparse directed graph with a fixed number of vertices, backed by one hash map per vertex.
//!
//! `edges[v]` maps every head `w` of an arc `v -> w` to the cost of that arc.
//! The maps are allocated lazily on the first insertion, so vertices without outgoing arcs cost nothing
//! but an empty slot. Space complexity is `O(n + m)`, inserting, removing and querying a single arc
//! takes expected `O(1)`.

use super::*;
use crate::error::{check_node, GraphError, Result};
use fxhash::FxHashMap;
use std::{collections::hash_map, fmt};

const INITIAL_MAP_SIZE: usize = 4;

/// Directed graph over the vertices `0..n` with at most one arc for each ordered vertex pair.
#[derive(Debug, Clone, Default)]
pub struct HashGraph {
    edges: Vec<Option<FxHashMap<NodeId, Weight>>>,
    // kept in sync by the mutators, never recomputed
    num_arcs: usize,
}

impl HashGraph {
    /// Create a graph with `n` vertices and no arcs.
    pub fn new(n: usize) -> HashGraph {
        assert!(n <= NodeId::max_value() as usize);
        HashGraph {
            edges: vec![None; n],
            num_arcs: 0,
        }
    }

    /// Create a graph from a vertex count which may come from untrusted input.
    /// Fails with `InvalidArgument` for negative counts.
    pub fn try_new(n: i64) -> Result<HashGraph> {
        if n < 0 || n > NodeId::max_value() as i64 {
            return Err(GraphError::InvalidArgument(format!("n = {}", n)));
        }
        Ok(HashGraph::new(n as usize))
    }

    pub fn num_vertices(&self) -> usize {
        self.edges.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_arcs
    }

    /// Insert the arc `from -> to` or overwrite its cost if it already exists.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: Weight) -> Result<()> {
        self.check(from, "from")?;
        self.check(to, "to")?;
        self.insert(from, to, cost);
        Ok(())
    }

    /// Insert the unweighted arc `from -> to`, its cost will be `NO_COST`.
    pub fn add_unweighted_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.add_edge(from, to, NO_COST)
    }

    /// Insert `v -> w` and `w -> v`, both with the given cost.
    /// For `v == w` this is a single arc.
    pub fn add_bidirectional(&mut self, v: NodeId, w: NodeId, cost: Weight) -> Result<()> {
        self.check(v, "v")?;
        self.check(w, "w")?;
        self.insert(v, w, cost);
        self.insert(w, v, cost);
        Ok(())
    }

    pub fn add_unweighted_bidirectional(&mut self, v: NodeId, w: NodeId) -> Result<()> {
        self.add_bidirectional(v, w, NO_COST)
    }

    /// Remove the arc `from -> to`. Removing an arc which does not exist is a no-op.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.check(from, "from")?;
        self.check(to, "to")?;
        self.delete(from, to);
        Ok(())
    }

    /// Remove `v -> w` and `w -> v`, each one only if present.
    pub fn remove_bidirectional(&mut self, v: NodeId, w: NodeId) -> Result<()> {
        self.check(v, "v")?;
        self.check(w, "w")?;
        self.delete(v, w);
        self.delete(w, v);
        Ok(())
    }

    pub fn has_edge(&self, v: NodeId, w: NodeId) -> Result<bool> {
        self.check(v, "v")?;
        self.check(w, "w")?;
        Ok(self.map(v).map_or(false, |map| map.contains_key(&w)))
    }

    /// The cost of the arc `v -> w` or `NO_COST` if there is no such arc.
    pub fn cost(&self, v: NodeId, w: NodeId) -> Result<Weight> {
        self.check(v, "v")?;
        self.check(w, "w")?;
        Ok(self.map(v).and_then(|map| map.get(&w)).copied().unwrap_or(NO_COST))
    }

    /// Out degree of `v`, zero for vertices which never had an outgoing arc.
    pub fn degree(&self, v: NodeId) -> Result<usize> {
        self.check(v, "v")?;
        Ok(self.map(v).map_or(0, |map| map.len()))
    }

    /// A snapshot of the current out neighbors of `v`.
    /// Later mutations of the graph do not affect the returned sequence.
    pub fn neighbors(&self, v: NodeId) -> Result<Neighbors> {
        self.check(v, "v")?;
        let heads: Vec<NodeId> = self.map(v).map(|map| map.keys().copied().collect()).unwrap_or_default();
        Ok(Neighbors { heads: heads.into_iter() })
    }

    fn check(&self, node: NodeId, what: &str) -> Result<()> {
        check_node(node, self.num_vertices(), what)
    }

    fn map(&self, node: NodeId) -> Option<&FxHashMap<NodeId, Weight>> {
        self.edges[node as usize].as_ref()
    }

    fn insert(&mut self, from: NodeId, to: NodeId, cost: Weight) {
        let map = self.edges[from as usize].get_or_insert_with(|| FxHashMap::with_capacity_and_hasher(INITIAL_MAP_SIZE, Default::default()));
        if map.insert(to, cost).is_none() {
            self.num_arcs += 1;
        }
    }

    fn delete(&mut self, from: NodeId, to: NodeId) {
        if let Some(map) = self.edges[from as usize].as_mut() {
            if map.remove(&to).is_some() {
                self.num_arcs -= 1;
            }
        }
    }
}

impl Graph for HashGraph {
    fn num_nodes(&self) -> usize {
        self.num_vertices()
    }

    fn num_arcs(&self) -> usize {
        self.num_arcs
    }
}

/// Borrowing iterator over the outgoing links of a vertex, used by the algorithms.
#[derive(Debug, Clone)]
pub struct LinkIter<'a> {
    inner: Option<hash_map::Iter<'a, NodeId, Weight>>,
}

impl<'a> Iterator for LinkIter<'a> {
    type Item = Link;

    #[inline]
    fn next(&mut self) -> Option<Link> {
        self.inner.as_mut()?.next().map(|(&node, &weight)| Link { node, weight })
    }
}

impl<'a> LinkIterable<'a, Link> for HashGraph {
    type Iter = LinkIter<'a>;

    #[inline]
    fn link_iter(&'a self, node: NodeId) -> Self::Iter {
        LinkIter {
            inner: self.map(node).map(|map| map.iter()),
        }
    }
}

/// Renders every arc as `{v, w} `, vertices ascending.
impl fmt::Display for HashGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (node, map) in self.edges.iter().enumerate() {
            if let Some(map) = map {
                for head in map.keys() {
                    write!(f, "{{{}, {}}} ", node, head)?;
                }
            }
        }
        Ok(())
    }
}

/// Single pass sequence of the out neighbors of a vertex at the time `HashGraph::neighbors` was called.
#[derive(Debug, Clone)]
pub struct Neighbors {
    heads: std::vec::IntoIter<NodeId>,
}

impl Neighbors {
    pub fn has_next(&self) -> bool {
        self.heads.len() > 0
    }

    /// Like `Iterator::next` but fails with `NoSuchElement` once the sequence is exhausted.
    pub fn next_neighbor(&mut self) -> Result<NodeId> {
        self.heads.next().ok_or(GraphError::NoSuchElement)
    }
}

impl Iterator for Neighbors {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.heads.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heads.size_hint()
    }
}

impl ExactSizeIterator for Neighbors {}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> HashGraph {
        let mut graph = HashGraph::new(5);
        graph.add_unweighted_edge(0, 1).unwrap();
        graph.add_edge(0, 2, 200).unwrap();
        graph.add_edge(0, 3, 200).unwrap();
        graph.add_edge(0, 4, 200).unwrap();
        graph
    }

    #[test]
    fn empty_graphs() {
        for n in [0, 1, 7, 100] {
            let graph = HashGraph::new(n);
            assert_eq!(graph.num_vertices(), n);
            assert_eq!(graph.num_edges(), 0);
        }
        assert_eq!(HashGraph::try_new(3).unwrap().num_vertices(), 3);
        assert!(matches!(HashGraph::try_new(-1), Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn star_graph() {
        let graph = star();
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.degree(0), Ok(4));
        assert_eq!(graph.has_edge(0, 2), Ok(true));
        assert_eq!(graph.cost(0, 2), Ok(200));
        assert_eq!(graph.cost(0, 1), Ok(NO_COST));
        assert_eq!(graph.cost(2, 0), Ok(NO_COST));
        assert_eq!(graph.has_edge(2, 0), Ok(false));
    }

    #[test]
    fn overwriting_keeps_count() {
        let mut graph = HashGraph::new(3);
        graph.add_edge(1, 2, 5).unwrap();
        graph.add_edge(1, 2, 9).unwrap();
        assert_eq!(graph.cost(1, 2), Ok(9));
        assert_eq!(graph.num_edges(), 1);

        graph.add_edge(1, 0, 0).unwrap();
        assert_eq!(graph.cost(1, 0), Ok(0));
        assert_ne!(graph.cost(1, 0), graph.cost(0, 1));
    }

    #[test]
    fn removal() {
        let mut graph = star();
        graph.remove_edge(0, 2).unwrap();
        assert_eq!(graph.has_edge(0, 2), Ok(false));
        assert_eq!(graph.num_edges(), 3);

        graph.remove_edge(0, 2).unwrap();
        graph.remove_edge(3, 4).unwrap();
        assert_eq!(graph.num_edges(), 3);
    }

    #[test]
    fn bidirectional() {
        let mut graph = HashGraph::new(4);
        graph.add_bidirectional(1, 3, 7).unwrap();
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.has_edge(1, 3), Ok(true));
        assert_eq!(graph.has_edge(3, 1), Ok(true));

        graph.add_bidirectional(2, 2, 1).unwrap();
        assert_eq!(graph.num_edges(), 3);

        graph.remove_edge(3, 1).unwrap();
        graph.remove_bidirectional(1, 3).unwrap();
        assert_eq!(graph.num_edges(), 1);
        graph.remove_bidirectional(0, 1).unwrap();
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn vertices_without_arcs() {
        let graph = star();
        assert_eq!(graph.degree(3), Ok(0));
        assert_eq!(graph.has_edge(3, 0), Ok(false));
        assert_eq!(graph.neighbors(3).unwrap().count(), 0);
    }

    #[test]
    fn invalid_vertices() {
        let mut graph = star();
        assert!(matches!(graph.degree(5), Err(GraphError::InvalidArgument(_))));
        assert!(matches!(graph.cost(0, 5), Err(GraphError::InvalidArgument(_))));
        assert!(matches!(graph.has_edge(9, 0), Err(GraphError::InvalidArgument(_))));
        assert!(matches!(graph.add_edge(0, 5, 1), Err(GraphError::InvalidArgument(_))));
        assert!(matches!(graph.neighbors(5), Err(GraphError::InvalidArgument(_))));
        assert_eq!(graph.num_edges(), 4);
    }

    #[test]
    fn neighbor_snapshot() {
        let mut graph = star();
        let mut neighbors = graph.neighbors(0).unwrap();
        graph.remove_edge(0, 4).unwrap();

        let mut seen = Vec::new();
        while neighbors.has_next() {
            seen.push(neighbors.next_neighbor().unwrap());
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(neighbors.next_neighbor(), Err(GraphError::NoSuchElement));

        let mut current: Vec<_> = graph.neighbors(0).unwrap().collect();
        current.sort_unstable();
        assert_eq!(current, vec![1, 2, 3]);
    }

    #[test]
    fn links_carry_costs() {
        let graph = star();
        let mut links: Vec<Link> = graph.link_iter(0).collect();
        links.sort_unstable_by_key(|link| link.node);
        assert_eq!(links[0], Link { node: 1, weight: NO_COST });
        assert_eq!(links[3], Link { node: 4, weight: 200 });
        assert_eq!(graph.link_iter(3).count(), 0);
    }

    #[test]
    fn display_lists_arcs() {
        let mut graph = HashGraph::new(3);
        graph.add_edge(2, 0, 1).unwrap();
        graph.add_edge(0, 1, 1).unwrap();
        assert_eq!(graph.to_string(), "{0, 1} {2, 0} ");
    }
}

//! A priority queue over elements with unique integer ids, implemented as a 4-ary heap.
//!
//! Pushing and popping the minimal element take `O(log n)`, peeking is `O(1)`.
//! Because each element knows its id, the heap tracks element positions and allows decreasing
//! the key of an element which is already queued.
//!
//! # Examples
//!
//! ```
//! use sparse_router::datastr::index_heap::{Indexing, IndexdMinHeap};
//!
//! #[derive(Copy, Clone, Eq, PartialEq, Debug, Ord, PartialOrd)]
//! pub struct Entry {
//!     pub key: u32,
//!     pub id: usize,
//! }
//!
//! impl Indexing for Entry {
//!     fn as_index(&self) -> usize {
//!         self.id
//!     }
//! }
//!
//! let mut heap = IndexdMinHeap::new(3);
//! heap.push(Entry { key: 42, id: 0 });
//! heap.push(Entry { key: 23, id: 1 });
//! heap.push(Entry { key: 50000, id: 2 });
//! assert_eq!(heap.peek().cloned(), Some(Entry { key: 23, id: 1 }));
//! heap.decrease_key(Entry { key: 1, id: 0 });
//! assert_eq!(heap.pop(), Some(Entry { key: 1, id: 0 }));
//! assert_eq!(heap.pop(), Some(Entry { key: 23, id: 1 }));
//! ```

/// Maps heap elements to a unique id in `[0, max_id)`.
pub trait Indexing {
    fn as_index(&self) -> usize;
}

/// Min heap of elements with ids from `0` to `max_id - 1`, ordered ascending by `Ord`.
/// Each id may be contained at most once.
#[derive(Debug, Clone)]
pub struct IndexdMinHeap<T> {
    positions: Vec<usize>,
    data: Vec<T>,
}

const TREE_ARITY: usize = 4;
const INVALID_POSITION: usize = std::usize::MAX;

impl<T: Ord + Indexing> IndexdMinHeap<T> {
    pub fn new(max_id: usize) -> IndexdMinHeap<T> {
        IndexdMinHeap {
            positions: vec![INVALID_POSITION; max_id],
            data: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains_index(&self, id: usize) -> bool {
        self.positions[id] != INVALID_POSITION
    }

    /// Drops all elements, `O(len)`.
    pub fn clear(&mut self) {
        for element in &self.data {
            self.positions[element.as_index()] = INVALID_POSITION;
        }
        self.data.clear();
    }

    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the smallest element.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.swap_positions(0, last);
        let min = self.data.pop()?;
        self.positions[min.as_index()] = INVALID_POSITION;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Panics if an element with the same id is already queued.
    pub fn push(&mut self, element: T) {
        assert!(!self.contains_index(element.as_index()));
        let position = self.data.len();
        self.positions[element.as_index()] = position;
        self.data.push(element);
        self.sift_up(position);
    }

    /// Replaces the queued element with the same id by `element` which must not be larger.
    pub fn decrease_key(&mut self, element: T) {
        let position = self.positions[element.as_index()];
        debug_assert!(element <= self.data[position]);
        self.data[position] = element;
        self.sift_up(position);
    }

    /// Push `element` or decrease the key of the already queued element with its id.
    pub fn push_or_decrease(&mut self, element: T) {
        if self.contains_index(element.as_index()) {
            self.decrease_key(element);
        } else {
            self.push(element);
        }
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / TREE_ARITY;
            if self.data[parent] <= self.data[position] {
                break;
            }
            self.swap_positions(parent, position);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        loop {
            let first_child = TREE_ARITY * position + 1;
            let last_child = std::cmp::min(first_child + TREE_ARITY, self.data.len());
            let smallest_child = match (first_child..last_child).min_by(|&a, &b| self.data[a].cmp(&self.data[b])) {
                Some(child) => child,
                None => return,
            };
            if self.data[smallest_child] >= self.data[position] {
                return;
            }
            self.swap_positions(smallest_child, position);
            position = smallest_child;
        }
    }

    fn swap_positions(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.positions[self.data[a].as_index()] = a;
        self.positions[self.data[b].as_index()] = b;
    }
}

//! Per-operation counters and timers for a priority queue
//!
//! [`ProfiledQueue`] wraps any [`PriorityQueue`] and records how often each
//! operation was called and how long it took in total. The counters live in
//! an [`OpProfile`] owned by the caller, so several profiled runs can proceed
//! side by side without sharing state.
//!
//! # Example
//!
//! ```rust
//! use heapswap::binary::BinaryHeap;
//! use heapswap::graph::Graph;
//! use heapswap::pathfinding::shortest_path;
//! use heapswap::Backend;
//! use heapswap_bench::profile::{OpProfile, ProfiledQueue};
//!
//! let mut graph = Graph::directed(2);
//! graph.add_edge(0, 1, 3).unwrap();
//!
//! let mut profile = OpProfile::default();
//! let queue = ProfiledQueue::new(BinaryHeap::new(), &mut profile);
//! shortest_path(&graph, 0, queue).unwrap();
//!
//! assert_eq!(profile.insert_count, 2);
//! assert_eq!(profile.extract_count, 2);
//! ```

use heapswap::{HeapError, Key, PriorityQueue, Vertex};
use std::time::{Duration, Instant};

/// Call counts and accumulated wall time for the three timed operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpProfile {
    /// Calls to `insert`
    pub insert_count: u64,
    /// Calls to `extract_min`, failed calls included
    pub extract_count: u64,
    /// Calls to `decrease_key`, failed calls included
    pub decrease_count: u64,
    /// Time spent inside `insert`
    pub insert_time: Duration,
    /// Time spent inside `extract_min`
    pub extract_time: Duration,
    /// Time spent inside `decrease_key`
    pub decrease_time: Duration,
}

impl OpProfile {
    /// Zeroes every counter and timer
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total number of timed operations
    pub fn total_ops(&self) -> u64 {
        self.insert_count + self.extract_count + self.decrease_count
    }

    /// Total time spent in timed operations
    pub fn total_time(&self) -> Duration {
        self.insert_time + self.extract_time + self.decrease_time
    }
}

/// A priority queue that records into an [`OpProfile`]
///
/// Handles are the inner queue's handles, so a `ProfiledQueue` can be passed
/// to any engine in place of the queue it wraps.
#[derive(Debug)]
pub struct ProfiledQueue<'a, Q> {
    inner: Q,
    profile: &'a mut OpProfile,
}

impl<'a, Q: PriorityQueue> ProfiledQueue<'a, Q> {
    /// Wraps `inner`, recording into `profile`
    ///
    /// The profile is not reset, so several queues can accumulate into one.
    pub fn new(inner: Q, profile: &'a mut OpProfile) -> Self {
        Self { inner, profile }
    }

    /// Returns the wrapped queue
    pub fn into_inner(self) -> Q {
        self.inner
    }

    /// The profile recorded so far
    pub fn profile(&self) -> &OpProfile {
        self.profile
    }
}

impl<Q: PriorityQueue> PriorityQueue for ProfiledQueue<'_, Q> {
    type Handle = Q::Handle;

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn insert(&mut self, key: Key, value: Vertex) -> Self::Handle {
        let start = Instant::now();
        let handle = self.inner.insert(key, value);
        self.profile.insert_time += start.elapsed();
        self.profile.insert_count += 1;
        handle
    }

    fn peek(&self) -> Option<(Key, Vertex)> {
        self.inner.peek()
    }

    fn extract_min(&mut self) -> Result<(Key, Vertex), HeapError> {
        let start = Instant::now();
        let result = self.inner.extract_min();
        self.profile.extract_time += start.elapsed();
        self.profile.extract_count += 1;
        result
    }

    fn decrease_key(&mut self, handle: &Self::Handle, new_key: Key) -> Result<(), HeapError> {
        let start = Instant::now();
        let result = self.inner.decrease_key(handle, new_key);
        self.profile.decrease_time += start.elapsed();
        self.profile.decrease_count += 1;
        result
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

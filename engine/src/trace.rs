//! Utility for tracing data about the progress of a search: node visit
//! counts and elapsed time, used for the per-iteration `debug`-level log
//! line in `search_main`.

use std::time::{Duration, Instant};

/// Object responsible for tracing data about the search.
pub struct Tracer {
    /// The time the search commenced.
    start_time: Instant,
    /// The number of nodes visited during search.
    nodes_visited: usize,
}

impl Tracer {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            nodes_visited: 0,
        }
    }

    /// To be called immediately before a new search commences.
    pub fn commence_search(&mut self) {
        self.start_time = Instant::now();
        self.nodes_visited = 0;
    }

    /// To be called whenever the search visits a new node.
    #[inline(always)]
    pub fn visit_node(&mut self) {
        self.nodes_visited += 1;
    }

    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// The time elapsed since the search commenced.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Nodes per second as of call-time.
    pub fn nps(&self) -> usize {
        let micros = self.elapsed().as_micros().max(1);
        (self.nodes_visited as u128 * 1_000_000 / micros) as usize
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new()
    }
}

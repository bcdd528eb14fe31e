//! Instrumentation sink shared by every algorithm in the crate.

/// Counter bundle an algorithm writes into while it runs.
///
/// A sink serves exactly one invocation at a time; the `&mut` borrow taken
/// by the algorithm entry points enforces that at compile time. Counters
/// are plain integers, there is no synchronization.
///
/// Lifecycle: create with [`Metrics::new`], hand to one algorithm call,
/// read the counters afterwards, [`Metrics::reset`] before reuse.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Metrics {
    comparisons: u64,
    allocations: u64,
    recursion_depth: usize,
    max_recursion_depth: usize,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one element comparison.
    #[inline]
    pub fn inc_comparisons(&mut self) {
        self.comparisons += 1;
    }

    /// Records `count` elements written into an auxiliary buffer.
    #[inline]
    pub fn inc_allocations(&mut self, count: u64) {
        self.allocations += count;
    }

    /// Enters a tracked recursive frame, updating the high-water mark.
    #[inline]
    pub fn enter_recursion(&mut self) {
        self.recursion_depth += 1;
        self.max_recursion_depth = self.max_recursion_depth.max(self.recursion_depth);
    }

    /// Leaves a tracked recursive frame.
    #[inline]
    pub fn exit_recursion(&mut self) {
        self.recursion_depth -= 1;
    }

    /// Clears all four counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total element comparisons recorded so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Total auxiliary-buffer elements recorded so far.
    pub fn allocations(&self) -> u64 {
        self.allocations
    }

    /// Depth of the currently active recursion; zero between runs.
    pub fn recursion_depth(&self) -> usize {
        self.recursion_depth
    }

    /// Deepest recursion observed since the last reset.
    pub fn max_recursion_depth(&self) -> usize {
        self.max_recursion_depth
    }
}

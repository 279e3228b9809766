//! Per-call allocation and copy accounting.
//!
//! [`MaterializeStats`] records what a single materialization did, so
//! callers and tests can check the allocation and copy guarantees
//! without an instrumented allocator.

/// Which way a materialization produced its result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MaterializePath {
    /// The producer was empty; nothing was allocated.
    #[default]
    Empty,
    /// The first segment was filled exactly and returned without copying.
    FastPath,
    /// Segments were merged into a freshly allocated result buffer.
    Merged,
}

/// Counters collected during one materialization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaterializeStats {
    /// How the result was produced.
    pub path: MaterializePath,
    /// Number of segments allocated, including the last (possibly partial) one.
    pub segments_allocated: usize,
    /// Number of segments retired onto the chain.
    pub segments_retired: usize,
    /// Sum of the capacities of all allocated segments, in elements.
    pub segment_capacity_total: usize,
    /// Elements pulled from the producer and written into segments.
    pub elements_written: usize,
    /// Elements moved from segments into the merged result.
    pub elements_copied: usize,
}

impl MaterializeStats {
    /// Total buffers allocated: every segment, plus the merged result if any.
    pub fn allocations(&self) -> usize {
        self.segments_allocated + usize::from(self.path == MaterializePath::Merged)
    }

    pub(crate) fn record_segment(&mut self, capacity: usize) {
        self.segments_allocated += 1;
        self.segment_capacity_total += capacity;
    }
}

//! Fixed-capacity segments and the chain of retired segments.
//!
//! A [`Segment`] is a contiguous `Vec<T>` reserved up front to an exact
//! capacity and filled one element at a time. A [`SegmentChain`] is the
//! stack of segments that were completely filled before the producer
//! ran dry; it is drained most-recent-first during the merge.

use segdrain_core::MaterializeError;
use smallvec::SmallVec;

/// Number of retired segments stored inline before the chain spills to
/// the heap. Capacities double after the first retirement, so eight
/// segments already cover 128x the first segment's capacity.
const INLINE_SEGMENTS: usize = 8;

/// A single fixed-capacity block of elements.
///
/// `filled() <= capacity()` always holds. The capacity is tracked
/// separately from the backing `Vec` because the allocator may round a
/// reservation up; the materializer only relies on the requested size.
#[derive(Debug)]
pub struct Segment<T> {
    /// Backing storage, reserved to at least `capacity` at creation.
    data: Vec<T>,
    /// Requested capacity in elements.
    capacity: usize,
}

impl<T> Segment<T> {
    /// Reserve a segment able to hold `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`MaterializeError::AllocationFailed`] if the reservation
    /// is refused (including capacities that overflow `isize`).
    pub fn with_capacity(capacity: usize) -> Result<Self, MaterializeError> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| MaterializeError::AllocationFailed {
                requested: capacity,
            })?;
        Ok(Self { data, capacity })
    }

    /// Append one element.
    ///
    /// The caller must retire a full segment before pushing again; pushing
    /// past `capacity` is a logic error (the backing `Vec` would grow).
    pub fn push(&mut self, value: T) {
        debug_assert!(
            !self.is_full(),
            "push into full segment of capacity {}",
            self.capacity
        );
        self.data.push(value);
    }

    /// Number of elements written so far.
    pub fn filled(&self) -> usize {
        self.data.len()
    }

    /// Requested capacity in elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether `filled() == capacity()`.
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// The written prefix.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Release the written elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

/// Stack of completely filled segments, oldest at the bottom.
///
/// Together with the segment currently being filled, the chain holds
/// every element produced so far, in production order from the bottom
/// of the stack upward.
#[derive(Debug)]
pub struct SegmentChain<T> {
    retired: SmallVec<[Vec<T>; INLINE_SEGMENTS]>,
    /// Sum of the lengths of all retired segments.
    written: usize,
}

impl<T> SegmentChain<T> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            retired: SmallVec::new(),
            written: 0,
        }
    }

    /// Push a full segment onto the chain.
    pub fn retire(&mut self, segment: Segment<T>) {
        debug_assert!(
            segment.is_full(),
            "retired segment holds {} of {}",
            segment.filled(),
            segment.capacity()
        );
        self.written += segment.filled();
        self.retired.push(segment.into_vec());
    }

    /// Pop the most recently retired segment.
    pub fn pop_most_recent(&mut self) -> Option<Vec<T>> {
        let block = self.retired.pop()?;
        self.written -= block.len();
        Some(block)
    }

    /// Total elements held by retired segments.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Number of retired segments.
    pub fn len(&self) -> usize {
        self.retired.len()
    }

    /// Whether no segment has been retired.
    pub fn is_empty(&self) -> bool {
        self.retired.is_empty()
    }

    /// Whether the chain has spilled out of its inline storage.
    pub fn spilled(&self) -> bool {
        self.retired.spilled()
    }
}

impl<T> Default for SegmentChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! The materializer: single-pass producer in, exactly-sized buffer out.
//!
//! Elements are pulled one at a time into a [`Segment`]. A full segment
//! is retired onto the [`SegmentChain`] only when the producer yields
//! another element, and is replaced by a segment as large as everything
//! written so far. Once the producer is exhausted the segments are merged
//! tail-first into one buffer, unless the first segment was filled
//! exactly, in which case it is returned as-is.

use std::fmt;
use std::mem;

use segdrain_core::{LengthHint, MaterializeError};

use crate::config::MaterializerConfig;
use crate::error::ConfigError;
use crate::raw::BackFill;
use crate::segment::{Segment, SegmentChain};
use crate::stats::{MaterializePath, MaterializeStats};

/// Result of one materialization: the buffer and what it cost.
#[derive(Debug)]
pub struct Materialized<T> {
    /// `None` when the producer was empty.
    buffer: Option<Box<[T]>>,
    stats: MaterializeStats,
}

impl<T> Materialized<T> {
    fn empty(stats: MaterializeStats) -> Self {
        Self {
            buffer: None,
            stats,
        }
    }

    /// The produced buffer, or `None` if the producer was empty.
    pub fn buffer(&self) -> Option<&[T]> {
        self.buffer.as_deref()
    }

    /// The produced elements; empty if the producer was empty.
    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_deref().unwrap_or(&[])
    }

    /// Number of produced elements.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the producer was empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_none()
    }

    /// Allocation and copy counters for this call.
    pub fn stats(&self) -> &MaterializeStats {
        &self.stats
    }

    /// Take the buffer, discarding the counters.
    pub fn into_buffer(self) -> Option<Box<[T]>> {
        self.buffer
    }

    /// Take both the buffer and the counters.
    pub fn into_parts(self) -> (Option<Box<[T]>>, MaterializeStats) {
        (self.buffer, self.stats)
    }
}

/// Drains producers into exactly-sized buffers.
///
/// Stateless apart from its configuration; one instance can serve any
/// number of calls and element types.
#[derive(Clone, Debug, Default)]
pub struct Materializer {
    config: MaterializerConfig,
}

impl Materializer {
    /// Create a materializer with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by
    /// [`MaterializerConfig::validate`].
    pub fn new(config: MaterializerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &MaterializerConfig {
        &self.config
    }

    /// Drain a producer whose items are already of the element type.
    ///
    /// # Errors
    ///
    /// Only [`MaterializeError::AllocationFailed`].
    pub fn drain<I>(
        &self,
        producer: I,
        hint: LengthHint,
    ) -> Result<Materialized<I::Item>, MaterializeError>
    where
        I: IntoIterator,
    {
        self.try_drain(producer.into_iter().map(Ok), hint)
    }

    /// Drain a producer, converting each item to `T` as it is written.
    ///
    /// # Errors
    ///
    /// [`MaterializeError::TypeMismatch`] for the first item `T` rejects,
    /// or [`MaterializeError::AllocationFailed`].
    pub fn drain_as<T, I>(
        &self,
        producer: I,
        hint: LengthHint,
    ) -> Result<Materialized<T>, MaterializeError>
    where
        I: IntoIterator,
        T: TryFrom<I::Item>,
        <T as TryFrom<I::Item>>::Error: fmt::Display,
    {
        let items = producer.into_iter().enumerate().map(|(index, item)| {
            T::try_from(item).map_err(|e| MaterializeError::type_mismatch::<T>(index, e))
        });
        self.try_drain(items, hint)
    }

    /// Drain a producer whose items may fail.
    ///
    /// The first `Err` aborts the call; elements pulled before it are
    /// dropped and the producer is not pulled again.
    ///
    /// # Errors
    ///
    /// The producer's first error, or [`MaterializeError::AllocationFailed`].
    pub fn try_drain<T, I>(
        &self,
        producer: I,
        hint: LengthHint,
    ) -> Result<Materialized<T>, MaterializeError>
    where
        I: IntoIterator<Item = Result<T, MaterializeError>>,
    {
        let mut stats = MaterializeStats::default();
        let mut items = producer.into_iter();

        let first = match items.next() {
            None => return Ok(Materialized::empty(stats)),
            Some(item) => item?,
        };

        let first_capacity = hint.initial_capacity(self.config.default_capacity);
        let mut current = Segment::with_capacity(first_capacity)?;
        stats.record_segment(current.capacity());
        current.push(first);

        let mut chain = SegmentChain::new();
        for item in items {
            let value = item?;
            if current.is_full() {
                // The next segment is as large as everything written so far.
                let next = Segment::with_capacity(chain.written() + current.filled())?;
                stats.record_segment(next.capacity());
                chain.retire(mem::replace(&mut current, next));
            }
            current.push(value);
        }

        stats.segments_retired = chain.len();
        stats.elements_written = chain.written() + current.filled();
        let buffer = merge(chain, current, &mut stats)?;
        Ok(Materialized {
            buffer: Some(buffer),
            stats,
        })
    }
}

/// Join the retired chain and the final segment into one buffer.
fn merge<T>(
    mut chain: SegmentChain<T>,
    last: Segment<T>,
    stats: &mut MaterializeStats,
) -> Result<Box<[T]>, MaterializeError> {
    let total = chain.written() + last.filled();

    if chain.is_empty() && last.capacity() == total {
        stats.path = MaterializePath::FastPath;
        return Ok(last.into_vec().into_boxed_slice());
    }

    stats.path = MaterializePath::Merged;
    let mut result = BackFill::new(total)?;
    stats.elements_copied += result.prepend(last.into_vec());
    // Retired segments are always full, so each fills exactly its own span.
    while let Some(block) = chain.pop_most_recent() {
        stats.elements_copied += result.prepend(block);
    }
    Ok(result.finish())
}

/// Checked entry point: drain `producer` into a buffer of `T`.
///
/// Returns `Ok(None)` for an empty producer; callers substitute their own
/// shared empty buffer. A `hint` of zero means no estimate.
///
/// # Errors
///
/// - [`MaterializeError::MissingProducer`] if `producer` is `None`.
/// - [`MaterializeError::NegativeHint`] if `hint < 0`.
///
/// Both are reported before anything is pulled. Conversion and allocation
/// failures are reported as in [`Materializer::drain_as`].
pub fn materialize<T, I>(
    producer: Option<I>,
    hint: i64,
) -> Result<Option<Box<[T]>>, MaterializeError>
where
    I: IntoIterator,
    T: TryFrom<I::Item>,
    <T as TryFrom<I::Item>>::Error: fmt::Display,
{
    let producer = producer.ok_or(MaterializeError::MissingProducer)?;
    let hint = LengthHint::new(hint)?;
    let materialized = Materializer::default().drain_as(producer, hint)?;
    Ok(materialized.into_buffer())
}

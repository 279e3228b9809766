//! Benchmark workloads for the segdrain materializer.
//!
//! Provides deterministic inputs for benchmarks and examples:
//!
//! - [`workload`]: a value sequence paired with a hint in a chosen [`HintMode`]
//! - [`random_lengths`]: seeded sequence lengths for mixed-size runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use segdrain_core::LengthHint;

/// How the hint of a [`Workload`] relates to its true length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintMode {
    /// Hint equals the length (fast path).
    Exact,
    /// No hint.
    Unknown,
    /// Hint is a quarter of the length.
    Under,
    /// Hint is four times the length.
    Over,
}

impl HintMode {
    /// All modes, in benchmark report order.
    pub const ALL: [HintMode; 4] = [Self::Exact, Self::Unknown, Self::Under, Self::Over];

    /// Hint for a sequence of `len` elements.
    pub fn hint_for(self, len: usize) -> LengthHint {
        match self {
            Self::Exact => LengthHint::exact(len),
            Self::Unknown => LengthHint::UNKNOWN,
            Self::Under => LengthHint::exact((len / 4).max(1)),
            Self::Over => LengthHint::exact(len.saturating_mul(4)),
        }
    }

    /// Short label for benchmark ids.
    pub fn label(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Unknown => "unknown",
            Self::Under => "under",
            Self::Over => "over",
        }
    }
}

/// Input for one benchmark iteration.
#[derive(Clone, Debug)]
pub struct Workload {
    /// Values to feed through the producer.
    pub values: Vec<u64>,
    /// Hint passed alongside the producer.
    pub hint: LengthHint,
}

/// Build a workload of `len` seeded random values.
pub fn workload(len: usize, mode: HintMode, seed: u64) -> Workload {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = (0..len).map(|_| rng.next_u64()).collect();
    Workload {
        values,
        hint: mode.hint_for(len),
    }
}

/// `count` seeded lengths in `[1, max_len]`.
pub fn random_lengths(count: usize, max_len: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let max_len = max_len.max(1) as u64;
    (0..count)
        .map(|_| (rng.next_u64() % max_len) as usize + 1)
        .collect()
}

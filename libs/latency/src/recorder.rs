//! Latency Recorder
//!
//! Fixed-capacity ring of timing samples. The backing storage is allocated
//! once by the constructor; [`LatencyRecorder::record`] is a single store at
//! `index % capacity` followed by an increment of the logical index, so the
//! recorder can sit on a hot path without allocating.
//!
//! Once more samples than slots have been recorded, new samples overwrite the
//! oldest ones. Analysis then covers the whole ring.

use crate::clock::CycleClock;
use crate::error::{LatencyError, LatencyResult};
use crate::report::{analyze_samples, LatencyReport};

/// Default ring size (one million samples, 8MB)
pub const DEFAULT_CAPACITY: usize = 1_000_000;

/// Single-writer ring of latency samples
pub struct LatencyRecorder {
    samples: Box<[u64]>,
    index: u64,
}

impl LatencyRecorder {
    /// Create a recorder with [`DEFAULT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY)
    }

    /// Create a recorder with `capacity` slots
    pub fn with_capacity(capacity: usize) -> LatencyResult<Self> {
        if capacity == 0 {
            return Err(LatencyError::ZeroCapacity);
        }
        Ok(Self::allocate(capacity))
    }

    fn allocate(capacity: usize) -> Self {
        tracing::debug!(capacity, "latency recorder allocated");
        Self {
            samples: vec![0u64; capacity].into_boxed_slice(),
            index: 0,
        }
    }

    /// Record one sample, overwriting the oldest once the ring is full
    #[inline]
    pub fn record(&mut self, sample: u64) {
        let capacity = self.samples.len() as u64;
        let slot = (self.index % capacity) as usize;
        self.samples[slot] = sample;
        self.index += 1;

        if self.index == capacity {
            tracing::debug!(capacity, "latency ring full, oldest samples will be overwritten");
        }
    }

    /// Run `op`, recording the clock ticks it took
    #[inline]
    pub fn time<C, T, F>(&mut self, clock: &C, op: F) -> T
    where
        C: CycleClock,
        F: FnOnce() -> T,
    {
        let start = clock.now();
        let result = op();
        self.record(clock.now().wrapping_sub(start));
        result
    }

    /// Number of slots in the ring
    #[inline]
    pub fn capacity(&self) -> usize {
        self.samples.len()
    }

    /// Number of slots holding a recorded sample
    #[inline]
    pub fn len(&self) -> usize {
        self.index.min(self.samples.len() as u64) as usize
    }

    /// True until the first sample is recorded
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index == 0
    }

    /// Total samples recorded since construction or the last reset
    #[inline]
    pub fn total_recorded(&self) -> u64 {
        self.index
    }

    /// True once at least one sample has been overwritten
    #[inline]
    pub fn has_wrapped(&self) -> bool {
        self.index > self.samples.len() as u64
    }

    /// Valid samples in slot order (not chronological once wrapped)
    #[inline]
    pub fn samples(&self) -> &[u64] {
        &self.samples[..self.len()]
    }

    /// Copy of the valid samples, for analysis away from the writer
    pub fn snapshot(&self) -> Vec<u64> {
        self.samples().to_vec()
    }

    /// Forget every recorded sample. Storage is kept.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Statistics over the first `count` valid samples
    ///
    /// `count` is clamped to the number of valid samples, so passing
    /// [`capacity`](Self::capacity) analyzes everything recorded. A count of
    /// zero, or an empty recorder, yields [`LatencyReport::NoData`].
    pub fn analyze(&self, count: usize) -> LatencyReport {
        let n = count.min(self.len());
        analyze_samples(&self.samples[..n])
    }
}

impl Default for LatencyRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LatencyRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LatencyRecorder")
            .field("capacity", &self.capacity())
            .field("total_recorded", &self.index)
            .finish()
    }
}

//! Cycle Clock - Timing Sources for Hot Path Measurement
//!
//! ## Purpose
//!
//! Measuring a step that costs tens of nanoseconds needs a counter that
//! costs less than the step. On x86_64 the time-stamp counter is read with a
//! single `rdtsc` instruction (~20 cycles, no syscall). Elsewhere the clock
//! falls back to a monotonic `Instant` measured from a process-wide epoch.
//!
//! ## Units
//!
//! [`Tsc`] returns raw TSC ticks; [`MonotonicClock`] returns nanoseconds.
//! Samples from different clocks must not be mixed in one recorder. Use
//! [`calibrate`] to convert TSC ticks into nanoseconds for reporting.

use once_cell::sync::Lazy;
use std::time::{Duration, Instant};

/// Process-wide epoch for monotonic readings
static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

/// A monotonic counter read at the entry and exit of a measured step
pub trait CycleClock {
    /// Current counter value. Differences between two readings are durations.
    fn now(&self) -> u64;
}

/// x86_64 time-stamp counter (monotonic nanoseconds on other targets)
#[derive(Debug, Clone, Copy, Default)]
pub struct Tsc;

impl CycleClock for Tsc {
    #[inline(always)]
    fn now(&self) -> u64 {
        read_tsc()
    }
}

/// Nanoseconds since the first reading in this process
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl CycleClock for MonotonicClock {
    #[inline(always)]
    fn now(&self) -> u64 {
        monotonic_ns()
    }
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_tsc() -> u64 {
    // SAFETY: rdtsc has no memory effects and is available on every x86_64 CPU
    unsafe { core::arch::x86_64::_rdtsc() }
}

#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
fn read_tsc() -> u64 {
    monotonic_ns()
}

/// Nanoseconds elapsed since the process-wide epoch
///
/// Saturates at `u64::MAX` (about 584 years of uptime).
#[inline]
pub fn monotonic_ns() -> u64 {
    u64::try_from(EPOCH.elapsed().as_nanos()).unwrap_or(u64::MAX)
}

/// Conversion factor between [`Tsc`] ticks and nanoseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TscCalibration {
    /// Counter ticks per nanosecond of wall time
    pub cycles_per_ns: f64,
}

impl TscCalibration {
    /// One tick per nanosecond, for samples that are already in nanoseconds
    pub const IDENTITY: TscCalibration = TscCalibration { cycles_per_ns: 1.0 };

    /// Convert a tick count to nanoseconds
    #[inline]
    pub fn to_nanos(&self, cycles: u64) -> f64 {
        cycles as f64 / self.cycles_per_ns
    }

    /// Convert a fractional tick count to nanoseconds
    #[inline]
    pub fn to_nanos_f64(&self, cycles: f64) -> f64 {
        cycles / self.cycles_per_ns
    }
}

impl Default for TscCalibration {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Estimate the TSC frequency by sleeping for `window`
///
/// Longer windows give better estimates; 10-50ms is enough for reporting.
/// Falls back to [`TscCalibration::IDENTITY`] when no time elapsed.
pub fn calibrate(window: Duration) -> TscCalibration {
    let start_cycles = Tsc.now();
    let start = Instant::now();
    std::thread::sleep(window);
    let cycles = Tsc.now().wrapping_sub(start_cycles);
    let elapsed_ns = start.elapsed().as_nanos();

    if elapsed_ns == 0 || cycles == 0 {
        return TscCalibration::IDENTITY;
    }

    let calibration = TscCalibration {
        cycles_per_ns: cycles as f64 / elapsed_ns as f64,
    };
    tracing::debug!(
        cycles_per_ns = calibration.cycles_per_ns,
        window_ms = window.as_millis() as u64,
        "TSC calibrated"
    );
    calibration
}

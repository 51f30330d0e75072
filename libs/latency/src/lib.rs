//! # Latency Instrumentation
//!
//! Fixed-capacity sample rings and the statistics computed over them.
//!
//! ## Purpose
//!
//! - **Timing source**: [`CycleClock`] abstracts the counter read at the start
//!   and end of a measured step. [`Tsc`] reads the x86_64 time-stamp counter;
//!   [`MonotonicClock`] reads nanoseconds since a process-wide epoch.
//! - **Sampling**: [`LatencyRecorder`] owns a ring allocated once at
//!   construction. Recording is a store and an increment, never an allocation.
//! - **Analysis**: [`LatencyRecorder::analyze`] sorts a copy of the samples and
//!   reports min/max/mean and the 50th, 99th and 99.9th percentiles.
//!
//! ## Ownership Model
//!
//! Each recorder is an ordinary value. Recording takes `&mut self` and
//! analysis takes `&self`, so analysis can never overlap an active writer
//! without an explicit [`LatencyRecorder::snapshot`].
//!
//! ```rust
//! use latency::{LatencyRecorder, LatencyReport};
//!
//! let mut recorder = LatencyRecorder::with_capacity(8).unwrap();
//! for sample in [5, 1, 4, 2, 3] {
//!     recorder.record(sample);
//! }
//!
//! match recorder.analyze(recorder.capacity()) {
//!     LatencyReport::Stats(stats) => assert_eq!(stats.p50, 3),
//!     LatencyReport::NoData => unreachable!(),
//! }
//! ```

pub mod clock;
pub mod error;
pub mod recorder;
pub mod report;

pub use clock::{calibrate, monotonic_ns, CycleClock, MonotonicClock, Tsc, TscCalibration};
pub use error::{LatencyError, LatencyResult};
pub use recorder::{LatencyRecorder, DEFAULT_CAPACITY};
pub use report::{analyze_samples, LatencyNanos, LatencyReport, LatencyStats};

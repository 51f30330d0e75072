//! Default settings
//!
//! The workload defaults reproduce the classic benchmark: two million AAPL
//! market buys, prices stepping by one cent from 50.25, quantities cycling
//! through 10..110.

/// SPSC ring slots (one is reserved)
pub const CHANNEL_CAPACITY: usize = 4_096;

/// Latency samples kept per recorder
pub const RECORDER_CAPACITY: usize = 1_000_000;

/// Orders generated per run
pub const MESSAGE_COUNT: u64 = 2_000_000;

pub const SYMBOL: &str = "AAPL";

pub const BASE_PRICE: f64 = 50.25;

/// Price increment per generated order
pub const PRICE_STEP: f64 = 0.01;

/// Timestamp of the first generated order
pub const BASE_TIMESTAMP_NS: u64 = 1_000;

/// Quantities cycle through `QUANTITY_BASE..QUANTITY_BASE + QUANTITY_CYCLE`
pub const QUANTITY_BASE: u32 = 10;
pub const QUANTITY_CYCLE: u32 = 100;

pub const LOG_LEVEL: &str = "info";

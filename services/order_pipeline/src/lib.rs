//! # Order Pipeline Benchmark
//!
//! Drives the full hot path end to end:
//!
//! ```text
//! producer thread                               consumer thread
//! ───────────────                               ───────────────
//! OrderBuilder → encode → TimedDecoder::decode → push ══ SPSC ══ pop → checksum
//!                               ↓                 ↓
//!                      decode latency ring   push latency ring
//! ```
//!
//! The producer runs on the calling thread. The consumer drains until the
//! producer handle is dropped and the ring is empty. Latency is sampled in
//! TSC cycles and converted to nanoseconds after a short calibration.

use anyhow::{anyhow, bail, Context, Result};
use codec::{DecodeStats, OrderBuilder, TimedDecoder};
use latency::{calibrate, LatencyNanos, LatencyRecorder, LatencyReport, Tsc};
use pipeline_config::PipelineConfig;
use serde::Serialize;
use std::fmt;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use transport::{spsc, Consumer, PopError, Producer, PushError};
use types::{Order, Symbol};

/// Sleep used to estimate TSC cycles per nanosecond
pub const CALIBRATION_WINDOW: Duration = Duration::from_millis(50);

/// Per-kind decode rejection counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeFailures {
    pub truncated: u64,
    pub invalid_symbol: u64,
    pub invalid_price: u64,
    pub invalid_quantity: u64,
    pub invalid_side: u64,
    pub invalid_order_type: u64,
}

impl DecodeFailures {
    pub fn total(&self) -> u64 {
        self.truncated
            + self.invalid_symbol
            + self.invalid_price
            + self.invalid_quantity
            + self.invalid_side
            + self.invalid_order_type
    }
}

impl From<&DecodeStats> for DecodeFailures {
    fn from(stats: &DecodeStats) -> Self {
        Self {
            truncated: stats.truncated,
            invalid_symbol: stats.invalid_symbol,
            invalid_price: stats.invalid_price,
            invalid_quantity: stats.invalid_quantity,
            invalid_side: stats.invalid_side,
            invalid_order_type: stats.invalid_order_type,
        }
    }
}

/// What the consumer saw
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ConsumerSummary {
    pub consumed: u64,
    pub checksum: u64,
    pub notional: f64,
}

/// Outcome of one benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub generated: u64,
    pub parsed: u64,
    pub decode_failures: DecodeFailures,
    pub consumer: ConsumerSummary,
    pub elapsed_secs: f64,
    pub throughput_per_sec: f64,
    pub cycles_per_ns: f64,
    pub decode_cycles: LatencyReport,
    pub decode_ns: Option<LatencyNanos>,
    pub push_cycles: LatencyReport,
    pub push_ns: Option<LatencyNanos>,
}

/// Contribution of one order to the consumer checksum
#[inline]
pub fn order_checksum(order: &Order) -> u64 {
    order.order_id ^ u64::from(order.quantity)
}

/// Run the configured workload once
pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
    config.validate()?;
    let workload = &config.workload;
    let symbol = Symbol::new(&workload.symbol)
        .with_context(|| format!("Invalid workload symbol {:?}", workload.symbol))?;

    let (mut producer, consumer) = spsc::channel::<Order>(config.channel.capacity)
        .context("Failed to create order channel")?;
    let decode_recorder = LatencyRecorder::with_capacity(config.recorder.capacity)
        .context("Failed to allocate decode latency recorder")?;
    let mut push_recorder = LatencyRecorder::with_capacity(config.recorder.capacity)
        .context("Failed to allocate push latency recorder")?;
    let mut decoder = TimedDecoder::new(decode_recorder);

    let consumer_handle = thread::Builder::new()
        .name("order-consumer".to_string())
        .spawn(move || consume(consumer))
        .context("Failed to spawn consumer thread")?;

    info!(
        messages = workload.message_count,
        channel_capacity = config.channel.capacity,
        recorder_capacity = config.recorder.capacity,
        symbol = %symbol,
        "Starting order pipeline"
    );

    let start = Instant::now();
    let mut parsed = 0u64;

    for i in 0..workload.message_count {
        let bytes = OrderBuilder::new()
            .order_id(i)
            .timestamp_ns(workload.timestamp_at(i))
            .price(workload.price_at(i))
            .quantity(workload.quantity_at(i))
            .symbol_bytes(symbol)
            .side(workload.side)
            .order_type(workload.order_type)
            .wire();

        let order = match decoder.decode(&bytes) {
            Ok(order) => order,
            Err(err) => {
                warn!(order_id = i, error = %err, "Parse failed");
                continue;
            }
        };
        parsed += 1;

        push_recorder.time(&Tsc, || push_spinning(&mut producer, order))?;
    }

    let elapsed = start.elapsed();
    drop(producer);

    let consumer = consumer_handle
        .join()
        .map_err(|_| anyhow!("Consumer thread panicked"))?;
    debug!(?consumer, "Consumer drained");

    if consumer.consumed != parsed {
        bail!(
            "Consumer received {} orders but {} were pushed",
            consumer.consumed,
            parsed
        );
    }

    let calibration = calibrate(CALIBRATION_WINDOW);
    let elapsed_secs = elapsed.as_secs_f64();
    let decode_cycles = decoder.recorder().analyze(decoder.recorder().capacity());
    let push_cycles = push_recorder.analyze(push_recorder.capacity());

    Ok(PipelineReport {
        generated: workload.message_count,
        parsed,
        decode_failures: DecodeFailures::from(decoder.stats()),
        consumer,
        elapsed_secs,
        throughput_per_sec: if elapsed_secs > 0.0 {
            parsed as f64 / elapsed_secs
        } else {
            0.0
        },
        cycles_per_ns: calibration.cycles_per_ns,
        decode_ns: decode_cycles.stats().map(|s| s.in_nanos(&calibration)),
        decode_cycles,
        push_ns: push_cycles.stats().map(|s| s.in_nanos(&calibration)),
        push_cycles,
    })
}

/// Push, spinning while the ring is full
///
/// Fails only when the consumer is gone, since nothing would ever free a slot.
fn push_spinning(producer: &mut Producer<Order>, mut order: Order) -> Result<()> {
    loop {
        match producer.push(order) {
            Ok(()) => return Ok(()),
            Err(PushError::Full(rejected)) => {
                if producer.is_abandoned() {
                    bail!("Consumer stopped while the channel was full");
                }
                order = rejected;
                std::hint::spin_loop();
            }
        }
    }
}

/// Pop until the producer is gone and nothing is left
fn consume(mut consumer: Consumer<Order>) -> ConsumerSummary {
    let mut summary = ConsumerSummary::default();
    loop {
        match consumer.pop() {
            Ok(order) => {
                summary.consumed += 1;
                summary.checksum = summary.checksum.wrapping_add(order_checksum(&order));
                summary.notional += order.notional();
            }
            Err(PopError::Empty) => {
                if consumer.is_abandoned() && consumer.is_empty() {
                    return summary;
                }
                std::hint::spin_loop();
            }
        }
    }
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Parsed {} messages in {:.3} seconds.",
            self.parsed, self.elapsed_secs
        )?;
        writeln!(f, "Throughput: {:.0} messages/sec", self.throughput_per_sec)?;
        writeln!(f, "Decode failures: {}", self.decode_failures.total())?;
        writeln!(
            f,
            "Consumed: {} (checksum {:#018x})",
            self.consumer.consumed, self.consumer.checksum
        )?;
        writeln!(f, "TSC: {:.3} cycles/ns", self.cycles_per_ns)?;
        writeln!(f)?;
        writeln!(f, "Decode latency (cycles):")?;
        writeln!(f, "{}", self.decode_cycles)?;
        if let Some(nanos) = &self.decode_ns {
            writeln!(f)?;
            writeln!(f, "Decode latency (ns):")?;
            writeln!(f, "{nanos}")?;
        }
        writeln!(f)?;
        writeln!(f, "Push latency (cycles):")?;
        write!(f, "{}", self.push_cycles)?;
        if let Some(nanos) = &self.push_ns {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "Push latency (ns):")?;
            write!(f, "{nanos}")?;
        }
        Ok(())
    }
}

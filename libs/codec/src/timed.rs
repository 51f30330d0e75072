//! Timed decoding
//!
//! `decode` itself is pure. Instrumentation is applied by the caller: these
//! wrappers read a cycle clock around the call and record one sample per
//! successful decode. Rejected buffers record nothing, so the recorder only
//! ever describes the cost of producing a valid order.

use crate::error::{ErrorKind, ProtocolError, ProtocolResult};
use crate::parser::decode;
use latency::{CycleClock, LatencyRecorder, Tsc};
use types::Order;

/// Decode with the time-stamp counter, recording the elapsed cycles on success
#[inline]
pub fn decode_timed(bytes: &[u8], recorder: &mut LatencyRecorder) -> ProtocolResult<Order> {
    decode_timed_with(&Tsc, bytes, recorder)
}

/// Decode with an explicit clock, recording the elapsed ticks on success
#[inline]
pub fn decode_timed_with<C: CycleClock>(
    clock: &C,
    bytes: &[u8],
    recorder: &mut LatencyRecorder,
) -> ProtocolResult<Order> {
    let start = clock.now();
    let order = decode(bytes)?;
    recorder.record(clock.now().wrapping_sub(start));
    Ok(order)
}

/// Decode outcome counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    pub decoded: u64,
    pub truncated: u64,
    pub invalid_symbol: u64,
    pub invalid_price: u64,
    pub invalid_quantity: u64,
    pub invalid_side: u64,
    pub invalid_order_type: u64,
}

impl DecodeStats {
    fn count_rejection(&mut self, kind: ErrorKind) {
        match kind {
            ErrorKind::Truncated => self.truncated += 1,
            ErrorKind::InvalidSymbol => self.invalid_symbol += 1,
            ErrorKind::InvalidPrice => self.invalid_price += 1,
            ErrorKind::InvalidQuantity => self.invalid_quantity += 1,
            ErrorKind::InvalidSide => self.invalid_side += 1,
            ErrorKind::InvalidOrderType => self.invalid_order_type += 1,
            // decode never produces it
            ErrorKind::BufferTooSmall => {}
        }
    }

    /// Total buffers rejected, across every failure kind
    pub fn rejected(&self) -> u64 {
        self.truncated
            + self.invalid_symbol
            + self.invalid_price
            + self.invalid_quantity
            + self.invalid_side
            + self.invalid_order_type
    }

    /// Total buffers seen
    pub fn total(&self) -> u64 {
        self.decoded + self.rejected()
    }
}

/// Decoder that owns its latency recorder and counts outcomes
///
/// One instance belongs to one producer; `decode` takes `&mut self`.
pub struct TimedDecoder<C: CycleClock = Tsc> {
    clock: C,
    recorder: LatencyRecorder,
    stats: DecodeStats,
}

impl TimedDecoder<Tsc> {
    /// Time-stamp counter decoder
    pub fn new(recorder: LatencyRecorder) -> Self {
        Self::with_clock(Tsc, recorder)
    }
}

impl<C: CycleClock> TimedDecoder<C> {
    pub fn with_clock(clock: C, recorder: LatencyRecorder) -> Self {
        Self {
            clock,
            recorder,
            stats: DecodeStats::default(),
        }
    }

    /// Decode one buffer, recording latency on success and counting the outcome
    #[inline]
    pub fn decode(&mut self, bytes: &[u8]) -> ProtocolResult<Order> {
        match decode_timed_with(&self.clock, bytes, &mut self.recorder) {
            Ok(order) => {
                self.stats.decoded += 1;
                Ok(order)
            }
            Err(err) => {
                self.reject(&err);
                Err(err)
            }
        }
    }

    #[cold]
    fn reject(&mut self, err: &ProtocolError) {
        self.stats.count_rejection(err.kind());
        tracing::trace!(error = %err, "order rejected");
    }

    pub fn recorder(&self) -> &LatencyRecorder {
        &self.recorder
    }

    pub fn stats(&self) -> &DecodeStats {
        &self.stats
    }

    /// Give up the decoder, keeping its samples
    pub fn into_recorder(self) -> LatencyRecorder {
        self.recorder
    }
}

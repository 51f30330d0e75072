//! Errors raised when constructing latency instrumentation

use thiserror::Error;

/// Latency recorder construction errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LatencyError {
    /// A ring needs at least one slot
    #[error("Latency recorder capacity must be at least 1, got 0")]
    ZeroCapacity,
}

/// Result type for latency operations
pub type LatencyResult<T> = std::result::Result<T, LatencyError>;

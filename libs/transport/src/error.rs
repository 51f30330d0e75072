//! Channel Error Types
//!
//! `Full` and `Empty` are steady-state back-pressure signals, not faults; the
//! caller decides whether to spin, yield or drop. Only construction can fail
//! for real.

use thiserror::Error;

/// Channel construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// Capacity is zero, one, or not a power of two
    #[error("Invalid channel capacity {capacity}: must be a power of two and at least 2")]
    InvalidCapacity { capacity: usize },
}

/// Push rejected because every usable slot is occupied. The item is handed back.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushError<T> {
    #[error("Channel full")]
    Full(T),
}

impl<T> PushError<T> {
    /// Recover the rejected item
    pub fn into_inner(self) -> T {
        match self {
            PushError::Full(item) => item,
        }
    }
}

/// Pop found nothing to take
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopError {
    #[error("Channel empty")]
    Empty,
}

/// Result type for channel construction
pub type ChannelResult<T> = std::result::Result<T, ChannelError>;

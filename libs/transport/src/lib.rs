//! # Transport
//!
//! In-process hand-off between exactly one producer thread and exactly one
//! consumer thread.
//!
//! ## Architecture Role
//!
//! ```text
//! bytes → codec::decode → [Producer::push] ══ ring ══ [Consumer::pop] → downstream
//! ```
//!
//! The codec and the channel never depend on each other; caller glue composes
//! them. The channel is generic over the element type and works for any
//! `T: Send`.
//!
//! ## Performance Profile
//!
//! - **push/pop**: one relaxed load, one acquire load, one slot move, one
//!   release store; never blocks, spins or allocates
//! - **Cursors**: each on its own cache line, so producer and consumer do not
//!   false-share
//! - **Capacity**: power of two, one slot reserved to tell full from empty

pub mod error;
pub mod spsc;

pub use error::{ChannelError, ChannelResult, PopError, PushError};
pub use spsc::{channel, Consumer, Producer};

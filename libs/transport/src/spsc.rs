//! # Single-Producer Single-Consumer Ring
//!
//! [`channel`] splits one fixed ring into a [`Producer`] and a [`Consumer`].
//! Neither handle is `Clone` and both mutate through `&mut self`, so the
//! type system guarantees at most one thread pushes and at most one pops.
//!
//! ## Cursor Protocol
//!
//! ```text
//!            tail (consumer)          head (producer)
//!                 ↓                        ↓
//! ┌───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┬───┐
//! │   │   │   │ A │ B │ C │ D │ E │   │   │   │   │
//! └───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┴───┘
//! ```
//!
//! - Each side loads its own cursor `Relaxed` (it is the only writer) and the
//!   other side's cursor `Acquire`.
//! - Each side publishes its cursor with a `Release` store after touching the
//!   slot, which hands the slot's contents (or its vacancy) to the other side.
//! - `head + 1 == tail` (mod capacity) means full, so a ring of N slots holds
//!   at most N − 1 items.

use crate::error::{ChannelError, ChannelResult, PopError, PushError};
use std::cell::UnsafeCell;
use std::mem::MaybeUninit;
use std::ops::Deref;
use std::sync::atomic::{fence, AtomicUsize, Ordering};
use std::sync::Arc;

/// Keeps a value on its own cache line
#[repr(align(64))]
struct CachePadded<T>(T);

impl<T> Deref for CachePadded<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

struct Shared<T> {
    /// Next slot the producer writes
    head: CachePadded<AtomicUsize>,
    /// Next slot the consumer reads
    tail: CachePadded<AtomicUsize>,
    mask: usize,
    slots: Box<[UnsafeCell<MaybeUninit<T>>]>,
}

// SAFETY: a slot is only ever accessed by the side that currently owns it,
// and ownership moves through the release/acquire cursor handshake.
unsafe impl<T: Send> Send for Shared<T> {}
unsafe impl<T: Send> Sync for Shared<T> {}

impl<T> Shared<T> {
    #[inline]
    fn capacity(&self) -> usize {
        self.mask + 1
    }

    #[inline]
    fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Acquire);
        head.wrapping_sub(tail) & self.mask
    }

    /// True when `this` is the only remaining reference
    #[inline]
    fn is_sole_owner(this: &Arc<Self>) -> bool {
        let alone = Arc::strong_count(this) == 1;
        // Pairs with the release decrement in the other handle's drop, so
        // its final cursor store is visible to the caller
        fence(Ordering::Acquire);
        alone
    }
}

impl<T> Drop for Shared<T> {
    fn drop(&mut self) {
        let head = *self.head.0.get_mut();
        let mut tail = *self.tail.0.get_mut();
        while tail != head {
            // SAFETY: slots in [tail, head) were written and never popped
            unsafe { self.slots[tail].get_mut().assume_init_drop() };
            tail = (tail + 1) & self.mask;
        }
    }
}

/// Create a channel with `capacity` slots (`capacity - 1` usable)
///
/// `capacity` must be a power of two and at least 2. The ring is allocated
/// here, once.
pub fn channel<T>(capacity: usize) -> ChannelResult<(Producer<T>, Consumer<T>)> {
    if capacity < 2 || !capacity.is_power_of_two() {
        return Err(ChannelError::InvalidCapacity { capacity });
    }

    let slots = (0..capacity)
        .map(|_| UnsafeCell::new(MaybeUninit::uninit()))
        .collect::<Vec<_>>()
        .into_boxed_slice();

    let shared = Arc::new(Shared {
        head: CachePadded(AtomicUsize::new(0)),
        tail: CachePadded(AtomicUsize::new(0)),
        mask: capacity - 1,
        slots,
    });

    tracing::debug!(
        capacity,
        element_size = std::mem::size_of::<T>(),
        "spsc channel created"
    );

    Ok((
        Producer {
            shared: Arc::clone(&shared),
        },
        Consumer { shared },
    ))
}

/// Write half of an SPSC channel
pub struct Producer<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Producer<T> {
    /// Push without blocking. A full ring hands the item back unchanged.
    #[inline]
    pub fn push(&mut self, item: T) -> Result<(), PushError<T>> {
        let shared = &*self.shared;
        let head = shared.head.load(Ordering::Relaxed);
        let next = (head + 1) & shared.mask;

        if next == shared.tail.load(Ordering::Acquire) {
            return Err(PushError::Full(item));
        }

        // SAFETY: slot `head` is outside [tail, head), so the consumer does
        // not touch it until the release store below publishes it.
        unsafe { (*shared.slots[head].get()).write(item) };
        shared.head.store(next, Ordering::Release);
        Ok(())
    }

    /// Items currently queued (advisory)
    #[inline]
    pub fn len(&self) -> usize {
        self.shared.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.shared.mask
    }

    /// Slot count, including the reserved slot
    #[inline]
    pub fn capacity(&self) -> usize {
        self.shared.capacity()
    }

    /// True once the consumer has been dropped
    #[inline]
    pub fn is_abandoned(&self) -> bool {
        Shared::is_sole_owner(&self.shared)
    }
}

/// Read half of an SPSC channel
pub struct Consumer<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Consumer<T> {
    /// Pop without blocking
    #[inline]
    pub fn pop(&mut self) -> Result<T, PopError> {
        let shared = &*self.shared;
        let tail = shared.tail.load(Ordering::Relaxed);

        if tail == shared.head.load(Ordering::Acquire) {
            return Err(PopError::Empty);
        }

        // SAFETY: the acquire load above observed the producer's release
        // store for slot `tail`, so it is initialized and ours to move out.
        let item = unsafe { (*shared.slots[tail].get()).assume_init_read() };
        shared.tail.store((tail + 1) & shared.mask, Ordering::Release);
        Ok(item)
    }

    /// Items currently queued (advisory)
    #[inline]
    pub fn len(&self) -> usize {
        self.shared.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.shared.mask
    }

    /// Slot count, including the reserved slot
    #[inline]
    pub fn capacity(&self) -> usize {
        self.shared.capacity()
    }

    /// True once the producer has been dropped
    ///
    /// Anything still queued can be drained after this turns true.
    #[inline]
    pub fn is_abandoned(&self) -> bool {
        Shared::is_sole_owner(&self.shared)
    }
}

impl<T> std::fmt::Debug for Producer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Producer")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}

impl<T> std::fmt::Debug for Consumer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Consumer")
            .field("capacity", &self.capacity())
            .field("len", &self.len())
            .finish()
    }
}

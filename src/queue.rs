//! A bounded FIFO event queue (spec §4.1).
//!
//! Mirrors the circular buffer in the original source's FIFO tests
//! (`test_STATE_FIFOInit`, `test_STATE_FIFOAddRemoveEvent`,
//! `test_STATE_FIFOWrapAround`, `test_STATE_FIFOFlush`), but disambiguates
//! the empty/full state at `read == write` with an explicit `fill` count
//! instead of sacrificing one slot or masking indices, since `CAP` is not
//! required to be a power of two here.

use crate::event::Event;
use crate::panic::fatal;

/// A fixed-capacity, first-in-first-out queue of [`Event`]s.
pub struct EventQueue<const CAP: usize> {
    slots: [Event; CAP],
    read: usize,
    write: usize,
    fill: usize,
}

impl<const CAP: usize> EventQueue<CAP> {
    /// Create an empty queue.
    pub const fn new() -> Self {
        EventQueue {
            slots: [Event::NONE; CAP],
            read: 0,
            write: 0,
            fill: 0,
        }
    }

    /// Number of events currently queued.
    pub const fn len(&self) -> usize {
        self.fill
    }

    /// True if no events are queued.
    pub const fn is_empty(&self) -> bool {
        self.fill == 0
    }

    /// True if the queue cannot accept another event.
    pub const fn is_full(&self) -> bool {
        self.fill == CAP
    }

    /// The current read index into the backing array.
    ///
    /// Exposed chiefly so a flush can be verified to move `read` to meet
    /// `write` rather than resetting both to zero (spec §4.1).
    pub const fn read_index(&self) -> usize {
        self.read
    }

    /// The current write index into the backing array.
    pub const fn write_index(&self) -> usize {
        self.write
    }

    /// Append `event` to the back of the queue.
    ///
    /// # Panics
    ///
    /// Halts via [`fatal`](crate::panic::fatal) if the queue is full
    /// (spec I5).
    pub fn enqueue(&mut self, event: Event) {
        if self.is_full() {
            fatal("event queue is full");
        }
        self.slots[self.write] = event;
        self.write = (self.write + 1) % CAP;
        self.fill += 1;
    }

    /// Remove and return the event at the front of the queue.
    ///
    /// # Panics
    ///
    /// Halts via [`fatal`](crate::panic::fatal) if the queue is empty.
    pub fn dequeue(&mut self) -> Event {
        if self.is_empty() {
            fatal("event queue is empty");
        }
        let event = self.slots[self.read];
        self.read = (self.read + 1) % CAP;
        self.fill -= 1;
        event
    }

    /// Discard every queued event without dispatching it.
    pub fn flush(&mut self) {
        self.read = self.write;
        self.fill = 0;
    }
}

impl<const CAP: usize> Default for EventQueue<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

//! Byte queue between the edge interrupt and the main loop.
//!
//! A fixed power-of-two ring.  `head` and `tail` are free running counters; only the low bits
//! (`MASK`) index the buffer, so the queue is empty when they are equal and full when they are `N`
//! apart.  The interrupt is the only writer of `tail` (via [`ByteQueue::put`]) and the main loop is
//! the only writer of `head` (via [`ByteQueue::get`]).  The main loop must mask the interrupt while
//! it touches the queue; the firmware does this by keeping the queue inside a critical section
//! mutex.

pub struct ByteQueue<const N: usize> {
    buffer: [u8; N],
    head: usize,
    tail: usize,
}

impl<const N: usize> ByteQueue<N> {
    const MASK: usize = {
        assert!(N.is_power_of_two(), "ByteQueue size must be a power of two");
        N - 1
    };

    pub const fn new() -> Self {
        // Force evaluation of the size check.
        let _ = Self::MASK;
        ByteQueue {
            buffer: [0; N],
            head: 0,
            tail: 0,
        }
    }

    /// Add a byte.  Returns false, dropping the byte, if the queue is full.
    pub fn put(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.buffer[self.tail & Self::MASK] = byte;
        self.tail = self.tail.wrapping_add(1);
        true
    }

    /// Remove the oldest byte.
    pub fn get(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let byte = self.buffer[self.head & Self::MASK];
        self.head = self.head.wrapping_add(1);
        Some(byte)
    }

    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    pub fn is_full(&self) -> bool {
        self.len() == N
    }

    pub fn len(&self) -> usize {
        self.tail.wrapping_sub(self.head)
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Discard everything queued.  Part of the device reset path.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
    }
}

impl<const N: usize> Default for ByteQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

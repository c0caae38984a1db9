use super::RingError;
use std::fmt;

/// Fixed-capacity FIFO byte queue over a single contiguous allocation.
///
/// `head` is the next slot to be written and `tail` the next slot to be read.
/// Both are kept in `[0, capacity)` by masking with `capacity - 1`.
/// `head == tail` means empty; `head` one behind `tail` means full, so at most
/// `capacity - 1` bytes are ever stored.
pub struct RingBuffer {
    pub(super) buf: Box<[u8]>,
    pub(super) capacity: usize,
    pub(super) mask: usize,
    pub(super) head: usize,
    pub(super) tail: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            log::debug!("rejected ring capacity {}", capacity);
            return Err(RingError::InvalidCapacity {
                capacity,
                reason: "must be non-zero",
            });
        }

        if !capacity.is_power_of_two() {
            log::debug!("rejected ring capacity {}", capacity);
            return Err(RingError::InvalidCapacity {
                capacity,
                reason: "must be a power of two",
            });
        }

        log::debug!("created ring buffer with capacity {}", capacity);

        Ok(Self {
            buf: vec![0; capacity].into_boxed_slice(),
            capacity,
            mask: capacity - 1,
            head: 0,
            tail: 0,
        })
    }

    /// Bytes that can be written before the ring is full.
    #[inline(always)]
    pub fn space(&self) -> usize {
        self.tail.wrapping_sub(self.head).wrapping_sub(1) & self.mask
    }

    /// Bytes currently stored.
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.head.wrapping_sub(self.tail) & self.mask
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.space() == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    #[inline]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Raw backing storage, including slots that hold no live data.
    pub fn storage(&self) -> &[u8] {
        &self.buf
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("space", &self.space())
            .field("count", &self.count())
            .field("buf", &self.buf)
            .finish()
    }
}

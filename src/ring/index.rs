use super::RingBuffer;

impl RingBuffer {
    #[inline(always)]
    pub(super) fn wrap(&self, index: usize) -> usize {
        index & self.mask
    }

    /// Free slots from `head` up to the end of storage, never more than `space()`.
    #[inline]
    pub(super) fn space_to_end(&self) -> usize {
        let linear = self.capacity - self.head;
        let circular = self.wrap(self.tail + linear - 1);
        linear.min(circular)
    }

    /// Occupied slots from `tail` up to the end of storage, never more than
    /// the bytes between `tail` and `head`.
    ///
    /// Takes the tail explicitly so lookahead can walk a local copy without
    /// touching `self.tail`.
    #[inline]
    pub(super) fn count_to_end(&self, tail: usize) -> usize {
        let linear = self.capacity - tail;
        let circular = self.wrap(self.head + linear);
        linear.min(circular)
    }
}

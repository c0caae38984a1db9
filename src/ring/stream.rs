use crate::ring::RingBuffer;

impl RingBuffer {
    /// Copies as much of `input` as fits and returns how many bytes were taken.
    ///
    /// Never overwrites unread data. A short count means the ring is full.
    pub fn write(&mut self, input: &[u8]) -> usize {
        let mut written = 0;

        // At most two passes: up to the end of storage, then from index 0.
        loop {
            let num = self.space_to_end().min(input.len() - written);
            if num == 0 {
                break;
            }

            let start = self.head;
            self.buf[start..start + num].copy_from_slice(&input[written..written + num]);
            self.head = self.wrap(start + num);
            written += num;
        }

        if written < input.len() {
            log::trace!(
                "ring write saturated: accepted {} of {} bytes",
                written,
                input.len()
            );
        }

        written
    }

    /// Moves up to `out.len()` of the oldest bytes into `out`.
    ///
    /// Bytes of `out` past the returned count are left as they were.
    pub fn read(&mut self, out: &mut [u8]) -> usize {
        let (copied, tail) = self.copy_from(self.tail, out);
        self.tail = tail;
        copied
    }

    /// Copies like [`read`](Self::read) but leaves the bytes in the ring.
    pub fn peek(&self, out: &mut [u8]) -> usize {
        let (copied, _) = self.copy_from(self.tail, out);
        copied
    }

    /// Drops up to `len` of the oldest bytes without copying them anywhere.
    pub fn consume(&mut self, len: usize) -> usize {
        let mut consumed = 0;

        loop {
            let num = self.count_to_end(self.tail).min(len - consumed);
            if num == 0 {
                break;
            }

            self.tail = self.wrap(self.tail + num);
            consumed += num;
        }

        if consumed < len {
            log::trace!("ring consume saturated: dropped {} of {} bytes", consumed, len);
        }

        consumed
    }

    /// Appends a single byte, returning `false` if the ring is full.
    #[inline]
    pub fn push(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.buf[self.head] = byte;
        self.head = self.wrap(self.head + 1);
        true
    }

    /// Removes the oldest byte.
    #[inline]
    pub fn pop(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let byte = self.buf[self.tail];
        self.tail = self.wrap(self.tail + 1);
        Some(byte)
    }

    /// The byte `index` positions after the oldest one, if that many are stored.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        if index >= self.count() {
            return None;
        }
        Some(self.buf[self.wrap(self.tail + index)])
    }

    /// Stored bytes as two slices, oldest first. The second is empty unless
    /// the data wraps past the end of storage.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let first = self.count_to_end(self.tail);
        let second = self.count() - first;
        (&self.buf[self.tail..self.tail + first], &self.buf[..second])
    }

    /// Copies stored bytes starting at `tail` into `out` and returns the
    /// number copied along with the tail that would follow them. Never
    /// writes `self.tail`.
    fn copy_from(&self, mut tail: usize, out: &mut [u8]) -> (usize, usize) {
        let mut copied = 0;

        loop {
            let num = self.count_to_end(tail).min(out.len() - copied);
            if num == 0 {
                break;
            }

            out[copied..copied + num].copy_from_slice(&self.buf[tail..tail + num]);
            tail = self.wrap(tail + num);
            copied += num;
        }

        (copied, tail)
    }
}

//! `std::io` adapters.
//!
//! The ring never reports an I/O error. A full ring accepts `Ok(0)` bytes,
//! which `write_all` turns into `ErrorKind::WriteZero`; an empty ring reads
//! `Ok(0)`.

use super::RingBuffer;
use std::io;

impl io::Write for RingBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(RingBuffer::write(self, buf))
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Read for RingBuffer {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(RingBuffer::read(self, buf))
    }
}

impl io::BufRead for RingBuffer {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.as_slices().0)
    }

    fn consume(&mut self, amt: usize) {
        RingBuffer::consume(self, amt);
    }
}

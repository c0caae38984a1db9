pub mod buffer;
mod index;
pub mod io;
pub mod ring_error;
pub mod stream;

pub use buffer::RingBuffer;
pub use ring_error::*;

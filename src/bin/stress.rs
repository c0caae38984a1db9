use circbuf::RingBuffer;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

const HEADER_LEN: usize = 2;
const MAX_PAYLOAD: usize = 1024;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct Config {
    capacity: usize,
    duration: Duration,
}

impl Config {
    fn from_args() -> Result<Self, Box<dyn std::error::Error>> {
        let mut args = std::env::args().skip(1);

        let capacity = match args.next() {
            Some(arg) => arg
                .parse()
                .map_err(|e| format!("invalid capacity {:?}: {}", arg, e))?,
            None => 4096,
        };
        let seconds: u64 = match args.next() {
            Some(arg) => arg
                .parse()
                .map_err(|e| format!("invalid duration {:?}: {}", arg, e))?,
            None => 5,
        };

        Ok(Self {
            capacity,
            duration: Duration::from_secs(seconds),
        })
    }
}

/// Produces length-prefixed frames whose payload bytes are derived from the
/// frame sequence number, so the reader can verify them without a copy.
struct FrameSource {
    seq: u64,
    frame: Vec<u8>,
    offset: usize,
}

impl FrameSource {
    fn new() -> Self {
        let mut source = Self {
            seq: 0,
            frame: Vec::with_capacity(HEADER_LEN + MAX_PAYLOAD),
            offset: 0,
        };
        source.build();
        source
    }

    fn build(&mut self) {
        let len = (self.seq as usize * 31) % MAX_PAYLOAD;
        self.frame.clear();
        self.frame.extend_from_slice(&(len as u16).to_be_bytes());
        self.frame.extend((0..len).map(|i| payload_byte(self.seq, i)));
        self.offset = 0;
    }

    /// Pushes as much of the pending frame as the ring accepts.
    fn feed(&mut self, ring: &mut RingBuffer) -> usize {
        let written = ring.write(&self.frame[self.offset..]);
        self.offset += written;
        if self.offset == self.frame.len() {
            self.seq += 1;
            self.build();
        }
        written
    }
}

fn payload_byte(seq: u64, i: usize) -> u8 {
    (seq as usize).wrapping_add(i) as u8
}

/// Parses every complete frame currently in the ring. Returns the number of
/// frames taken, or an error naming the first corrupted one.
fn drain(ring: &mut RingBuffer, next_seq: &mut u64, payload: &mut [u8]) -> Result<u64, String> {
    let mut frames = 0;

    loop {
        let mut header = [0u8; HEADER_LEN];
        if ring.peek(&mut header) < HEADER_LEN {
            break;
        }

        let len = u16::from_be_bytes(header) as usize;
        if ring.count() < HEADER_LEN + len {
            break;
        }

        ring.consume(HEADER_LEN);
        let read = ring.read(&mut payload[..len]);
        if read != len {
            return Err(format!("frame {}: short read {} of {}", next_seq, read, len));
        }

        if let Some(i) = (0..len).find(|&i| payload[i] != payload_byte(*next_seq, i)) {
            return Err(format!("frame {}: corrupt byte at offset {}", next_seq, i));
        }

        *next_seq += 1;
        frames += 1;
    }

    Ok(frames)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_args()?;

    if config.capacity <= HEADER_LEN + MAX_PAYLOAD {
        return Err(format!(
            "capacity {} cannot hold a {} byte frame",
            config.capacity,
            HEADER_LEN + MAX_PAYLOAD
        )
        .into());
    }

    let mut ring = RingBuffer::new(config.capacity)
        .map_err(|e| format!("Failed to create ring buffer: {}", e))?;

    println!("circbuf framing stress test\n");

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| format!("Failed to set Ctrl+C handler: {}", e))?;

    let mut source = FrameSource::new();
    let mut payload = vec![0u8; MAX_PAYLOAD];
    let mut next_seq = 0u64;
    let mut bytes = 0u64;
    let mut frames = 0u64;

    let start = Instant::now();
    let mut last_report = start;

    log::info!(
        "running for {:?} with capacity {}",
        config.duration,
        config.capacity
    );

    while running.load(Ordering::Relaxed) && start.elapsed() < config.duration {
        bytes += source.feed(&mut ring) as u64;
        frames += drain(&mut ring, &mut next_seq, &mut payload)?;

        if last_report.elapsed() >= Duration::from_secs(1) {
            log::info!(
                "[STATUS] frames={} ring_count={} ring_space={}",
                frames,
                ring.count(),
                ring.space()
            );
            last_report = Instant::now();
        }
    }

    let elapsed = start.elapsed().as_secs_f64();

    println!("\nResults:");
    println!("  Frames verified: {}", frames);
    println!("  Bytes written: {}", bytes);
    println!(
        "  Throughput: {:.2} MB/sec",
        bytes as f64 / elapsed / 1024.0 / 1024.0
    );
    println!("  Left in ring: {} bytes", ring.count());

    Ok(())
}

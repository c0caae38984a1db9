use circbuf::RingBuffer;

const HEADER_LEN: usize = 2;

// Pulls one `u16` big-endian length-prefixed frame, or `None` if it has not
// fully arrived yet.
fn next_frame(ring: &mut RingBuffer) -> Option<Vec<u8>> {
    let mut header = [0u8; HEADER_LEN];
    if ring.peek(&mut header) < HEADER_LEN {
        return None;
    }

    let len = u16::from_be_bytes(header) as usize;
    if ring.count() < HEADER_LEN + len {
        return None;
    }

    ring.consume(HEADER_LEN);
    let mut payload = vec![0u8; len];
    assert_eq!(ring.read(&mut payload), len);
    Some(payload)
}

fn encode(payload: &[u8]) -> Vec<u8> {
    let mut frame = (payload.len() as u16).to_be_bytes().to_vec();
    frame.extend_from_slice(payload);
    frame
}

#[test]
fn frames_are_held_until_complete() {
    let mut ring = RingBuffer::new(64).unwrap();
    let frame = encode(b"hello");

    assert_eq!(ring.write(&frame[..1]), 1);
    assert_eq!(next_frame(&mut ring), None);

    assert_eq!(ring.write(&frame[1..4]), 3);
    assert_eq!(next_frame(&mut ring), None);
    assert_eq!(ring.count(), 4);

    assert_eq!(ring.write(&frame[4..]), 3);
    assert_eq!(next_frame(&mut ring).as_deref(), Some(&b"hello"[..]));
    assert!(ring.is_empty());
}

#[test]
fn byte_at_a_time_stream_through_small_ring() {
    let payloads: Vec<Vec<u8>> = (0..40u8).map(|i| vec![i; (i % 7) as usize]).collect();
    let stream: Vec<u8> = payloads.iter().flat_map(|p| encode(p)).collect();

    let mut ring = RingBuffer::new(16).unwrap();
    let mut received = Vec::new();
    let mut offset = 0;

    while offset < stream.len() {
        let end = (offset + 3).min(stream.len());
        offset += ring.write(&stream[offset..end]);
        while let Some(frame) = next_frame(&mut ring) {
            received.push(frame);
        }
    }

    assert_eq!(received, payloads);
    assert!(ring.is_empty());
    assert_eq!(ring.count() + ring.space(), ring.capacity() - 1);
}

#[test]
fn rejects_bad_capacity() {
    let err = RingBuffer::new(100).unwrap_err();
    assert!(err.to_string().contains("power of two"));
}

#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use widecode::{EncodingBuffer, WIDE_WIDTH};

/// One buffer lifetime: an initial capacity hint and a sequence of chunks,
/// some of which may be garbage the encoder must reject cleanly.
#[derive(Arbitrary, Debug)]
struct Plan {
    initial_capacity: u8,
    chunks: Vec<Vec<u32>>,
}

fuzz_target!(|plan: Plan| {
    let Ok(mut buf) = EncodingBuffer::with_capacity(usize::from(plan.initial_capacity)) else {
        return;
    };
    let mut last_size = buf.buffer_size();

    for chunk in &plan.chunks {
        match buf.encode(chunk) {
            Ok(written) => {
                assert!(written <= buf.buffer_size());
                assert!(written <= chunk.len() * WIDE_WIDTH);
                // Completed scalars only: the written prefix is always
                // valid UTF-8, even with a surrogate half still pending.
                assert!(std::str::from_utf8(&buf.as_bytes()[..written]).is_ok());
            }
            Err(_) => {
                buf.reset();
                assert!(!buf.is_pending());
            }
        }
        // Capacity only ever grows.
        assert!(buf.buffer_size() >= last_size);
        last_size = buf.buffer_size();
    }
});

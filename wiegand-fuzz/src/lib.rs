//! Fuzzing entry points for wiegand-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_raw_bits

use wiegand_core::{encoder::encode_frame, FrameSource, ParityMode};

const MODES: [ParityMode; 4] = [
    ParityMode::None,
    ParityMode::WholeEven,
    ParityMode::WholeOdd,
    ParityMode::Standard,
];

pub fn fuzz_raw_bits(data: &[u8]) {
    use wiegand_core::builder::parse_raw_bits;

    // Any input must parse or fail cleanly
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_raw_bits(s);
    }
}

pub fn fuzz_encode(data: &[u8]) {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(raw) = std::str::from_utf8(rest) else {
        return;
    };

    let parity = MODES[usize::from(selector) % MODES.len()];
    let frame_bits = Some(usize::from(selector));

    // Encoding either succeeds with a consistent length or fails, never panics
    if let Ok(frame) = encode_frame(&FrameSource::Raw(raw.to_string()), parity, frame_bits) {
        assert_eq!(frame.len(), frame.data.len() + parity.overhead());
    }
}

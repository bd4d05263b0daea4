//! Parity policies

use crate::bits::{count_ones, Bit, BitSequence};
use crate::error::WiegandError;
use crate::types::ParityMode;

/// Turn data bits into frame bits under `mode`
///
/// - `None` copies the data.
/// - `WholeEven`/`WholeOdd` append one bit so the 1-count of the whole frame
///   is even/odd.
/// - `Standard` splits the data into `n/2` leading and `n - n/2` trailing
///   bits. A leading bit gives the first half odd parity and a trailing bit
///   gives the second half even parity.
pub fn apply_parity(data: &BitSequence, mode: ParityMode) -> Result<BitSequence, WiegandError> {
    let mut frame = BitSequence::frame();

    match mode {
        ParityMode::None => {
            frame.extend_from_slice(data.as_slice())?;
        }
        ParityMode::WholeEven | ParityMode::WholeOdd => {
            let ones_odd = data.count_ones() % 2 == 1;
            let want_odd = mode == ParityMode::WholeOdd;
            frame.extend_from_slice(data.as_slice())?;
            frame.push(Bit::from(ones_odd != want_odd))?;
        }
        ParityMode::Standard => {
            let (left, right) = data.as_slice().split_at(data.len() / 2);
            frame.push(odd_parity_bit(left))?;
            frame.extend_from_slice(data.as_slice())?;
            frame.push(even_parity_bit(right))?;
        }
    }

    Ok(frame)
}

/// Bit that makes `block` plus the bit contain an odd number of ones
pub fn odd_parity_bit(block: &[Bit]) -> Bit {
    Bit::from(count_ones(block) % 2 == 0)
}

/// Bit that makes `block` plus the bit contain an even number of ones
pub fn even_parity_bit(block: &[Bit]) -> Bit {
    Bit::from(count_ones(block) % 2 == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::parse_raw_bits;

    fn bits(s: &str) -> BitSequence {
        parse_raw_bits(s).unwrap()
    }

    #[test]
    fn test_none_is_identity() {
        let data = bits("1011");
        assert_eq!(apply_parity(&data, ParityMode::None).unwrap().as_slice(), data.as_slice());
    }

    #[test]
    fn test_whole_even_and_odd() {
        let even = apply_parity(&bits("1011"), ParityMode::WholeEven).unwrap();
        assert_eq!(even.to_string(), "10111");
        assert_eq!(even.count_ones() % 2, 0);

        let odd = apply_parity(&bits("1011"), ParityMode::WholeOdd).unwrap();
        assert_eq!(odd.to_string(), "10110");
        assert_eq!(odd.count_ones() % 2, 1);
    }

    #[test]
    fn test_standard_26_bit() {
        // facility 5, card 1234
        let data = bits("000001010000010011010010");
        let frame = apply_parity(&data, ParityMode::Standard).unwrap();
        assert_eq!(frame.len(), 26);
        // left half 000001010000 has two ones -> leading 1
        // right half 010011010010 has five ones -> trailing 1
        assert_eq!(frame.to_string(), "10000010100000100110100101");
    }

    #[test]
    fn test_standard_odd_length_split() {
        // left = "1", right = "10"
        let frame = apply_parity(&bits("110"), ParityMode::Standard).unwrap();
        assert_eq!(frame.to_string(), "01101");
    }

    #[test]
    fn test_standard_empty() {
        let frame = apply_parity(&BitSequence::data(), ParityMode::Standard).unwrap();
        assert_eq!(frame.to_string(), "10");
    }
}

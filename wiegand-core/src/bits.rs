//! Bit and bounded bit sequence types

use crate::constants::{MAX_DATA_BITS, MAX_FRAME_BITS};
use crate::error::WiegandError;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A single transmitted bit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bit {
    /// Sent as a pulse on the D0 line
    Zero,
    /// Sent as a pulse on the D1 line
    One,
}

impl Bit {
    /// Returns true for `Bit::One`
    pub const fn is_one(self) -> bool {
        matches!(self, Bit::One)
    }

    /// Numeric value of the bit
    pub const fn as_u8(self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_one() { "1" } else { "0" })
    }
}

/// Ordered bit sequence with an enforced maximum length
///
/// The first element is the first bit on the wire. Growing past the
/// capacity is an error rather than a reallocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSequence {
    bits: Vec<Bit>,
    capacity: usize,
}

impl BitSequence {
    /// Create an empty sequence bounded by `capacity`
    pub fn with_limit(capacity: usize) -> Self {
        Self {
            bits: Vec::new(),
            capacity,
        }
    }

    /// Empty sequence sized for unparitized data bits
    pub fn data() -> Self {
        Self::with_limit(MAX_DATA_BITS)
    }

    /// Empty sequence sized for a complete frame
    pub fn frame() -> Self {
        Self::with_limit(MAX_FRAME_BITS)
    }

    /// Build a sequence from existing bits, checking the capacity
    pub fn from_bits(bits: &[Bit], capacity: usize) -> Result<Self, WiegandError> {
        let mut seq = Self::with_limit(capacity);
        seq.extend_from_slice(bits)?;
        Ok(seq)
    }

    /// Append one bit
    pub fn push(&mut self, bit: Bit) -> Result<(), WiegandError> {
        self.reserve_for(1)?;
        self.bits.push(bit);
        Ok(())
    }

    /// Append several bits
    pub fn extend_from_slice(&mut self, bits: &[Bit]) -> Result<(), WiegandError> {
        self.reserve_for(bits.len())?;
        self.bits.extend_from_slice(bits);
        Ok(())
    }

    /// Append the low `width` bits of `value`, most significant first
    pub fn push_msb_first(&mut self, value: u64, width: u32) -> Result<(), WiegandError> {
        self.reserve_for(width as usize)?;
        for shift in (0..width).rev() {
            let set = shift < u64::BITS && (value >> shift) & 1 == 1;
            self.bits.push(Bit::from(set));
        }
        Ok(())
    }

    /// Prefix zero bits until the sequence is `len` bits long
    pub fn left_pad_to(&mut self, len: usize) -> Result<(), WiegandError> {
        if len <= self.bits.len() {
            return Ok(());
        }
        if len > self.capacity {
            return Err(WiegandError::CapacityExceeded {
                len,
                capacity: self.capacity,
            });
        }
        let pad = len - self.bits.len();
        self.bits.splice(0..0, core::iter::repeat(Bit::Zero).take(pad));
        Ok(())
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when no bits are present
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Maximum number of bits this sequence may hold
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of `Bit::One` entries
    pub fn count_ones(&self) -> usize {
        count_ones(&self.bits)
    }

    /// Borrow the bits in transmission order
    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }

    /// Iterate the bits in transmission order
    pub fn iter(&self) -> core::slice::Iter<'_, Bit> {
        self.bits.iter()
    }

    fn reserve_for(&self, additional: usize) -> Result<(), WiegandError> {
        let len = self.bits.len().saturating_add(additional);
        if len > self.capacity {
            return Err(WiegandError::CapacityExceeded {
                len,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = &'a Bit;
    type IntoIter = core::slice::Iter<'a, Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}

/// Renders as a string of `0` and `1` characters
impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            fmt::Display::fmt(bit, f)?;
        }
        Ok(())
    }
}

impl Serialize for BitSequence {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Count the `Bit::One` entries of a slice
pub fn count_ones(bits: &[Bit]) -> usize {
    bits.iter().filter(|b| b.is_one()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_msb_first() {
        let mut seq = BitSequence::data();
        seq.push_msb_first(5, 8).unwrap();
        assert_eq!(seq.to_string(), "00000101");
    }

    #[test]
    fn test_push_full_width_u64() {
        let mut seq = BitSequence::data();
        seq.push_msb_first(u64::MAX, 64).unwrap();
        assert_eq!(seq.len(), 64);
        assert_eq!(seq.count_ones(), 64);
    }

    #[test]
    fn test_capacity_enforced() {
        let mut seq = BitSequence::with_limit(3);
        seq.extend_from_slice(&[Bit::One, Bit::Zero, Bit::One]).unwrap();
        let err = seq.push(Bit::One).unwrap_err();
        assert_eq!(err, WiegandError::CapacityExceeded { len: 4, capacity: 3 });
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_left_pad() {
        let mut seq = BitSequence::from_bits(&[Bit::One, Bit::One], 8).unwrap();
        seq.left_pad_to(5).unwrap();
        assert_eq!(seq.to_string(), "00011");

        assert!(seq.left_pad_to(9).is_err());
    }
}

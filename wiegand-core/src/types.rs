//! Core types for Wiegand frames

use crate::bits::BitSequence;
use crate::error::WiegandError;
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Bit widths of the facility and card fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWidths {
    /// Width of the facility code in bits
    pub facility_bits: u32,
    /// Width of the card code in bits
    pub card_bits: u32,
}

impl FieldWidths {
    /// Create explicit field widths
    pub const fn new(facility_bits: u32, card_bits: u32) -> Self {
        Self {
            facility_bits,
            card_bits,
        }
    }

    /// Number of data bits these widths produce
    pub const fn data_bits(&self) -> usize {
        self.facility_bits as usize + self.card_bits as usize
    }
}

/// Named credential layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormatPreset {
    /// 26-bit: 8-bit facility, 16-bit card
    W26,
    /// 34-bit: 16-bit facility, 16-bit card
    W34,
    /// 35-bit: 19-bit facility, 16-bit card
    W35,
    /// 37-bit: 18-bit facility, 16-bit card
    W37,
    /// 48-bit: 16-bit facility, 30-bit card
    W48,
}

impl FormatPreset {
    /// Look up a preset by its format identifier
    pub fn from_id(id: u32) -> Result<Self, WiegandError> {
        match id {
            26 => Ok(FormatPreset::W26),
            34 => Ok(FormatPreset::W34),
            35 => Ok(FormatPreset::W35),
            37 => Ok(FormatPreset::W37),
            48 => Ok(FormatPreset::W48),
            other => Err(WiegandError::UnsupportedFormat(other)),
        }
    }

    /// The format identifier
    pub const fn id(&self) -> u32 {
        match self {
            FormatPreset::W26 => 26,
            FormatPreset::W34 => 34,
            FormatPreset::W35 => 35,
            FormatPreset::W37 => 37,
            FormatPreset::W48 => 48,
        }
    }

    /// Facility and card widths for this format
    pub const fn widths(&self) -> FieldWidths {
        match self {
            FormatPreset::W26 => FieldWidths::new(8, 16),
            FormatPreset::W34 => FieldWidths::new(16, 16),
            FormatPreset::W35 => FieldWidths::new(19, 16),
            FormatPreset::W37 => FieldWidths::new(18, 16),
            FormatPreset::W48 => FieldWidths::new(16, 30),
        }
    }
}

/// Parity policy applied to the data bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParityMode {
    /// Frame equals the data bits
    None,
    /// One trailing bit making the whole frame's 1-count even
    WholeEven,
    /// One trailing bit making the whole frame's 1-count odd
    WholeOdd,
    /// Leading odd parity over the first half, trailing even parity over the second half
    #[default]
    #[serde(rename = "std")]
    Standard,
}

impl ParityMode {
    /// Name used on the command line
    pub const fn as_str(&self) -> &'static str {
        match self {
            ParityMode::None => "none",
            ParityMode::WholeEven => "whole-even",
            ParityMode::WholeOdd => "whole-odd",
            ParityMode::Standard => "std",
        }
    }

    /// Number of bits this mode adds to the data
    pub const fn overhead(&self) -> usize {
        match self {
            ParityMode::None => 0,
            ParityMode::WholeEven | ParityMode::WholeOdd => 1,
            ParityMode::Standard => 2,
        }
    }
}

impl FromStr for ParityMode {
    type Err = WiegandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "std" => Ok(ParityMode::Standard),
            "none" => Ok(ParityMode::None),
            "whole-even" => Ok(ParityMode::WholeEven),
            "whole-odd" => Ok(ParityMode::WholeOdd),
            other => Err(WiegandError::InvalidParity(other.to_string())),
        }
    }
}

impl fmt::Display for ParityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully encoded frame ready for transmission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WiegandFrame {
    /// Parity policy that produced `bits`
    pub parity: ParityMode,

    /// Data bits before parity
    pub data: BitSequence,

    /// Frame bits in transmission order
    pub bits: BitSequence,
}

impl WiegandFrame {
    /// Number of bits on the wire
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the frame carries no bits
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Check the frame against an expected length, if one was given
    pub fn validate_length(&self, expected: Option<usize>) -> Result<(), WiegandError> {
        match expected {
            Some(expected) if expected != self.bits.len() => {
                Err(WiegandError::FrameLengthMismatch {
                    expected,
                    actual: self.bits.len(),
                })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for WiegandFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.bits, f)
    }
}

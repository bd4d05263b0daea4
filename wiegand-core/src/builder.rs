//! Data-bit construction
//!
//! Data bits come either from a raw literal (`0x` hex or a `0`/`1` string)
//! or from facility and card codes laid out under a format. Parity is not
//! applied here; see [`crate::parity`].

use crate::bits::{Bit, BitSequence};
use crate::config::{FieldSpec, FrameSource};
use crate::constants::MAX_DATA_BITS;
use crate::error::WiegandError;
use crate::types::{FieldWidths, ParityMode};
use alloc::format;
use alloc::string::ToString;

#[cfg(feature = "logging")]
use tracing::debug;

/// Parse a raw bit literal
///
/// `0x`/`0X` prefixed input is hex, each digit expanding to four bits,
/// most significant first. Anything else must consist of `0` and `1`, with
/// spaces and underscores ignored. No padding is applied.
pub fn parse_raw_bits(raw: &str) -> Result<BitSequence, WiegandError> {
    let mut bits = BitSequence::data();

    if let Some(hex) = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        if hex.is_empty() {
            return Err(WiegandError::RawBits("empty hex".to_string()));
        }
        for ch in hex.chars() {
            let v = ch
                .to_digit(16)
                .ok_or_else(|| WiegandError::RawBits(format!("bad hex digit {ch:?}")))?;
            bits.push_msb_first(u64::from(v), 4)?;
        }
    } else {
        for ch in raw.chars() {
            match ch {
                '0' => bits.push(Bit::Zero)?,
                '1' => bits.push(Bit::One)?,
                ' ' | '_' => continue,
                other => {
                    return Err(WiegandError::RawBits(format!("invalid char {other:?}")));
                }
            }
        }
    }

    Ok(bits)
}

/// Lay out facility then card, each most significant bit first
pub fn compose_fields(
    facility: u64,
    card: u64,
    widths: FieldWidths,
) -> Result<BitSequence, WiegandError> {
    check_fits("facility", facility, widths.facility_bits)?;
    check_fits("card", card, widths.card_bits)?;

    let total = widths.data_bits();
    if total > MAX_DATA_BITS {
        return Err(WiegandError::CapacityExceeded {
            len: total,
            capacity: MAX_DATA_BITS,
        });
    }

    let mut bits = BitSequence::data();
    bits.push_msb_first(facility, widths.facility_bits)?;
    bits.push_msb_first(card, widths.card_bits)?;
    Ok(bits)
}

/// Build the data bits for a frame source
///
/// In field mode with parity `None`, an expected frame length longer than
/// the composed fields left-pads the data with zeros.
pub fn build_data_bits(
    source: &FrameSource,
    parity: ParityMode,
    frame_bits: Option<usize>,
) -> Result<BitSequence, WiegandError> {
    match source {
        FrameSource::Raw(raw) => {
            let bits = parse_raw_bits(raw)?;
            #[cfg(feature = "logging")]
            debug!("Parsed {} raw data bits", bits.len());
            Ok(bits)
        }
        FrameSource::Fields(spec) => build_field_bits(spec, parity, frame_bits),
    }
}

fn build_field_bits(
    spec: &FieldSpec,
    parity: ParityMode,
    frame_bits: Option<usize>,
) -> Result<BitSequence, WiegandError> {
    let widths = spec.resolve_widths()?;
    let mut bits = compose_fields(spec.facility, spec.card, widths)?;

    #[cfg(feature = "logging")]
    debug!(
        "Composed facility {} ({} bits) and card {} ({} bits)",
        spec.facility, widths.facility_bits, spec.card, widths.card_bits
    );

    if parity == ParityMode::None {
        if let Some(expected) = frame_bits.filter(|&n| n > 0) {
            if expected < bits.len() {
                return Err(WiegandError::FrameBitsTooSmall {
                    expected,
                    data_bits: bits.len(),
                });
            }
            bits.left_pad_to(expected)?;
        }
    }

    Ok(bits)
}

fn check_fits(field: &'static str, value: u64, bits: u32) -> Result<(), WiegandError> {
    if bits < u64::BITS && value >> bits != 0 {
        return Err(WiegandError::FieldOverflow { field, value, bits });
    }
    Ok(())
}

//! Frame encoding
//!
//! Runs the full pipeline: data bits from the source, parity, then the
//! optional length check. Nothing here touches hardware, so a frame that
//! comes back `Ok` is safe to hand to the transmitter.

use crate::builder::build_data_bits;
use crate::config::{FrameSource, TxConfig};
use crate::error::WiegandError;
use crate::parity::apply_parity;
use crate::types::{ParityMode, WiegandFrame};

#[cfg(feature = "logging")]
use tracing::debug;

/// Encode a frame from a source, parity policy and optional expected length
pub fn encode_frame(
    source: &FrameSource,
    parity: ParityMode,
    frame_bits: Option<usize>,
) -> Result<WiegandFrame, WiegandError> {
    let data = build_data_bits(source, parity, frame_bits)?;
    let bits = apply_parity(&data, parity)?;

    let frame = WiegandFrame { parity, data, bits };
    frame.validate_length(frame_bits.filter(|&n| n > 0))?;

    #[cfg(feature = "logging")]
    debug!(
        "Encoded {}-bit frame ({} data bits, parity {})",
        frame.len(),
        frame.data.len(),
        parity
    );

    Ok(frame)
}

/// Encode the frame described by a validated configuration
pub fn encode_config(config: &TxConfig) -> Result<WiegandFrame, WiegandError> {
    encode_frame(&config.source, config.parity, config.frame_bits)
}

use anyhow::Result;
use tracing::info;
use wiegand_core::encoder::encode_config;
use wiegand_core::transmit::{PulseTransmitter, StdDelay, TxReport};
use wiegand_core::TxConfig;

use crate::gpio::GpioLines;

/// Encode the configured frame and pulse it out on the GPIO lines
///
/// The configuration is validated and the frame fully encoded and checked
/// before the chip is opened.
pub fn execute(config: &TxConfig) -> Result<TxReport> {
    config.validate()?;
    let frame = encode_config(config)?;

    info!(
        "Sending {}-bit frame ({} parity) on {} d0={} d1={}",
        frame.len(),
        frame.parity,
        config.chip,
        config.lines.d0,
        config.lines.d1
    );

    let lines = GpioLines::open(&config.chip, config.lines)?;
    let report =
        PulseTransmitter::new(lines, StdDelay, config.lines, config.timing).transmit(&frame)?;

    info!("Sent {} pulses (~{} us)", report.pulses, report.nominal_us);

    Ok(report)
}

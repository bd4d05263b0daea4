use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;
use tracing::info;
use wiegand_core::encoder::encode_config;
use wiegand_core::{ParityMode, TxConfig, WiegandFrame};

/// What a dry run reports about an encoded frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub parity: ParityMode,
    pub length: usize,
    pub data_bits: String,
    pub frame_bits: String,
}

impl Preview {
    pub fn from_frame(frame: &WiegandFrame) -> Self {
        Self {
            parity: frame.parity,
            length: frame.len(),
            data_bits: frame.data.to_string(),
            frame_bits: frame.bits.to_string(),
        }
    }
}

/// Encode the configured frame and print it instead of transmitting
pub fn execute(config: &TxConfig, json: bool) -> Result<Preview> {
    let frame = encode_config(config)?;
    let preview = Preview::from_frame(&frame);

    info!(
        "Dry run: {}-bit frame for lines d0={} d1={} on {}",
        preview.length, config.lines.d0, config.lines.d1, config.chip
    );

    if json {
        let out = serde_json::to_string_pretty(&preview)
            .with_context(|| "Failed to serialize preview")?;
        println!("{}", out);
    } else {
        println!("Parity:     {}", preview.parity);
        println!("Length:     {}", preview.length);
        println!("Data bits:  {}", preview.data_bits);
        println!("Frame bits: {}", preview.frame_bits.green());
    }

    Ok(preview)
}

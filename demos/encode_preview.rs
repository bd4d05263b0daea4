//! Encode a 26-bit credential and print the frame without touching hardware
//!
//! Run with: cargo run --example encode_preview -p wiegand-core

use wiegand_core::{encoder::encode_config, TxConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TxConfig::builder()
        .d0(17)
        .d1(27)
        .format(26)
        .facility(5)
        .card(1234)
        .build()?;

    let frame = encode_config(&config)?;

    println!("Parity:     {}", frame.parity);
    println!("Data bits:  {} ({})", frame.data, frame.data.len());
    println!("Frame bits: {} ({})", frame, frame.len());

    Ok(())
}

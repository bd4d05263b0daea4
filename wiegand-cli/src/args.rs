//! Command-line arguments and their conversion into a [`TxConfig`]

use clap::{Args, Parser};
use tracing::debug;
use wiegand_core::constants::{DEFAULT_CHIP, DEFAULT_FORMAT, DEFAULT_PULSE_US, DEFAULT_SPACE_US};
use wiegand_core::{FieldWidths, ParityMode, TxConfig, WiegandError};

#[derive(Parser, Debug)]
#[command(name = "wiegand-tx")]
#[command(about = "Send a Wiegand frame on two GPIO lines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Encode and print the frame without opening the GPIO device
    #[arg(long)]
    pub dry_run: bool,

    /// With --dry-run, print the frame as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    #[command(flatten)]
    pub tx: TxArgs,
}

/// Frame and line options
#[derive(Args, Debug, Clone)]
pub struct TxArgs {
    /// GPIO chip name (e.g. gpiochip0) or device path
    #[arg(long, default_value = DEFAULT_CHIP)]
    pub chip: String,

    /// Line offset pulsed for 0 bits
    #[arg(long)]
    pub d0: u32,

    /// Line offset pulsed for 1 bits
    #[arg(long)]
    pub d1: u32,

    /// Credential format: 26, 34, 35, 37 or 48
    #[arg(long, default_value_t = DEFAULT_FORMAT)]
    pub format: u32,

    /// Facility code (decimal or 0x hex)
    #[arg(long, default_value = "0", value_parser = parse_number)]
    pub facility: u64,

    /// Card code (decimal or 0x hex)
    #[arg(long, default_value = "0", value_parser = parse_number)]
    pub card: u64,

    /// Facility width in bits, overriding the format (needs --card-bits)
    #[arg(long)]
    pub facility_bits: Option<u32>,

    /// Card width in bits, overriding the format (needs --facility-bits)
    #[arg(long)]
    pub card_bits: Option<u32>,

    /// Raw bit pattern, 0xHEX or 1010..; overrides format and fields
    #[arg(long)]
    pub raw_bits: Option<String>,

    /// Expected total frame length in bits
    #[arg(long)]
    pub frame_bits: Option<usize>,

    /// Parity: std, none, whole-even or whole-odd
    #[arg(long, default_value = "std")]
    pub parity: ParityMode,

    /// Pulse width in microseconds
    #[arg(long, default_value_t = DEFAULT_PULSE_US)]
    pub pulse_us: u32,

    /// Spacing after each pulse in microseconds
    #[arg(long, default_value_t = DEFAULT_SPACE_US)]
    pub space_us: u32,
}

impl TxArgs {
    /// Build and validate the transmission configuration
    pub fn to_config(&self) -> Result<TxConfig, WiegandError> {
        let mut builder = TxConfig::builder()
            .chip(self.chip.as_str())
            .d0(self.d0)
            .d1(self.d1)
            .format(self.format)
            .facility(self.facility)
            .card(self.card)
            .parity(self.parity)
            .pulse_us(self.pulse_us)
            .space_us(self.space_us);

        match (self.facility_bits, self.card_bits) {
            (Some(fb), Some(cb)) => builder = builder.widths(FieldWidths::new(fb, cb)),
            (None, None) => {}
            _ => debug!("--facility-bits and --card-bits must be given together; using format preset"),
        }

        if let Some(raw) = &self.raw_bits {
            builder = builder.raw_bits(raw.as_str());
        }

        if let Some(n) = self.frame_bits {
            builder = builder.frame_bits(n);
        }

        builder.build()
    }
}

/// Parse a decimal or `0x` hexadecimal unsigned integer
pub fn parse_number(s: &str) -> Result<u64, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid number {s:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1234"), Ok(1234));
        assert_eq!(parse_number("0x1F"), Ok(31));
        assert_eq!(parse_number("0XfF"), Ok(255));
        assert!(parse_number("-1").is_err());
        assert!(parse_number("0xZZ").is_err());
    }
}

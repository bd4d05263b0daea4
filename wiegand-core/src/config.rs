//! Transmission configuration and its validation

use crate::constants::{
    DEFAULT_CHIP, DEFAULT_FORMAT, DEFAULT_PULSE_US, DEFAULT_SPACE_US, MAX_PULSE_US, MIN_PULSE_US,
};
use crate::error::WiegandError;
use crate::types::{FieldWidths, FormatPreset, ParityMode};
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

/// The two output lines, by GPIO offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinePair {
    /// Line pulsed for a 0 bit
    pub d0: u32,
    /// Line pulsed for a 1 bit
    pub d1: u32,
}

impl LinePair {
    /// Pair two distinct line offsets
    pub fn new(d0: u32, d1: u32) -> Result<Self, WiegandError> {
        if d0 == d1 {
            return Err(WiegandError::SameLine(d0));
        }
        Ok(Self { d0, d1 })
    }
}

/// Pulse width and spacing in microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseTiming {
    /// Time a line is held low for one bit
    pub pulse_us: u32,
    /// Time both lines are held high after each pulse
    pub space_us: u32,
}

impl PulseTiming {
    /// Create validated timing
    pub fn new(pulse_us: u32, space_us: u32) -> Result<Self, WiegandError> {
        let timing = Self { pulse_us, space_us };
        timing.validate()?;
        Ok(timing)
    }

    /// Check the pulse range and that spacing is not shorter than the pulse
    pub fn validate(&self) -> Result<(), WiegandError> {
        if !(MIN_PULSE_US..=MAX_PULSE_US).contains(&self.pulse_us) {
            return Err(WiegandError::PulseOutOfRange {
                value: self.pulse_us,
                min: MIN_PULSE_US,
                max: MAX_PULSE_US,
            });
        }
        if self.space_us < self.pulse_us {
            return Err(WiegandError::SpacingTooShort {
                pulse_us: self.pulse_us,
                space_us: self.space_us,
            });
        }
        Ok(())
    }
}

impl Default for PulseTiming {
    fn default() -> Self {
        Self {
            pulse_us: DEFAULT_PULSE_US,
            space_us: DEFAULT_SPACE_US,
        }
    }
}

/// Facility/card input under a format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Format identifier used when no explicit widths are given
    pub format: u32,
    /// Explicit widths overriding the format preset
    pub widths: Option<FieldWidths>,
    /// Facility code
    pub facility: u64,
    /// Card code
    pub card: u64,
}

impl FieldSpec {
    /// Facility/card values under a format preset
    pub fn new(format: u32, facility: u64, card: u64) -> Self {
        Self {
            format,
            widths: None,
            facility,
            card,
        }
    }

    /// Override the preset widths
    pub fn with_widths(mut self, widths: FieldWidths) -> Self {
        self.widths = Some(widths);
        self
    }

    /// Explicit widths if given, otherwise the format preset
    pub fn resolve_widths(&self) -> Result<FieldWidths, WiegandError> {
        match self.widths {
            Some(widths) => Ok(widths),
            None => Ok(FormatPreset::from_id(self.format)?.widths()),
        }
    }
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT, 0, 0)
    }
}

/// Where the data bits come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameSource {
    /// Literal bit pattern, hex (`0x..`) or binary
    Raw(String),
    /// Facility and card codes
    Fields(FieldSpec),
}

impl Default for FrameSource {
    fn default() -> Self {
        FrameSource::Fields(FieldSpec::default())
    }
}

/// Everything needed for one encode-and-transmit run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxConfig {
    /// GPIO chip identifier
    pub chip: String,
    /// Output lines
    pub lines: LinePair,
    /// Data bit source
    pub source: FrameSource,
    /// Parity policy
    pub parity: ParityMode,
    /// Expected total frame length, if any
    pub frame_bits: Option<usize>,
    /// Pulse timing
    pub timing: PulseTiming,
}

impl TxConfig {
    /// Start building a configuration
    pub fn builder() -> TxConfigBuilder {
        TxConfigBuilder::default()
    }

    /// Re-run the checks performed by [`TxConfigBuilder::build`]
    ///
    /// Needed for configurations that did not come from the builder, such as
    /// deserialized or hand-assembled ones.
    pub fn validate(&self) -> Result<(), WiegandError> {
        LinePair::new(self.lines.d0, self.lines.d1)?;
        self.timing.validate()
    }
}

/// Builder for [`TxConfig`]
///
/// `build` validates line offsets and timing before anything is encoded.
#[derive(Debug, Clone, Default)]
pub struct TxConfigBuilder {
    chip: Option<String>,
    d0: Option<u32>,
    d1: Option<u32>,
    fields: FieldSpec,
    raw_bits: Option<String>,
    parity: ParityMode,
    frame_bits: Option<usize>,
    timing: PulseTiming,
}

impl TxConfigBuilder {
    /// Set the GPIO chip identifier
    pub fn chip(mut self, chip: impl Into<String>) -> Self {
        self.chip = Some(chip.into());
        self
    }

    /// Set the line pulsed for 0 bits
    pub fn d0(mut self, offset: u32) -> Self {
        self.d0 = Some(offset);
        self
    }

    /// Set the line pulsed for 1 bits
    pub fn d1(mut self, offset: u32) -> Self {
        self.d1 = Some(offset);
        self
    }

    /// Set the format identifier
    pub fn format(mut self, format: u32) -> Self {
        self.fields.format = format;
        self
    }

    /// Set the facility code
    pub fn facility(mut self, facility: u64) -> Self {
        self.fields.facility = facility;
        self
    }

    /// Set the card code
    pub fn card(mut self, card: u64) -> Self {
        self.fields.card = card;
        self
    }

    /// Override the preset widths
    pub fn widths(mut self, widths: FieldWidths) -> Self {
        self.fields.widths = Some(widths);
        self
    }

    /// Use a raw bit literal; field settings are then ignored
    pub fn raw_bits(mut self, raw: impl Into<String>) -> Self {
        self.raw_bits = Some(raw.into());
        self
    }

    /// Set the parity policy
    pub fn parity(mut self, parity: ParityMode) -> Self {
        self.parity = parity;
        self
    }

    /// Require the encoded frame to have exactly this many bits
    pub fn frame_bits(mut self, frame_bits: usize) -> Self {
        self.frame_bits = Some(frame_bits);
        self
    }

    /// Set the pulse width
    pub fn pulse_us(mut self, pulse_us: u32) -> Self {
        self.timing.pulse_us = pulse_us;
        self
    }

    /// Set the spacing after each pulse
    pub fn space_us(mut self, space_us: u32) -> Self {
        self.timing.space_us = space_us;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<TxConfig, WiegandError> {
        let d0 = self.d0.ok_or(WiegandError::MissingLine("d0"))?;
        let d1 = self.d1.ok_or(WiegandError::MissingLine("d1"))?;
        let lines = LinePair::new(d0, d1)?;
        self.timing.validate()?;

        let source = match self.raw_bits {
            Some(raw) => FrameSource::Raw(raw),
            None => FrameSource::Fields(self.fields),
        };

        Ok(TxConfig {
            chip: self.chip.unwrap_or_else(|| DEFAULT_CHIP.to_string()),
            lines,
            source,
            parity: self.parity,
            frame_bits: self.frame_bits,
            timing: self.timing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let cfg = TxConfig::builder().d0(17).d1(27).build().unwrap();
        assert_eq!(cfg.chip, "gpiochip0");
        assert_eq!(cfg.parity, ParityMode::Standard);
        assert_eq!(cfg.timing, PulseTiming::new(50, 1000).unwrap());
        assert_eq!(cfg.source, FrameSource::Fields(FieldSpec::new(26, 0, 0)));
        assert_eq!(cfg.frame_bits, None);
    }

    #[test]
    fn test_missing_lines() {
        assert_eq!(
            TxConfig::builder().d1(3).build(),
            Err(WiegandError::MissingLine("d0"))
        );
        assert_eq!(
            TxConfig::builder().d0(3).build(),
            Err(WiegandError::MissingLine("d1"))
        );
    }

    #[test]
    fn test_same_line_rejected() {
        assert_eq!(
            TxConfig::builder().d0(4).d1(4).build(),
            Err(WiegandError::SameLine(4))
        );
    }

    #[test]
    fn test_pulse_bounds() {
        assert!(PulseTiming::new(10, 1000).is_err());
        assert!(PulseTiming::new(19, 1000).is_err());
        assert!(PulseTiming::new(20, 20).is_ok());
        assert!(PulseTiming::new(5000, 5000).is_ok());
        assert!(PulseTiming::new(5001, 6000).is_err());
    }

    #[test]
    fn test_spacing_shorter_than_pulse() {
        assert_eq!(
            PulseTiming::new(100, 99),
            Err(WiegandError::SpacingTooShort {
                pulse_us: 100,
                space_us: 99
            })
        );
    }

    #[test]
    fn test_validate_catches_modified_config() {
        let cfg = TxConfig::builder().d0(1).d1(2).build().unwrap();
        assert_eq!(cfg.validate(), Ok(()));

        let mut same = cfg.clone();
        same.lines = LinePair { d0: 6, d1: 6 };
        assert_eq!(same.validate(), Err(WiegandError::SameLine(6)));

        let mut fast = cfg;
        fast.timing.pulse_us = 10;
        assert!(matches!(
            fast.validate(),
            Err(WiegandError::PulseOutOfRange { value: 10, .. })
        ));
    }

    #[test]
    fn test_raw_bits_take_precedence() {
        let cfg = TxConfig::builder()
            .d0(1)
            .d1(2)
            .format(99)
            .facility(1 << 40)
            .raw_bits("0xA5")
            .build()
            .unwrap();
        assert_eq!(cfg.source, FrameSource::Raw("0xA5".into()));
    }
}

//! GPIO character-device line control

use std::path::PathBuf;

use gpiocdev::line::{Value, Values};
use gpiocdev::{Chip, Request};
use tracing::debug;
use wiegand_core::constants::LINE_CONSUMER;
use wiegand_core::transmit::{Level, LineControl};
use wiegand_core::{LinePair, WiegandError};

/// Both Wiegand output lines, requested as outputs driven high
pub struct GpioLines {
    request: Request,
    pair: LinePair,
}

impl GpioLines {
    /// Open the chip and take exclusive ownership of the D0/D1 lines
    pub fn open(chip: &str, pair: LinePair) -> Result<Self, WiegandError> {
        let path = chip_path(chip);

        Chip::from_path(&path).map_err(|e| WiegandError::line("open gpiochip", e))?;

        let request = Request::builder()
            .on_chip(&path)
            .with_consumer(LINE_CONSUMER)
            .with_lines(&[pair.d0, pair.d1])
            .as_output(Value::Active)
            .request()
            .map_err(|e| {
                WiegandError::line("request lines (permissions or busy?)", e)
            })?;

        debug!(
            "Requested lines {} and {} on {}",
            pair.d0,
            pair.d1,
            path.display()
        );

        Ok(Self { request, pair })
    }
}

impl LineControl for GpioLines {
    fn set_line(&mut self, offset: u32, level: Level) -> Result<(), WiegandError> {
        self.request
            .set_value(offset, value(level))
            .map_err(|e| match level {
                Level::Low => WiegandError::line("set low", e),
                Level::High => WiegandError::line("set high", e),
            })
    }

    fn set_both(&mut self, level: Level) -> Result<(), WiegandError> {
        let mut values = Values::default();
        values.set(self.pair.d0, value(level));
        values.set(self.pair.d1, value(level));
        self.request
            .set_values(&values)
            .map_err(|e| WiegandError::line("set both lines", e))
    }

    fn release(self) -> Result<(), WiegandError> {
        // lines are returned to the kernel when the request is dropped
        drop(self.request);
        debug!("Released lines {} and {}", self.pair.d0, self.pair.d1);
        Ok(())
    }
}

fn value(level: Level) -> Value {
    match level {
        Level::Low => Value::Inactive,
        Level::High => Value::Active,
    }
}

/// Resolve a chip identifier to its device path
///
/// Bare names live under `/dev`; absolute paths are used as given.
pub fn chip_path(chip: &str) -> PathBuf {
    if chip.starts_with('/') {
        PathBuf::from(chip)
    } else {
        PathBuf::from("/dev").join(chip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_path() {
        assert_eq!(chip_path("gpiochip0"), PathBuf::from("/dev/gpiochip0"));
        assert_eq!(chip_path("/dev/gpiochip4"), PathBuf::from("/dev/gpiochip4"));
    }

    #[test]
    fn test_missing_chip_is_line_error() {
        let pair = LinePair::new(1, 2).unwrap();
        let err = GpioLines::open("/nonexistent/gpiochip99", pair).err().unwrap();
        assert!(matches!(err, WiegandError::Line { op: "open gpiochip", .. }));
    }
}

//! Pulse timing state machine
//!
//! A frame goes out as one low pulse per bit: on D0 for a 0, on D1 for a 1.
//! Both lines rest high. The sequence is:
//!
//! 1. both lines high, settle for [`SETTLE_US`]
//! 2. per bit: active line low, hold `pulse_us`, back high, hold `space_us`
//! 3. both lines high, release the lines
//!
//! A failed line operation aborts immediately. The lines are not restored
//! to idle in that case.

use crate::bits::Bit;
use crate::config::{LinePair, PulseTiming};
use crate::constants::SETTLE_US;
use crate::error::WiegandError;
use crate::types::WiegandFrame;

#[cfg(feature = "logging")]
use tracing::{debug, trace};

/// Logical output level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Line driven low (pulse)
    Low,
    /// Line driven high (idle)
    High,
}

/// Ownership of the two output lines
///
/// Implementations are expected to have already requested both lines as
/// outputs, initially high.
pub trait LineControl {
    /// Drive a single line
    fn set_line(&mut self, offset: u32, level: Level) -> Result<(), WiegandError>;

    /// Drive both lines in one operation
    fn set_both(&mut self, level: Level) -> Result<(), WiegandError>;

    /// Give up ownership of the lines
    fn release(self) -> Result<(), WiegandError>
    where
        Self: Sized;
}

/// Blocking wait that always lasts the full requested duration
pub trait Delay {
    /// Block for `us` microseconds
    fn delay_us(&mut self, us: u32);
}

/// [`Delay`] backed by `std::thread::sleep`
///
/// Sleeps toward a fixed deadline, so an early wake-up just sleeps again
/// for the remainder.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl Delay for StdDelay {
    fn delay_us(&mut self, us: u32) {
        use std::time::{Duration, Instant};

        let deadline = Instant::now() + Duration::from_micros(u64::from(us));
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            std::thread::sleep(deadline - now);
        }
    }
}

// Position in the pulse sequence, reported when a run aborts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TxState {
    Ready,
    Idle,
    Pulsing(usize),
    Settled,
}

/// Summary of a completed transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxReport {
    /// Number of pulses emitted
    pub pulses: usize,
    /// Settle time plus pulse and spacing time, in microseconds
    pub nominal_us: u64,
}

/// Drives a frame onto two lines
pub struct PulseTransmitter<L: LineControl, D: Delay> {
    lines: L,
    delay: D,
    pair: LinePair,
    timing: PulseTiming,
    state: TxState,
}

impl<L: LineControl, D: Delay> PulseTransmitter<L, D> {
    /// Create a transmitter over acquired lines
    pub fn new(lines: L, delay: D, pair: LinePair, timing: PulseTiming) -> Self {
        Self {
            lines,
            delay,
            pair,
            timing,
            state: TxState::Ready,
        }
    }

    /// Send a whole frame, then restore idle and release the lines
    pub fn transmit(self, frame: &WiegandFrame) -> Result<TxReport, WiegandError> {
        self.transmit_bits(frame.bits.as_slice())
    }

    /// Send a bit slice, then restore idle and release the lines
    pub fn transmit_bits(mut self, bits: &[Bit]) -> Result<TxReport, WiegandError> {
        #[cfg(feature = "logging")]
        debug!(
            "Transmitting {} bits on d0={} d1={} (pulse {}us, space {}us)",
            bits.len(),
            self.pair.d0,
            self.pair.d1,
            self.timing.pulse_us,
            self.timing.space_us
        );

        if let Err(e) = self.run(bits) {
            #[cfg(feature = "logging")]
            debug!("Transmission aborted in state {:?}: {:?}", self.state, e);
            return Err(e);
        }

        self.lines.release()?;

        let per_bit = u64::from(self.timing.pulse_us) + u64::from(self.timing.space_us);
        Ok(TxReport {
            pulses: bits.len(),
            nominal_us: u64::from(SETTLE_US) + per_bit * bits.len() as u64,
        })
    }

    fn run(&mut self, bits: &[Bit]) -> Result<(), WiegandError> {
        self.lines.set_both(Level::High)?;
        self.delay.delay_us(SETTLE_US);
        self.state = TxState::Idle;

        for (i, &bit) in bits.iter().enumerate() {
            self.state = TxState::Pulsing(i);
            self.pulse(bit)?;
        }

        self.lines.set_both(Level::High)?;
        self.state = TxState::Settled;
        Ok(())
    }

    fn pulse(&mut self, bit: Bit) -> Result<(), WiegandError> {
        let offset = match bit {
            Bit::Zero => self.pair.d0,
            Bit::One => self.pair.d1,
        };

        #[cfg(feature = "logging")]
        trace!("Pulse {:?} on line {}", self.state, offset);

        self.lines.set_line(offset, Level::Low)?;
        self.delay.delay_us(self.timing.pulse_us);
        self.lines.set_line(offset, Level::High)?;
        self.delay.delay_us(self.timing.space_us);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Lines {
        log: Vec<(u32, Level)>,
    }

    impl LineControl for Lines {
        fn set_line(&mut self, offset: u32, level: Level) -> Result<(), WiegandError> {
            self.log.push((offset, level));
            Ok(())
        }

        fn set_both(&mut self, _level: Level) -> Result<(), WiegandError> {
            Ok(())
        }

        fn release(self) -> Result<(), WiegandError> {
            Ok(())
        }
    }

    struct NoDelay;

    impl Delay for NoDelay {
        fn delay_us(&mut self, _us: u32) {}
    }

    fn transmitter() -> PulseTransmitter<Lines, NoDelay> {
        let pair = LinePair::new(2, 3).unwrap();
        let timing = PulseTiming::new(50, 1000).unwrap();
        PulseTransmitter::new(Lines::default(), NoDelay, pair, timing)
    }

    #[test]
    fn test_states_advance_to_settled() {
        let mut tx = transmitter();
        assert_eq!(tx.state, TxState::Ready);

        tx.run(&[Bit::One, Bit::Zero]).unwrap();
        assert_eq!(tx.state, TxState::Settled);
        assert_eq!(tx.lines.log, [(3, Level::Low), (3, Level::High), (2, Level::Low), (2, Level::High)]);
    }

    #[test]
    fn test_report() {
        let report = transmitter().transmit_bits(&[Bit::One, Bit::Zero]).unwrap();
        assert_eq!(report.pulses, 2);
        assert_eq!(report.nominal_us, 2000 + 2 * 1050);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_std_delay_waits_full_duration() {
        let start = std::time::Instant::now();
        StdDelay.delay_us(1500);
        assert!(start.elapsed() >= std::time::Duration::from_micros(1500));
    }
}

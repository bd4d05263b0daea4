//! Capacities, timing limits and defaults for Wiegand frames

/// Maximum number of data bits before parity is applied
pub const MAX_DATA_BITS: usize = 512;

/// Maximum number of bits in a frame after parity is applied
pub const MAX_FRAME_BITS: usize = MAX_DATA_BITS + 8;

/// Shortest accepted pulse width in microseconds
pub const MIN_PULSE_US: u32 = 20;

/// Longest accepted pulse width in microseconds
pub const MAX_PULSE_US: u32 = 5000;

/// Default pulse width in microseconds
pub const DEFAULT_PULSE_US: u32 = 50;

/// Default spacing between pulses in microseconds
pub const DEFAULT_SPACE_US: u32 = 1000;

/// Time both lines are held idle-high before the first pulse
pub const SETTLE_US: u32 = 2000;

/// Format used when none is given
pub const DEFAULT_FORMAT: u32 = 26;

/// Identifiers of the supported format presets
pub const SUPPORTED_FORMATS: [u32; 5] = [26, 34, 35, 37, 48];

/// Default GPIO chip identifier
pub const DEFAULT_CHIP: &str = "gpiochip0";

/// Consumer label attached to requested lines
pub const LINE_CONSUMER: &str = "wiegand_tx";

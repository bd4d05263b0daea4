//! Error types for Wiegand operations

use alloc::string::String;

/// Errors that can occur while configuring, encoding or transmitting a frame
///
/// Every variant is fatal to the run: there is no retry or recovery path.
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WiegandError {
    /// A required line offset was not supplied
    #[cfg_attr(feature = "std", error("missing line offset for {0}"))]
    MissingLine(&'static str),

    /// D0 and D1 point at the same line
    #[cfg_attr(feature = "std", error("d0 and d1 must be different lines (both {0})"))]
    SameLine(u32),

    /// Pulse width outside the accepted range
    #[cfg_attr(feature = "std", error("pulse-us out of range: {value} (allowed {min}..={max})"))]
    PulseOutOfRange {
        /// The rejected pulse width.
        value: u32,
        /// Smallest accepted width.
        min: u32,
        /// Largest accepted width.
        max: u32,
    },

    /// Spacing shorter than the pulse it follows
    #[cfg_attr(feature = "std", error("space-us must be >= pulse-us ({space_us} < {pulse_us})"))]
    SpacingTooShort {
        /// The configured pulse width.
        pulse_us: u32,
        /// The rejected spacing.
        space_us: u32,
    },

    /// Format identifier without a preset and no explicit widths
    #[cfg_attr(feature = "std", error("unsupported format: {0}"))]
    UnsupportedFormat(u32),

    /// Unknown parity mode name
    #[cfg_attr(feature = "std", error("invalid parity: {0} (expected std, none, whole-even or whole-odd)"))]
    InvalidParity(String),

    /// A field value does not fit its bit width
    #[cfg_attr(feature = "std", error("{field} {value} exceeds width of {bits} bits"))]
    FieldOverflow {
        /// Which field overflowed ("facility" or "card").
        field: &'static str,
        /// The rejected value.
        value: u64,
        /// The configured width.
        bits: u32,
    },

    /// Malformed raw bit literal
    #[cfg_attr(feature = "std", error("invalid raw bits: {0}"))]
    RawBits(String),

    /// A bit sequence grew past its capacity
    #[cfg_attr(feature = "std", error("bit sequence of {len} bits exceeds capacity {capacity}"))]
    CapacityExceeded {
        /// The length that was requested.
        len: usize,
        /// The capacity of the sequence.
        capacity: usize,
    },

    /// Expected frame length is shorter than the composed data
    #[cfg_attr(feature = "std", error("frame-bits {expected} < data bits {data_bits}"))]
    FrameBitsTooSmall {
        /// The expected frame length.
        expected: usize,
        /// The number of composed data bits.
        data_bits: usize,
    },

    /// Encoded frame length differs from the expected length
    #[cfg_attr(feature = "std", error("frame-bits mismatch: expected {expected}, got {actual}"))]
    FrameLengthMismatch {
        /// The expected frame length.
        expected: usize,
        /// The encoded frame length.
        actual: usize,
    },

    /// A GPIO line operation failed
    #[cfg_attr(feature = "std", error("{op} failed: {message}"))]
    Line {
        /// The operation that failed.
        op: &'static str,
        /// Details from the line controller.
        message: String,
    },
}

impl WiegandError {
    /// Build a line error from any displayable cause
    pub fn line(op: &'static str, cause: impl core::fmt::Display) -> Self {
        use alloc::string::ToString;
        WiegandError::Line {
            op,
            message: cause.to_string(),
        }
    }
}

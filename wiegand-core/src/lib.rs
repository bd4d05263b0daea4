//! # Wiegand Core
//!
//! Encoding and timed transmission of Wiegand access-control frames.
//!
//! ## Modules
//!
//! - `constants`: Capacities, timing limits and defaults
//! - `bits`: Bit and bounded bit sequence types
//! - `types`: Format presets, parity modes and the encoded frame
//! - `config`: Transmission configuration and its validation
//! - `builder`: Data-bit construction from raw literals or facility/card fields
//! - `parity`: Parity policies
//! - `encoder`: The full encode pipeline (build, parity, length check)
//! - `transmit`: Pulse timing state machine over an abstract line controller

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod bits;
pub mod builder;
pub mod config;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod parity;
pub mod transmit;
pub mod types;

// Re-export commonly used types
pub use bits::{Bit, BitSequence};
pub use config::{FieldSpec, FrameSource, LinePair, PulseTiming, TxConfig, TxConfigBuilder};
pub use error::WiegandError;
pub use types::{FieldWidths, FormatPreset, ParityMode, WiegandFrame};

/// Result type alias for Wiegand operations
pub type Result<T> = core::result::Result<T, WiegandError>;

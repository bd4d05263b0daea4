//! Library entry for wiegand-cli used by integration tests and embedding.

pub mod args;
pub mod commands;
pub mod gpio;

pub use args::{Cli, TxArgs};

// Re-export commonly used items
pub use crate::commands::{preview, transmit};

pub mod preview;
pub mod transmit;

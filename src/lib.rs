//! Sizelang interpreter library.
//!
//! Provides the bitstream decoder, encoder, and virtual machine for sizelang
//! programs, plus shared logging utilities.

pub mod interpreter;
pub mod utils;

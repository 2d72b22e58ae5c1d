//! Sizelang core: bitstream decoder and virtual machine.
//!
//! A sizelang program has no source text. The program is a single unsigned
//! integer, obtained by counting the non-whitespace bytes of a file, whose
//! bit pattern encodes an instruction sequence behind a sentinel `1` bit.
//!
//! # Pipeline
//!
//! ```text
//! byte count -> [decoder] -> instruction sequence -> [machine] -> char I/O
//! ```
//!
//! # Modules
//!
//! - [`decoder`]: Prefix-code bitstream decoding of the program integer
//! - [`encoder`]: The reverse direction, for authoring programs
//! - [`errors`]: Decode and execution error types
//! - [`isa`]: Instruction set definition
//! - [`machine`]: Fetch-execute loop, variable store, and character I/O

pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod isa;
pub mod machine;

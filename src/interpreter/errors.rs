use std::io;
use thiserror::Error;

/// Errors that can occur while decoding, encoding, or running a program.
#[derive(Debug, Error)]
pub enum SizelangError {
    /// Bitstream ended while an instruction still required more bits.
    #[error("truncated program: ran out of bits while reading {expected} at bit offset {offset}")]
    TruncatedProgram {
        /// Bits consumed past the sentinel when the stream ran out.
        offset: u32,
        /// What the decoder was trying to read.
        expected: &'static str,
    },
    /// Encoded program does not fit the program integer.
    #[error("program too large: {bits} instruction bits exceed the {available} available after the sentinel")]
    ProgramTooLarge { bits: u32, available: u32 },
    /// Stream failure during a PRINT write or a non-EOF INPUT read.
    #[error("io error during {instruction}: {source}")]
    Io {
        instruction: &'static str,
        source: io::Error,
    },
}

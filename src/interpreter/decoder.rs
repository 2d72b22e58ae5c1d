//! Bitstream decoder: one unsigned integer into an instruction sequence.
//!
//! The program integer is treated as a fixed 128-bit pattern. Its highest set
//! bit is a sentinel marking where the meaningful bitstream begins; leading
//! zero bits of the storage width never appear as program content. The
//! sentinel is consumed once, then instructions are read most-significant to
//! least-significant until the cursor walks off bit 0.
//!
//! Decoding is pure and deterministic. The only failure mode is running out
//! of bits mid-instruction, which aborts the whole decode; a partial
//! instruction list is never returned.

use crate::interpreter::errors::SizelangError;
use crate::interpreter::isa::Instruction;

/// Fixed bit width of the program integer.
pub const PROGRAM_BITS: u32 = u128::BITS;

/// Cursor over the bit pattern of a program integer.
///
/// Holds a one-bit mask that starts just below the sentinel and shifts toward
/// bit 0. The cursor is exhausted exactly when the mask underflows past bit 0.
struct BitCursor {
    value: u128,
    mask: u128,
    /// Bits consumed past the sentinel, for error reporting.
    offset: u32,
}

impl BitCursor {
    /// Positions the cursor one bit below the highest set bit of `value`,
    /// consuming the sentinel.
    ///
    /// Returns `None` when `value` is zero: there is no sentinel to find and
    /// therefore no program.
    fn new(value: u128) -> Option<Self> {
        if value == 0 {
            return None;
        }
        let sentinel = 1u128 << (PROGRAM_BITS - 1 - value.leading_zeros());
        Some(Self {
            value,
            mask: sentinel >> 1,
            offset: 0,
        })
    }

    /// Returns whether the cursor has walked past bit 0.
    fn is_exhausted(&self) -> bool {
        self.mask == 0
    }

    /// Consumes and returns the bit under the cursor.
    ///
    /// Returns [`SizelangError::TruncatedProgram`] if the cursor is already
    /// exhausted; `expected` names what the caller was reading.
    fn read_bit(&mut self, expected: &'static str) -> Result<bool, SizelangError> {
        if self.is_exhausted() {
            return Err(SizelangError::TruncatedProgram {
                offset: self.offset,
                expected,
            });
        }
        let bit = self.value & self.mask != 0;
        self.mask >>= 1;
        self.offset += 1;
        Ok(bit)
    }

    /// Reads a unary-coded variable index: `k` one-bits followed by a
    /// terminating zero-bit yield index `k`.
    fn read_var(&mut self) -> Result<usize, SizelangError> {
        let mut index = 0usize;
        while self.read_bit("a unary operand bit")? {
            index += 1;
        }
        Ok(index)
    }
}

/// Decodes a program integer into its instruction sequence.
///
/// An input of zero yields an empty program, as does the bare sentinel `1`.
/// Decoding stops cleanly when the cursor is exhausted exactly at an
/// instruction boundary.
///
/// Returns [`SizelangError::TruncatedProgram`] if the bitstream ends while an
/// opcode or operand bit is still required.
pub fn decode(value: u128) -> Result<Vec<Instruction>, SizelangError> {
    let mut instructions = Vec::new();
    let Some(mut cursor) = BitCursor::new(value) else {
        return Ok(instructions);
    };
    while !cursor.is_exhausted() {
        let first = cursor.read_bit("an opcode bit")?;
        let second = cursor.read_bit("an opcode bit")?;
        let instruction = match (first, second) {
            (false, false) => Instruction::Print {
                var: cursor.read_var()?,
            },
            (false, true) => Instruction::Input {
                var: cursor.read_var()?,
            },
            (true, true) => {
                let cond = cursor.read_var()?;
                let offset = cursor.read_var()?;
                Instruction::Jump { cond, offset }
            }
            (true, false) => {
                if cursor.read_bit("an opcode bit")? {
                    Instruction::Dec {
                        var: cursor.read_var()?,
                    }
                } else {
                    Instruction::Inc {
                        var: cursor.read_var()?,
                    }
                }
            }
        };
        instructions.push(instruction);
    }
    Ok(instructions)
}

//! Instruction set definitions.
//!
//! The instruction set is fixed and closed: five opcodes selected by a short
//! prefix code, each followed by unary-coded variable indices.
//!
//! # Bit-level encoding
//!
//! | bit 1 | bit 2 | bit 3 | Opcode | Operands        |
//! |-------|-------|-------|--------|-----------------|
//! | 0     | 0     | —     | PRINT  | 1 variable      |
//! | 0     | 1     | —     | INPUT  | 1 variable      |
//! | 1     | 1     | —     | JUMP   | 2 variables     |
//! | 1     | 0     | 0     | INC    | 1 variable      |
//! | 1     | 0     | 1     | DEC    | 1 variable      |
//!
//! The third bit is read only when the first two are `1,0`. A variable index
//! `k` is encoded as `k` one-bits followed by a terminating zero-bit.

use std::fmt::{self, Display};

/// A decoded sizelang instruction.
///
/// Operands are variable indices into the machine's [store](super::machine::Vars),
/// never literals; even jump distances are read from a variable at runtime.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Instruction {
    /// Write the byte held by variable `var` to the output stream.
    Print { var: usize },
    /// Read one non-whitespace byte from the input stream into variable `var`.
    Input { var: usize },
    /// Increment variable `var`, wrapping modulo 256.
    Inc { var: usize },
    /// Decrement variable `var`, wrapping modulo 256.
    Dec { var: usize },
    /// If variable `cond` is zero, move the instruction pointer by the signed
    /// byte value of variable `offset` (1 falls through, 0 loops in place).
    Jump { cond: usize, offset: usize },
}

impl Instruction {
    /// Returns the mnemonic used in debug listings.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Print { .. } => "print",
            Instruction::Input { .. } => "input",
            Instruction::Inc { .. } => "inc",
            Instruction::Dec { .. } => "dec",
            Instruction::Jump { .. } => "jump",
        }
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Instruction::Print { var }
            | Instruction::Input { var }
            | Instruction::Inc { var }
            | Instruction::Dec { var } => write!(f, "{:<6} {}", self.mnemonic(), var),
            Instruction::Jump { cond, offset } => {
                write!(f, "{:<6} {}, {}", self.mnemonic(), cond, offset)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonics() {
        assert_eq!(Instruction::Print { var: 0 }.mnemonic(), "print");
        assert_eq!(Instruction::Input { var: 0 }.mnemonic(), "input");
        assert_eq!(Instruction::Inc { var: 0 }.mnemonic(), "inc");
        assert_eq!(Instruction::Dec { var: 0 }.mnemonic(), "dec");
        assert_eq!(Instruction::Jump { cond: 0, offset: 0 }.mnemonic(), "jump");
    }

    #[test]
    fn display_format() {
        assert_eq!(Instruction::Print { var: 3 }.to_string(), "print  3");
        assert_eq!(Instruction::Inc { var: 0 }.to_string(), "inc    0");
        assert_eq!(
            Instruction::Jump { cond: 1, offset: 2 }.to_string(),
            "jump   1, 2"
        );
    }
}

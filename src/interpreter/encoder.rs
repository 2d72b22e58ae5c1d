//! Program encoder: instruction sequence into a program integer.
//!
//! The authoring direction of the pipeline. The returned integer is the
//! non-whitespace byte count a program file must have; pairing this with the
//! `filefiller` tool turns an instruction sequence into a runnable file.

use crate::interpreter::errors::SizelangError;
use crate::interpreter::isa::Instruction;

use super::decoder::PROGRAM_BITS;

/// Instruction bits available below the sentinel.
const PAYLOAD_BITS: u32 = PROGRAM_BITS - 1;

/// Assembles bits into a program integer, most-significant first.
///
/// The value starts as the bare sentinel `1`; every pushed bit shifts it left.
struct BitWriter {
    value: u128,
}

impl BitWriter {
    fn new() -> Self {
        Self { value: 1 }
    }

    fn push(&mut self, bit: bool) {
        self.value = (self.value << 1) | u128::from(bit);
    }

    /// Emits a unary-coded variable index: `index` one-bits then a zero-bit.
    fn push_var(&mut self, index: usize) {
        for _ in 0..index {
            self.push(true);
        }
        self.push(false);
    }
}

/// Returns the encoded width of one instruction in bits.
fn bit_len(instruction: &Instruction) -> u32 {
    let unary = |var: usize| var as u32 + 1;
    match *instruction {
        Instruction::Print { var } | Instruction::Input { var } => 2 + unary(var),
        Instruction::Inc { var } | Instruction::Dec { var } => 3 + unary(var),
        Instruction::Jump { cond, offset } => 2 + unary(cond) + unary(offset),
    }
}

/// Encodes an instruction sequence into its program integer.
///
/// The empty sequence encodes to `1`, the bare sentinel.
///
/// Returns [`SizelangError::ProgramTooLarge`] if the encoding needs more
/// instruction bits than fit below the sentinel.
pub fn encode(instructions: &[Instruction]) -> Result<u128, SizelangError> {
    let bits = instructions.iter().map(bit_len).sum::<u32>();
    if bits > PAYLOAD_BITS {
        return Err(SizelangError::ProgramTooLarge {
            bits,
            available: PAYLOAD_BITS,
        });
    }

    let mut writer = BitWriter::new();
    for instruction in instructions {
        match *instruction {
            Instruction::Print { var } => {
                writer.push(false);
                writer.push(false);
                writer.push_var(var);
            }
            Instruction::Input { var } => {
                writer.push(false);
                writer.push(true);
                writer.push_var(var);
            }
            Instruction::Inc { var } => {
                writer.push(true);
                writer.push(false);
                writer.push(false);
                writer.push_var(var);
            }
            Instruction::Dec { var } => {
                writer.push(true);
                writer.push(false);
                writer.push(true);
                writer.push_var(var);
            }
            Instruction::Jump { cond, offset } => {
                writer.push(true);
                writer.push(true);
                writer.push_var(cond);
                writer.push_var(offset);
            }
        }
    }
    Ok(writer.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::decoder::decode;

    #[test]
    fn empty_program_is_the_sentinel() {
        assert_eq!(encode(&[]).unwrap(), 1);
    }

    #[test]
    fn encode_matches_hand_built_patterns() {
        assert_eq!(encode(&[Instruction::Print { var: 0 }]).unwrap(), 0b1_00_0);
        assert_eq!(encode(&[Instruction::Input { var: 1 }]).unwrap(), 0b1_01_10);
        assert_eq!(encode(&[Instruction::Inc { var: 2 }]).unwrap(), 0b1_100_110);
        assert_eq!(encode(&[Instruction::Dec { var: 0 }]).unwrap(), 0b1_101_0);
        assert_eq!(
            encode(&[Instruction::Jump { cond: 1, offset: 2 }]).unwrap(),
            0b1_11_10_110
        );
    }

    #[test]
    fn encode_then_decode_echo_program() {
        let program = vec![Instruction::Input { var: 0 }, Instruction::Print { var: 0 }];
        let value = encode(&program).unwrap();
        assert_eq!(decode(value).unwrap(), program);
    }

    #[test]
    fn oversized_program_is_rejected() {
        // A single operand spanning the whole payload plus its prefix.
        let err = encode(&[Instruction::Print { var: 126 }]).unwrap_err();
        assert!(matches!(
            err,
            SizelangError::ProgramTooLarge {
                bits: 129,
                available: 127
            }
        ));
    }

    #[test]
    fn largest_single_operand_fits() {
        // 2 prefix bits + 125 unary bits = the full 127-bit payload.
        let program = vec![Instruction::Print { var: 124 }];
        let value = encode(&program).unwrap();
        assert_eq!(decode(value).unwrap(), program);
    }
}

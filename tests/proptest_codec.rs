//! Property-based tests for the bitstream codec and the variable store.
//!
//! Tests the following properties:
//! - Any encodable program decodes back to itself
//! - Unary-coded variable indices survive the round trip across their range
//! - INC and DEC are inverses on the variable store

use proptest::prelude::*;
use sizelang::interpreter::decoder::decode;
use sizelang::interpreter::encoder::encode;
use sizelang::interpreter::isa::Instruction;
use sizelang::interpreter::machine::Vars;

/// Generate one instruction with small operands so that short programs stay
/// within the 127 instruction bits available below the sentinel.
fn arb_instruction() -> impl Strategy<Value = Instruction> {
    let var = 0usize..8;
    prop_oneof![
        var.clone().prop_map(|var| Instruction::Print { var }),
        var.clone().prop_map(|var| Instruction::Input { var }),
        var.clone().prop_map(|var| Instruction::Inc { var }),
        var.clone().prop_map(|var| Instruction::Dec { var }),
        (var.clone(), var).prop_map(|(cond, offset)| Instruction::Jump { cond, offset }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Worst case here is 7 JUMPs with both operands at 7: 7 * 18 = 126 bits,
    /// which still fits, so encoding never fails and decoding must invert it.
    #[test]
    fn encode_decode_round_trip(program in proptest::collection::vec(arb_instruction(), 0..8)) {
        let value = encode(&program).expect("program fits the payload");
        prop_assert_eq!(decode(value).expect("decode failed"), program);
    }

    /// A single PRINT can carry any index up to 124 before running out of
    /// payload bits; the unary run must come back exactly.
    #[test]
    fn unary_index_round_trip(var in 0usize..=124) {
        let value = encode(&[Instruction::Print { var }]).expect("index fits the payload");
        prop_assert_eq!(decode(value).expect("decode failed"), vec![Instruction::Print { var }]);
    }

    /// n increments followed by n decrements leave every variable at zero.
    #[test]
    fn inc_dec_inverse(index in 0usize..64, n in 0u16..600) {
        let mut vars = Vars::new();
        for _ in 0..n {
            vars.increment(index);
        }
        for _ in 0..n {
            vars.decrement(index);
        }
        prop_assert_eq!(vars.get(index), 0);
    }
}

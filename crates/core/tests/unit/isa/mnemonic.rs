//! Mnemonic Table Tests.
//!
//! Checks the opcode/funct lookup, the NOP special case, and shapes.

use rstest::rstest;

use mipsdis_core::isa::decode::decode_fields;
use mipsdis_core::isa::mnemonic::{Format, Mnemonic};

use crate::common::encode::{i_type, j_type, r_type};

#[rstest]
#[case(32, Mnemonic::Add)]
#[case(34, Mnemonic::Sub)]
#[case(2, Mnemonic::Srl)]
#[case(3, Mnemonic::Sra)]
#[case(36, Mnemonic::And)]
#[case(37, Mnemonic::Or)]
#[case(38, Mnemonic::Xor)]
#[case(39, Mnemonic::Nor)]
#[case(42, Mnemonic::Slt)]
#[case(33, Mnemonic::Addu)]
#[case(35, Mnemonic::Subu)]
fn identify_by_funct(#[case] funct: u32, #[case] expected: Mnemonic) {
    let fields = decode_fields(r_type(1, 2, 3, 4, funct));
    assert_eq!(Mnemonic::identify(&fields), Some(expected));
    assert_eq!(expected.format(), Format::Register);
}

#[rstest]
#[case(8, Mnemonic::Addi)]
#[case(9, Mnemonic::Addiu)]
#[case(10, Mnemonic::Slti)]
#[case(12, Mnemonic::Andi)]
#[case(13, Mnemonic::Ori)]
#[case(14, Mnemonic::Xori)]
#[case(15, Mnemonic::Lui)]
#[case(35, Mnemonic::Lw)]
#[case(43, Mnemonic::Sw)]
#[case(4, Mnemonic::Beq)]
#[case(5, Mnemonic::Bne)]
fn identify_by_opcode(#[case] opcode: u32, #[case] expected: Mnemonic) {
    let fields = decode_fields(i_type(opcode, 1, 2, 3));
    assert_eq!(Mnemonic::identify(&fields), Some(expected));
    assert_eq!(expected.format(), Format::Immediate);
}

#[rstest]
#[case(2, Mnemonic::J)]
#[case(3, Mnemonic::Jal)]
fn identify_jumps(#[case] opcode: u32, #[case] expected: Mnemonic) {
    let fields = decode_fields(j_type(opcode, 100));
    assert_eq!(Mnemonic::identify(&fields), Some(expected));
    assert_eq!(expected.format(), Format::Jump);
}

#[test]
fn nop_requires_zero_rt_rd_shamt() {
    assert_eq!(Mnemonic::identify(&decode_fields(0)), Some(Mnemonic::Nop));
    // rs is ignored for NOP.
    assert_eq!(
        Mnemonic::identify(&decode_fields(r_type(9, 0, 0, 0, 0))),
        Some(Mnemonic::Nop)
    );
    assert_eq!(
        Mnemonic::identify(&decode_fields(r_type(0, 0, 0, 1, 0))),
        Some(Mnemonic::Sll)
    );
    assert_eq!(
        Mnemonic::identify(&decode_fields(r_type(0, 1, 0, 0, 0))),
        Some(Mnemonic::Sll)
    );
    assert_eq!(
        Mnemonic::identify(&decode_fields(r_type(0, 0, 1, 0, 0))),
        Some(Mnemonic::Sll)
    );
}

#[rstest]
#[case(1)]
#[case(8)]
#[case(12)]
#[case(63)]
fn unknown_funct_has_no_mnemonic(#[case] funct: u32) {
    assert_eq!(Mnemonic::identify(&decode_fields(r_type(1, 2, 3, 0, funct))), None);
}

#[rstest]
#[case(1)]
#[case(6)]
#[case(32)]
#[case(63)]
fn unknown_opcode_has_no_mnemonic(#[case] opcode: u32) {
    assert_eq!(Mnemonic::identify(&decode_fields(i_type(opcode, 1, 2, 3))), None);
}

#[test]
fn names_are_unique_and_uppercase() {
    let mut names: Vec<&str> = Mnemonic::ALL.iter().map(|m| m.as_str()).collect();
    assert!(names.iter().all(|n| n.chars().all(|c| c.is_ascii_uppercase())));
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Mnemonic::ALL.len());
}

#[test]
fn display_matches_as_str() {
    for m in Mnemonic::ALL {
        assert_eq!(m.to_string(), m.as_str());
    }
}

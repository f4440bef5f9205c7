//! Field Extraction Properties.
//!
//! Verifies that `decode_fields()` splits every word into its fixed-position
//! fields and applies the immediate sign rule, including the 32768 boundary.

use proptest::prelude::*;
use rstest::rstest;

use mipsdis_core::isa::decode::{adjust_immediate, decode_fields};
use mipsdis_core::isa::instruction::InstructionBits;

use crate::common::encode::{i_type, j_type, r_type};

#[test]
fn decode_r_type_fields() {
    let f = decode_fields(r_type(17, 18, 19, 7, 42));
    assert_eq!(f.opcode, 0);
    assert_eq!(f.rs, 17);
    assert_eq!(f.rt, 18);
    assert_eq!(f.rd, 19);
    assert_eq!(f.shamt, 7);
    assert_eq!(f.funct, 42);
}

#[test]
fn decode_i_type_fields() {
    let f = decode_fields(i_type(43, 29, 31, 0x0010));
    assert_eq!(f.opcode, 43);
    assert_eq!(f.rs, 29);
    assert_eq!(f.rt, 31);
    assert_eq!(f.immediate, 16);
}

#[test]
fn decode_j_type_fields() {
    let f = decode_fields(j_type(3, 0x03FF_FFFF));
    assert_eq!(f.opcode, 3);
    assert_eq!(f.jump_address, 0x03FF_FFFF);
}

#[test]
fn decode_all_ones() {
    let f = decode_fields(u32::MAX);
    assert_eq!(f.opcode, 63);
    assert_eq!((f.rs, f.rt, f.rd, f.shamt), (31, 31, 31, 31));
    assert_eq!(f.funct, 63);
    assert_eq!(f.immediate, -1);
    assert_eq!(f.jump_address, 0x03FF_FFFF);
}

#[test]
fn jump_address_extracted_for_non_jumps() {
    let word = r_type(1, 2, 3, 0, 32);
    assert_eq!(decode_fields(word).jump_address, word & 0x03FF_FFFF);
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(32767, 32767)]
#[case(32768, 32768)]
#[case(32769, -32767)]
#[case(65534, -2)]
#[case(65535, -1)]
fn immediate_sign_boundary(#[case] raw: u16, #[case] expected: i32) {
    assert_eq!(adjust_immediate(u32::from(raw)), expected);
    assert_eq!(decode_fields(i_type(8, 0, 0, raw)).immediate, expected);
}

proptest! {
    /// Decoding is deterministic.
    #[test]
    fn decode_is_deterministic(word in any::<u32>()) {
        prop_assert_eq!(decode_fields(word), decode_fields(word));
    }

    /// The six R-type fields partition the word exactly.
    #[test]
    fn fields_partition_word(word in any::<u32>()) {
        let f = decode_fields(word);
        let rebuilt = u32::from(f.opcode) << 26
            | u32::from(f.rs) << 21
            | u32::from(f.rt) << 16
            | u32::from(f.rd) << 11
            | u32::from(f.shamt) << 6
            | u32::from(f.funct);
        prop_assert_eq!(rebuilt, word);
        prop_assert_eq!(f.raw, word);
    }

    /// Immediate and jump address re-read the low bits.
    #[test]
    fn immediate_and_jump_reread_low_bits(word in any::<u32>()) {
        let f = decode_fields(word);
        prop_assert_eq!(f.immediate.rem_euclid(1 << 16) as u32, word & 0xFFFF);
        prop_assert_eq!(f.jump_address, word & 0x03FF_FFFF);
        prop_assert_eq!(u32::from(word.immediate()), word & 0xFFFF);
    }

    /// Adjusted immediates stay within -32767..=32768.
    #[test]
    fn immediate_range(raw in 0u32..=0xFFFF) {
        let v = adjust_immediate(raw);
        prop_assert!((-32767..=32768).contains(&v));
    }
}

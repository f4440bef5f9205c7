//! Instruction Field Extractor.
//!
//! This module splits a 32-bit instruction word into the fixed-position
//! fields of a `DecodedFields` record. It extracts the opcode, register indices,
//! shift amount, function code, and jump address, and derives the signed
//! interpretation of the 16-bit immediate.

use crate::isa::instruction::{DecodedFields, InstructionBits};

/// Raw immediates strictly above this value are treated as negative.
///
/// The comparison is strict, so the sign-bit-only pattern `0x8000` stays
/// positive (32768). Listings produced by earlier versions of the tool depend
/// on this, so it is kept even though bit-15 sign extension would map
/// `0x8000` to -32768.
pub const IMMEDIATE_SIGN_THRESHOLD: u32 = 1 << 15;

/// Value subtracted from a raw immediate that is treated as negative.
pub const IMMEDIATE_RANGE: i32 = 1 << 16;

/// Decodes an instruction word into its component fields.
///
/// Total over all 32-bit inputs: every bit pattern has a well-defined field
/// decomposition. The jump address is extracted even for words that are not
/// jumps.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// A `DecodedFields` record containing all extracted instruction fields.
pub fn decode_fields(word: u32) -> DecodedFields {
    DecodedFields {
        raw: word,
        opcode: word.opcode(),
        rs: word.rs(),
        rt: word.rt(),
        rd: word.rd(),
        shamt: word.shamt(),
        funct: word.funct(),
        immediate: adjust_immediate(u32::from(word.immediate())),
        jump_address: word.jump_address(),
    }
}

/// Applies the signed interpretation to a raw 16-bit immediate.
///
/// Values `0..=32768` are returned unchanged; values `32769..=65535` map to
/// `raw - 65536`.
///
/// # Arguments
///
/// * `raw` - The immediate field, already masked to 16 bits.
pub const fn adjust_immediate(raw: u32) -> i32 {
    if raw > IMMEDIATE_SIGN_THRESHOLD {
        raw as i32 - IMMEDIATE_RANGE
    } else {
        raw as i32
    }
}

//! Instruction Disassembler.
//!
//! Converts decoded instruction fields into a human-readable mnemonic line.
//!
//! Registers are written as `$r<n>`, immediates and shift amounts as
//! `#<value>` in decimal. A few operand rules are intentionally uneven and
//! must stay that way for listings to match:
//!
//! - ANDI, ORI and XORI print `immediate & 0xFFFF`, so an adjusted negative
//!   immediate shows up as its 16-bit pattern.
//! - BEQ prints `immediate * 4`; BNE prints the immediate as-is.
//! - J prints `jump_address * 4`; JAL prints the jump address as-is.
//!
//! # Usage
//!
//! ```
//! use mipsdis_core::isa::disasm::disassemble;
//! // ADD $r3, $r1, $r2
//! assert_eq!(disassemble(0x0022_1820), "ADD $r3, $r1, $r2");
//! ```

use crate::isa::decode::decode_fields;
use crate::isa::instruction::DecodedFields;
use crate::isa::mnemonic::Mnemonic;

/// Text returned when no mnemonic matches the decoded fields.
pub const SENTINEL: &str = "break";

/// Mask applied to the immediate by the logical-immediate mnemonics.
const LOGICAL_IMMEDIATE_MASK: i32 = 0xFFFF;

/// Scale applied to BEQ offsets and J targets (words to bytes).
const WORD_SCALE: i32 = 4;

/// Renders decoded fields as one mnemonic line.
///
/// Returns [`SENTINEL`] for field combinations without a mnemonic; never
/// fails.
///
/// # Arguments
///
/// * `fields` - Fields produced by [`decode_fields`].
pub fn render_mnemonic(fields: &DecodedFields) -> String {
    Mnemonic::identify(fields).map_or_else(|| SENTINEL.to_string(), |m| render_operands(m, fields))
}

/// Decodes and renders a raw instruction word.
///
/// # Arguments
///
/// * `word` - The raw 32-bit instruction encoding.
pub fn disassemble(word: u32) -> String {
    render_mnemonic(&decode_fields(word))
}

/// Formats the operands of an identified mnemonic.
fn render_operands(mnemonic: Mnemonic, f: &DecodedFields) -> String {
    let (rs, rt, rd, imm) = (f.rs, f.rt, f.rd, f.immediate);

    match mnemonic {
        Mnemonic::Nop => mnemonic.to_string(),

        // ── R-type register-register ──────────────────────
        Mnemonic::Add
        | Mnemonic::Sub
        | Mnemonic::And
        | Mnemonic::Or
        | Mnemonic::Xor
        | Mnemonic::Nor
        | Mnemonic::Slt
        | Mnemonic::Addu
        | Mnemonic::Subu => format!("{mnemonic} $r{rd}, $r{rs}, $r{rt}"),

        // ── R-type shifts ─────────────────────────────────
        Mnemonic::Sll | Mnemonic::Srl | Mnemonic::Sra => {
            format!("{mnemonic} $r{rd}, $r{rt}, #{}", f.shamt)
        }

        // ── I-type arithmetic ─────────────────────────────
        Mnemonic::Addi | Mnemonic::Addiu | Mnemonic::Slti => {
            format!("{mnemonic} $r{rt}, $r{rs}, #{imm}")
        }
        Mnemonic::Andi | Mnemonic::Ori | Mnemonic::Xori => {
            format!("{mnemonic} $r{rt}, $r{rs}, #{}", imm & LOGICAL_IMMEDIATE_MASK)
        }
        Mnemonic::Lui => format!("{mnemonic} $r{rt}, #{imm}"),

        // ── Loads and stores ──────────────────────────────
        Mnemonic::Lw | Mnemonic::Sw => format!("{mnemonic} $r{rt}, #{imm}($r{rs})"),

        // ── Branches ──────────────────────────────────────
        Mnemonic::Beq => format!("{mnemonic} $r{rs}, $r{rt}, #{}", imm * WORD_SCALE),
        Mnemonic::Bne => format!("{mnemonic} $r{rs}, $r{rt}, #{imm}"),

        // ── J-type ────────────────────────────────────────
        Mnemonic::J => format!("{mnemonic} #{}", f.jump_address * WORD_SCALE as u32),
        Mnemonic::Jal => format!("{mnemonic} #{}", f.jump_address),
    }
}

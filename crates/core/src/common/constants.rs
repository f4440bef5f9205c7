//! Global constants.
//!
//! This module defines constants used across the disassembler. It includes:
//! 1. **Instruction Constants:** Word width and size in bytes.
//! 2. **Listing Constants:** Field group widths used when printing raw bits.

/// Width of an instruction word in bits.
pub const INSTRUCTION_BITS: usize = 32;

/// Size of an instruction word in bytes.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Widths of the bit groups printed in front of each listing line.
///
/// The groups follow the register-register field boundaries:
/// `opcode | rs | rt | rd | shamt | funct`.
pub const FIELD_GROUP_WIDTHS: [usize; 6] = [6, 5, 5, 5, 5, 6];

/// Separator placed between bit groups.
pub const FIELD_GROUP_SEPARATOR: char = ' ';

/// Separator placed between the columns of a listing line.
pub const COLUMN_SEPARATOR: char = '\t';

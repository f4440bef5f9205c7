//! Function Codes.
//!
//! Defines the `funct` values (bits 5-0) that select the operation when the
//! opcode is [`OP_SPECIAL`](crate::isa::opcodes::OP_SPECIAL).

/// Shift Left Logical (SLL); NOP when `rt`, `rd` and `shamt` are all zero.
pub const SLL: u8 = 0;
/// Shift Right Logical.
pub const SRL: u8 = 2;
/// Shift Right Arithmetic.
pub const SRA: u8 = 3;
/// Add.
pub const ADD: u8 = 32;
/// Add Unsigned.
pub const ADDU: u8 = 33;
/// Subtract.
pub const SUB: u8 = 34;
/// Subtract Unsigned.
pub const SUBU: u8 = 35;
/// Bitwise AND.
pub const AND: u8 = 36;
/// Bitwise OR.
pub const OR: u8 = 37;
/// Bitwise XOR.
pub const XOR: u8 = 38;
/// Bitwise NOR.
pub const NOR: u8 = 39;
/// Set on Less Than.
pub const SLT: u8 = 42;

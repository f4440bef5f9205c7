//! Primary Opcodes.
//!
//! Defines the opcode values (bits 31-26) recognised by the mnemonic table.

/// Register-register instructions; the operation is selected by `funct`.
pub const OP_SPECIAL: u8 = 0;

/// Jump (J).
pub const OP_J: u8 = 2;

/// Jump and Link (JAL).
pub const OP_JAL: u8 = 3;

/// Branch on Equal (BEQ).
pub const OP_BEQ: u8 = 4;

/// Branch on Not Equal (BNE).
pub const OP_BNE: u8 = 5;

/// Add Immediate (ADDI).
pub const OP_ADDI: u8 = 8;

/// Add Immediate Unsigned (ADDIU).
pub const OP_ADDIU: u8 = 9;

/// Set on Less Than Immediate (SLTI).
pub const OP_SLTI: u8 = 10;

/// AND Immediate (ANDI).
pub const OP_ANDI: u8 = 12;

/// OR Immediate (ORI).
pub const OP_ORI: u8 = 13;

/// XOR Immediate (XORI).
pub const OP_XORI: u8 = 14;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u8 = 15;

/// Load Word (LW).
pub const OP_LW: u8 = 35;

/// Store Word (SW).
pub const OP_SW: u8 = 43;

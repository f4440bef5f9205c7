//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the field layout, opcode and function-code tables, and the
//! decode/render logic for the three instruction shapes:
//!
//! * Register-register (R): `opcode | rs | rt | rd | shamt | funct`, opcode 0.
//! * Register-immediate (I): `opcode | rs | rt | immediate`.
//! * Jump (J): `opcode | jump_address`.

/// Field extraction from raw instruction words.
pub mod decode;

/// Mnemonic rendering of decoded fields.
pub mod disasm;

/// Function-code (funct) values for the register-register shape.
pub mod funct;

/// Instruction field layout and the decoded field record.
pub mod instruction;

/// Mnemonic identification and instruction shapes.
pub mod mnemonic;

/// Primary opcode values.
pub mod opcodes;

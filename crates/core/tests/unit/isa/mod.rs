//! # ISA Unit Tests
//!
//! Field extraction, mnemonic identification, and operand rendering.

/// Field extraction properties and immediate sign adjustment.
pub mod decode_properties;


/// Opcode/funct table lookups and encoding shapes.
pub mod mnemonic;

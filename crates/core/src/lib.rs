//! MIPS-style instruction word disassembler library.
//!
//! This crate turns 32-bit instruction words into assembly listings. It provides:
//! 1. **ISA:** Field extraction, the opcode/funct mnemonic table, and operand rendering.
//! 2. **Listing:** Reading binary-digit words, grouping bits, and pairing lines with addresses.
//! 3. **Configuration:** Listing base address, stride, and stop address.
//! 4. **Statistics:** Counts of recognised mnemonics and undecodable words.

/// Common types and constants (addresses, errors, field layout).
pub mod common;
/// Disassembler configuration (defaults and JSON loading).
pub mod config;
/// Instruction set (field extraction, mnemonic table, rendering).
pub mod isa;
/// Listing pipeline (word source, bit grouping, output records).
pub mod listing;
/// Listing statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Error type returned by the listing and configuration layers.
pub use crate::common::DisasmError;
/// Decoded instruction fields produced by [`isa::decode::decode_fields`].
pub use crate::isa::instruction::DecodedFields;
/// Listing driver; construct with `Disassembler::new`.
pub use crate::listing::Disassembler;

//! Common utilities and types shared across the disassembler.
//!
//! This module provides the building blocks used by both the ISA layer and
//! the listing pipeline:
//! 1. **Address Type:** A strong type for listing addresses.
//! 2. **Constants:** Instruction field layout and listing defaults.
//! 3. **Error Handling:** The error type for parsing, I/O, and configuration.

/// Listing address type.
pub mod addr;

/// Instruction field layout and listing constants.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::InstAddr;
pub use constants::{INSTRUCTION_BITS, INSTRUCTION_SIZE};
pub use error::DisasmError;

//! Instruction encoding and field extraction utilities.
//!
//! Provides bit extraction functions and the record holding every field of
//! a 32-bit instruction word. All shifts are logical (unsigned).

/// Bit shift for the opcode field (bits 26-31).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the opcode field (6 bits).
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift for the first source register field (bits 21-25).
pub const RS_SHIFT: u32 = 21;
/// Bit shift for the second source / target register field (bits 16-20).
pub const RT_SHIFT: u32 = 16;
/// Bit shift for the destination register field (bits 11-15).
pub const RD_SHIFT: u32 = 11;
/// Bit mask for a register index field (5 bits).
pub const REG_MASK: u32 = 0x1F;
/// Bit shift for the shift amount field (bits 6-10).
pub const SHAMT_SHIFT: u32 = 6;
/// Bit mask for the shift amount field (5 bits).
pub const SHAMT_MASK: u32 = 0x1F;
/// Bit mask for the function code field (bits 0-5).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the immediate field (bits 0-15).
pub const IMMEDIATE_MASK: u32 = 0xFFFF;
/// Bit mask for the jump address field (bits 0-25).
pub const JUMP_ADDRESS_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every method is a plain shift-and-mask; no field depends on the opcode,
/// so all of them are defined for every 32-bit pattern.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    fn opcode(&self) -> u8;

    /// Extracts the first source register field (bits 21-25).
    fn rs(&self) -> u8;

    /// Extracts the target register field (bits 16-20).
    fn rt(&self) -> u8;

    /// Extracts the destination register field (bits 11-15).
    fn rd(&self) -> u8;

    /// Extracts the shift amount field (bits 6-10).
    fn shamt(&self) -> u8;

    /// Extracts the function code field (bits 0-5).
    fn funct(&self) -> u8;

    /// Extracts the raw, unadjusted immediate field (bits 0-15).
    fn immediate(&self) -> u16;

    /// Extracts the jump address field (bits 0-25).
    fn jump_address(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn rs(&self) -> u8 {
        ((self >> RS_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rt(&self) -> u8 {
        ((self >> RT_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> RD_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn shamt(&self) -> u8 {
        ((self >> SHAMT_SHIFT) & SHAMT_MASK) as u8
    }

    #[inline(always)]
    fn funct(&self) -> u8 {
        (self & FUNCT_MASK) as u8
    }

    #[inline(always)]
    fn immediate(&self) -> u16 {
        (self & IMMEDIATE_MASK) as u16
    }

    #[inline(always)]
    fn jump_address(&self) -> u32 {
        self & JUMP_ADDRESS_MASK
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Every field is extracted regardless of the instruction shape; the
/// renderer picks the ones that matter for the identified mnemonic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecodedFields {
    /// Raw 32-bit instruction word.
    pub raw: u32,
    /// Primary opcode (6 bits).
    pub opcode: u8,
    /// First source register index.
    pub rs: u8,
    /// Target register index.
    pub rt: u8,
    /// Destination register index.
    pub rd: u8,
    /// Shift amount (5 bits).
    pub shamt: u8,
    /// Function code (6 bits).
    pub funct: u8,
    /// Immediate after sign adjustment, see [`crate::isa::decode::adjust_immediate`].
    pub immediate: i32,
    /// Jump address (26 bits, unsigned).
    pub jump_address: u32,
}

//! Mnemonic identification.
//!
//! Maps decoded fields to one of the recognised mnemonics. The lookup goes
//! by opcode first and, for opcode 0, by function code second. Operand
//! formatting lives in [`crate::isa::disasm`].

use std::fmt;

use crate::isa::funct;
use crate::isa::instruction::DecodedFields;
use crate::isa::opcodes;

/// Encoding shape of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Format {
    /// Register-register: `opcode | rs | rt | rd | shamt | funct`.
    Register,
    /// Register-immediate: `opcode | rs | rt | immediate`.
    Immediate,
    /// Jump: `opcode | jump_address`.
    Jump,
}

impl Format {
    /// Short, lowercase name used in statistics output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Immediate => "immediate",
            Self::Jump => "jump",
        }
    }
}

/// A recognised instruction mnemonic.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mnemonic {
    Add,
    Sub,
    Nop,
    Sll,
    Srl,
    Sra,
    And,
    Or,
    Xor,
    Nor,
    Slt,
    Addu,
    Subu,
    Addi,
    Addiu,
    Andi,
    Ori,
    Xori,
    Lui,
    Lw,
    Sw,
    Beq,
    Bne,
    Slti,
    J,
    Jal,
}

impl Mnemonic {
    /// Every recognised mnemonic, register-register shape first.
    pub const ALL: [Self; 26] = [
        Self::Add,
        Self::Sub,
        Self::Nop,
        Self::Sll,
        Self::Srl,
        Self::Sra,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Nor,
        Self::Slt,
        Self::Addu,
        Self::Subu,
        Self::Addi,
        Self::Addiu,
        Self::Andi,
        Self::Ori,
        Self::Xori,
        Self::Lui,
        Self::Lw,
        Self::Sw,
        Self::Beq,
        Self::Bne,
        Self::Slti,
        Self::J,
        Self::Jal,
    ];

    /// Looks up the mnemonic for a set of decoded fields.
    ///
    /// Returns `None` when no entry of the table matches, including opcode 0
    /// with an unknown function code.
    pub const fn identify(fields: &DecodedFields) -> Option<Self> {
        if fields.opcode == opcodes::OP_SPECIAL {
            return Self::identify_special(fields);
        }

        let mnemonic = match fields.opcode {
            opcodes::OP_ADDI => Self::Addi,
            opcodes::OP_ADDIU => Self::Addiu,
            opcodes::OP_ANDI => Self::Andi,
            opcodes::OP_ORI => Self::Ori,
            opcodes::OP_XORI => Self::Xori,
            opcodes::OP_LUI => Self::Lui,
            opcodes::OP_LW => Self::Lw,
            opcodes::OP_SW => Self::Sw,
            opcodes::OP_BEQ => Self::Beq,
            opcodes::OP_BNE => Self::Bne,
            opcodes::OP_SLTI => Self::Slti,
            opcodes::OP_J => Self::J,
            opcodes::OP_JAL => Self::Jal,
            _ => return None,
        };
        Some(mnemonic)
    }

    /// Register-register lookup by function code.
    const fn identify_special(fields: &DecodedFields) -> Option<Self> {
        let mnemonic = match fields.funct {
            funct::ADD => Self::Add,
            funct::SUB => Self::Sub,
            funct::SLL if fields.rt == 0 && fields.rd == 0 && fields.shamt == 0 => Self::Nop,
            funct::SLL => Self::Sll,
            funct::SRL => Self::Srl,
            funct::SRA => Self::Sra,
            funct::AND => Self::And,
            funct::OR => Self::Or,
            funct::XOR => Self::Xor,
            funct::NOR => Self::Nor,
            funct::SLT => Self::Slt,
            funct::ADDU => Self::Addu,
            funct::SUBU => Self::Subu,
            _ => return None,
        };
        Some(mnemonic)
    }

    /// Upper-case assembly name, e.g. `"ADDIU"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Nop => "NOP",
            Self::Sll => "SLL",
            Self::Srl => "SRL",
            Self::Sra => "SRA",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Nor => "NOR",
            Self::Slt => "SLT",
            Self::Addu => "ADDU",
            Self::Subu => "SUBU",
            Self::Addi => "ADDI",
            Self::Addiu => "ADDIU",
            Self::Andi => "ANDI",
            Self::Ori => "ORI",
            Self::Xori => "XORI",
            Self::Lui => "LUI",
            Self::Lw => "LW",
            Self::Sw => "SW",
            Self::Beq => "BEQ",
            Self::Bne => "BNE",
            Self::Slti => "SLTI",
            Self::J => "J",
            Self::Jal => "JAL",
        }
    }

    /// Encoding shape the mnemonic belongs to.
    pub const fn format(self) -> Format {
        match self {
            Self::Add
            | Self::Sub
            | Self::Nop
            | Self::Sll
            | Self::Srl
            | Self::Sra
            | Self::And
            | Self::Or
            | Self::Xor
            | Self::Nor
            | Self::Slt
            | Self::Addu
            | Self::Subu => Format::Register,
            Self::J | Self::Jal => Format::Jump,
            Self::Addi
            | Self::Addiu
            | Self::Andi
            | Self::Ori
            | Self::Xori
            | Self::Lui
            | Self::Lw
            | Self::Sw
            | Self::Beq
            | Self::Bne
            | Self::Slti => Format::Immediate,
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

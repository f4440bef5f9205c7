//! Instruction word source parsing.
//!
//! Listings are read from text with one instruction word per line, written
//! as 32 binary digits with the most significant bit first.

use crate::common::DisasmError;
use crate::common::constants::INSTRUCTION_BITS;

/// Parses one line of binary digits into an instruction word.
///
/// Surrounding whitespace is ignored. The remaining text must be exactly 32
/// characters, each `0` or `1`.
///
/// # Arguments
///
/// * `line` - The text of the line.
/// * `line_no` - 1-based line number, used in error reports.
///
/// # Errors
///
/// Returns [`DisasmError::InvalidLength`] or [`DisasmError::InvalidDigit`].
pub fn parse_word(line: &str, line_no: usize) -> Result<u32, DisasmError> {
    let bits = line.trim();
    let len = bits.chars().count();
    if len != INSTRUCTION_BITS {
        return Err(DisasmError::InvalidLength { line: line_no, len });
    }

    bits.chars()
        .enumerate()
        .try_fold(0u32, |word, (idx, c)| match c {
            '0' => Ok(word << 1),
            '1' => Ok((word << 1) | 1),
            found => Err(DisasmError::InvalidDigit {
                line: line_no,
                column: idx + 1,
                found,
            }),
        })
}

/// Returns `true` for lines that hold nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

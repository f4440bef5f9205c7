//! Listing line formatting.
//!
//! A listing line has three tab-separated columns: the instruction bits
//! split into field groups, the decimal address, and the rendered mnemonic.

use std::fmt;

use crate::common::InstAddr;
use crate::common::constants::{COLUMN_SEPARATOR, FIELD_GROUP_SEPARATOR, FIELD_GROUP_WIDTHS};

/// Splits a string of binary digits into the six field groups.
///
/// Groups have widths 6, 5, 5, 5, 5 and the rest of the string, joined by
/// single spaces. Shorter input yields shorter (possibly empty) trailing
/// groups rather than an error.
///
/// # Arguments
///
/// * `bits` - The binary digits, most significant first.
pub fn format_groups(bits: &str) -> String {
    let mut out = String::with_capacity(bits.len() + FIELD_GROUP_WIDTHS.len());
    let mut rest = bits;
    let last = FIELD_GROUP_WIDTHS.len() - 1;

    for (i, &width) in FIELD_GROUP_WIDTHS.iter().enumerate() {
        if i > 0 {
            out.push(FIELD_GROUP_SEPARATOR);
        }
        if i == last {
            out.push_str(rest);
            break;
        }
        let split = rest.char_indices().nth(width).map_or(rest.len(), |(idx, _)| idx);
        let (group, tail) = rest.split_at(split);
        out.push_str(group);
        rest = tail;
    }
    out
}

/// Formats an instruction word as grouped binary digits.
pub fn format_word(word: u32) -> String {
    format_groups(&format!("{word:032b}"))
}

/// One output record of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingLine {
    /// Instruction bits split into field groups.
    pub groups: String,
    /// Address the word is listed at.
    pub address: InstAddr,
    /// Rendered mnemonic, or the `break` sentinel.
    pub text: String,
}

impl ListingLine {
    /// Creates a listing line.
    pub const fn new(groups: String, address: InstAddr, text: String) -> Self {
        Self {
            groups,
            address,
            text,
        }
    }
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{COLUMN_SEPARATOR}{}{COLUMN_SEPARATOR}{}",
            self.groups, self.address, self.text
        )
    }
}

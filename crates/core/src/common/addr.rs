//! Listing address type.
//!
//! Addresses in a listing are byte addresses assigned to consecutive
//! instruction words. Wrapping them in a newtype keeps them from being mixed
//! up with the instruction words and field values that are also plain integers.

use std::fmt;

/// A byte address assigned to an instruction word in a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstAddr(pub u64);

impl InstAddr {
    /// Creates a new listing address from a raw value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw byte address.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw address value.
    #[inline(always)]
    pub const fn val(&self) -> u64 {
        self.0
    }

    /// Returns the address `stride` bytes further on.
    ///
    /// Saturates at `u64::MAX` so a very long listing cannot wrap back to zero.
    #[inline]
    pub const fn advance(self, stride: u64) -> Self {
        Self(self.0.saturating_add(stride))
    }
}

impl fmt::Display for InstAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Listing statistics collection and reporting.
//!
//! This module tracks what a listing run decoded. It provides:
//! 1. **Word counts:** Total words, recognised words, and `break` sentinels.
//! 2. **Mnemonic mix:** Counts per mnemonic and per encoding shape.
//! 3. **Address range:** First and last address emitted.

use std::collections::BTreeMap;
use std::fmt;

use crate::common::InstAddr;
use crate::isa::mnemonic::{Format, Mnemonic};

/// Statistics gathered over one listing run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingStats {
    /// Number of instruction words emitted.
    pub words: u64,
    /// Words that matched a mnemonic.
    pub recognised: u64,
    /// Words rendered as the `break` sentinel.
    pub unknown: u64,
    /// Blank input lines that were skipped.
    pub blank_lines: u64,
    /// Whether the run ended at the stop address rather than end of input.
    pub stopped_at_limit: bool,
    /// Address of the first emitted word.
    pub first_address: Option<InstAddr>,
    /// Address of the last emitted word.
    pub last_address: Option<InstAddr>,
    /// Counts per recognised mnemonic.
    pub by_mnemonic: BTreeMap<Mnemonic, u64>,
    /// Counts per encoding shape.
    pub by_format: BTreeMap<Format, u64>,
}

impl ListingStats {
    /// Creates an empty statistics record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one emitted word.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address the word was listed at.
    /// * `mnemonic` - Identified mnemonic, or `None` for the sentinel.
    pub fn record(&mut self, addr: InstAddr, mnemonic: Option<Mnemonic>) {
        self.words += 1;
        if self.first_address.is_none() {
            self.first_address = Some(addr);
        }
        self.last_address = Some(addr);

        match mnemonic {
            Some(m) => {
                self.recognised += 1;
                *self.by_mnemonic.entry(m).or_insert(0) += 1;
                *self.by_format.entry(m.format()).or_insert(0) += 1;
            }
            None => self.unknown += 1,
        }
    }

    /// Number of times `mnemonic` was listed.
    pub fn count(&self, mnemonic: Mnemonic) -> u64 {
        self.by_mnemonic.get(&mnemonic).copied().unwrap_or(0)
    }

    /// Fraction of emitted words that matched a mnemonic (1.0 for an empty run).
    #[allow(clippy::cast_precision_loss)]
    pub fn recognised_ratio(&self) -> f64 {
        if self.words == 0 {
            1.0
        } else {
            self.recognised as f64 / self.words as f64
        }
    }
}

impl fmt::Display for ListingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==========================================================")?;
        writeln!(f, "LISTING STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "words                    {}", self.words)?;
        writeln!(
            f,
            "recognised               {} ({:.1}%)",
            self.recognised,
            self.recognised_ratio() * 100.0
        )?;
        writeln!(f, "break                    {}", self.unknown)?;
        writeln!(f, "blank lines skipped      {}", self.blank_lines)?;
        if let (Some(first), Some(last)) = (self.first_address, self.last_address) {
            writeln!(f, "address range            {first}..={last}")?;
        }
        writeln!(f, "stopped at limit         {}", self.stopped_at_limit)?;

        if !self.by_format.is_empty() {
            writeln!(f, "----------------------------------------------------------")?;
            for (format, count) in &self.by_format {
                writeln!(f, "  {:<22} {count}", format.as_str())?;
            }
        }
        if !self.by_mnemonic.is_empty() {
            writeln!(f, "----------------------------------------------------------")?;
            for (mnemonic, count) in &self.by_mnemonic {
                writeln!(f, "  {:<22} {count}", mnemonic.as_str())?;
            }
        }
        Ok(())
    }
}

//! Configuration for the disassembler.
//!
//! This module defines the configuration structures used to parameterize a
//! listing run. It provides:
//! 1. **Defaults:** Base address, address stride, and stop address of a listing.
//! 2. **Structures:** Hierarchical config for general and listing settings.
//! 3. **Loading:** JSON deserialization with per-field defaults and validation.
//!
//! Every field is optional in JSON; omitted keys take the values from
//! `defaults`, so `{}` is a complete configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::DisasmError;
use crate::common::constants::INSTRUCTION_SIZE;

/// Default configuration constants.
mod defaults {
    /// Address assigned to the first instruction word of a listing.
    pub const BASE_ADDRESS: u64 = 496;

    /// Address increment between consecutive instruction words.
    pub const ADDRESS_STRIDE: u64 = super::INSTRUCTION_SIZE;

    /// Address at which the listing stops.
    ///
    /// With the default base and stride the last emitted line is at 696.
    pub const STOP_ADDRESS: u64 = 700;
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Listing layout settings.
    #[serde(default)]
    pub listing: ListingConfig,
}

impl Config {
    /// Parses a configuration from a JSON string and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`DisasmError::Config`] for malformed JSON and
    /// [`DisasmError::InvalidConfig`] for inconsistent values.
    pub fn from_json(json: &str) -> Result<Self, DisasmError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DisasmError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Config::from_json`].
    pub fn load(path: &Path) -> Result<Self, DisasmError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks the values for consistency.
    ///
    /// # Errors
    ///
    /// Returns [`DisasmError::InvalidConfig`] if the stride is zero or the
    /// stop address is not above the base address.
    pub fn validate(&self) -> Result<(), DisasmError> {
        let listing = &self.listing;
        if listing.address_stride == 0 {
            return Err(DisasmError::InvalidConfig(
                "listing.address_stride must be non-zero".to_string(),
            ));
        }
        if let Some(stop) = listing.stop_address {
            if stop <= listing.base_address {
                return Err(DisasmError::InvalidConfig(format!(
                    "listing.stop_address ({stop}) must be above listing.base_address ({})",
                    listing.base_address
                )));
            }
        }
        Ok(())
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Log every decoded word (with all of its fields) at debug level.
    #[serde(default)]
    pub trace_words: bool,
}

/// Listing layout settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ListingConfig {
    /// Address of the first instruction word.
    #[serde(default = "ListingConfig::default_base_address")]
    pub base_address: u64,

    /// Address increment per instruction word.
    #[serde(default = "ListingConfig::default_address_stride")]
    pub address_stride: u64,

    /// Stop once the next address reaches this value; `null` disables the limit.
    #[serde(default = "ListingConfig::default_stop_address")]
    pub stop_address: Option<u64>,

    /// Skip blank input lines instead of rejecting them.
    #[serde(default = "ListingConfig::default_skip_blank_lines")]
    pub skip_blank_lines: bool,
}

impl ListingConfig {
    fn default_base_address() -> u64 {
        defaults::BASE_ADDRESS
    }

    fn default_address_stride() -> u64 {
        defaults::ADDRESS_STRIDE
    }

    #[allow(clippy::unnecessary_wraps)]
    fn default_stop_address() -> Option<u64> {
        Some(defaults::STOP_ADDRESS)
    }

    fn default_skip_blank_lines() -> bool {
        true
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            base_address: defaults::BASE_ADDRESS,
            address_stride: defaults::ADDRESS_STRIDE,
            stop_address: Some(defaults::STOP_ADDRESS),
            skip_blank_lines: true,
        }
    }
}

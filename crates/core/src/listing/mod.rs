//! Listing pipeline.
//!
//! Reads instruction words in address order, runs each through the field
//! extractor and the mnemonic renderer, and writes one record per word:
//!
//! ```text
//! 000000 00001 00010 00011 00000 100000	496	ADD $r3, $r1, $r2
//! ```
//!
//! Addresses start at `listing.base_address` and grow by
//! `listing.address_stride`. Once the next address reaches
//! `listing.stop_address` the run ends and any remaining input is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::common::{DisasmError, InstAddr};
use crate::config::Config;
use crate::isa::decode::decode_fields;
use crate::isa::disasm::render_mnemonic;
use crate::isa::mnemonic::Mnemonic;
use crate::stats::ListingStats;

/// Bit grouping and output record formatting.
pub mod format;

/// Parsing of binary-digit input lines.
pub mod source;

pub use format::{ListingLine, format_groups, format_word};
pub use source::parse_word;

/// Listing driver configured once and run over any number of inputs.
#[derive(Debug, Clone, Default)]
pub struct Disassembler {
    config: Config,
}

impl Disassembler {
    /// Creates a disassembler from a configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Returns the configuration in use.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Disassembles `input` and writes the listing to `output`.
    ///
    /// Each record is followed by a newline. The output is flushed before
    /// returning.
    ///
    /// # Errors
    ///
    /// Stops at the first malformed line or I/O failure. Records emitted
    /// before the failure have already been written.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<ListingStats, DisasmError> {
        let stats = self.walk(input, |line| {
            writeln!(output, "{line}")?;
            Ok(())
        })?;
        output.flush()?;
        Ok(stats)
    }

    /// Disassembles the file at `input` into a newly created file at `output`.
    ///
    /// # Errors
    ///
    /// Returns [`DisasmError::Io`] if either file cannot be opened, plus the
    /// errors of [`Disassembler::run`].
    pub fn run_files(&self, input: &Path, output: &Path) -> Result<ListingStats, DisasmError> {
        let reader = BufReader::new(File::open(input)?);
        let writer = BufWriter::new(File::create(output)?);
        self.run(reader, writer)
    }

    /// Disassembles `input` into in-memory listing lines.
    ///
    /// # Errors
    ///
    /// Same as [`Disassembler::run`].
    pub fn lines<R: BufRead>(&self, input: R) -> Result<Vec<ListingLine>, DisasmError> {
        let mut lines = Vec::new();
        let _stats = self.walk(input, |line| {
            lines.push(line);
            Ok(())
        })?;
        Ok(lines)
    }

    /// Drives the listing, handing each record to `emit`.
    fn walk<R, F>(&self, input: R, mut emit: F) -> Result<ListingStats, DisasmError>
    where
        R: BufRead,
        F: FnMut(ListingLine) -> Result<(), DisasmError>,
    {
        let listing = &self.config.listing;
        let mut stats = ListingStats::new();
        let mut addr = InstAddr::new(listing.base_address);

        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;

            if listing.skip_blank_lines && source::is_blank(&line) {
                stats.blank_lines += 1;
                continue;
            }

            let word = parse_word(&line, line_no)?;
            let fields = decode_fields(word);
            let mnemonic = Mnemonic::identify(&fields);
            let text = render_mnemonic(&fields);

            if self.config.general.trace_words {
                debug!(line = line_no, address = addr.val(), fields = ?fields, text = %text, "decoded word");
            }
            if mnemonic.is_none() {
                warn!(
                    line = line_no,
                    address = addr.val(),
                    word = %format!("{word:#010x}"),
                    "no mnemonic for word"
                );
            }

            stats.record(addr, mnemonic);
            emit(ListingLine::new(format_groups(line.trim()), addr, text))?;

            addr = addr.advance(listing.address_stride);
            if listing.stop_address.is_some_and(|stop| addr.val() >= stop) {
                stats.stopped_at_limit = true;
                debug!(address = addr.val(), "stop address reached");
                break;
            }
        }

        info!(
            words = stats.words,
            recognised = stats.recognised,
            unknown = stats.unknown,
            "listing complete"
        );
        Ok(stats)
    }
}

//! MIPS-style instruction listing CLI.
//!
//! This binary provides a single entry point for the disassembler. It performs:
//! 1. **Listing:** Disassemble a file of 32-digit binary words into an address-annotated listing.
//! 2. **Word:** Decode one word given on the command line and show every field.

use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use mipsdis_core::config::Config;
use mipsdis_core::isa::decode::decode_fields;
use mipsdis_core::isa::disasm::render_mnemonic;
use mipsdis_core::isa::mnemonic::Mnemonic;
use mipsdis_core::listing::{self, Disassembler};
use mipsdis_core::DisasmError;
use mipsdis_core::stats::ListingStats;

#[derive(Parser, Debug)]
#[command(
    name = "mipsdis",
    author,
    version,
    about = "Disassembler for 32-bit MIPS-style instruction words",
    long_about = "Turn text files of 32-digit binary instruction words into address-annotated listings.\n\nExamples:\n  mipsdis listing input.txt -o output.txt\n  mipsdis listing input.txt --base-address 0 --no-stop --stats\n  mipsdis word 00000000001000100001100000100000\n  mipsdis word 0x00221820"
)]
struct Cli {
    /// Increase log verbosity (-v: debug, -vv: trace). `RUST_LOG` overrides this.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Disassemble a file with one 32-digit binary word per line.
    Listing {
        /// Input file of binary words.
        input: PathBuf,

        /// Output file (defaults to stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address of the first word (overrides the config).
        #[arg(long)]
        base_address: Option<u64>,

        /// Stop once this address is reached (overrides the config).
        #[arg(long, conflicts_with = "no_stop")]
        stop_address: Option<u64>,

        /// List every input word regardless of address.
        #[arg(long)]
        no_stop: bool,

        /// Log every decoded word with all of its fields.
        #[arg(long)]
        trace_words: bool,

        /// Print listing statistics to stderr.
        #[arg(long)]
        stats: bool,
    },

    /// Decode a single word given as 32 binary digits or `0x`-prefixed hex.
    Word {
        /// The instruction word.
        word: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Listing {
            input,
            output,
            config,
            base_address,
            stop_address,
            no_stop,
            trace_words,
            stats,
        } => {
            let overrides = Overrides {
                base_address,
                stop_address,
                no_stop,
                trace_words,
            };
            cmd_listing(&input, output.as_deref(), config.as_deref(), &overrides).map(|s| {
                if stats {
                    eprint!("{s}");
                }
            })
        }
        Commands::Word { word } => cmd_word(&word),
    };

    if let Err(e) = result {
        error!("{e}");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Command-line values that replace configuration entries.
#[derive(Debug)]
struct Overrides {
    base_address: Option<u64>,
    stop_address: Option<u64>,
    no_stop: bool,
    trace_words: bool,
}

impl Overrides {
    fn apply(&self, config: &mut Config) {
        if let Some(base) = self.base_address {
            config.listing.base_address = base;
        }
        if let Some(stop) = self.stop_address {
            config.listing.stop_address = Some(stop);
        }
        if self.no_stop {
            config.listing.stop_address = None;
        }
        if self.trace_words {
            config.general.trace_words = true;
        }
    }
}

/// Runs a listing: loads config, applies overrides, writes to `output` or stdout.
fn cmd_listing(
    input: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
    overrides: &Overrides,
) -> Result<ListingStats, DisasmError> {
    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    overrides.apply(&mut config);
    config.validate()?;
    debug!(?config, "listing configuration");

    let disasm = Disassembler::new(&config);
    match output {
        Some(path) => disasm.run_files(input, path),
        None => {
            let reader = BufReader::new(fs::File::open(input)?);
            let stdout = io::stdout();
            disasm.run(reader, BufWriter::new(stdout.lock()))
        }
    }
}

/// Decodes one word and prints its groups, fields, and rendering.
fn cmd_word(text: &str) -> Result<(), DisasmError> {
    let word = parse_word_arg(text)?;
    let fields = decode_fields(word);
    let format = Mnemonic::identify(&fields).map_or("-", |m| m.format().as_str());

    println!("bits          {}", listing::format_word(word));
    println!("hex           {word:#010x}");
    println!("format        {format}");
    println!("opcode        {}", fields.opcode);
    println!("rs            {}", fields.rs);
    println!("rt            {}", fields.rt);
    println!("rd            {}", fields.rd);
    println!("shamt         {}", fields.shamt);
    println!("funct         {}", fields.funct);
    println!("immediate     {}", fields.immediate);
    println!("jump_address  {}", fields.jump_address);
    println!("text          {}", render_mnemonic(&fields));
    Ok(())
}

/// Accepts either `0x`-prefixed hex or 32 binary digits.
fn parse_word_arg(text: &str) -> Result<u32, DisasmError> {
    let trimmed = text.trim();
    match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16).map_err(|e| DisasmError::InvalidWord {
            text: trimmed.to_string(),
            reason: e.to_string(),
        }),
        None => listing::parse_word(trimmed, 1),
    }
}

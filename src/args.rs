// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use line_counter_shared_kernel::{BufferSize, Separator};

use crate::{algorithms::Algorithm, config::OutputFormat, parsers};

#[derive(Parser, Debug)]
#[command(
    name = "line_counter",
    version,
    about = "Compare line counting strategies on one file"
)]
pub struct Args {
    /// File to count
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Strategy to run (repeatable; default: all)
    #[arg(short, long = "algorithm", value_enum)]
    pub algorithms: Vec<Algorithm>,

    /// Bytes per read for fixed-buffer strategies (e.g. 4096, 32K)
    #[arg(short, long, value_parser = parsers::parse_buffer_size)]
    pub buffer_size: Option<BufferSize>,

    /// Separator to count; supports \n, \r, \t, \0 and \\ escapes
    #[arg(short, long, value_parser = parsers::parse_separator)]
    pub separator: Option<Separator>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Fail unless every strategy reports exactly this count
    #[arg(long)]
    pub expect: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

// src/config.rs
use std::path::PathBuf;

use clap::ValueEnum;
use line_counter_shared_kernel::LineCount;
use log::LevelFilter;

use crate::{
    algorithms::{Algorithm, CounterSettings},
    args::Args,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub file: PathBuf,
    pub algorithms: Vec<Algorithm>,
    pub settings: CounterSettings,
    pub format: OutputFormat,
    pub expect: Option<LineCount>,
    pub log_level: LevelFilter,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        let algorithms = if args.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            args.algorithms
        };

        let log_level = if args.quiet {
            LevelFilter::Error
        } else {
            match args.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        Self {
            file: args.file,
            algorithms,
            settings: CounterSettings {
                buffer_size: args.buffer_size,
                separator: args.separator,
            },
            format: args.format,
            expect: args.expect.map(LineCount::new),
            log_level,
        }
    }
}

// src/main.rs
use std::{io, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use line_counter::{args::Args, algorithms::registry_for, config::RunConfig, presentation};
use line_counter_infra::FileReader;
use line_counter_usecase::CompareCounters;

fn main() -> ExitCode {
    let config = RunConfig::from(Args::parse());
    init_logging(&config);

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &RunConfig) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
}

/// Returns whether every strategy succeeded and matched the expected count.
fn run(config: &RunConfig) -> anyhow::Result<bool> {
    let mut file = FileReader::open(&config.file)?;
    let bytes = FileReader::byte_len(&file);

    let mut registry = registry_for(&config.algorithms, &config.settings);
    log::debug!("running {registry:?} on {}", config.file.display());

    let report = CompareCounters::new(&mut registry)
        .run(&mut file)
        .with_context(|| format!("comparing strategies on {}", config.file.display()))?;

    presentation::write_report(&mut io::stdout().lock(), &report, bytes, config)?;

    for run in report.failures() {
        log::error!("{} failed", run.algorithm);
    }
    let ok = match config.expect {
        Some(expected) => report.mismatches(expected).next().is_none(),
        None => report.failures().next().is_none(),
    };
    Ok(ok)
}

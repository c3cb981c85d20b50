// src/presentation.rs
use std::{io::Write, path::Path};

use line_counter_shared_kernel::LineCount;
use line_counter_usecase::{ComparisonReport, Outcome};
use serde::Serialize;

use crate::config::{OutputFormat, RunConfig};

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a Path,
    bytes: Option<u64>,
    agreed: Option<LineCount>,
    expected: Option<LineCount>,
    #[serde(flatten)]
    report: &'a ComparisonReport,
}

/// Write `report` in the configured format.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &ComparisonReport,
    bytes: Option<u64>,
    config: &RunConfig,
) -> anyhow::Result<()> {
    match config.format {
        OutputFormat::Table => write_table(out, report, bytes, config),
        OutputFormat::Json => {
            let json = JsonReport {
                file: &config.file,
                bytes,
                agreed: report.agreed(),
                expected: config.expect,
                report,
            };
            serde_json::to_writer_pretty(&mut *out, &json)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_table<W: Write>(
    out: &mut W,
    report: &ComparisonReport,
    bytes: Option<u64>,
    config: &RunConfig,
) -> anyhow::Result<()> {
    write!(out, "line_counter v{} · {}", crate::VERSION, config.file.display())?;
    match bytes {
        Some(bytes) => writeln!(out, " ({bytes} bytes)")?,
        None => writeln!(out)?,
    }
    writeln!(out)?;

    for run in &report.runs {
        write!(out, "{:>14}  ", format!("{:.3?}", run.elapsed))?;
        match &run.outcome {
            Outcome::Counted { lines } => {
                writeln!(out, "Algorithm: {}, lines: {lines}", run.algorithm)?;
            }
            Outcome::Failed { error, .. } => {
                writeln!(out, "Algorithm: {}, error: {error}", run.algorithm)?;
            }
        }
    }
    writeln!(out)?;

    match (report.agreed(), config.expect) {
        (Some(lines), Some(expected)) if lines != expected => {
            writeln!(out, "all strategies agree on {lines} lines, expected {expected}")?;
        }
        (Some(lines), _) => writeln!(out, "all strategies agree: {lines} lines")?,
        (None, _) => writeln!(out, "strategies disagree")?,
    }
    if let Some(fastest) = report.fastest() {
        writeln!(out, "fastest: {}", fastest.algorithm)?;
    }
    Ok(())
}

// src/algorithms.rs
use std::{fmt, str::FromStr};

use clap::ValueEnum;
use line_counter_infra::{ByteLoopCounter, IndexScanCounter, ScannerCounter, SubstringCounter};
use line_counter_ports::Counter;
use line_counter_shared_kernel::{BufferSize, CounterError, Separator};
use line_counter_usecase::CounterRegistry;

/// Selectable counting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum Algorithm {
    Scanner,
    Substring,
    IndexScan,
    ByteLoop,
}

impl Algorithm {
    pub const ALL: [Self; 4] = [Self::Scanner, Self::Substring, Self::IndexScan, Self::ByteLoop];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Scanner => ScannerCounter::NAME,
            Self::Substring => SubstringCounter::NAME,
            Self::IndexScan => IndexScanCounter::NAME,
            Self::ByteLoop => ByteLoopCounter::NAME,
        }
    }

    /// Builds a fresh instance. Unset settings are left for the strategy to
    /// default on its first count.
    pub fn build(self, settings: &CounterSettings) -> Box<dyn Counter> {
        let size = settings.buffer_size.map_or(0, BufferSize::get);
        let separator = settings
            .separator
            .as_ref()
            .map(|s| s.as_bytes().to_vec())
            .unwrap_or_default();

        match self {
            Self::Scanner => Box::new(ScannerCounter::new()),
            Self::Substring => Box::new(
                SubstringCounter::new()
                    .with_buffer_size(size)
                    .with_separator(separator),
            ),
            Self::IndexScan => Box::new(
                IndexScanCounter::new()
                    .with_buffer_size(size)
                    .with_separator(separator),
            ),
            Self::ByteLoop => Box::new(
                ByteLoopCounter::new()
                    .with_buffer_size(size)
                    .with_separator(separator),
            ),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CounterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CounterError::UnknownAlgorithm(s.to_string()))
    }
}

/// Settings shared by every fixed-buffer strategy in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterSettings {
    pub buffer_size: Option<BufferSize>,
    pub separator: Option<Separator>,
}

/// Registry holding `algorithms` in the given order, duplicates collapsed.
pub fn registry_for(algorithms: &[Algorithm], settings: &CounterSettings) -> CounterRegistry {
    algorithms.iter().map(|a| a.build(settings)).collect()
}

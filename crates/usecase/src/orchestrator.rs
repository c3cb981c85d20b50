use std::{io::SeekFrom, time::Instant};

use line_counter_ports::ByteSource;
use line_counter_shared_kernel::{CountResult, CounterError};

use crate::{
    dto::{ComparisonReport, RunOutcome},
    registry::CounterRegistry,
};

/// Runs every registered strategy against the same stream and times each.
pub struct CompareCounters<'a> {
    registry: &'a mut CounterRegistry,
}

impl<'a> CompareCounters<'a> {
    pub fn new(registry: &'a mut CounterRegistry) -> Self {
        Self { registry }
    }

    /// The stream is rewound before every run, so a strategy never sees the
    /// position left by the previous one. Strategy failures are recorded in
    /// the report rather than aborting the comparison.
    ///
    /// # Errors
    ///
    /// Returns `CounterError::Seek` if the stream cannot be rewound before a run.
    pub fn run(&mut self, source: &mut dyn ByteSource) -> CountResult<ComparisonReport> {
        if self.registry.is_empty() {
            log::warn!("no strategies registered; nothing to compare");
        }
        let mut runs = Vec::with_capacity(self.registry.len());

        for counter in self.registry.iter_mut() {
            source
                .seek(SeekFrom::Start(0))
                .map_err(|source| CounterError::Seek { source })?;

            let started = Instant::now();
            let result = counter.count(source);
            let elapsed = started.elapsed();

            match &result {
                Ok(lines) => log::info!("{} counted {lines} lines in {elapsed:?}", counter.name()),
                Err(err) => log::warn!("{} failed after {elapsed:?}: {err}", counter.name()),
            }
            runs.push(RunOutcome::new(counter.name(), result, elapsed));
        }

        Ok(ComparisonReport { runs })
    }
}

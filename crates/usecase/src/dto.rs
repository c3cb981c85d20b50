// crates/usecase/src/dto.rs
use std::time::Duration;

use line_counter_shared_kernel::{CountResult, LineCount};
use serde::{Serialize, Serializer};

/// Result of one strategy's run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Counted { lines: LineCount },
    Failed { error: String, partial: Option<usize> },
}

#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    pub algorithm: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl RunOutcome {
    pub fn new(algorithm: &'static str, result: CountResult<LineCount>, elapsed: Duration) -> Self {
        let outcome = match result {
            Ok(lines) => Outcome::Counted { lines },
            Err(err) => Outcome::Failed {
                partial: err.partial_count(),
                error: err.to_string(),
            },
        };
        Self { algorithm, outcome, elapsed }
    }

    pub fn lines(&self) -> Option<LineCount> {
        match self.outcome {
            Outcome::Counted { lines } => Some(lines),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Every strategy's outcome against the same stream.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComparisonReport {
    pub runs: Vec<RunOutcome>,
}

impl ComparisonReport {
    /// The shared count when every run succeeded with the same result.
    pub fn agreed(&self) -> Option<LineCount> {
        let mut lines = self.runs.iter().map(RunOutcome::lines);
        let first = lines.next()??;
        lines.all(|l| l == Some(first)).then_some(first)
    }

    pub fn failures(&self) -> impl Iterator<Item = &RunOutcome> {
        self.runs.iter().filter(|run| run.is_failure())
    }

    /// Runs whose count differs from `expected`, failures included.
    pub fn mismatches(&self, expected: LineCount) -> impl Iterator<Item = &RunOutcome> {
        self.runs.iter().filter(move |run| run.lines() != Some(expected))
    }

    pub fn fastest(&self) -> Option<&RunOutcome> {
        self.runs
            .iter()
            .filter(|run| !run.is_failure())
            .min_by_key(|run| run.elapsed)
    }
}

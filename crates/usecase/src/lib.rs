//! # Use Cases
//!
//! Application-level orchestration of counting strategies.
//!
//! - [`registry`]: named strategy instances selected at runtime
//! - [`orchestrator`]: runs every registered strategy against one stream
//! - [`dto`]: per-run outcomes and the comparison report
//!
//! Use cases depend on ports only; concrete strategies are wired in by the
//! binary.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod registry;

pub use dto::{ComparisonReport, Outcome, RunOutcome};
pub use orchestrator::CompareCounters;
pub use registry::CounterRegistry;

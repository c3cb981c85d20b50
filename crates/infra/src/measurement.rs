// crates/infra/src/measurement.rs
pub mod rewind;
pub mod strategies;

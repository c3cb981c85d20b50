// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod measurement;
pub mod persistence;

pub use measurement::{
    rewind::Rewind,
    strategies::{ByteLoopCounter, IndexScanCounter, ScannerCounter, SubstringCounter},
};
pub use persistence::FileReader;

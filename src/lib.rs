// src/lib.rs
// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

pub mod algorithms;
pub mod args;
pub mod config;
pub mod parsers;
pub mod presentation;

pub use algorithms::{Algorithm, CounterSettings};
pub use config::{OutputFormat, RunConfig};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

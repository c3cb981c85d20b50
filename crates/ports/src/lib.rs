//! # Ports
//!
//! Interface definitions shared by every counting strategy.
//!
//! - [`source`]: the seekable byte stream a counter reads from
//! - [`counter`]: the capability every strategy implements
//!
//! Strategies live in `line_counter_infra`; the registry that drives them
//! lives in `line_counter_usecase`.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod counter;
pub mod source;

pub use counter::Counter;
pub use source::ByteSource;

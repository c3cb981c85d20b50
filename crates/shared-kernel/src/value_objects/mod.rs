// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod settings;

pub use counts::LineCount;
pub use settings::{BufferSize, Separator};

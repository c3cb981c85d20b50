// crates/ports/src/source.rs
use std::io::{Read, Seek};

/// Caller-owned stream supporting reads and absolute seeks.
///
/// Blanket-implemented for every `Read + Seek` type, so files, cursors and
/// test doubles can be passed as `&mut dyn ByteSource`.
pub trait ByteSource: Read + Seek {}

impl<T: Read + Seek + ?Sized> ByteSource for T {}

// crates/infra/src/measurement/strategies.rs
pub mod byte_loop;
pub mod index_scan;
pub mod scanner;
pub mod substring;

use std::io::{self, ErrorKind, Read};

pub use byte_loop::ByteLoopCounter;
pub use index_scan::IndexScanCounter;
pub use scanner::ScannerCounter;
pub use substring::SubstringCounter;

/// Largest line the scanner accepts, and the index scan's default chunk.
pub const MAX_SCAN_TOKEN_SIZE: usize = 64 * 1024;

/// Single `read` call, retried only on `Interrupted`. `Ok(0)` is end-of-stream.
fn read_chunk<R: Read + ?Sized>(source: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match source.read(buf) {
            Err(err) if err.kind() == ErrorKind::Interrupted => {}
            other => return other,
        }
    }
}

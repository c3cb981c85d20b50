// crates/infra/src/measurement/strategies/index_scan.rs
use line_counter_ports::{ByteSource, Counter};
use line_counter_shared_kernel::{BufferSize, CountResult, CounterError, LineCount, Separator};

use super::{MAX_SCAN_TOKEN_SIZE, read_chunk};
use crate::measurement::rewind::Rewind;

pub const DEFAULT_BUFFER_SIZE: BufferSize = BufferSize::kib(MAX_SCAN_TOKEN_SIZE / 1024);

/// Fixed-buffer scan that jumps from one separator byte to the next.
///
/// Only the separator's first byte is searched for. A read error discards
/// whatever was counted before it: the error reports `counted == 0`.
#[derive(Debug, Clone, Default)]
pub struct IndexScanCounter {
    buffer_size: Option<BufferSize>,
    separator: Option<Separator>,
}

impl IndexScanCounter {
    pub const NAME: &'static str = "index-scan";

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_buffer_size(mut self, bytes: usize) -> Self {
        self.buffer_size = BufferSize::new(bytes);
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<Vec<u8>>) -> Self {
        self.separator = Separator::new(separator);
        self
    }

    pub fn buffer_size(&self) -> Option<BufferSize> {
        self.buffer_size
    }

    pub fn separator(&self) -> Option<&Separator> {
        self.separator.as_ref()
    }
}

impl Counter for IndexScanCounter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn count(&mut self, source: &mut dyn ByteSource) -> CountResult<LineCount> {
        let size = self.buffer_size.get_or_insert(DEFAULT_BUFFER_SIZE).get();
        let needle = self.separator.get_or_insert_with(Separator::newline).first_byte();

        let mut source = Rewind::new(source, Self::NAME);
        let mut buf = vec![0u8; size];
        let mut count = 0usize;

        loop {
            let filled = match read_chunk(&mut *source, &mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) => {
                    log::debug!("{}: discarding {count} after read error", Self::NAME);
                    return Err(CounterError::Read {
                        algorithm: Self::NAME,
                        counted: 0,
                        source: err,
                    });
                }
            };

            // Stale bytes past `filled` are never searched.
            let chunk = &buf[..filled];
            let mut cursor = 0;
            while let Some(offset) = memchr::memchr(needle, &chunk[cursor..]) {
                cursor += offset + 1;
                count += 1;
            }
        }

        log::debug!("{}: {count} separators", Self::NAME);
        Ok(LineCount::new(count))
    }
}

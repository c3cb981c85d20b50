// crates/infra/src/measurement/strategies/substring.rs
use line_counter_ports::{ByteSource, Counter};
use line_counter_shared_kernel::{BufferSize, CountResult, CounterError, LineCount, Separator};
use memchr::memmem;

use super::read_chunk;
use crate::measurement::rewind::Rewind;

pub const DEFAULT_BUFFER_SIZE: BufferSize = BufferSize::kib(32);

/// Fixed-buffer count of non-overlapping separator occurrences per chunk.
///
/// Each chunk is searched on its own, so a multi-byte separator split
/// across two reads is missed. Single-byte separators are always exact.
#[derive(Debug, Clone, Default)]
pub struct SubstringCounter {
    buffer_size: Option<BufferSize>,
    separator: Option<Separator>,
}

impl SubstringCounter {
    pub const NAME: &'static str = "substring";

    pub fn new() -> Self {
        Self::default()
    }

    /// Zero leaves the buffer size unset.
    #[must_use]
    pub fn with_buffer_size(mut self, bytes: usize) -> Self {
        self.buffer_size = BufferSize::new(bytes);
        self
    }

    /// An empty separator leaves it unset.
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

impl Counter for SubstringCounter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn count(&mut self, source: &mut dyn ByteSource) -> CountResult<LineCount> {
        let size = self.buffer_size.get_or_insert(DEFAULT_BUFFER_SIZE).get();
        let separator = self.separator.get_or_insert_with(Separator::newline);
        let finder = (!separator.is_single_byte()).then(|| memmem::Finder::new(separator.as_bytes()));
        let needle = separator.first_byte();

        let mut source = Rewind::new(source, Self::NAME);
        let mut buf = vec![0u8; size];
        let mut count = 0usize;

        loop {
            let filled = match read_chunk(&mut *source, &mut buf) {
                Ok(0) => break,
                Ok(n) => n,
                Err(err) => {
                    return Err(CounterError::Read {
                        algorithm: Self::NAME,
                        counted: count,
                        source: err,
                    });
                }
            };
            let chunk = &buf[..filled];
            count += match &finder {
                Some(finder) => finder.find_iter(chunk).count(),
                None => bytecount::count(chunk, needle),
            };
            log::trace!("{}: read {filled} bytes, {count} so far", Self::NAME);
        }

        log::debug!("{}: {count} separators", Self::NAME);
        Ok(LineCount::new(count))
    }
}

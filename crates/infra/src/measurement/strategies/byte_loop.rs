// crates/infra/src/measurement/strategies/byte_loop.rs
use line_counter_ports::{ByteSource, Counter};
use line_counter_shared_kernel::{BufferSize, CountResult, CounterError, LineCount, Separator};

use super::read_chunk;
use crate::measurement::rewind::Rewind;

pub const DEFAULT_BUFFER_SIZE: BufferSize = BufferSize::kib(8);

/// Fixed-buffer loop comparing every byte against `\n`.
///
/// The separator setting is stored (and defaulted) but never consulted.
#[derive(Debug, Clone, Default)]
pub struct ByteLoopCounter {
    buffer_size: Option<BufferSize>,
    separator: Option<Separator>,
}

impl ByteLoopCounter {
    pub const NAME: &'static str = "byte-loop";

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

impl Counter for ByteLoopCounter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn count(&mut self, source: &mut dyn ByteSource) -> CountResult<LineCount> {
        let size = self.buffer_size.get_or_insert(DEFAULT_BUFFER_SIZE).get();
        if self.separator.is_none() {
            self.separator = Some(Separator::newline());
        }

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
            for &byte in &buf[..filled] {
                if byte == b'\n' {
                    count += 1;
                }
            }
        }

        log::debug!("{}: {count} newlines", Self::NAME);
        Ok(LineCount::new(count))
    }
}

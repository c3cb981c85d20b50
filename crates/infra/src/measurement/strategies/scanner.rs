// crates/infra/src/measurement/strategies/scanner.rs
use std::io::{BufRead, BufReader, ErrorKind};

use line_counter_ports::{ByteSource, Counter};
use line_counter_shared_kernel::{BufferSize, CountResult, CounterError, LineCount};

use super::MAX_SCAN_TOKEN_SIZE;
use crate::measurement::rewind::Rewind;

const INITIAL_BUFFER_SIZE: usize = 4096;

pub const DEFAULT_MAX_LINE_LEN: BufferSize = BufferSize::kib(MAX_SCAN_TOKEN_SIZE / 1024);

/// 行単位のバッファ走査
///
/// Counts lines rather than separator bytes: a trailing line without a
/// terminating `\n` still counts. The separator setting does not apply.
#[derive(Debug, Clone, Default)]
pub struct ScannerCounter {
    max_line_len: Option<BufferSize>,
}

impl ScannerCounter {
    pub const NAME: &'static str = "scanner";

    pub fn new() -> Self {
        Self::default()
    }

    /// Zero leaves the limit unset.
    #[must_use]
    pub fn with_max_line_len(mut self, bytes: usize) -> Self {
        self.max_line_len = BufferSize::new(bytes);
        self
    }

    pub fn max_line_len(&self) -> Option<BufferSize> {
        self.max_line_len
    }
}

impl Counter for ScannerCounter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn count(&mut self, source: &mut dyn ByteSource) -> CountResult<LineCount> {
        let limit = self.max_line_len.get_or_insert(DEFAULT_MAX_LINE_LEN).get();

        let mut source = Rewind::new(source, Self::NAME);
        let mut reader = BufReader::with_capacity(INITIAL_BUFFER_SIZE, &mut *source);

        let mut lines = 0usize;
        // Length of the line still waiting for its terminator.
        let mut pending = 0usize;

        loop {
            let chunk = match reader.fill_buf() {
                Ok(chunk) => chunk,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    return Err(CounterError::Read {
                        algorithm: Self::NAME,
                        counted: lines,
                        source: err,
                    });
                }
            };
            if chunk.is_empty() {
                if pending > 0 {
                    lines += 1;
                }
                break;
            }

            let filled = chunk.len();
            let mut line_start = 0;
            for end in memchr::memchr_iter(b'\n', chunk) {
                if pending + (end - line_start) >= limit {
                    return Err(too_long(limit, lines));
                }
                lines += 1;
                pending = 0;
                line_start = end + 1;
            }
            pending += filled - line_start;
            if pending >= limit {
                return Err(too_long(limit, lines));
            }
            reader.consume(filled);
        }

        log::debug!("{}: {lines} lines", Self::NAME);
        Ok(LineCount::new(lines))
    }
}

fn too_long(limit: usize, counted: usize) -> CounterError {
    CounterError::LineTooLong {
        algorithm: ScannerCounter::NAME,
        limit,
        counted,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn count(data: &[u8]) -> CountResult<LineCount> {
        ScannerCounter::new().count(&mut Cursor::new(data.to_vec()))
    }

    #[test]
    fn counts_terminated_lines() {
        assert_eq!(count(b"a\nb\nc\n").unwrap(), 3usize);
    }

    #[test]
    fn counts_unterminated_last_line() {
        assert_eq!(count(b"a\nb").unwrap(), 2usize);
        assert_eq!(count(b"no newline").unwrap(), 1usize);
    }

    #[test]
    fn empty_lines_count() {
        assert_eq!(count(b"\n\n\n").unwrap(), 3usize);
        assert_eq!(count(b"").unwrap(), 0usize);
    }

    #[test]
    fn populates_default_limit() {
        let mut counter = ScannerCounter::new();
        assert_eq!(counter.max_line_len(), None);
        counter.count(&mut Cursor::new(b"x\n".to_vec())).unwrap();
        assert_eq!(counter.max_line_len(), Some(DEFAULT_MAX_LINE_LEN));
    }

    #[test]
    fn rejects_overlong_line() {
        let mut counter = ScannerCounter::new().with_max_line_len(8);
        let mut cursor = Cursor::new(b"ok\n0123456789\nok\n".to_vec());
        let err = counter.count(&mut cursor).unwrap_err();
        assert!(matches!(err, CounterError::LineTooLong { limit: 8, counted: 1, .. }));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn line_just_under_limit_is_accepted() {
        let mut counter = ScannerCounter::new().with_max_line_len(8);
        let mut cursor = Cursor::new(b"0123456\n".to_vec());
        assert_eq!(counter.count(&mut cursor).unwrap(), 1usize);
    }

    #[test]
    fn long_line_across_buffer_refills() {
        let mut data = vec![b'x'; INITIAL_BUFFER_SIZE * 3];
        data.push(b'\n');
        data.extend_from_slice(b"tail\n");
        assert_eq!(count(&data).unwrap(), 2usize);
    }
}

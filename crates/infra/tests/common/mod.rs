// crates/infra/tests/common/mod.rs
#![allow(dead_code)]

use std::{
    fs::File,
    io::{self, BufWriter, Cursor, Read, Seek, SeekFrom, Write},
    path::PathBuf,
};

use line_counter_infra::{ByteLoopCounter, IndexScanCounter, ScannerCounter, SubstringCounter};
use line_counter_ports::Counter;

/// Line count of the reference CSV the strategies were first compared on.
pub const REFERENCE_LINES: usize = 255_361;

/// Every strategy with its defaults.
pub fn all_counters() -> Vec<Box<dyn Counter>> {
    vec![
        Box::new(ScannerCounter::new()),
        Box::new(SubstringCounter::new()),
        Box::new(IndexScanCounter::new()),
        Box::new(ByteLoopCounter::new()),
    ]
}

/// Every strategy, fixed-buffer ones reading `size` bytes per call.
pub fn all_counters_with_buffer(size: usize) -> Vec<Box<dyn Counter>> {
    vec![
        Box::new(ScannerCounter::new()),
        Box::new(SubstringCounter::new().with_buffer_size(size)),
        Box::new(IndexScanCounter::new().with_buffer_size(size)),
        Box::new(ByteLoopCounter::new().with_buffer_size(size)),
    ]
}

/// CSV-shaped file with exactly `lines` newline-terminated rows.
pub struct ReferenceFile {
    _dir: tempfile::TempDir,
    pub path: PathBuf,
}

impl ReferenceFile {
    pub fn create(lines: usize) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("life-tables.csv");
        let mut writer = BufWriter::new(File::create(&path).unwrap());
        writeln!(writer, "region,sex,age,ex").unwrap();
        for row in 1..lines {
            writeln!(writer, "Region {},{},{},{}.{:02}", row % 17, row % 2, row % 101, 60 + row % 30, row % 100)
                .unwrap();
        }
        writer.flush().unwrap();
        Self { _dir: dir, path }
    }

    pub fn open(&self) -> File {
        File::open(&self.path).unwrap()
    }
}

/// Stream that serves `data` and then fails every read after `fail_after` bytes.
pub struct FailingSource {
    inner: Cursor<Vec<u8>>,
    fail_after: u64,
}

impl FailingSource {
    pub fn new(data: &[u8], fail_after: u64) -> Self {
        Self {
            inner: Cursor::new(data.to_vec()),
            fail_after,
        }
    }

    pub fn position(&self) -> u64 {
        self.inner.position()
    }
}

impl Read for FailingSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.fail_after.saturating_sub(self.inner.position());
        if remaining == 0 {
            return Err(io::Error::other("disk on fire"));
        }
        let len = buf.len().min(usize::try_from(remaining).unwrap_or(usize::MAX));
        self.inner.read(&mut buf[..len])
    }
}

impl Seek for FailingSource {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

/// Stream whose every other read is `ErrorKind::Interrupted`, starting with the first.
pub struct InterruptingSource {
    inner: Cursor<Vec<u8>>,
    interrupt_next: bool,
}

impl InterruptingSource {
    pub fn new(data: &[u8]) -> Self {
        Self {
            inner: Cursor::new(data.to_vec()),
            interrupt_next: true,
        }
    }

    pub fn position(&self) -> u64 {
        self.inner.position()
    }
}

impl Read for InterruptingSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let interrupt = self.interrupt_next;
        self.interrupt_next = !interrupt;
        if interrupt {
            return Err(io::ErrorKind::Interrupted.into());
        }
        self.inner.read(buf)
    }
}

impl Seek for InterruptingSource {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

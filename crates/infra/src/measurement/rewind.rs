// crates/infra/src/measurement/rewind.rs
//! ストリーム位置の復元ガード

use std::{
    io::{Seek, SeekFrom},
    ops::{Deref, DerefMut},
};

/// Borrows a stream for the duration of a scan and seeks it back to offset 0
/// when dropped, whichever way the scan exits.
///
/// A failed seek leaves the stream at an unknown position for every later
/// reader, so it panics instead of returning. With `panic = "abort"` in the
/// release profile this terminates the process.
pub struct Rewind<'a, S: Seek + ?Sized> {
    source: &'a mut S,
    algorithm: &'static str,
}

impl<'a, S: Seek + ?Sized> Rewind<'a, S> {
    pub fn new(source: &'a mut S, algorithm: &'static str) -> Self {
        Self { source, algorithm }
    }
}

impl<S: Seek + ?Sized> Deref for Rewind<'_, S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        self.source
    }
}

impl<S: Seek + ?Sized> DerefMut for Rewind<'_, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.source
    }
}

impl<S: Seek + ?Sized> Drop for Rewind<'_, S> {
    fn drop(&mut self) {
        if let Err(err) = self.source.seek(SeekFrom::Start(0)) {
            log::error!("{}: failed to rewind stream: {err}", self.algorithm);
            panic!("{}: failed to rewind stream: {err}", self.algorithm);
        }
        log::trace!("{}: stream rewound", self.algorithm);
    }
}

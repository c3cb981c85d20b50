// crates/shared-kernel/src/value_objects/settings.rs
use std::{fmt, num::NonZeroUsize};

/// Number of bytes requested from the stream per read call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BufferSize(NonZeroUsize);

impl BufferSize {
    /// Returns `None` for zero, which callers treat as "unset".
    #[inline]
    pub const fn new(bytes: usize) -> Option<Self> {
        match NonZeroUsize::new(bytes) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// `kib` キロバイトのバッファサイズ
    ///
    /// # Panics
    ///
    /// Panics when `kib` is zero. Only intended for constants.
    pub const fn kib(kib: usize) -> Self {
        match Self::new(kib * 1024) {
            Some(size) => size,
            None => panic!("buffer size must be positive"),
        }
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for BufferSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Delimiter whose occurrences are counted. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Separator(Vec<u8>);

impl Separator {
    /// Returns `None` for an empty delimiter, which callers treat as "unset".
    pub fn new(bytes: impl Into<Vec<u8>>) -> Option<Self> {
        let bytes = bytes.into();
        (!bytes.is_empty()).then_some(Self(bytes))
    }

    pub fn newline() -> Self {
        Self(vec![b'\n'])
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The only byte honoured by single-byte strategies.
    #[inline]
    pub fn first_byte(&self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn is_single_byte(&self) -> bool {
        self.0.len() == 1
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self::newline()
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}

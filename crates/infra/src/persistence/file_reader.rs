use std::{fs::File, path::Path};

use line_counter_shared_kernel::{CountResult, CounterError};

/// Convenience helpers for opening count targets with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` for counting.
    ///
    /// # Errors
    ///
    /// Returns `CounterError::Open` when the file cannot be opened.
    pub fn open(path: &Path) -> CountResult<File> {
        let file = File::open(path).map_err(|source| CounterError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("opened {}", path.display());
        Ok(file)
    }

    /// Size of the opened file in bytes, if the platform reports one.
    pub fn byte_len(file: &File) -> Option<u64> {
        file.metadata().ok().map(|meta| meta.len())
    }
}

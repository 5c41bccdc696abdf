//! Filesystem probing port.

use std::fs;
use std::path::Path;

/// Answers whether a candidate path is an existing regular file.
#[cfg_attr(test, mockall::automock)]
pub trait FileProbe: Send + Sync {
    fn is_file(&self, path: &Path) -> bool;
}

/// Probe backed by `std::fs::metadata`.
///
/// Follows symlinks. Any I/O error (missing file, permission denied) reads as
/// "not a file"; no handle outlives the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileProbe;

impl FileProbe for OsFileProbe {
    fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|meta| meta.is_file())
    }
}

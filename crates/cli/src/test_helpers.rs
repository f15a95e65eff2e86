//! Shared helpers for unit tests in this crate.
//! Integration tests have their own in `tests/integration_test_helpers.rs`.

use std::path::{Path, PathBuf};

/// Switches the process working directory for the lifetime of the guard.
///
/// Tests using it must be `#[serial]`, since the working directory is
/// process-wide.
pub struct DirGuard {
    original_dir: PathBuf,
}

impl DirGuard {
    pub fn new<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let original_dir = std::env::current_dir()?;
        std::env::set_current_dir(path.as_ref())?;
        Ok(Self { original_dir })
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

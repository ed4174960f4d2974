//! Fixture file lookup convention
//!
//! Fixture files live at `<cwd>/tests/files/<file_name>`, relative to
//! wherever the process's working directory happens to be at invocation
//! time. Existing fixture files depend on this layout; it is not
//! configurable.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Subdirectory fixture files are looked up in, relative to the working directory
const FILES_SUBDIR: &str = "tests/files";

/// Get the directory fixture files are looked up in
pub fn fixture_dir() -> io::Result<PathBuf> {
    Ok(env::current_dir()?.join(FILES_SUBDIR))
}

/// Resolve a relative fixture file name to its full lookup path
pub fn fixture_path(file_name: impl AsRef<Path>) -> io::Result<PathBuf> {
    Ok(fixture_dir()?.join(file_name))
}

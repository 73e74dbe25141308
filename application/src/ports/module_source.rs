//! Module source port.
//!
//! Defines how the loader reaches module files. The filesystem adapter lives
//! in the infrastructure layer; tests use an in-memory source.

use std::io;
use std::path::{Path, PathBuf};

/// Port for reading module files and scanning discovery directories.
pub trait ModuleSourcePort: Send + Sync {
    /// Read the full contents of a module file.
    ///
    /// A missing or unreadable file is an error; the loader never retries.
    fn read_module(&self, path: &Path) -> io::Result<String>;

    /// List the files directly inside `directory` whose extension is
    /// `extension`.
    ///
    /// A missing or unlistable directory is an error. An empty directory is
    /// `Ok(vec![])`. Order is whatever the source produces; the loader sorts.
    fn list_modules(&self, directory: &Path, extension: &str) -> io::Result<Vec<PathBuf>>;
}

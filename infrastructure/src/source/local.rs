//! Local file system module source
//!
//! This module provides the [`LocalModuleSource`] implementation of
//! [`ModuleSourcePort`] that reads module files from disk and scans
//! discovery directories with [`glob`].
//!
//! # Example
//!
//! ```ignore
//! use loader_infrastructure::LocalModuleSource;
//! use loader_application::ModuleSourcePort;
//! use std::path::Path;
//!
//! let source = LocalModuleSource::new();
//! let files = source.list_modules(Path::new("/app/src/main/php/di"), "php")?;
//! println!("Found {} DI modules", files.len());
//! ```

use glob::{Pattern, glob};
use loader_application::ModuleSourcePort;
use loader_domain::DiscoveryGroup;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Module source that reads from the local file system.
///
/// `LocalModuleSource` is stateless, `Send + Sync`, and never retries.
#[derive(Debug, Clone, Default)]
pub struct LocalModuleSource;

impl LocalModuleSource {
    /// Creates a new local module source.
    ///
    /// # Examples
    ///
    /// ```
    /// use loader_infrastructure::LocalModuleSource;
    ///
    /// let source = LocalModuleSource::new();
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Build the glob pattern for `*.<extension>` directly under `directory`.
    ///
    /// Both parts are escaped so that `[`, `*` or `?` in a directory name
    /// match literally.
    fn pattern(directory: &Path, extension: &str) -> String {
        let directory = Pattern::escape(&directory.to_string_lossy());
        let file_pattern = DiscoveryGroup::file_pattern(&Pattern::escape(extension));
        format!("{}/{}", directory.trim_end_matches('/'), file_pattern)
    }
}

impl ModuleSourcePort for LocalModuleSource {
    fn read_module(&self, path: &Path) -> io::Result<String> {
        let content = fs::read_to_string(path)?;
        debug!("Read {} bytes from {:?}", content.len(), path);
        Ok(content)
    }

    fn list_modules(&self, directory: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
        if !fs::metadata(directory)?.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} is not a directory", directory.display()),
            ));
        }
        // glob silently skips directories it cannot open
        fs::read_dir(directory)?;

        let pattern = Self::pattern(directory, extension);
        let entries = glob(&pattern)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(glob::GlobError::into_error)?;
            if path.is_file() {
                paths.push(path);
            }
        }

        debug!("Pattern {} matched {} file(s)", pattern, paths.len());
        Ok(paths)
    }
}

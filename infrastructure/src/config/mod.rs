//! Configuration file loading for manifest-loader
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MANIFEST_LOADER_*` environment overrides
//! 2. `--config <path>` specified file
//! 3. Project root: `./loader.toml` or `./.loader.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/manifest-loader/config.toml`
//! 5. Default values
//!
//! Configuration only fills in the built-in manifest; it cannot add, remove
//! or reorder phases.

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileLoaderConfig, FileModuleEntry};
pub use loader::ConfigLoader;

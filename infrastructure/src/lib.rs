//! Infrastructure layer for manifest-loader
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod source;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoaderConfig, FileModuleEntry,
};
pub use source::LocalModuleSource;

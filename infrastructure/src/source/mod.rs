//! Module sources: where module files are read from

mod local;

pub use local::LocalModuleSource;

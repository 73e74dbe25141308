//! Module registry
//!
//! Every module read during initialization is handed to a [`ModuleRegistry`]
//! owned by the caller, instead of being written into ambient global state.

pub mod entities;

pub use entities::{LoadedModule, ModuleOrigin, ModuleRegistry};

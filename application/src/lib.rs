//! Application layer for manifest-loader
//!
//! This crate contains the initialization use case and the port
//! definitions it depends on. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    module_source::ModuleSourcePort,
    progress::{LoadProgressNotifier, NoLoadProgress},
};
pub use use_cases::initialize::{InitializeOutput, InitializeUseCase, LoadError};
pub use use_cases::plan::{LoadPlan, PlannedGroup, PlannedModule, PlannedPhase};

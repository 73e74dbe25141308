//! Progress notification port
//!
//! Defines the interface for reporting progress during initialization.

use loader_domain::LoadedModule;
use std::path::Path;

/// Callback for progress updates during a loading pass
///
/// Implementations live in the presentation layer. All methods have empty
/// defaults, so implement only what you display.
pub trait LoadProgressNotifier: Send + Sync {
    /// Called when a phase starts
    ///
    /// `declared_modules` counts statically listed modules only; discovered
    /// files are reported through [`on_discovery`](Self::on_discovery).
    fn on_phase_start(
        &self,
        _phase: &str,
        _index: usize,
        _total_phases: usize,
        _declared_modules: usize,
    ) {
    }

    /// Called after a discovery directory has been scanned
    fn on_discovery(&self, _group: &str, _directory: &Path, _found: usize) {}

    /// Called after a module has been read into the registry
    fn on_module_loaded(&self, _module: &LoadedModule) {}

    /// Called when a path was already loaded and is skipped
    fn on_module_skipped(&self, _path: &Path) {}

    /// Called when a phase completes
    fn on_phase_complete(&self, _phase: &str, _loaded: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoLoadProgress;

impl LoadProgressNotifier for NoLoadProgress {}

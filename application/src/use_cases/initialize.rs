//! Initialize use case
//!
//! This module provides the [`InitializeUseCase`], the single entry point
//! that walks a [`Manifest`] phase by phase and reads every module into a
//! [`ModuleRegistry`].
//!
//! # Overview
//!
//! 1. **Validate** the manifest (unique groups, plain identifiers)
//! 2. **Plan**: resolve every directory and declared path against the anchor
//! 3. **Load** phases in order:
//!    - package groups: each list in declaration order, each identifier in
//!      list order
//!    - discovery groups: scan the directory, sort paths, load each
//!
//! The first failure aborts the pass; no later module is read and no
//! registry is returned.
//!
//! # Usage
//!
//! ```ignore
//! use loader_application::InitializeUseCase;
//! use loader_domain::{AnchorDirectory, Manifest};
//!
//! let anchor = AnchorDirectory::new("/app/src/main")?;
//! let use_case = InitializeUseCase::new(source, anchor);
//!
//! let output = use_case.execute(&Manifest::standard())?;
//! println!("Loaded {} modules", output.registry.len());
//! ```
//!
//! # Re-initialization
//!
//! A use case instance runs at most once. Any later call to
//! [`execute`](InitializeUseCase::execute) returns
//! [`LoadError::AlreadyInitialized`] without reading anything, whether the
//! first pass succeeded or failed.

use super::plan::{LoadPlan, PlannedGroup, PlannedModule};
use crate::ports::module_source::ModuleSourcePort;
use crate::ports::progress::{LoadProgressNotifier, NoLoadProgress};
use chrono::{DateTime, Utc};
use loader_domain::{
    AnchorDirectory, DomainError, LoadedModule, Manifest, ModuleOrigin, ModuleRegistry,
};
use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during initialization.
///
/// Every variant is fatal: the pass stops at the first error.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A group's path spec could not be resolved against the anchor.
    #[error("Invalid path spec in group '{group}': {source}")]
    InvalidPathSpec { group: String, source: DomainError },

    /// A declared module file is missing or unreadable.
    #[error("Module not found: {package}/{list}/{identifier} (expected at {})", path.display())]
    ModuleNotFound {
        package: String,
        list: String,
        identifier: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A discovery directory does not exist or cannot be listed.
    #[error("Failed to scan discovery group '{group}' at {}: {source}", directory.display())]
    DiscoveryScanFailed {
        group: String,
        directory: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file returned by a discovery scan could not be read.
    #[error("Discovered module in '{group}' is unreadable: {}", path.display())]
    DiscoveredModuleUnreadable {
        group: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The manifest failed validation before anything was loaded.
    #[error("Invalid manifest: {0}")]
    InvalidManifest(#[from] DomainError),

    /// This use case has already run.
    #[error("Loader has already been initialized")]
    AlreadyInitialized,
}

impl LoadError {
    /// Name of the group the error points at, if any
    pub fn group(&self) -> Option<&str> {
        match self {
            LoadError::InvalidPathSpec { group, .. }
            | LoadError::DiscoveryScanFailed { group, .. }
            | LoadError::DiscoveredModuleUnreadable { group, .. } => Some(group),
            LoadError::ModuleNotFound { package, .. } => Some(package),
            LoadError::InvalidManifest(_) | LoadError::AlreadyInitialized => None,
        }
    }
}

/// Output of a successful initialization.
#[derive(Debug, Clone, Serialize)]
pub struct InitializeOutput {
    /// Anchor every path was resolved against
    pub anchor: AnchorDirectory,

    /// Every loaded module, in load order
    pub registry: ModuleRegistry,

    /// Paths that came up again after already being loaded
    pub skipped: Vec<PathBuf>,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl InitializeOutput {
    /// Wall-clock time the pass took
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }

    pub fn into_registry(self) -> ModuleRegistry {
        self.registry
    }
}

/// Use case that performs the one loading pass of a process.
///
/// The anchor and module source are injected; the use case itself holds no
/// global state, so callers decide when to build one and keep the returned
/// registry.
pub struct InitializeUseCase {
    source: Arc<dyn ModuleSourcePort>,
    anchor: AnchorDirectory,
    started: AtomicBool,
}

impl InitializeUseCase {
    /// Creates a new InitializeUseCase.
    ///
    /// # Arguments
    ///
    /// * `source` - Where module files are read from
    /// * `anchor` - Directory all path specs are resolved against
    pub fn new(source: Arc<dyn ModuleSourcePort>, anchor: AnchorDirectory) -> Self {
        Self {
            source,
            anchor,
            started: AtomicBool::new(false),
        }
    }

    pub fn anchor(&self) -> &AnchorDirectory {
        &self.anchor
    }

    /// Whether [`execute`](Self::execute) has been called on this instance
    pub fn has_run(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Executes initialization without progress reporting.
    pub fn execute(&self, manifest: &Manifest) -> Result<InitializeOutput, LoadError> {
        self.execute_with_progress(manifest, &NoLoadProgress)
    }

    /// Executes initialization with progress notifications.
    ///
    /// # Errors
    ///
    /// - [`LoadError::AlreadyInitialized`] - this instance already ran
    /// - [`LoadError::InvalidManifest`] - manifest validation failed
    /// - [`LoadError::InvalidPathSpec`] - a spec underflows or is malformed
    /// - [`LoadError::ModuleNotFound`] - a declared module file is missing
    /// - [`LoadError::DiscoveryScanFailed`] - a discovery directory is missing
    /// - [`LoadError::DiscoveredModuleUnreadable`] - a scanned file vanished
    pub fn execute_with_progress(
        &self,
        manifest: &Manifest,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<InitializeOutput, LoadError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(LoadError::AlreadyInitialized);
        }

        manifest.validate()?;
        let plan = LoadPlan::build(&self.anchor, manifest)?;

        let started_at = Utc::now();
        let mut pass = LoadPass {
            source: self.source.as_ref(),
            progress,
            registry: ModuleRegistry::new(),
            skipped: Vec::new(),
        };

        info!(
            "Initializing {} phases from anchor {}",
            plan.phases.len(),
            self.anchor
        );

        let total_phases = plan.phases.len();
        for (index, phase) in plan.phases.iter().enumerate() {
            progress.on_phase_start(
                &phase.name,
                index,
                total_phases,
                phase.declared_module_count(),
            );
            let before = pass.registry.len();

            for group in &phase.groups {
                match group {
                    PlannedGroup::Package { name, modules, .. } => {
                        for module in modules {
                            pass.load_declared(&phase.name, name, module)?;
                        }
                    }
                    PlannedGroup::Discovery {
                        name, directory, ..
                    } => {
                        pass.load_discovered(&phase.name, name, directory, &plan.extension)?;
                    }
                }
            }

            let loaded = pass.registry.len() - before;
            info!("Phase {} loaded {} module(s)", phase.name, loaded);
            progress.on_phase_complete(&phase.name, loaded);
        }

        let finished_at = Utc::now();
        info!(
            "Initialization complete: {} module(s), {} skipped",
            pass.registry.len(),
            pass.skipped.len()
        );

        Ok(InitializeOutput {
            anchor: self.anchor.clone(),
            registry: pass.registry,
            skipped: pass.skipped,
            started_at,
            finished_at,
        })
    }
}

/// State of one loading pass
struct LoadPass<'a> {
    source: &'a dyn ModuleSourcePort,
    progress: &'a dyn LoadProgressNotifier,
    registry: ModuleRegistry,
    skipped: Vec<PathBuf>,
}

impl LoadPass<'_> {
    /// Returns `true` (after recording the skip) if `path` is already loaded.
    fn already_loaded(&mut self, path: &Path) -> bool {
        if !self.registry.contains(path) {
            return false;
        }
        self.progress.on_module_skipped(path);
        self.skipped.push(path.to_path_buf());
        true
    }

    fn register(&mut self, module: LoadedModule) {
        self.progress.on_module_loaded(&module);
        self.registry.register(module);
    }

    fn load_declared(
        &mut self,
        phase: &str,
        package: &str,
        module: &PlannedModule,
    ) -> Result<(), LoadError> {
        let origin = ModuleOrigin::declared(package, &module.list, &module.identifier);
        let path = module.path.as_path();

        if self.already_loaded(path) {
            debug!("Skipping {} ({} already loaded)", origin, path.display());
            return Ok(());
        }

        let source = self
            .source
            .read_module(path)
            .map_err(|source| LoadError::ModuleNotFound {
                package: package.to_string(),
                list: module.list.clone(),
                identifier: module.identifier.clone(),
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Loaded {} from {}", origin, path.display());
        self.register(LoadedModule::new(origin, phase, path, source));
        Ok(())
    }

    fn load_discovered(
        &mut self,
        phase: &str,
        group: &str,
        directory: &Path,
        extension: &str,
    ) -> Result<(), LoadError> {
        let mut paths = self
            .source
            .list_modules(directory, extension)
            .map_err(|source| LoadError::DiscoveryScanFailed {
                group: group.to_string(),
                directory: directory.to_path_buf(),
                source,
            })?;
        paths.sort();

        debug!(
            "Discovered {} file(s) for {} in {}",
            paths.len(),
            group,
            directory.display()
        );
        self.progress.on_discovery(group, directory, paths.len());

        for path in paths {
            if self.already_loaded(&path) {
                warn!(
                    "Discovered module {} was already loaded; skipping",
                    path.display()
                );
                continue;
            }

            let source = self.source.read_module(&path).map_err(|source| {
                LoadError::DiscoveredModuleUnreadable {
                    group: group.to_string(),
                    path: path.clone(),
                    source,
                }
            })?;

            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let origin = ModuleOrigin::discovered(group, file_name);
            debug!("Loaded {} from {}", origin, path.display());
            self.register(LoadedModule::new(origin, phase, path, source));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loader_domain::{
        DiscoveryGroup, LoadPhase, PackageGroup, PathSpec, PathSpecViolation, groups,
    };
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory module source that records every read
    #[derive(Default)]
    struct MemorySource {
        files: HashMap<PathBuf, String>,
        /// Directory listings, deliberately in non-sorted order
        directories: HashMap<PathBuf, Vec<PathBuf>>,
        reads: Mutex<Vec<PathBuf>>,
    }

    impl MemorySource {
        fn with_file(mut self, path: &str) -> Self {
            self.files
                .insert(PathBuf::from(path), format!("<?php // {path}"));
            self
        }

        fn with_directory(mut self, directory: &str, files: &[&str]) -> Self {
            let paths = files
                .iter()
                .map(|name| PathBuf::from(directory).join(name))
                .collect::<Vec<_>>();
            for path in &paths {
                self.files
                    .insert(path.clone(), format!("<?php // {}", path.display()));
            }
            self.directories.insert(PathBuf::from(directory), paths);
            self
        }

        fn reads(&self) -> Vec<String> {
            self.reads
                .lock()
                .unwrap()
                .iter()
                .map(|p| p.display().to_string())
                .collect()
        }
    }

    impl ModuleSourcePort for MemorySource {
        fn read_module(&self, path: &Path) -> io::Result<String> {
            self.reads.lock().unwrap().push(path.to_path_buf());
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }

        fn list_modules(&self, directory: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
            let listed = self
                .directories
                .get(directory)
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))?;
            Ok(listed
                .iter()
                .filter(|p| p.extension().is_some_and(|ext| ext == extension))
                .cloned()
                .collect())
        }
    }

    const ANCHOR: &str = "/app/src/main";

    fn anchor() -> AnchorDirectory {
        AnchorDirectory::new(ANCHOR).unwrap()
    }

    fn spec(raw: &str) -> PathSpec {
        raw.parse().unwrap()
    }

    /// models → repository → di (discovery)
    fn small_manifest() -> Manifest {
        Manifest::new("php")
            .with_phase(LoadPhase::single(
                PackageGroup::new("models", spec("./php"))
                    .with_list("models", ["UserModel", "OrderModel"]),
            ))
            .with_phase(LoadPhase::single(
                PackageGroup::new("repository", spec("./php"))
                    .with_list("repository", ["UserRepository"]),
            ))
            .with_phase(LoadPhase::single(DiscoveryGroup::new(
                "di",
                spec("./php/di"),
            )))
    }

    fn small_source() -> MemorySource {
        MemorySource::default()
            .with_file("/app/src/main/php/models/UserModel.php")
            .with_file("/app/src/main/php/models/OrderModel.php")
            .with_file("/app/src/main/php/repository/UserRepository.php")
            .with_directory("/app/src/main/php/di", &["Zeta.php", "Alpha.php"])
    }

    #[test]
    fn test_loads_in_phase_and_list_order() {
        let source = Arc::new(small_source());
        let use_case = InitializeUseCase::new(source.clone(), anchor());

        let output = use_case.execute(&small_manifest()).unwrap();

        let order: Vec<String> = output
            .registry
            .iter()
            .map(|m| m.origin.to_string())
            .collect();
        assert_eq!(
            order,
            vec![
                "models/models/UserModel",
                "models/models/OrderModel",
                "repository/repository/UserRepository",
                "di/Alpha.php",
                "di/Zeta.php",
            ]
        );
        assert!(output.skipped.is_empty());
        assert_eq!(output.registry.in_phase("models").count(), 2);
    }

    #[test]
    fn test_second_execute_is_rejected_without_reads() {
        let source = Arc::new(small_source());
        let use_case = InitializeUseCase::new(source.clone(), anchor());

        use_case.execute(&small_manifest()).unwrap();
        let reads_after_first = source.reads().len();
        assert_eq!(reads_after_first, 5);

        let err = use_case.execute(&small_manifest()).unwrap_err();
        assert!(matches!(err, LoadError::AlreadyInitialized));
        assert_eq!(source.reads().len(), reads_after_first);
        assert!(use_case.has_run());
    }

    #[test]
    fn test_each_declared_module_is_read_once() {
        let source = Arc::new(small_source());
        let use_case = InitializeUseCase::new(source.clone(), anchor());
        use_case.execute(&small_manifest()).unwrap();

        let reads = source.reads();
        let user_model_reads = reads
            .iter()
            .filter(|p| p.ends_with("UserModel.php"))
            .count();
        assert_eq!(user_model_reads, 1);
    }

    #[test]
    fn test_duplicate_path_is_skipped() {
        let manifest = Manifest::new("php")
            .with_phase(LoadPhase::single(
                PackageGroup::new("models", spec("./php")).with_list("models", ["UserModel"]),
            ))
            .with_phase(LoadPhase::single(
                PackageGroup::new("legacy", spec("./php")).with_list("models", ["UserModel"]),
            ));
        let source = Arc::new(small_source());
        let use_case = InitializeUseCase::new(source.clone(), anchor());

        let output = use_case.execute(&manifest).unwrap();
        assert_eq!(output.registry.len(), 1);
        assert_eq!(
            output.skipped,
            vec![PathBuf::from("/app/src/main/php/models/UserModel.php")]
        );
        assert_eq!(source.reads().len(), 1);
    }

    #[test]
    fn test_discovered_path_already_declared_is_skipped() {
        let manifest = Manifest::new("php")
            .with_phase(LoadPhase::single(
                PackageGroup::new("bootstrap", spec("./php")).with_list("di", ["Container"]),
            ))
            .with_phase(LoadPhase::single(DiscoveryGroup::new(
                "di",
                spec("./php/di"),
            )));
        let source = Arc::new(
            MemorySource::default().with_directory("/app/src/main/php/di", &["Container.php"]),
        );
        let use_case = InitializeUseCase::new(source.clone(), anchor());

        let output = use_case.execute(&manifest).unwrap();

        let container = PathBuf::from("/app/src/main/php/di/Container.php");
        assert_eq!(source.reads(), vec![container.display().to_string()]);
        assert_eq!(output.registry.len(), 1);
        assert_eq!(
            output.registry.get(&container).map(|m| m.origin.to_string()),
            Some("bootstrap/di/Container".to_string())
        );
        assert_eq!(output.skipped, vec![container]);
    }

    #[test]
    fn test_execute_after_failed_pass_is_rejected() {
        let source = Arc::new(MemorySource::default());
        let use_case = InitializeUseCase::new(source.clone(), anchor());

        let first = use_case.execute(&small_manifest()).unwrap_err();
        assert!(matches!(first, LoadError::ModuleNotFound { .. }));
        let reads_after_first = source.reads().len();
        assert_eq!(reads_after_first, 1);

        let second = use_case.execute(&small_manifest()).unwrap_err();
        assert!(matches!(second, LoadError::AlreadyInitialized));
        assert_eq!(source.reads().len(), reads_after_first);
        assert!(use_case.has_run());
    }

    #[test]
    fn test_missing_module_aborts_later_phases() {
        let source = Arc::new(
            MemorySource::default()
                .with_file("/app/src/main/php/models/UserModel.php")
                .with_file("/app/src/main/php/repository/UserRepository.php")
                .with_directory("/app/src/main/php/di", &["Alpha.php"]),
        );
        let use_case = InitializeUseCase::new(source.clone(), anchor());

        let err = use_case.execute(&small_manifest()).unwrap_err();
        match err {
            LoadError::ModuleNotFound {
                package,
                list,
                identifier,
                path,
                ..
            } => {
                assert_eq!(package, "models");
                assert_eq!(list, "models");
                assert_eq!(identifier, "OrderModel");
                assert_eq!(path, PathBuf::from("/app/src/main/php/models/OrderModel.php"));
            }
            other => panic!("expected ModuleNotFound, got {other:?}"),
        }

        let reads = source.reads();
        assert!(!reads.iter().any(|p| p.contains("repository")));
        assert!(!reads.iter().any(|p| p.contains("/di/")));
    }

    #[test]
    fn test_module_not_found_message_names_module() {
        let source = Arc::new(MemorySource::default());
        let use_case = InitializeUseCase::new(source, anchor());

        let err = use_case.execute(&Manifest::standard()).unwrap_err();
        assert_eq!(err.group(), Some(groups::DATABASE));
        assert_eq!(
            err.to_string(),
            "Module not found: database/db/main_database \
             (expected at /app/src/main/php/database/db/main_database.php)"
        );
    }

    #[test]
    fn test_empty_discovery_directory_is_not_an_error() {
        let manifest = Manifest::new("php").with_phase(LoadPhase::single(DiscoveryGroup::new(
            groups::GENERATED,
            spec("../../build/generated"),
        )));
        let source = Arc::new(MemorySource::default().with_directory("/app/build/generated", &[]));
        let use_case = InitializeUseCase::new(source.clone(), anchor());

        let output = use_case.execute(&manifest).unwrap();
        assert!(output.registry.is_empty());
        assert!(source.reads().is_empty());
    }

    #[test]
    fn test_missing_discovery_directory_fails_scan() {
        let manifest = Manifest::new("php").with_phase(LoadPhase::single(DiscoveryGroup::new(
            "di",
            spec("./php/di"),
        )));
        let use_case = InitializeUseCase::new(Arc::new(MemorySource::default()), anchor());

        let err = use_case.execute(&manifest).unwrap_err();
        let LoadError::DiscoveryScanFailed { group, directory, .. } = err else {
            panic!("expected DiscoveryScanFailed");
        };
        assert_eq!(group, "di");
        assert_eq!(directory, PathBuf::from("/app/src/main/php/di"));
    }

    #[test]
    fn test_discovery_ignores_other_extensions() {
        let manifest = Manifest::new("php").with_phase(LoadPhase::single(DiscoveryGroup::new(
            "di",
            spec("./php/di"),
        )));
        let source = Arc::new(
            MemorySource::default()
                .with_directory("/app/src/main/php/di", &["Container.php", "notes.txt"]),
        );
        let use_case = InitializeUseCase::new(source, anchor());

        let output = use_case.execute(&manifest).unwrap();
        assert_eq!(output.registry.len(), 1);
        assert_eq!(output.registry.modules()[0].origin.to_string(), "di/Container.php");
    }

    #[test]
    fn test_underflowing_spec_fails_before_any_read() {
        let shallow = AnchorDirectory::new("/main").unwrap();
        let source = Arc::new(small_source());
        let use_case = InitializeUseCase::new(source.clone(), shallow);

        let err = use_case.execute(&Manifest::standard()).unwrap_err();
        let LoadError::InvalidPathSpec { group, source: cause } = err else {
            panic!("expected InvalidPathSpec");
        };
        assert_eq!(group, groups::LIBS);
        assert!(matches!(
            cause,
            DomainError::InvalidPathSpec {
                reason: PathSpecViolation::Underflow { .. },
                ..
            }
        ));
        assert!(source.reads().is_empty());
    }

    #[test]
    fn test_invalid_manifest_is_rejected() {
        let manifest = Manifest::new("php").with_phase(LoadPhase::single(
            PackageGroup::new("models", spec("./php")).with_list("models", ["../escape"]),
        ));
        let use_case = InitializeUseCase::new(Arc::new(small_source()), anchor());

        let err = use_case.execute(&manifest).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidManifest(DomainError::InvalidModuleIdentifier { .. })
        ));
    }

    #[test]
    fn test_standard_manifest_with_minimal_tree() {
        let source = Arc::new(
            MemorySource::default()
                .with_file("/app/src/main/php/database/tables/user_table.php")
                .with_file("/app/src/main/php/database/db/main_database.php")
                .with_directory("/app/src/main/php/di", &[])
                .with_directory("/app/build/generated", &["UserDto.php"]),
        );
        let mut manifest = Manifest::standard();
        manifest
            .add_modules(groups::DATABASE, "tables", ["user_table"])
            .unwrap();

        let use_case = InitializeUseCase::new(source, anchor());
        let output = use_case.execute(&manifest).unwrap();

        let paths: Vec<String> = output
            .registry
            .iter()
            .map(|m| m.path.display().to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "/app/src/main/php/database/tables/user_table.php",
                "/app/src/main/php/database/db/main_database.php",
                "/app/build/generated/UserDto.php",
            ]
        );
        assert!(output.elapsed() >= chrono::Duration::zero());
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl LoadProgressNotifier for RecordingProgress {
        fn on_phase_start(&self, phase: &str, index: usize, total: usize, declared: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start {phase} {index}/{total} ({declared})"));
        }

        fn on_discovery(&self, group: &str, _directory: &Path, found: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("discover {group} {found}"));
        }

        fn on_module_loaded(&self, module: &LoadedModule) {
            self.events
                .lock()
                .unwrap()
                .push(format!("load {}", module.origin));
        }

        fn on_phase_complete(&self, phase: &str, loaded: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done {phase} {loaded}"));
        }
    }

    #[test]
    fn test_progress_callbacks_follow_load_order() {
        let use_case = InitializeUseCase::new(Arc::new(small_source()), anchor());
        let progress = RecordingProgress::default();

        use_case
            .execute_with_progress(&small_manifest(), &progress)
            .unwrap();

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                "start models 0/3 (2)",
                "load models/models/UserModel",
                "load models/models/OrderModel",
                "done models 2",
                "start repository 1/3 (1)",
                "load repository/repository/UserRepository",
                "done repository 1",
                "start di 2/3 (0)",
                "discover di 2",
                "load di/Alpha.php",
                "load di/Zeta.php",
                "done di 2",
            ]
        );
    }
}

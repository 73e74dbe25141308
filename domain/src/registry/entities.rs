//! Loaded modules and the registry that owns them

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a loaded module came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModuleOrigin {
    /// Listed by identifier in a package group
    Declared {
        package: String,
        list: String,
        identifier: String,
    },
    /// Found by scanning a discovery group's directory
    Discovered { group: String, file_name: String },
}

impl ModuleOrigin {
    pub fn declared(
        package: impl Into<String>,
        list: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        ModuleOrigin::Declared {
            package: package.into(),
            list: list.into(),
            identifier: identifier.into(),
        }
    }

    pub fn discovered(group: impl Into<String>, file_name: impl Into<String>) -> Self {
        ModuleOrigin::Discovered {
            group: group.into(),
            file_name: file_name.into(),
        }
    }

    /// Name of the group that produced the module
    pub fn group(&self) -> &str {
        match self {
            ModuleOrigin::Declared { package, .. } => package,
            ModuleOrigin::Discovered { group, .. } => group,
        }
    }
}

impl fmt::Display for ModuleOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleOrigin::Declared {
                package,
                list,
                identifier,
            } => write!(f, "{package}/{list}/{identifier}"),
            ModuleOrigin::Discovered { group, file_name } => write!(f, "{group}/{file_name}"),
        }
    }
}

/// A module file whose contents have been read into the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedModule {
    pub origin: ModuleOrigin,
    /// Phase the module was loaded in
    pub phase: String,
    /// Resolved absolute path
    pub path: PathBuf,
    #[serde(skip_serializing)]
    pub source: String,
}

impl LoadedModule {
    pub fn new(
        origin: ModuleOrigin,
        phase: impl Into<String>,
        path: impl Into<PathBuf>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            origin,
            phase: phase.into(),
            path: path.into(),
            source: source.into(),
        }
    }

    /// Size of the module source in bytes
    pub fn size(&self) -> usize {
        self.source.len()
    }
}

/// Registry of every module loaded during initialization.
///
/// Modules are kept in load order. A path can only be registered once, which
/// is what gives the loader its at-most-once guarantee.
///
/// # Examples
///
/// ```
/// use loader_domain::{LoadedModule, ModuleOrigin, ModuleRegistry};
///
/// let mut registry = ModuleRegistry::new();
/// let module = LoadedModule::new(
///     ModuleOrigin::declared("models", "models", "UserModel"),
///     "models",
///     "/app/src/main/php/models/UserModel.php",
///     "<?php class UserModel {}",
/// );
///
/// assert!(registry.register(module.clone()));
/// assert!(!registry.register(module));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModuleRegistry {
    modules: Vec<LoadedModule>,
    #[serde(skip)]
    by_path: HashMap<PathBuf, usize>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module, returning `false` if its path is already present.
    pub fn register(&mut self, module: LoadedModule) -> bool {
        if self.by_path.contains_key(&module.path) {
            return false;
        }
        self.by_path.insert(module.path.clone(), self.modules.len());
        self.modules.push(module);
        true
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.by_path.contains_key(path)
    }

    pub fn get(&self, path: &Path) -> Option<&LoadedModule> {
        self.by_path.get(path).map(|&index| &self.modules[index])
    }

    /// Look up a declared module by package, list and identifier
    pub fn find_declared(
        &self,
        package: &str,
        list: &str,
        identifier: &str,
    ) -> Option<&LoadedModule> {
        self.modules.iter().find(|module| {
            matches!(
                &module.origin,
                ModuleOrigin::Declared { package: p, list: l, identifier: i }
                    if p == package && l == list && i == identifier
            )
        })
    }

    /// Modules loaded in `phase`, in load order
    pub fn in_phase<'a>(&'a self, phase: &'a str) -> impl Iterator<Item = &'a LoadedModule> + 'a {
        self.modules.iter().filter(move |module| module.phase == phase)
    }

    /// All modules in load order
    pub fn modules(&self) -> &[LoadedModule] {
        &self.modules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LoadedModule> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Total bytes of loaded source
    pub fn total_size(&self) -> usize {
        self.modules.iter().map(LoadedModule::size).sum()
    }
}

impl<'a> IntoIterator for &'a ModuleRegistry {
    type Item = &'a LoadedModule;
    type IntoIter = std::slice::Iter<'a, LoadedModule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(phase: &str, identifier: &str) -> LoadedModule {
        LoadedModule::new(
            ModuleOrigin::declared(phase, phase, identifier),
            phase,
            format!("/app/php/{phase}/{identifier}.php"),
            format!("<?php // {identifier}"),
        )
    }

    #[test]
    fn test_register_rejects_same_path() {
        let mut registry = ModuleRegistry::new();
        assert!(registry.register(module("models", "UserModel")));
        assert!(!registry.register(module("models", "UserModel")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_modules_keep_load_order() {
        let mut registry = ModuleRegistry::new();
        registry.register(module("models", "UserModel"));
        registry.register(module("models", "OrderModel"));
        registry.register(module("repository", "UserRepository"));

        let order: Vec<String> = registry.iter().map(|m| m.origin.to_string()).collect();
        assert_eq!(
            order,
            vec![
                "models/models/UserModel",
                "models/models/OrderModel",
                "repository/repository/UserRepository"
            ]
        );
    }

    #[test]
    fn test_lookup_by_path_and_origin() {
        let mut registry = ModuleRegistry::new();
        registry.register(module("models", "UserModel"));

        let path = Path::new("/app/php/models/UserModel.php");
        assert!(registry.contains(path));
        assert_eq!(registry.get(path).unwrap().phase, "models");
        assert!(registry.find_declared("models", "models", "UserModel").is_some());
        assert!(registry.find_declared("models", "models", "OrderModel").is_none());
    }

    #[test]
    fn test_in_phase_filters() {
        let mut registry = ModuleRegistry::new();
        registry.register(module("models", "UserModel"));
        registry.register(module("views", "Home"));
        assert_eq!(registry.in_phase("views").count(), 1);
        assert_eq!(registry.in_phase("core").count(), 0);
    }

    #[test]
    fn test_discovered_origin_display() {
        let origin = ModuleOrigin::discovered("generated", "UserDto.php");
        assert_eq!(origin.to_string(), "generated/UserDto.php");
        assert_eq!(origin.group(), "generated");
    }

    #[test]
    fn test_serialization_omits_source() {
        let mut registry = ModuleRegistry::new();
        registry.register(module("models", "UserModel"));

        let value = serde_json::to_value(&registry).unwrap();
        let first = &value["modules"][0];
        assert_eq!(first["origin"]["kind"], "declared");
        assert_eq!(first["origin"]["identifier"], "UserModel");
        assert!(first.get("source").is_none());
    }
}

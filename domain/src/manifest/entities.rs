//! Manifest entities: groups, phases and the manifest itself

use crate::core::error::DomainError;
use crate::path::PathSpec;
use serde::Serialize;
use std::collections::HashSet;

/// Extension of module files when none is configured
pub const DEFAULT_MODULE_EXTENSION: &str = "php";

/// A named, ordered list of module identifiers inside a package group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleList {
    pub name: String,
    pub identifiers: Vec<String>,
}

impl ModuleList {
    pub fn new<I, S>(name: impl Into<String>, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            identifiers: identifiers.into_iter().map(Into::into).collect(),
        }
    }
}

/// A group whose members are declared up front.
///
/// Every identifier in list `L` maps to `directory/L/identifier.<ext>`.
/// A group may declare a directory and no lists at all; loading it is then
/// a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageGroup {
    name: String,
    directory: PathSpec,
    lists: Vec<ModuleList>,
}

impl PackageGroup {
    pub fn new(name: impl Into<String>, directory: PathSpec) -> Self {
        Self {
            name: name.into(),
            directory,
            lists: Vec::new(),
        }
    }

    /// Add a list at the end of the declaration order
    pub fn with_list<I, S>(mut self, name: impl Into<String>, identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lists.push(ModuleList::new(name, identifiers));
        self
    }

    /// Append identifiers to `list`, creating the list if it is new.
    pub fn extend_list<I, S>(&mut self, list: &str, identifiers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identifiers = identifiers.into_iter().map(Into::into);
        match self.lists.iter_mut().find(|l| l.name == list) {
            Some(existing) => existing.identifiers.extend(identifiers),
            None => self.lists.push(ModuleList {
                name: list.to_string(),
                identifiers: identifiers.collect(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &PathSpec {
        &self.directory
    }

    pub fn lists(&self) -> &[ModuleList] {
        &self.lists
    }

    /// Number of declared modules across all lists
    pub fn module_count(&self) -> usize {
        self.lists.iter().map(|l| l.identifiers.len()).sum()
    }

    /// Spec of one module file, relative to the same anchor as the group
    pub fn module_spec(
        &self,
        list: &str,
        identifier: &str,
        extension: &str,
    ) -> Result<PathSpec, DomainError> {
        self.directory.join(&format!("{list}/{identifier}.{extension}"))
    }
}

/// A group whose members are found by scanning its directory at load time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryGroup {
    name: String,
    directory: PathSpec,
}

impl DiscoveryGroup {
    pub fn new(name: impl Into<String>, directory: PathSpec) -> Self {
        Self {
            name: name.into(),
            directory,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn directory(&self) -> &PathSpec {
        &self.directory
    }

    /// File-name pattern members must match
    pub fn file_pattern(extension: &str) -> String {
        format!("*.{extension}")
    }
}

/// One unit of a load phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadGroup {
    Package(PackageGroup),
    Discovery(DiscoveryGroup),
}

impl LoadGroup {
    pub fn name(&self) -> &str {
        match self {
            LoadGroup::Package(group) => group.name(),
            LoadGroup::Discovery(group) => group.name(),
        }
    }

    pub fn directory(&self) -> &PathSpec {
        match self {
            LoadGroup::Package(group) => group.directory(),
            LoadGroup::Discovery(group) => group.directory(),
        }
    }

    pub fn is_discovery(&self) -> bool {
        matches!(self, LoadGroup::Discovery(_))
    }
}

impl From<PackageGroup> for LoadGroup {
    fn from(group: PackageGroup) -> Self {
        LoadGroup::Package(group)
    }
}

impl From<DiscoveryGroup> for LoadGroup {
    fn from(group: DiscoveryGroup) -> Self {
        LoadGroup::Discovery(group)
    }
}

/// A step of the fixed loading sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadPhase {
    name: String,
    groups: Vec<LoadGroup>,
}

impl LoadPhase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            groups: Vec::new(),
        }
    }

    /// A phase holding a single group and named after it
    pub fn single(group: impl Into<LoadGroup>) -> Self {
        let group = group.into();
        Self {
            name: group.name().to_string(),
            groups: vec![group],
        }
    }

    pub fn with_group(mut self, group: impl Into<LoadGroup>) -> Self {
        self.groups.push(group.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn groups(&self) -> &[LoadGroup] {
        &self.groups
    }
}

/// The complete loading manifest.
///
/// Phases run in the order they were added; nothing reorders them.
///
/// # Examples
///
/// ```
/// use loader_domain::{LoadPhase, Manifest, PackageGroup, PathSpec};
///
/// let models = PackageGroup::new("models", "./php".parse::<PathSpec>().unwrap())
///     .with_list("models", ["UserModel", "OrderModel"]);
///
/// let manifest = Manifest::new("php").with_phase(LoadPhase::single(models));
/// assert_eq!(manifest.declared_module_count(), 2);
/// assert!(manifest.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    extension: String,
    phases: Vec<LoadPhase>,
}

impl Manifest {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            phases: Vec::new(),
        }
    }

    pub fn with_phase(mut self, phase: LoadPhase) -> Self {
        self.phases.push(phase);
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Module file extension, without the dot
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn phases(&self) -> &[LoadPhase] {
        &self.phases
    }

    /// All groups in load order
    pub fn groups(&self) -> impl Iterator<Item = &LoadGroup> {
        self.phases.iter().flat_map(|phase| phase.groups.iter())
    }

    pub fn group(&self, name: &str) -> Option<&LoadGroup> {
        self.groups().find(|group| group.name() == name)
    }

    /// Declare more modules in an existing package group.
    ///
    /// Identifiers are appended to `list`; an unknown list is added after the
    /// group's existing lists. The phase order never changes.
    pub fn add_modules<I, S>(
        &mut self,
        group: &str,
        list: &str,
        identifiers: I,
    ) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let target = self
            .phases
            .iter_mut()
            .flat_map(|phase| phase.groups.iter_mut())
            .find(|g| g.name() == group)
            .ok_or_else(|| DomainError::UnknownGroup(group.to_string()))?;

        match target {
            LoadGroup::Package(package) => {
                package.extend_list(list, identifiers);
                Ok(())
            }
            LoadGroup::Discovery(_) => Err(DomainError::NotAPackageGroup(group.to_string())),
        }
    }

    /// Total number of statically declared modules
    pub fn declared_module_count(&self) -> usize {
        self.groups()
            .map(|group| match group {
                LoadGroup::Package(package) => package.module_count(),
                LoadGroup::Discovery(_) => 0,
            })
            .sum()
    }

    /// Check group names are unique and every list name and identifier is a
    /// single plain path segment.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();

        for group in self.groups() {
            if !seen.insert(group.name()) {
                return Err(DomainError::DuplicateGroup(group.name().to_string()));
            }

            let LoadGroup::Package(package) = group else {
                continue;
            };

            for list in package.lists() {
                for identifier in &list.identifiers {
                    if !is_plain_segment(&list.name) || !is_plain_segment(identifier) {
                        return Err(DomainError::InvalidModuleIdentifier {
                            group: package.name().to_string(),
                            list: list.name.clone(),
                            identifier: identifier.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::standard()
    }
}

fn is_plain_segment(value: &str) -> bool {
    !value.is_empty() && value != "." && value != ".." && !value.contains(['/', '\\'])
}

//! Load plan: a manifest with every path resolved
//!
//! Building a [`LoadPlan`] performs all path arithmetic for a manifest
//! without touching any module. The initializer walks a plan, and the CLI
//! prints one for `--plan`.

use super::initialize::LoadError;
use loader_domain::{AnchorDirectory, DiscoveryGroup, LoadGroup, Manifest};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A declared module and the file it resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedModule {
    pub list: String,
    pub identifier: String,
    pub path: PathBuf,
}

/// A group with its directory resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlannedGroup {
    Package {
        name: String,
        directory: PathBuf,
        modules: Vec<PlannedModule>,
    },
    Discovery {
        name: String,
        directory: PathBuf,
        pattern: String,
    },
}

impl PlannedGroup {
    pub fn name(&self) -> &str {
        match self {
            PlannedGroup::Package { name, .. } | PlannedGroup::Discovery { name, .. } => name,
        }
    }

    pub fn directory(&self) -> &Path {
        match self {
            PlannedGroup::Package { directory, .. } | PlannedGroup::Discovery { directory, .. } => {
                directory
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedPhase {
    pub name: String,
    pub groups: Vec<PlannedGroup>,
}

impl PlannedPhase {
    /// Number of statically declared modules in this phase
    pub fn declared_module_count(&self) -> usize {
        self.groups
            .iter()
            .map(|group| match group {
                PlannedGroup::Package { modules, .. } => modules.len(),
                PlannedGroup::Discovery { .. } => 0,
            })
            .sum()
    }
}

/// Resolved view of a manifest, in load order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadPlan {
    pub anchor: AnchorDirectory,
    pub extension: String,
    pub phases: Vec<PlannedPhase>,
}

impl LoadPlan {
    /// Resolve every group directory and declared module path.
    ///
    /// # Errors
    ///
    /// [`LoadError::InvalidPathSpec`] naming the group whose spec could not be
    /// resolved against `anchor`.
    pub fn build(anchor: &AnchorDirectory, manifest: &Manifest) -> Result<Self, LoadError> {
        let extension = manifest.extension();
        let mut phases = Vec::with_capacity(manifest.phases().len());

        for phase in manifest.phases() {
            let mut groups = Vec::with_capacity(phase.groups().len());

            for group in phase.groups() {
                let invalid = |source| LoadError::InvalidPathSpec {
                    group: group.name().to_string(),
                    source,
                };
                let directory = group.directory().resolve(anchor).map_err(invalid)?;

                let planned = match group {
                    LoadGroup::Package(package) => {
                        let mut modules = Vec::with_capacity(package.module_count());
                        for list in package.lists() {
                            for identifier in &list.identifiers {
                                let path = package
                                    .module_spec(&list.name, identifier, extension)
                                    .and_then(|spec| spec.resolve(anchor))
                                    .map_err(invalid)?;
                                modules.push(PlannedModule {
                                    list: list.name.clone(),
                                    identifier: identifier.clone(),
                                    path,
                                });
                            }
                        }
                        PlannedGroup::Package {
                            name: package.name().to_string(),
                            directory,
                            modules,
                        }
                    }
                    LoadGroup::Discovery(discovery) => PlannedGroup::Discovery {
                        name: discovery.name().to_string(),
                        directory,
                        pattern: DiscoveryGroup::file_pattern(extension),
                    },
                };
                groups.push(planned);
            }

            phases.push(PlannedPhase {
                name: phase.name().to_string(),
                groups,
            });
        }

        Ok(Self {
            anchor: anchor.clone(),
            extension: extension.to_string(),
            phases,
        })
    }

    /// Number of statically declared modules across all phases
    pub fn declared_module_count(&self) -> usize {
        self.phases
            .iter()
            .map(PlannedPhase::declared_module_count)
            .sum()
    }
}

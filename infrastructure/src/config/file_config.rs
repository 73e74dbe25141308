//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and turned into domain types by
//! [`FileConfig::build_manifest`] and [`FileConfig::anchor`].

use loader_domain::{AnchorDirectory, DomainError, Manifest};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("loader.extension cannot be empty")]
    EmptyExtension,

    #[error("loader.extension must not start with a dot: {0}")]
    DottedExtension(String),

    #[error("modules entry #{0} has an empty group or list name")]
    EmptyModuleEntry(usize),

    #[error("loader.anchor is invalid: {0}")]
    InvalidAnchor(DomainError),

    #[error("modules entry for '{group}/{list}' cannot be applied: {source}")]
    InvalidModules {
        group: String,
        list: String,
        source: DomainError,
    },
}

/// Raw `[loader]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoaderConfig {
    /// Anchor directory; defaults to the directory of the executable
    pub anchor: Option<PathBuf>,
    /// Module file extension without the dot; defaults to `php`
    pub extension: Option<String>,
}

/// One `[[modules]]` entry: identifiers appended to a list of a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileModuleEntry {
    pub group: String,
    pub list: String,
    #[serde(default)]
    pub identifiers: Vec<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Anchor and extension overrides
    pub loader: FileLoaderConfig,
    /// Module declarations, applied in order
    pub modules: Vec<FileModuleEntry>,
}

impl FileConfig {
    /// Validate the shape of the configuration.
    ///
    /// Group and list names are checked against the manifest later, by
    /// [`build_manifest`](Self::build_manifest).
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(extension) = &self.loader.extension {
            if extension.trim().is_empty() {
                return Err(ConfigValidationError::EmptyExtension);
            }
            if extension.starts_with('.') {
                return Err(ConfigValidationError::DottedExtension(extension.clone()));
            }
        }

        for (index, entry) in self.modules.iter().enumerate() {
            if entry.group.trim().is_empty() || entry.list.trim().is_empty() {
                return Err(ConfigValidationError::EmptyModuleEntry(index));
            }
        }

        Ok(())
    }

    /// The configured anchor, if any
    pub fn anchor(&self) -> Result<Option<AnchorDirectory>, ConfigValidationError> {
        self.loader
            .anchor
            .as_ref()
            .map(AnchorDirectory::new)
            .transpose()
            .map_err(ConfigValidationError::InvalidAnchor)
    }

    /// The standard manifest with this configuration's extension and module
    /// declarations applied.
    pub fn build_manifest(&self) -> Result<Manifest, ConfigValidationError> {
        self.validate()?;

        let mut manifest = Manifest::standard();
        if let Some(extension) = &self.loader.extension {
            manifest = manifest.with_extension(extension.trim());
        }

        for entry in &self.modules {
            manifest
                .add_modules(&entry.group, &entry.list, entry.identifiers.iter().cloned())
                .map_err(|source| ConfigValidationError::InvalidModules {
                    group: entry.group.clone(),
                    list: entry.list.clone(),
                    source,
                })?;
        }

        Ok(manifest)
    }
}

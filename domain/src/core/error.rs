//! Domain error types

use thiserror::Error;

/// Why a path spec could not be resolved against an anchor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathSpecViolation {
    #[error("pops {requested} segment(s) but the anchor only has {available}")]
    Underflow { requested: usize, available: usize },

    #[error("mixes package-relative './' and root-relative '../' markers")]
    MixedConventions,

    #[error("package-relative marker './' may only appear once")]
    RepeatedPackageMarker,

    #[error("absolute paths are not anchor-relative")]
    Absolute,
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid path spec '{spec}': {reason}")]
    InvalidPathSpec {
        spec: String,
        reason: PathSpecViolation,
    },

    #[error("Anchor directory must be an absolute path: {0}")]
    InvalidAnchor(String),

    #[error("Group '{0}' is declared more than once in the manifest")]
    DuplicateGroup(String),

    #[error("Unknown group '{0}'")]
    UnknownGroup(String),

    #[error("Group '{0}' is a discovery group and has no module lists")]
    NotAPackageGroup(String),

    #[error("Invalid module identifier '{identifier}' in {group}/{list}")]
    InvalidModuleIdentifier {
        group: String,
        list: String,
        identifier: String,
    },
}

impl DomainError {
    pub(crate) fn invalid_spec(spec: &str, reason: PathSpecViolation) -> Self {
        DomainError::InvalidPathSpec {
            spec: spec.to_string(),
            reason,
        }
    }

    /// Check if this error came from path arithmetic
    pub fn is_path_spec(&self) -> bool {
        matches!(self, DomainError::InvalidPathSpec { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underflow_error_display() {
        let error = DomainError::invalid_spec(
            "../../../../x",
            PathSpecViolation::Underflow {
                requested: 4,
                available: 3,
            },
        );
        assert_eq!(
            error.to_string(),
            "Invalid path spec '../../../../x': pops 4 segment(s) but the anchor only has 3"
        );
    }

    #[test]
    fn test_is_path_spec_check() {
        assert!(DomainError::invalid_spec("/x", PathSpecViolation::Absolute).is_path_spec());
        assert!(!DomainError::InvalidAnchor("rel".to_string()).is_path_spec());
        assert!(!DomainError::DuplicateGroup("core".to_string()).is_path_spec());
    }
}

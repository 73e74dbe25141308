//! The anchor directory all path specs are computed against

use super::spec::PathSpec;
use crate::core::error::DomainError;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Spec that climbs from `app/src/main` to the directory holding `app`.
const APP_SYSTEM_ROOT_SPEC: &str = "../../../";

/// Absolute directory that anchors every [`PathSpec`].
///
/// The anchor is stored as its list of `/`-separated segments so that
/// root-relative specs can pop segments off the end. It is fixed for the
/// lifetime of a loading pass.
///
/// # Examples
///
/// ```
/// use loader_domain::AnchorDirectory;
///
/// let anchor = AnchorDirectory::new("/app/src/main").unwrap();
/// assert_eq!(anchor.segments(), ["app", "src", "main"]);
/// assert_eq!(anchor.to_string(), "/app/src/main");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct AnchorDirectory {
    segments: Vec<String>,
}

impl AnchorDirectory {
    /// Create an anchor from an absolute path.
    ///
    /// The path is normalized lexically: empty and `.` segments are dropped
    /// and each `..` removes the segment before it (`/..` stays at `/`).
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let text = path.as_ref().to_string_lossy();
        if !text.starts_with('/') {
            return Err(DomainError::InvalidAnchor(text.into_owned()));
        }

        let mut segments: Vec<String> = Vec::new();
        for segment in text.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                _ => segments.push(segment.to_string()),
            }
        }

        Ok(Self { segments })
    }

    /// The anchor's path segments, root first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The anchor as a filesystem path
    pub fn as_path(&self) -> PathBuf {
        PathBuf::from(self.to_string())
    }

    /// Resolve a path spec against this anchor.
    pub fn resolve(&self, spec: &PathSpec) -> Result<PathBuf, DomainError> {
        spec.resolve(self)
    }

    /// Root of the application tree: three levels above the anchor.
    ///
    /// For an anchor at `/srv/shop/app/src/main` this is `/srv/shop`.
    pub fn app_system_root(&self) -> Result<PathBuf, DomainError> {
        let spec: PathSpec = APP_SYSTEM_ROOT_SPEC.parse()?;
        spec.resolve(self)
    }
}

impl fmt::Display for AnchorDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

impl From<AnchorDirectory> for String {
    fn from(anchor: AnchorDirectory) -> Self {
        anchor.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PathSpecViolation;

    #[test]
    fn test_new_rejects_relative_path() {
        let err = AnchorDirectory::new("app/src/main").unwrap_err();
        assert_eq!(err, DomainError::InvalidAnchor("app/src/main".to_string()));
    }

    #[test]
    fn test_new_drops_empty_segments() {
        let anchor = AnchorDirectory::new("/app//src/main/").unwrap();
        assert_eq!(anchor.segments(), ["app", "src", "main"]);
        assert_eq!(anchor.as_path(), PathBuf::from("/app/src/main"));
    }

    #[test]
    fn test_new_collapses_dot_segments() {
        let anchor = AnchorDirectory::new("/a/b/../c/./").unwrap();
        assert_eq!(anchor.segments(), ["a", "c"]);
        assert_eq!(anchor.resolve(&"../../x".parse().unwrap()).unwrap(), PathBuf::from("/x"));

        let above_root = AnchorDirectory::new("/../srv/app").unwrap();
        assert_eq!(above_root.segments(), ["srv", "app"]);
    }

    #[test]
    fn test_collapsed_anchor_underflows_on_real_depth() {
        let anchor = AnchorDirectory::new("/a/b/../c").unwrap();
        let err = anchor.resolve(&"../../../x".parse().unwrap()).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidPathSpec {
                spec: "../../../x".to_string(),
                reason: PathSpecViolation::Underflow {
                    requested: 3,
                    available: 2
                },
            }
        );
    }

    #[test]
    fn test_filesystem_root_has_no_segments() {
        let anchor = AnchorDirectory::new("/").unwrap();
        assert!(anchor.segments().is_empty());
        assert_eq!(anchor.to_string(), "/");
    }

    #[test]
    fn test_app_system_root() {
        let anchor = AnchorDirectory::new("/srv/shop/app/src/main").unwrap();
        assert_eq!(anchor.app_system_root().unwrap(), PathBuf::from("/srv/shop"));

        let shallow = AnchorDirectory::new("/app/src/main").unwrap();
        assert_eq!(shallow.app_system_root().unwrap(), PathBuf::from("/"));
    }

    #[test]
    fn test_app_system_root_underflow() {
        let anchor = AnchorDirectory::new("/src/main").unwrap();
        let err = anchor.app_system_root().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidPathSpec {
                spec: "../../../".to_string(),
                reason: PathSpecViolation::Underflow {
                    requested: 3,
                    available: 2
                },
            }
        );
    }

    #[test]
    fn test_serializes_as_string() {
        let anchor = AnchorDirectory::new("/app/src/main").unwrap();
        let json = serde_json::to_string(&anchor).unwrap();
        assert_eq!(json, "\"/app/src/main\"");
    }
}

//! Path specs and the resolution algorithm

use super::anchor::AnchorDirectory;
use crate::core::error::{DomainError, PathSpecViolation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Package-relative marker: relative to the anchor itself.
pub const PACKAGE_MARKER: &str = "./";

/// Root-relative marker: each occurrence pops one anchor segment.
pub const ROOT_MARKER: &str = "../";

/// Which convention a [`PathSpec`] uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    /// Single leading `./`
    PackageRelative,
    /// One or more leading `../`
    RootRelative { pops: usize },
    /// No marker at all
    PassThrough,
}

/// A parsed path spec.
///
/// Parsing validates the marker conventions; popping past the anchor root
/// can only be detected at resolution time.
///
/// # Examples
///
/// ```
/// use loader_domain::{AnchorDirectory, PathSpec};
/// use std::path::PathBuf;
///
/// let anchor = AnchorDirectory::new("/app/src/main").unwrap();
///
/// let libs: PathSpec = "../../libs".parse().unwrap();
/// assert_eq!(libs.resolve(&anchor).unwrap(), PathBuf::from("/app/libs"));
///
/// let database: PathSpec = "./php/database".parse().unwrap();
/// assert_eq!(
///     database.resolve(&anchor).unwrap(),
///     PathBuf::from("/app/src/main/php/database")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathSpec {
    raw: String,
    kind: SpecKind,
    remainder: String,
}

impl PathSpec {
    /// Parse a spec, rejecting absolute paths and mixed or repeated markers.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.starts_with('/') {
            return Err(DomainError::invalid_spec(raw, PathSpecViolation::Absolute));
        }

        let (kind, remainder) = if let Some(rest) = raw.strip_prefix(PACKAGE_MARKER) {
            if rest.starts_with(PACKAGE_MARKER) {
                return Err(DomainError::invalid_spec(
                    raw,
                    PathSpecViolation::RepeatedPackageMarker,
                ));
            }
            if rest.starts_with(ROOT_MARKER) {
                return Err(DomainError::invalid_spec(
                    raw,
                    PathSpecViolation::MixedConventions,
                ));
            }
            (SpecKind::PackageRelative, rest)
        } else if raw.starts_with(ROOT_MARKER) {
            let mut rest = raw;
            let mut pops = 0;
            while let Some(stripped) = rest.strip_prefix(ROOT_MARKER) {
                rest = stripped;
                pops += 1;
            }
            if rest.starts_with(PACKAGE_MARKER) {
                return Err(DomainError::invalid_spec(
                    raw,
                    PathSpecViolation::MixedConventions,
                ));
            }
            (SpecKind::RootRelative { pops }, rest)
        } else {
            (SpecKind::PassThrough, raw)
        };

        Ok(Self {
            raw: raw.to_string(),
            kind,
            remainder: remainder.to_string(),
        })
    }

    /// `./remainder`, for built-in specs known to be well formed.
    pub(crate) fn package_relative(remainder: &str) -> Self {
        Self {
            raw: format!("{PACKAGE_MARKER}{remainder}"),
            kind: SpecKind::PackageRelative,
            remainder: remainder.to_string(),
        }
    }

    /// `../` repeated `pops` times, then `remainder`.
    pub(crate) fn root_relative(pops: usize, remainder: &str) -> Self {
        Self {
            raw: format!("{}{remainder}", ROOT_MARKER.repeat(pops)),
            kind: SpecKind::RootRelative { pops },
            remainder: remainder.to_string(),
        }
    }

    /// The spec exactly as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> SpecKind {
        self.kind
    }

    /// What is left after the markers are stripped
    pub fn remainder(&self) -> &str {
        &self.remainder
    }

    /// Append a relative tail to this spec.
    ///
    /// A directory that is empty or already ends in `/` joins without an
    /// extra separator: `./` + `views` is `./views` and `""` + `views` is
    /// the pass-through `views`.
    pub fn join(&self, tail: &str) -> Result<Self, DomainError> {
        if self.raw.is_empty() || self.raw.ends_with('/') {
            Self::parse(&format!("{}{}", self.raw, tail))
        } else {
            Self::parse(&format!("{}/{}", self.raw, tail))
        }
    }

    /// Resolve against an anchor.
    ///
    /// Pure path arithmetic: no filesystem access and no normalization of
    /// the remainder.
    pub fn resolve(&self, anchor: &AnchorDirectory) -> Result<PathBuf, DomainError> {
        let segments = anchor.segments();
        let kept = match self.kind {
            SpecKind::RootRelative { pops } => {
                if pops > segments.len() {
                    return Err(DomainError::invalid_spec(
                        &self.raw,
                        PathSpecViolation::Underflow {
                            requested: pops,
                            available: segments.len(),
                        },
                    ));
                }
                &segments[..segments.len() - pops]
            }
            SpecKind::PackageRelative | SpecKind::PassThrough => segments,
        };

        let mut path = format!("/{}", kept.join("/"));
        if !self.remainder.is_empty() {
            if !kept.is_empty() {
                path.push('/');
            }
            path.push_str(&self.remainder);
        }

        Ok(PathBuf::from(path))
    }
}

/// Parse and resolve `spec` against `anchor` in one step.
pub fn resolve(anchor: &AnchorDirectory, spec: &str) -> Result<PathBuf, DomainError> {
    PathSpec::parse(spec)?.resolve(anchor)
}

impl FromStr for PathSpec {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PathSpec {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PathSpec> for String {
    fn from(spec: PathSpec) -> Self {
        spec.raw
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

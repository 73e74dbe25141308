//! Path resolution against a fixed anchor directory
//!
//! A [`PathSpec`] is written in one of two conventions:
//!
//! - **package-relative** `./x`: `x` under the anchor, never pops
//! - **root-relative** `../../x`: pop one anchor segment per `../`
//!
//! A spec with no marker is treated as relative to the anchor. Resolution is
//! pure path arithmetic and never touches the filesystem.
//!
//! # Example
//!
//! ```
//! use loader_domain::path::{resolve, AnchorDirectory};
//! use std::path::PathBuf;
//!
//! let anchor = AnchorDirectory::new("/a/b/c").unwrap();
//! assert_eq!(resolve(&anchor, "../../x").unwrap(), PathBuf::from("/a/x"));
//! assert_eq!(resolve(&anchor, "./x").unwrap(), PathBuf::from("/a/b/c/x"));
//! assert!(resolve(&anchor, "../../../../x").is_err());
//! ```

pub mod anchor;
pub mod spec;

pub use anchor::AnchorDirectory;
pub use spec::{PACKAGE_MARKER, PathSpec, ROOT_MARKER, SpecKind, resolve};

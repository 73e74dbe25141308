//! Manifest module: what gets loaded, and in which order
//!
//! A [`Manifest`] is an ordered list of [`LoadPhase`]s. Each phase holds one
//! or more [`LoadGroup`]s:
//!
//! - [`PackageGroup`]: a directory plus named, ordered module lists
//! - [`DiscoveryGroup`]: a directory whose `*.<ext>` files are the members
//!
//! The phase sequence is fixed when the manifest is built. Later phases may
//! rely on earlier phases having been loaded.

pub mod entities;
pub mod standard;

pub use entities::{
    DEFAULT_MODULE_EXTENSION, DiscoveryGroup, LoadGroup, LoadPhase, Manifest, ModuleList,
    PackageGroup,
};
pub use standard::groups;

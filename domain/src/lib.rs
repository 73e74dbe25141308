//! Domain layer for manifest-loader
//!
//! This crate contains the path arithmetic, manifest entities and the module
//! registry. It has no dependencies on the filesystem or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Anchor and PathSpec
//!
//! Every location is written as a [`PathSpec`] relative to a fixed
//! [`AnchorDirectory`]:
//!
//! - **Package-relative** `./php/models`: under the anchor
//! - **Root-relative** `../../libs`: one anchor segment popped per `../`
//!
//! ## Manifest
//!
//! A [`Manifest`] is a fixed sequence of [`LoadPhase`]s made of
//! [`PackageGroup`]s (declared module lists) and [`DiscoveryGroup`]s
//! (directories scanned at load time).
//!
//! ## Registry
//!
//! A [`ModuleRegistry`] owns every module loaded during initialization, in
//! load order, each path at most once.

pub mod core;
pub mod manifest;
pub mod path;
pub mod registry;

// Re-export commonly used types
pub use core::error::{DomainError, PathSpecViolation};
pub use manifest::{
    DEFAULT_MODULE_EXTENSION, DiscoveryGroup, LoadGroup, LoadPhase, Manifest, ModuleList,
    PackageGroup, groups,
};
pub use path::{AnchorDirectory, PathSpec, SpecKind, resolve};
pub use registry::{LoadedModule, ModuleOrigin, ModuleRegistry};

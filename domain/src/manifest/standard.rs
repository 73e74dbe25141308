//! The built-in phase table

use super::entities::{
    DEFAULT_MODULE_EXTENSION, DiscoveryGroup, LoadPhase, Manifest, PackageGroup,
};
use crate::path::PathSpec;

/// Names of the built-in groups (each also names its phase)
pub mod groups {
    pub const LIBS: &str = "libs";
    pub const DATABASE: &str = "database";
    pub const MODELS: &str = "models";
    pub const REPOSITORY: &str = "repository";
    pub const DI: &str = "di";
    pub const GENERATED: &str = "generated";
    pub const CORE: &str = "core";
    pub const PLUGINS: &str = "plugins";
    pub const UTILS: &str = "utils";
    pub const ADAPTERS: &str = "adapters";
    pub const VIEWS: &str = "views";
}

impl Manifest {
    /// The standard eleven-phase manifest.
    ///
    /// | # | Phase | Directory | Lists |
    /// |---|-------|-----------|-------|
    /// | 1 | libs | `../../libs` | |
    /// | 2 | database | `./php/database` | tables, entities, dao, db |
    /// | 3 | models | `./php` | models |
    /// | 4 | repository | `./php` | repository |
    /// | 5 | di | `./php/di` | *discovered* |
    /// | 6 | generated | `../../build/generated` | *discovered* |
    /// | 7 | core | `./php/core` | base_core, aggregate_core |
    /// | 8 | plugins | `./php` | plugins |
    /// | 9 | utils | `./php/utils` | |
    /// | 10 | adapters | `./php/adapters` | |
    /// | 11 | views | `./php/views` | fragments, activities |
    ///
    /// Lists start empty except `database/db`, which always holds
    /// `main_database`. Fill the rest with [`Manifest::add_modules`].
    pub fn standard() -> Self {
        let none: [&str; 0] = [];

        Manifest::new(DEFAULT_MODULE_EXTENSION)
            .with_phase(LoadPhase::single(PackageGroup::new(
                groups::LIBS,
                PathSpec::root_relative(2, "libs"),
            )))
            .with_phase(LoadPhase::single(
                PackageGroup::new(groups::DATABASE, PathSpec::package_relative("php/database"))
                    .with_list("tables", none)
                    .with_list("entities", none)
                    .with_list("dao", none)
                    .with_list("db", ["main_database"]),
            ))
            .with_phase(LoadPhase::single(
                PackageGroup::new(groups::MODELS, PathSpec::package_relative("php"))
                    .with_list("models", none),
            ))
            .with_phase(LoadPhase::single(
                PackageGroup::new(groups::REPOSITORY, PathSpec::package_relative("php"))
                    .with_list("repository", none),
            ))
            .with_phase(LoadPhase::single(DiscoveryGroup::new(
                groups::DI,
                PathSpec::package_relative("php/di"),
            )))
            .with_phase(LoadPhase::single(DiscoveryGroup::new(
                groups::GENERATED,
                PathSpec::root_relative(2, "build/generated"),
            )))
            .with_phase(LoadPhase::single(
                PackageGroup::new(groups::CORE, PathSpec::package_relative("php/core"))
                    .with_list("base_core", none)
                    .with_list("aggregate_core", none),
            ))
            .with_phase(LoadPhase::single(
                PackageGroup::new(groups::PLUGINS, PathSpec::package_relative("php"))
                    .with_list("plugins", none),
            ))
            .with_phase(LoadPhase::single(PackageGroup::new(
                groups::UTILS,
                PathSpec::package_relative("php/utils"),
            )))
            .with_phase(LoadPhase::single(PackageGroup::new(
                groups::ADAPTERS,
                PathSpec::package_relative("php/adapters"),
            )))
            .with_phase(LoadPhase::single(
                PackageGroup::new(groups::VIEWS, PathSpec::package_relative("php/views"))
                    .with_list("fragments", none)
                    .with_list("activities", none),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::LoadGroup;
    use crate::path::AnchorDirectory;
    use std::path::PathBuf;

    #[test]
    fn test_standard_phase_order() {
        let manifest = Manifest::standard();
        let names: Vec<&str> = manifest.phases().iter().map(LoadPhase::name).collect();
        assert_eq!(
            names,
            vec![
                "libs",
                "database",
                "models",
                "repository",
                "di",
                "generated",
                "core",
                "plugins",
                "utils",
                "adapters",
                "views"
            ]
        );
    }

    #[test]
    fn test_standard_manifest_is_valid() {
        let manifest = Manifest::standard();
        assert!(manifest.validate().is_ok());
        assert_eq!(manifest.extension(), "php");
        assert_eq!(manifest.declared_module_count(), 1);
    }

    #[test]
    fn test_built_in_specs_reparse_identically() {
        for group in Manifest::standard().groups() {
            let reparsed: PathSpec = group.directory().as_str().parse().unwrap();
            assert_eq!(&reparsed, group.directory(), "group {}", group.name());
        }
    }

    #[test]
    fn test_only_di_and_generated_are_discovered() {
        let manifest = Manifest::standard();
        let discovered: Vec<&str> = manifest
            .groups()
            .filter(|g| g.is_discovery())
            .map(LoadGroup::name)
            .collect();
        assert_eq!(discovered, vec![groups::DI, groups::GENERATED]);
    }

    #[test]
    fn test_standard_directories_resolve() {
        let anchor = AnchorDirectory::new("/app/src/main").unwrap();
        let manifest = Manifest::standard();

        let resolve = |name: &str| {
            manifest
                .group(name)
                .unwrap()
                .directory()
                .resolve(&anchor)
                .unwrap()
        };

        assert_eq!(resolve(groups::LIBS), PathBuf::from("/app/libs"));
        assert_eq!(
            resolve(groups::DATABASE),
            PathBuf::from("/app/src/main/php/database")
        );
        assert_eq!(resolve(groups::GENERATED), PathBuf::from("/app/build/generated"));
        assert_eq!(resolve(groups::VIEWS), PathBuf::from("/app/src/main/php/views"));
    }
}

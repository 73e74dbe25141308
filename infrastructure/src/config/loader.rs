//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["loader.toml", ".loader.toml"];

/// Prefix of environment overrides, e.g. `MANIFEST_LOADER_LOADER__ANCHOR`
const ENV_PREFIX: &str = "MANIFEST_LOADER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `MANIFEST_LOADER_LOADER__ANCHOR`, `MANIFEST_LOADER_LOADER__EXTENSION`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./loader.toml` or `./.loader.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/manifest-loader/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(Path::new("."), Self::global_config_path().as_deref(), config_path)
    }

    /// Load with an explicit project directory and global config path.
    ///
    /// An explicit `config_path` that does not exist is an error; the
    /// project and global files are optional.
    pub fn load_from(
        project_dir: &Path,
        global_path: Option<&Path>,
        config_path: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        // Files are adjoined: `[[modules]]` arrays from every file are
        // concatenated in priority order, scalars are replaced.
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = global_path
            && global_path.exists()
        {
            figment = figment.admerge(Toml::file(global_path));
        }

        // Add project-level config files (first name found wins)
        if let Some(path) = Self::project_config_path_in(project_dir) {
            figment = figment.admerge(Toml::file(path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.admerge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/manifest-loader/config.toml if set,
    /// otherwise falls back to ~/.config/manifest-loader/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("manifest-loader").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_path_in(Path::new("."))
    }

    fn project_config_path_in(project_dir: &Path) -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(|filename| project_dir.join(filename))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./loader.toml or ./.loader.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in manifest");
    }
}

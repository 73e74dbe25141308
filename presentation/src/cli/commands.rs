//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for plans and load reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for manifest-loader
#[derive(Parser, Debug)]
#[command(name = "manifest-loader")]
#[command(author, version, about = "Load every module of a manifest in fixed phase order")]
#[command(long_about = r#"
manifest-loader resolves every module of the built-in manifest against an
anchor directory and reads them in a fixed phase order:

  libs -> database -> models -> repository -> di* -> generated*
       -> core -> plugins -> utils -> adapters -> views

Phases marked * are discovered by scanning their directory for *.<ext>.
The first missing module stops the run with a non-zero exit code.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./loader.toml       Project-level config
3. ~/.config/manifest-loader/config.toml   Global config

Example:
  manifest-loader --anchor /srv/shop/app/src/main
  manifest-loader --anchor /srv/shop/app/src/main --plan
  manifest-loader --anchor /app/src/main --resolve ../../libs
"#)]
pub struct Cli {
    /// Anchor directory (defaults to the directory of this executable)
    #[arg(long, value_name = "DIR")]
    pub anchor: Option<PathBuf>,

    /// Resolve a single path spec against the anchor and exit
    #[arg(long, value_name = "SPEC")]
    pub resolve: Option<String>,

    /// Print the resolved load plan without reading any module
    #[arg(long)]
    pub plan: bool,

    /// List every loaded module after a successful run
    #[arg(long)]
    pub list: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to daily-rotated files in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

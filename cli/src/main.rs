//! CLI entrypoint for manifest-loader
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use loader_application::{InitializeUseCase, LoadPlan, LoadProgressNotifier, NoLoadProgress};
use loader_domain::AnchorDirectory;
use loader_infrastructure::{ConfigLoader, FileConfig, LocalModuleSource};
use loader_presentation::{
    Cli, ConsoleFormatter, JsonFormatter, OutputFormat, OutputFormatter, ProgressReporter,
    SimpleProgress,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    info!("Starting manifest-loader");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    let manifest = config
        .build_manifest()
        .context("Invalid module configuration")?;
    let anchor = select_anchor(cli.anchor.as_deref(), &config)?;
    debug!("Using anchor {}", anchor);

    let formatter: Box<dyn OutputFormatter> = match cli.output {
        OutputFormat::Text => Box::new(ConsoleFormatter::new(cli.list)),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    // Single spec resolution
    if let Some(spec) = &cli.resolve {
        let path = loader_domain::resolve(&anchor, spec)
            .with_context(|| format!("Cannot resolve '{}' against {}", spec, anchor))?;
        println!("{}", formatter.format_resolution(spec, &path));
        return Ok(());
    }

    // Dry run
    if cli.plan {
        let plan = LoadPlan::build(&anchor, &manifest).context("Cannot build load plan")?;
        println!("{}", formatter.format_plan(&plan));
        return Ok(());
    }

    // === Dependency Injection ===
    let source = Arc::new(LocalModuleSource::new());
    let use_case = InitializeUseCase::new(source, anchor);

    // JSON output keeps stdout machine-readable
    let progress: Box<dyn LoadProgressNotifier> = if cli.quiet || cli.output == OutputFormat::Json
    {
        Box::new(NoLoadProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let output = use_case
        .execute_with_progress(&manifest, progress.as_ref())
        .context("Initialization failed")?;

    info!(
        "Loaded {} module(s) in {} ms",
        output.registry.len(),
        output.elapsed().num_milliseconds()
    );

    println!("{}", formatter.format_output(&output));

    Ok(())
}

/// Initialize logging based on verbosity level, optionally teeing into
/// daily-rotated files under `log_dir`.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "manifest-loader.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(EnvFilter::new(level))
                .with(stderr_layer)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(EnvFilter::new(level))
                .with(stderr_layer)
                .init();
            Ok(None)
        }
    }
}

/// Pick the anchor: `--anchor`, then the config file, then the directory
/// holding this executable.
fn select_anchor(flag: Option<&Path>, config: &FileConfig) -> Result<AnchorDirectory> {
    if let Some(dir) = flag {
        let absolute = std::path::absolute(dir)
            .with_context(|| format!("Cannot make {} absolute", dir.display()))?;
        return AnchorDirectory::new(&absolute).context("Invalid --anchor");
    }

    if let Some(anchor) = config.anchor().context("Invalid anchor in configuration")? {
        return Ok(anchor);
    }

    let exe = std::env::current_exe().context("Cannot locate the running executable")?;
    let dir: PathBuf = exe
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("Executable {} has no parent directory", exe.display()))?;
    AnchorDirectory::new(&dir).context("Invalid executable directory")
}

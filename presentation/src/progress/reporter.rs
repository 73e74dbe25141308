//! Progress reporting for loading passes

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use loader_application::LoadProgressNotifier;
use loader_domain::LoadedModule;
use std::path::Path;
use std::sync::Mutex;

/// Reports progress during a loading pass with one bar per phase
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    fn phase_display_name(phase: &str, index: usize, total_phases: usize) -> String {
        format!("Phase {}/{}: {}", index + 1, total_phases, phase)
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.phase_bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadProgressNotifier for ProgressReporter {
    fn on_phase_start(
        &self,
        phase: &str,
        index: usize,
        total_phases: usize,
        declared_modules: usize,
    ) {
        let pb = self.multi.add(ProgressBar::new(declared_modules as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_display_name(phase, index, total_phases));
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.phase_bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_discovery(&self, group: &str, _directory: &Path, found: usize) {
        self.with_bar(|pb| {
            pb.inc_length(found as u64);
            pb.set_message(format!("{} {} found", group, found));
        });
    }

    fn on_module_loaded(&self, module: &LoadedModule) {
        self.with_bar(|pb| {
            pb.set_message(format!("{} {}", "v".green(), module.origin));
            pb.inc(1);
        });
    }

    fn on_module_skipped(&self, path: &Path) {
        self.with_bar(|pb| {
            pb.set_message(format!("{} {}", "-".yellow(), path.display()));
            pb.inc(1);
        });
    }

    fn on_phase_complete(&self, phase: &str, loaded: usize) {
        let taken = match self.phase_bar.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        if let Some(pb) = taken {
            pb.finish_with_message(format!("{} complete! ({} loaded)", phase.green(), loaded));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl LoadProgressNotifier for SimpleProgress {
    fn on_phase_start(
        &self,
        phase: &str,
        index: usize,
        total_phases: usize,
        declared_modules: usize,
    ) {
        println!(
            "{} {} ({} declared)",
            "->".cyan(),
            ProgressReporter::phase_display_name(phase, index, total_phases).bold(),
            declared_modules
        );
    }

    fn on_discovery(&self, group: &str, directory: &Path, found: usize) {
        println!(
            "  {} {} {} ({} found)",
            "?".magenta(),
            group,
            directory.display(),
            found
        );
    }

    fn on_module_loaded(&self, module: &LoadedModule) {
        println!("  {} {}", "v".green(), module.origin);
    }

    fn on_module_skipped(&self, path: &Path) {
        println!("  {} {} (already loaded)", "-".yellow(), path.display());
    }

    fn on_phase_complete(&self, _phase: &str, _loaded: usize) {
        println!();
    }
}

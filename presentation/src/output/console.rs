//! Console output formatter for plans and load reports

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use loader_application::{InitializeOutput, LoadPlan, PlannedGroup};
use std::path::Path;

/// Formats loader results for console display
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFormatter {
    /// Include one line per loaded module in load reports
    pub list_modules: bool,
}

impl ConsoleFormatter {
    pub fn new(list_modules: bool) -> Self {
        Self { list_modules }
    }

    /// Format a resolved path spec
    pub fn resolution(spec: &str, path: &Path) -> String {
        format!("{} {} {}", spec.yellow(), "->".dimmed(), path.display())
    }

    /// Format the load plan, phase by phase
    pub fn plan(plan: &LoadPlan) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Load Plan"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Anchor:".cyan().bold(), plan.anchor));
        output.push_str(&format!(
            "{} {} declared, *.{} discovered\n",
            "Modules:".cyan().bold(),
            plan.declared_module_count(),
            plan.extension
        ));

        for (index, phase) in plan.phases.iter().enumerate() {
            output.push_str(&Self::section_header(&format!(
                "Phase {}: {}",
                index + 1,
                phase.name
            )));

            for group in &phase.groups {
                match group {
                    PlannedGroup::Package {
                        name,
                        directory,
                        modules,
                    } => {
                        output.push_str(&format!(
                            "{} {}\n",
                            name.yellow().bold(),
                            directory.display().to_string().dimmed()
                        ));
                        if modules.is_empty() {
                            output.push_str(&format!("  {}\n", "(nothing declared)".dimmed()));
                        }
                        for module in modules {
                            output.push_str(&format!(
                                "  {}/{} {} {}\n",
                                module.list,
                                module.identifier,
                                "->".dimmed(),
                                module.path.display()
                            ));
                        }
                    }
                    PlannedGroup::Discovery {
                        name,
                        directory,
                        pattern,
                    } => {
                        output.push_str(&format!(
                            "{} {} {}\n",
                            name.yellow().bold(),
                            "scan".magenta(),
                            directory.join(pattern).display()
                        ));
                    }
                }
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format a finished loading pass
    pub fn output(result: &InitializeOutput, list_modules: bool) -> String {
        let mut output = String::new();
        let registry = &result.registry;

        output.push_str(&Self::header("Manifest Loaded"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Anchor:".cyan().bold(), result.anchor));
        output.push_str(&format!(
            "{} {} ({} bytes), {} skipped, {} ms\n",
            "Modules:".cyan().bold(),
            registry.len(),
            registry.total_size(),
            result.skipped.len(),
            result.elapsed().num_milliseconds()
        ));

        // Per-phase counts, in load order
        let mut phases: Vec<(&str, usize)> = Vec::new();
        for module in registry {
            match phases.last_mut() {
                Some((phase, count)) if *phase == module.phase => *count += 1,
                _ => phases.push((&module.phase, 1)),
            }
        }

        if !phases.is_empty() {
            output.push_str(&Self::section_header("Phases"));
            for (phase, count) in &phases {
                output.push_str(&format!("  {:<16} {}\n", phase, count));
            }
        }

        if list_modules && !registry.is_empty() {
            output.push_str(&Self::section_header("Modules"));
            for module in registry {
                output.push_str(&format!("  {} {}\n", "v".green(), module.origin));
                output.push_str(&format!(
                    "    {}\n",
                    module.path.display().to_string().dimmed()
                ));
            }
        }

        if !result.skipped.is_empty() {
            output.push_str(&Self::section_header("Skipped (already loaded)"));
            for path in &result.skipped {
                output.push_str(&format!("  {} {}\n", "-".yellow(), path.display()));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_resolution(&self, spec: &str, path: &Path) -> String {
        Self::resolution(spec, path)
    }

    fn format_plan(&self, plan: &LoadPlan) -> String {
        Self::plan(plan)
    }

    fn format_output(&self, output: &InitializeOutput) -> String {
        Self::output(output, self.list_modules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtures::sample_output;
    use loader_domain::{AnchorDirectory, Manifest, groups};

    mod fixtures {
        use loader_application::{InitializeOutput, InitializeUseCase, ModuleSourcePort};
        use loader_domain::{AnchorDirectory, DiscoveryGroup, LoadPhase, Manifest, PackageGroup};
        use std::io;
        use std::path::{Path, PathBuf};
        use std::sync::Arc;

        struct FixedSource;

        impl ModuleSourcePort for FixedSource {
            fn read_module(&self, _path: &Path) -> io::Result<String> {
                Ok("<?php".to_string())
            }

            fn list_modules(&self, directory: &Path, _extension: &str) -> io::Result<Vec<PathBuf>> {
                Ok(vec![directory.join("Container.php")])
            }
        }

        pub fn sample_output() -> InitializeOutput {
            let manifest = Manifest::new("php")
                .with_phase(LoadPhase::single(
                    PackageGroup::new("models", "./php".parse().unwrap())
                        .with_list("models", ["UserModel", "UserModel"]),
                ))
                .with_phase(LoadPhase::single(DiscoveryGroup::new(
                    "di",
                    "./php/di".parse().unwrap(),
                )));
            let anchor = AnchorDirectory::new("/app/src/main").unwrap();
            InitializeUseCase::new(Arc::new(FixedSource), anchor)
                .execute(&manifest)
                .unwrap()
        }
    }

    #[test]
    fn test_resolution_contains_both_sides() {
        let text = ConsoleFormatter::resolution("../../libs", Path::new("/app/libs"));
        assert!(text.contains("../../libs"));
        assert!(text.contains("/app/libs"));
    }

    #[test]
    fn test_plan_lists_every_phase() {
        let mut manifest = Manifest::standard();
        manifest
            .add_modules(groups::MODELS, "models", ["UserModel"])
            .unwrap();
        let anchor = AnchorDirectory::new("/app/src/main").unwrap();
        let plan = LoadPlan::build(&anchor, &manifest).unwrap();

        let text = ConsoleFormatter::plan(&plan);
        assert!(text.contains("Phase 1: libs"));
        assert!(text.contains("Phase 11: views"));
        assert!(text.contains("/app/src/main/php/models/UserModel.php"));
        assert!(text.contains("/app/build/generated/*.php"));
    }

    #[test]
    fn test_output_summarizes_and_lists() {
        let result = sample_output();

        let summary = ConsoleFormatter::output(&result, false);
        assert!(summary.contains("/app/src/main"));
        assert!(summary.contains("Skipped (already loaded)"));
        assert!(!summary.contains("models/models/UserModel"));

        let listed = ConsoleFormatter::new(true).format_output(&result);
        assert!(listed.contains("models/models/UserModel"));
        assert!(listed.contains("di/Container.php"));
    }
}

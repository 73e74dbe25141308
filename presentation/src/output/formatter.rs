//! Output formatter trait

use loader_application::{InitializeOutput, LoadPlan};
use std::path::Path;

/// Trait for formatting loader results
pub trait OutputFormatter {
    /// Format a single resolved path spec
    fn format_resolution(&self, spec: &str, path: &Path) -> String;

    /// Format a load plan (dry run)
    fn format_plan(&self, plan: &LoadPlan) -> String;

    /// Format the result of a loading pass
    fn format_output(&self, output: &InitializeOutput) -> String;
}

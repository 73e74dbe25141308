//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use loader_application::{InitializeOutput, LoadPlan};
use serde_json::json;
use std::path::Path;

/// Formats loader results as pretty-printed JSON
///
/// Module sources are never serialized; a load report carries the
/// registry's origins, phases, paths and sizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_resolution(&self, spec: &str, path: &Path) -> String {
        let value = json!({ "spec": spec, "path": path });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_plan(&self, plan: &LoadPlan) -> String {
        serde_json::to_string_pretty(plan).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_output(&self, output: &InitializeOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }
}

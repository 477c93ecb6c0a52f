//! Console output formatter for categorization results

use memcat_domain::{MemoryCategories, OutputFormat};

/// Formats categorization results for stdout
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn format(result: &MemoryCategories, format: OutputFormat) -> String {
        match format {
            OutputFormat::Lines => Self::format_lines(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// One category per line, no decoration, so output pipes cleanly.
    pub fn format_lines(result: &MemoryCategories) -> String {
        result.as_slice().join("\n")
    }

    /// `{"categories": [...]}`
    pub fn format_json(result: &MemoryCategories) -> String {
        serde_json::to_string_pretty(result)
            .unwrap_or_else(|e| format!("{{\"error\": \"Failed to serialize: {}\"}}", e))
    }
}

//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for categorization results
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One category per line (default)
    #[default]
    Lines,
    /// `{"categories": [...]}`
    Json,
}

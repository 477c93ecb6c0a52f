//! Categorization result entity

use serde::{Deserialize, Serialize};

/// Normalized category labels assigned to a memory.
///
/// Order follows the model's reply. Duplicates are kept as-is.
/// Serializes as `{"categories": [...]}`, the same shape the model is asked
/// to produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCategories {
    pub categories: Vec<String>,
}

impl MemoryCategories {
    pub fn new(categories: Vec<String>) -> Self {
        Self { categories }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl From<Vec<String>> for MemoryCategories {
    fn from(categories: Vec<String>) -> Self {
        Self::new(categories)
    }
}

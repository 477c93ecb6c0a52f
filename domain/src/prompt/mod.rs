//! Prompt domain
//!
//! The fixed system instruction used for categorization calls.

mod template;

pub use template::CategorizationPrompt;

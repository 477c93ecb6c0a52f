//! Domain layer for memory-categorizer
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Categorization
//!
//! A **memory** is a piece of free text. Categorizing it means asking an LLM
//! for a short list of topical labels and turning whatever comes back into a
//! normalized list of lowercase strings:
//!
//! - [`parse_category_response`]: JSON first, comma-split fallback
//! - [`normalize_categories`]: lowercase + trim, empty entries dropped
//! - [`RetryPolicy`]: bounded attempts with exponential backoff
//!
//! ## Providers
//!
//! [`ProviderKind`] names the LLM backend and [`LlmConfig`] carries the
//! immutable model settings handed to it once at construction.

pub mod categorization;
pub mod config;
pub mod core;
pub mod llm;
pub mod prompt;
pub mod providers;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use categorization::{
    entities::MemoryCategories,
    parsing::{ParsedResponse, normalize_categories, parse_category_response, split_fallback},
    retry::RetryPolicy,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use llm::config::LlmConfig;
pub use prompt::CategorizationPrompt;
pub use providers::{ProviderConfig, ProviderEndpoint, ProviderKind};
pub use session::entities::{Message, Role};

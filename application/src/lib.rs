//! Application layer for memory-categorizer
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_client::{ClientError, LanguageModelClient},
    progress::{CategorizationProgress, NoProgress},
};
pub use use_cases::categorize_memory::{CategorizationError, CategorizeMemoryUseCase};

//! Memory categorization domain.
//!
//! - [`entities::MemoryCategories`] - the normalized result of a categorization
//! - [`parsing`] - turning a raw model reply into category labels
//! - [`retry::RetryPolicy`] - how many attempts and how long to wait between them

pub mod entities;
pub mod parsing;
pub mod retry;

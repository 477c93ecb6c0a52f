//! LLM conversation messages.
//!
//! - [`entities::Message`] - a single role-tagged message sent to a model

pub mod entities;

//! Model settings handed to a language-model client at construction.

pub mod config;

//! Test utilities shared across the keydefs workspace
//!
//! This crate provides common testing infrastructure including:
//! - Scripted operator input ([`ScriptedPrompter`])
//! - Temporary working directories ([`TempWorkspace`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod prompter;
pub mod workspace;

// Re-export commonly used items
pub use prompter::{ScriptedPrompter, Step};
pub use workspace::TempWorkspace;

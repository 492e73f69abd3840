//! Shared test utilities for ResumeForge
//!
//! - Sample resume documents
//! - TUI terminal testing helpers

pub mod fixtures;
pub mod terminal;

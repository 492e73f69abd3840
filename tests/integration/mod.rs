//! Integration tests for ResumeForge
//!
//! These tests verify that multiple components work together correctly.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod export_flow;
pub mod render;
pub mod wizard_flow;

//! Common test utilities for dropmenu contract, property and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated temp directory plus a runner for the binary
//! - `Harness`: A headless instance wired to recording collaborators
//! - Fixtures: Reusable item trees and source documents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

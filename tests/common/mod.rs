//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Message fixtures
//! - A recording `MessageActions` implementation
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

// Re-export commonly used utilities
pub use fixtures::*;

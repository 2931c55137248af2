//! Shared utilities for CLI commands.

pub mod error;
pub mod input;
pub mod output;

//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function.

pub mod find;
pub mod walk;

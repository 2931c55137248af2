//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};

/// Sentence loaded into the list when `--text` is not given.
pub const DEFAULT_TEXT: &str = "Hello there my interesting fellow. This super duper long string will be used for testing and you're gonna like it";

/// iulist - demonstrate an array-backed list with fail-fast iteration
#[derive(Parser, Debug)]
#[command(name = "iulist", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Initial capacity of the list (small values force the buffer to grow)
    #[arg(long, global = true, default_value_t = 5)]
    pub capacity: usize,

    /// Whitespace-separated words to load into the list
    #[arg(long, global = true, default_value = DEFAULT_TEXT)]
    pub text: String,

    /// Log list internals (buffer growth, structural changes) to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk through every list operation, printing each result
    Walk,

    /// Look up a word in the list
    Find(FindArgs),
}

/// Arguments for the `find` command.
#[derive(Args, Debug)]
pub struct FindArgs {
    /// Word to search for
    pub word: String,
}

//! iulist CLI - walk through an array-backed list's operations.

use clap::Parser;
use iulist_cli::cli::{Cli, Command};
use iulist_cli::commands;
use iulist_cli::common;

fn main() {
    let cli = Cli::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set, DEBUG with --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .without_time()
        .init();

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Command::Walk => commands::walk::run(&cli.text, cli.capacity, &mut stdout),
        Command::Find(args) => commands::find::run(args, &cli.text, cli.capacity, &mut stdout),
    };

    if let Err(e) = result {
        common::error::render_and_exit(e, cli.no_color);
    }
}

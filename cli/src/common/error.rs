//! Error handling utilities for the CLI.

use iulist::ListError;
use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[diagnostic(
        code(iulist::empty_text),
        help("pass --text with at least one whitespace-separated word")
    )]
    #[error("input text has no words")]
    EmptyText,

    #[diagnostic(code(iulist::list))]
    #[error("list operation failed")]
    List(#[from] ListError),

    #[diagnostic(code(iulist::io))]
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    let theme = if no_color {
        GraphicalTheme::unicode_nocolor()
    } else {
        GraphicalTheme::unicode()
    };
    let mut rendered = String::new();
    if GraphicalReportHandler::new_themed(theme)
        .render_report(&mut rendered, &error)
        .is_err()
    {
        rendered = format!("error: {error}\n");
    }
    eprint!("{rendered}");
    std::process::exit(1);
}

//! The `find` command - look up a word by value.

use std::io::Write;

use crate::cli::FindArgs;
use crate::common::error::CliResult;
use crate::common::input::load_words;

/// Run the find command.
pub fn run(args: FindArgs, text: &str, capacity: usize, out: &mut impl Write) -> CliResult<()> {
    let list = load_words(text, capacity)?;
    let word = args.word;

    let index = match list.index_of(&word) {
        Some(index) => index.to_string(),
        None => "not found".to_string(),
    };
    writeln!(out, "index_of({word:?}) -> {index}")?;
    writeln!(out, "contains({word:?}) -> {}", list.contains(&word))?;
    Ok(())
}

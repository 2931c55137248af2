//! Printing helpers shared by the commands.

use std::fmt::Display;
use std::io::{self, Write};

use iulist::{ArrayList, ListError};

use super::error::CliResult;

/// Print `label -> value`, or `label -> error: ...` when the operation failed.
pub fn report<T: Display>(
    out: &mut impl Write,
    label: impl Display,
    result: Result<T, ListError>,
) -> io::Result<()> {
    match result {
        Ok(value) => writeln!(out, "{label} -> {value}"),
        Err(error) => writeln!(out, "{label} -> error: {error}"),
    }
}

/// Print the size and every element, one per line, via the list's iterator.
pub fn print_list<T: Clone + Display>(out: &mut impl Write, list: &ArrayList<T>) -> CliResult<()> {
    writeln!(out, "Size of list: {}", list.len())?;
    writeln!(out, "Contents of list:")?;
    for item in list {
        writeln!(out, "\t{}", item?)?;
    }
    Ok(())
}

//! The `walk` command - exercise every list operation in turn.
//!
//! Steps that are expected to fail (an out-of-range insert, removing a missing
//! word) print the error and the walk carries on.

use std::io::Write;

use crate::common::error::CliResult;
use crate::common::input::load_words;
use crate::common::output::{print_list, report};

/// Run the walk command.
///
/// The list is printed again after every step that can change it.
pub fn run(text: &str, capacity: usize, out: &mut impl Write) -> CliResult<()> {
    let mut list = load_words(text, capacity)?;
    writeln!(out, "Size of items: {}", list.len())?;
    writeln!(out, "Capacity: {capacity} -> {}", list.capacity())?;
    print_list(out, &list)?;

    writeln!(out)?;
    let index = list
        .index_of(&"fellow.".to_string())
        .map_or_else(|| "not found".to_string(), |index| index.to_string());
    writeln!(out, "index_of(\"fellow.\") -> {index}")?;

    list.add_front("Traveler.".to_string());
    writeln!(out, "add_front(\"Traveler.\") -> {list}")?;
    print_list(out, &list)?;

    let inserted = list.insert_after("impressive".to_string(), &"long".to_string());
    report(out, "insert_after(\"impressive\", \"long\")", inserted.map(|()| "ok"))?;
    print_list(out, &list)?;

    report(out, "get(16)", list.get(16).map(|word| word.clone()))?;
    let inserted = list.insert(16, "surprising".to_string());
    report(out, "insert(16, \"surprising\")", inserted.map(|()| "ok"))?;
    print_list(out, &list)?;
    let inserted = list.insert(35, "unreachable".to_string());
    report(out, "insert(35, \"unreachable\")", inserted.map(|()| "ok"))?;
    print_list(out, &list)?;

    writeln!(out)?;
    report(out, "remove_first()", list.remove_first())?;
    print_list(out, &list)?;
    report(out, "remove_last()", list.remove_last())?;
    print_list(out, &list)?;
    report(out, "remove_value(\"used\")", list.remove_value(&"used".to_string()))?;
    print_list(out, &list)?;
    report(
        out,
        "remove_value(\"delivery boy\")",
        list.remove_value(&"delivery boy".to_string()),
    )?;
    print_list(out, &list)?;
    report(out, "remove(12)", list.remove(12))?;
    print_list(out, &list)?;
    report(out, "set(12, \"extracted\")", list.set(12, "extracted".to_string()))?;
    print_list(out, &list)?;

    writeln!(out)?;
    report(out, "first()", list.first().map(|word| word.clone()))?;
    report(out, "last()", list.last().map(|word| word.clone()))?;
    writeln!(out, "contains(\"super\") -> {}", list.contains(&"super".to_string()))?;
    writeln!(out, "is_empty() -> {}", list.is_empty())?;

    writeln!(out)?;
    let mut it = list.iter();
    report(out, "iterator: next()", it.try_next())?;
    report(out, "list: remove_first()", list.remove_first())?;
    report(out, "iterator: has_next()", it.has_next())?;
    print_list(out, &list)?;

    let mut it = list.iter();
    let mut removed = Vec::new();
    while it.has_next()? {
        let word = it.try_next()?;
        if word.ends_with('.') {
            removed.push(it.remove()?);
        }
    }
    writeln!(out, "removed through iterator -> {removed:?}")?;
    report(out, "list_iter(0)", list.list_iter(0))?;

    writeln!(out)?;
    print_list(out, &list)?;
    tracing::debug!(mod_count = list.mod_count(), "walk finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use iulist::ListError;

    fn walk(text: &str, capacity: usize) -> String {
        let mut out = Vec::new();
        run(text, capacity, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn short_text_reports_failed_steps() {
        let output = walk("a b.", 1);
        assert!(output.contains("Capacity: 1 -> 2\n"));
        assert!(output.contains("index_of(\"fellow.\") -> not found\n"));
        assert!(output.contains("add_front(\"Traveler.\") -> [Traveler., a, b.]\n"));
        assert!(output.contains(
            "insert_after(\"impressive\", \"long\") -> error: element not found\n"
        ));
        assert!(output.contains(
            "get(16) -> error: index 16 out of bounds for list of length 3\n"
        ));
        assert!(output.contains("removed through iterator -> []\n"));
    }

    #[test]
    fn iterator_detects_outside_removal() {
        let output = walk(crate::cli::DEFAULT_TEXT, 5);
        let expected = ListError::ConcurrentModification {
            expected: 27,
            actual: 28,
        };
        assert!(output.contains(&format!("iterator: has_next() -> error: {expected}\n")));
    }

    #[test]
    fn list_is_printed_after_each_change() {
        let output = walk("a b.", 1);
        assert!(output.contains(
            "add_front(\"Traveler.\") -> [Traveler., a, b.]\n\
             Size of list: 3\nContents of list:\n\tTraveler.\n\ta\n\tb.\n"
        ));
        assert!(output.contains(
            "remove_first() -> Traveler.\nSize of list: 2\nContents of list:\n\ta\n\tb.\n"
        ));
        assert!(output.contains(
            "remove_last() -> b.\nSize of list: 1\nContents of list:\n\ta\n"
        ));
        assert_eq!(output.matches("Size of list:").count(), 13);
    }
}

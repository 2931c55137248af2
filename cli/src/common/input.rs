//! Loading the demonstration list from text.

use iulist::ArrayList;

use super::error::{CliError, CliResult};

/// Split `text` into words and load them, in order, into a list of `capacity`.
pub fn load_words(text: &str, capacity: usize) -> CliResult<ArrayList<String>> {
    let mut list = ArrayList::with_capacity(capacity);
    list.extend(text.split_whitespace().map(str::to_string));
    if list.is_empty() {
        return Err(CliError::EmptyText);
    }
    tracing::debug!(
        words = list.len(),
        initial_capacity = capacity,
        capacity = list.capacity(),
        "loaded list"
    );
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let list = load_words("  a\tb\n c ", 1).unwrap();
        assert_eq!(list.to_vec(), ["a", "b", "c"]);
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn rejects_blank_text() {
        assert!(matches!(load_words(" \n ", 5), Err(CliError::EmptyText)));
    }
}

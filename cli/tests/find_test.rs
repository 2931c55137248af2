//! Integration tests for the `find` command.

mod common;

use common::check_stdout;
use expect_test::expect;

#[test]
fn find_present_word() {
    check_stdout(
        &["find", "fellow."],
        expect!["index_of(\"fellow.\") -> 4\ncontains(\"fellow.\") -> true\n"],
    );
}

#[test]
fn find_missing_word() {
    check_stdout(
        &["find", "delivery"],
        expect!["index_of(\"delivery\") -> not found\ncontains(\"delivery\") -> false\n"],
    );
}

#[test]
fn find_reports_first_occurrence() {
    check_stdout(
        &["--text", "b a b a", "find", "a"],
        expect!["index_of(\"a\") -> 1\ncontains(\"a\") -> true\n"],
    );
}

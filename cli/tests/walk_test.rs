//! Integration tests for the `walk` command.

mod common;

use common::iulist;
use predicates::prelude::*;

#[test]
fn walk_grows_buffer_from_small_capacity() {
    iulist()
        .args(["walk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Size of items: 20\n"))
        .stdout(predicate::str::contains("Capacity: 5 -> 20\n"));
}

#[test]
fn walk_reports_positional_operations() {
    iulist()
        .args(["walk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index_of(\"fellow.\") -> 4\n"))
        .stdout(predicate::str::contains(
            "insert_after(\"impressive\", \"long\") -> ok\n",
        ))
        .stdout(predicate::str::contains("get(16) -> testing\n"))
        .stdout(predicate::str::contains(
            "insert(35, \"unreachable\") -> error: index 35 out of bounds for list of length 23\n",
        ));
}

#[test]
fn walk_reports_removals() {
    iulist()
        .args(["walk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("remove_first() -> Traveler.\n"))
        .stdout(predicate::str::contains("remove_last() -> it\n"))
        .stdout(predicate::str::contains("remove_value(\"used\") -> used\n"))
        .stdout(predicate::str::contains(
            "remove_value(\"delivery boy\") -> error: element not found\n",
        ))
        .stdout(predicate::str::contains("remove(12) -> be\n"))
        .stdout(predicate::str::contains("set(12, \"extracted\") -> for\n"))
        .stdout(predicate::str::contains("first() -> Hello\n"))
        .stdout(predicate::str::contains("last() -> like\n"))
        .stdout(predicate::str::contains("contains(\"super\") -> true\n"));
}

#[test]
fn walk_prints_list_after_removal() {
    iulist()
        .args(["walk"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "remove(12) -> be\nSize of list: 19\nContents of list:\n\tHello\n",
        ))
        .stdout(predicate::str::contains(
            "set(12, \"extracted\") -> for\nSize of list: 19\n",
        ));
}

#[test]
fn walk_shows_fail_fast_iteration() {
    iulist()
        .args(["walk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("iterator: next() -> Hello\n"))
        .stdout(predicate::str::contains(
            "iterator: has_next() -> error: list modified during iteration",
        ))
        .stdout(predicate::str::contains(
            "removed through iterator -> [\"fellow.\"]\n",
        ))
        .stdout(predicate::str::contains(
            "list_iter(0) -> error: bidirectional list iteration is not supported\n",
        ))
        .stdout(predicate::str::ends_with("Size of list: 17\nContents of list:\n\tthere\n\tmy\n\tinteresting\n\tThis\n\tsuper\n\tduper\n\tlong\n\timpressive\n\tstring\n\twill\n\textracted\n\tsurprising\n\ttesting\n\tand\n\tyou're\n\tgonna\n\tlike\n"));
}

#[test]
fn walk_verbose_logs_growth() {
    iulist()
        .args(["--verbose", "--no-color", "walk"])
        .assert()
        .success()
        .stderr(predicate::str::contains("grew list buffer"));
}

#[test]
fn walk_rejects_blank_text() {
    iulist()
        .args(["--no-color", "--text", "   ", "walk"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("input text has no words"))
        .stderr(predicate::str::contains("iulist::empty_text"));
}

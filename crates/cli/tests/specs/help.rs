// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and argument errors

use crate::prelude::*;
use assert_cmd::Command;

#[test]
fn help_lists_commands() {
    Command::cargo_bin("promo")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("toggle"))
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("active"));
}

#[test]
fn unknown_mode_is_rejected_by_argument_parsing() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    temp.promo()
        .args(&["toggle", "book.toml", "--scheme", "Monsoon Sale", "--to", "Brand"])
        .fails()
        .stderr_has("unknown apply-on mode: brand");
}

#[test]
fn yes_and_no_conflict() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    Command::cargo_bin("promo")
        .unwrap()
        .current_dir(temp.path())
        .args([
            "toggle",
            "book.toml",
            "--scheme",
            "Monsoon Sale",
            "--to",
            "Item Group",
            "--yes",
            "--no",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `promo toggle` specs
//!
//! Toggling away from a mode whose rows are filled asks before clearing them.

use crate::prelude::*;

const PROMPT: &str =
    "Switching to 'Item Group' will clear 2 rows in 'Item Codes'. Do you want to continue? [y/N]";

#[test]
fn confirmed_toggle_clears_losing_rows() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    temp.promo()
        .args(&["toggle", "book.toml", "--scheme", "Monsoon Sale", "--to", "Item Group", "--yes"])
        .passes()
        .stdout_eq(
            "Monsoon Sale: committed\n\
             \x20 Apply On: Item Group\n\
             \x20 Cleared: 2 row(s) in 'Item Codes'\n\
             \x20 Item Codes: (none)\n\
             \x20 Item Groups: (none)\n\
             \x20 Saved: yes\n",
        );
}

#[test]
fn declined_toggle_keeps_everything() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    temp.promo()
        .args(&["toggle", "book.toml", "--scheme", "Monsoon Sale", "--to", "group", "--no"])
        .passes()
        .stdout_has("Monsoon Sale: reverted")
        .stdout_has("Apply On: Item Code")
        .stdout_has("Item Codes: SKU-TEA, SKU-COFFEE")
        .stdout_lacks("Cleared");
}

#[test]
fn interactive_yes_confirms() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    temp.promo()
        .args(&["toggle", "book.toml", "--scheme", "Monsoon Sale", "--to", "Item Group"])
        .stdin("y\n")
        .passes()
        .stderr_has(PROMPT)
        .stdout_has("Monsoon Sale: committed");
}

#[test]
fn interactive_enter_cancels() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    temp.promo()
        .args(&["toggle", "book.toml", "--scheme", "Monsoon Sale", "--to", "Item Group"])
        .stdin("\n")
        .passes()
        .stderr_has(PROMPT)
        .stdout_has("Monsoon Sale: reverted");
}

#[test]
fn closed_stdin_keeps_prior_mode() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    temp.promo()
        .args(&["toggle", "book.toml", "--scheme", "Monsoon Sale", "--to", "Item Group"])
        .stdin("")
        .passes()
        .stdout_has("Monsoon Sale: reverted")
        .stdout_has("Apply On: Item Code");
}

#[test]
fn empty_losing_collection_switches_without_asking() {
    let temp = Project::empty();
    temp.file("book.toml", BROKEN_BOOK);

    // Item codes are empty, so nothing is lost and the stray groups become valid
    let run = temp
        .promo()
        .args(&["toggle", "book.toml", "--scheme", "Imported", "--to", "Item Group"])
        .stdin("")
        .passes()
        .stdout_has("Imported: committed")
        .stdout_has("Item Groups: Beverages, Snacks")
        .stdout_has("Saved: yes");
    assert!(!run.stderr.contains("[y/N]"), "stderr:\n{}", run.stderr);
}

#[test]
fn same_mode_save_is_blocked_verbatim() {
    let temp = Project::empty();
    temp.file("book.toml", BROKEN_BOOK);

    temp.promo()
        .args(&["toggle", "book.toml", "--scheme", "Imported", "--to", "Item Code", "--yes"])
        .fails()
        .stderr_has(
            "You selected 'Item Code' but added rows in 'Item Groups'. Please clear them.",
        )
        .stdout_has("Imported: unchanged")
        .stdout_has("Saved: no");
}

#[test]
fn json_report_includes_cleared_collection() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    let run = temp
        .promo()
        .args(&[
            "--format",
            "json",
            "toggle",
            "book.toml",
            "--scheme",
            "Snack Attack",
            "--to",
            "Item Code",
            "--yes",
        ])
        .passes();

    let json = run.json();
    assert_eq!(json["outcome"], "committed");
    assert_eq!(json["apply_on"], "Item Code");
    assert_eq!(json["cleared"]["collection"], "Item Groups");
    assert_eq!(json["cleared"]["rows"], 1);
    assert_eq!(json["saved"], true);
}

#[test]
fn unknown_scheme_lists_available() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    temp.promo()
        .args(&["toggle", "book.toml", "--scheme", "monsoon sale", "--to", "Item Group", "--yes"])
        .fails()
        .stderr_has("Scheme 'monsoon sale' not found")
        .stderr_has("Available schemes: Monsoon Sale, Snack Attack, Bulk Buy");
}

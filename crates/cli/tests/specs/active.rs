// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `promo active` specs

use crate::prelude::*;

#[test]
fn lists_selling_schemes_in_window() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    temp.promo()
        .args(&["active", "book.toml", "--party", "selling", "--today", "2025-07-15"])
        .passes()
        .stdout_has("Monsoon Sale")
        .stdout_has("Snack Attack")
        .stdout_has("2025-06-01 .. 2025-09-30")
        .stdout_lacks("Bulk Buy");
}

#[test]
fn expired_schemes_drop_out() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    temp.promo()
        .args(&["active", "book.toml", "--party", "selling", "--today", "2025-11-01"])
        .passes()
        .stdout_has("Snack Attack")
        .stdout_lacks("Monsoon Sale");
}

#[test]
fn buying_side_is_separate() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    let run = temp
        .promo()
        .args(&[
            "--format", "json", "active", "book.toml", "--party", "buying", "--today", "2025-03-01",
        ])
        .passes();

    let json = run.json();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Bulk Buy");
    assert_eq!(json[0]["apply_on"], "Item Code");
}

#[test]
fn nothing_active_says_so() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    temp.promo()
        .args(&["active", "book.toml", "--party", "selling", "--today", "2024-01-01"])
        .passes()
        .stdout_eq("No active schemes\n");
}

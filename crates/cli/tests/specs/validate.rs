// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `promo validate` specs

use crate::prelude::*;

#[test]
fn consistent_book_passes() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    temp.promo()
        .args(&["validate", "book.toml"])
        .passes()
        .stdout_eq("ok       Monsoon Sale\nok       Snack Attack\nok       Bulk Buy\n");
}

#[test]
fn imported_inconsistent_scheme_is_blocked() {
    let temp = Project::empty();
    temp.file("book.toml", BROKEN_BOOK);

    temp.promo()
        .args(&["validate", "book.toml"])
        .fails()
        .stdout_has(
            "invalid  Imported: You selected 'Item Code' but added rows in 'Item Groups'. Please clear them.",
        )
        .stdout_has("invalid  Backwards: Valid From date cannot be later than Valid To date.");
}

#[test]
fn single_scheme_can_be_checked() {
    let temp = Project::empty();
    temp.file("book.toml", BROKEN_BOOK);

    temp.promo()
        .args(&["validate", "book.toml", "--scheme", "Backwards"])
        .fails()
        .stdout_has("Backwards")
        .stdout_lacks("Imported");
}

#[test]
fn json_output_reports_each_scheme() {
    let temp = Project::empty();
    temp.file("book.toml", BROKEN_BOOK);

    let run = temp
        .promo()
        .args(&["--format", "json", "validate", "book.toml"])
        .fails();

    let json = run.json();
    assert_eq!(json[0]["scheme"], "Imported");
    assert_eq!(json[0]["valid"], false);
    assert_eq!(json[1]["scheme"], "Backwards");
}

#[test]
fn malformed_book_explains_the_format() {
    let temp = Project::empty();
    temp.file("book.toml", "[[scheme]]\nname = \"Broken\"\napply_on = 3\n");

    temp.promo()
        .args(&["validate", "book.toml"])
        .fails()
        .stderr_has("error: Failed to load scheme book 'book.toml'")
        .stderr_has("suggestions:");
}

#[test]
fn duplicate_scheme_names_are_refused() {
    let temp = Project::empty();
    temp.file(
        "book.toml",
        "[[scheme]]\nname = \"Twice\"\nparty = \"Selling\"\napply_on = \"Item Code\"\n\n\
         [[scheme]]\nname = \"Twice\"\nparty = \"Buying\"\napply_on = \"Item Group\"\n",
    );

    temp.promo()
        .args(&["validate", "book.toml"])
        .fails()
        .stderr_has("duplicate scheme name: Twice");
}

#[test]
fn missing_book_fails() {
    let temp = Project::empty();

    temp.promo()
        .args(&["validate", "nope.toml"])
        .fails()
        .stderr_has("Check that the file exists");
}

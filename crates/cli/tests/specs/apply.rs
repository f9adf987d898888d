// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `promo apply` specs

use crate::prelude::*;

#[test]
fn active_schemes_discount_and_add_free_rows() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);
    temp.file("invoice.toml", SALES_INVOICE);

    temp.promo()
        .args(&["apply", "book.toml", "invoice.toml", "--today", "2025-07-15"])
        .passes()
        .stdout_has("Promotional Scheme 'Monsoon Sale' applied: 10% discount.")
        .stdout_has("Free Quantity (1) added for scheme 'Snack Attack'.")
        .stdout_has("90.00")
        .stdout_has("135.00")
        .stdout_has("Snack Attack (free)");
}

#[test]
fn outside_the_window_nothing_applies() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);
    temp.file("invoice.toml", SALES_INVOICE);

    temp.promo()
        .args(&["apply", "book.toml", "invoice.toml", "--today", "2026-02-01"])
        .passes()
        .stdout_has("No promotional schemes applied")
        .stdout_has("100.00")
        .stdout_lacks("(free)");
}

#[test]
fn json_report_carries_items_and_messages() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);
    temp.file("invoice.toml", SALES_INVOICE);

    let run = temp
        .promo()
        .args(&[
            "--format",
            "json",
            "apply",
            "book.toml",
            "invoice.toml",
            "--today",
            "2025-07-15",
        ])
        .passes();

    let json = run.json();
    assert_eq!(json["applied"][0]["reward"], "discount");
    assert_eq!(json["applied"][0]["scheme"], "Monsoon Sale");
    assert_eq!(json["applied"][1]["reward"], "free_quantity");
    assert_eq!(json["messages"].as_array().unwrap().len(), 2);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["rate"], 90.0);
    assert_eq!(items[0]["promotional_scheme_applied"], "Monsoon Sale");
    assert_eq!(items[3]["item_code"], "SKU-CHIPS");
    assert_eq!(items[3]["is_free_item"], true);
    assert_eq!(items[3]["rate"], 0.0);
}

#[test]
fn unreadable_invoice_is_reported() {
    let temp = Project::empty();
    temp.file("book.toml", BOOK);

    temp.promo()
        .args(&["apply", "book.toml", "missing.toml"])
        .fails()
        .stderr_has("Failed to load invoice 'missing.toml'");
}

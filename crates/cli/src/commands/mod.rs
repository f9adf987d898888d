// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod active;
pub mod apply;
pub mod toggle;
pub mod validate;

use crate::error::CliError;
use chrono::NaiveDate;
use promo_core::{Clock, Scheme, SchemeBook};
use std::path::Path;

/// Load a scheme book, turning failures into a displayable error
pub fn load_book(path: &Path) -> Result<SchemeBook, CliError> {
    promo_core::load_book(path).map_err(|e| CliError::load_failed("scheme book", path, e))
}

/// Look up a scheme by exact name
pub fn find_scheme<'a>(book: &'a SchemeBook, name: &str) -> Result<&'a Scheme, CliError> {
    book.get(name).map_err(|_| {
        let available: Vec<&str> = book.schemes().iter().map(|s| s.name.as_str()).collect();
        CliError::scheme_not_found(name, &available)
    })
}

/// Date validity windows are checked against: `--today` wins over the clock
pub fn evaluation_date(explicit: Option<NaiveDate>, clock: &impl Clock) -> NaiveDate {
    explicit.unwrap_or_else(|| clock.today())
}

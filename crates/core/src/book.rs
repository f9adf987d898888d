// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheme book TOML parsing
//!
//! A scheme book is the import format for schemes:
//!
//! ```toml
//! [[scheme]]
//! name = "Diwali"
//! party = "Selling"
//! apply_on = "Item Group"
//! item_groups = ["Beverages"]
//! valid_from = "2025-10-01"
//! valid_to = "2025-11-15"
//! validation = "Based on Minimum Amount"
//! minimum_amount = 1000.0
//! discount_percentage = 10.0
//!
//! [catalog]
//! "SKU-COLA" = "Beverages"
//! ```
//!
//! Parsing does not validate schemes; imported records may violate the
//! collection invariant and are caught at save time.

use crate::promotion::Invoice;
use crate::scheme::{PartySide, Scheme};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading scheme books and invoices
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("duplicate scheme name: {0}")]
    DuplicateScheme(String),
    #[error("scheme not found: {0}")]
    UnknownScheme(String),
}

/// Item code → item group lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    groups: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item_code: impl Into<String>, item_group: impl Into<String>) -> Self {
        self.groups.insert(item_code.into(), item_group.into());
        self
    }

    pub fn group_of(&self, item_code: &str) -> Option<&str> {
        self.groups.get(item_code).map(String::as_str)
    }

    /// All item codes belonging to any of the given groups
    pub fn items_in_groups(&self, groups: &BTreeSet<String>) -> BTreeSet<String> {
        self.groups
            .iter()
            .filter(|(_, group)| groups.contains(*group))
            .map(|(code, _)| code.clone())
            .collect()
    }
}

#[derive(Deserialize)]
struct RawBook {
    #[serde(default)]
    scheme: Vec<Scheme>,
    #[serde(default)]
    catalog: BTreeMap<String, String>,
}

/// A parsed scheme book
#[derive(Debug, Clone, Default)]
pub struct SchemeBook {
    schemes: Vec<Scheme>,
    catalog: Catalog,
}

impl SchemeBook {
    pub fn new(schemes: Vec<Scheme>, catalog: Catalog) -> Result<Self, LoadError> {
        let mut seen = HashSet::new();
        for scheme in &schemes {
            if !seen.insert(scheme.name.as_str()) {
                return Err(LoadError::DuplicateScheme(scheme.name.clone()));
            }
        }
        Ok(SchemeBook { schemes, catalog })
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a scheme by name
    pub fn get(&self, name: &str) -> Result<&Scheme, LoadError> {
        self.schemes
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| LoadError::UnknownScheme(name.to_string()))
    }

    /// Schemes offered on `party` whose validity window contains `today`
    pub fn active_for(&self, party: PartySide, today: NaiveDate) -> impl Iterator<Item = &Scheme> {
        self.schemes
            .iter()
            .filter(move |s| s.party == party && s.is_active_on(today))
    }
}

/// Parse a scheme book from TOML content
pub fn parse_book(content: &str) -> Result<SchemeBook, LoadError> {
    let raw: RawBook = toml::from_str(content)?;
    SchemeBook::new(raw.scheme, Catalog { groups: raw.catalog })
}

/// Read and parse a scheme book file
pub fn load_book(path: &Path) -> Result<SchemeBook, LoadError> {
    parse_book(&read(path)?)
}

/// Parse an invoice from TOML content
pub fn parse_invoice(content: &str) -> Result<Invoice, LoadError> {
    Ok(toml::from_str(content)?)
}

/// Read and parse an invoice file
pub fn load_invoice(path: &Path) -> Result<Invoice, LoadError> {
    parse_invoice(&read(path)?)
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod tests;

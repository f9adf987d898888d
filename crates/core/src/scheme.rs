// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Promotional scheme record
//!
//! A scheme applies either to explicit item codes or to item groups. The
//! `apply_on` discriminator selects which of the two row collections is
//! active; the other must stay empty once the record is committed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which collection a scheme's item rows are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplyOn {
    #[serde(rename = "Item Code")]
    ItemCode,
    #[serde(rename = "Item Group")]
    ItemGroup,
}

impl ApplyOn {
    /// The collection this mode keeps active
    pub fn collection(self) -> Collection {
        match self {
            ApplyOn::ItemCode => Collection::ItemCodes,
            ApplyOn::ItemGroup => Collection::ItemGroups,
        }
    }

    /// The opposite mode
    pub fn other(self) -> ApplyOn {
        match self {
            ApplyOn::ItemCode => ApplyOn::ItemGroup,
            ApplyOn::ItemGroup => ApplyOn::ItemCode,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ApplyOn::ItemCode => "Item Code",
            ApplyOn::ItemGroup => "Item Group",
        }
    }
}

impl std::fmt::Display for ApplyOn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ApplyOn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], " ").as_str() {
            "item code" | "code" => Ok(ApplyOn::ItemCode),
            "item group" | "group" => Ok(ApplyOn::ItemGroup),
            other => Err(format!("unknown apply-on mode: {other}")),
        }
    }
}

/// One of the two row collections on a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collection {
    #[serde(rename = "Item Codes")]
    ItemCodes,
    #[serde(rename = "Item Groups")]
    ItemGroups,
}

impl Collection {
    /// Human-readable label used in dialogs and validation messages
    pub fn label(self) -> &'static str {
        match self {
            Collection::ItemCodes => "Item Codes",
            Collection::ItemGroups => "Item Groups",
        }
    }

    /// Field name of the child table on the host document
    pub fn field(self) -> &'static str {
        match self {
            Collection::ItemCodes => "promotional_scheme_on_item_code",
            Collection::ItemGroups => "promotional_scheme_on_item_group",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCodeRow {
    pub item_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemGroupRow {
    pub item_group: String,
}

/// A row destined for one of the two collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    ItemCode(ItemCodeRow),
    ItemGroup(ItemGroupRow),
}

impl Row {
    pub fn item_code(code: impl Into<String>) -> Self {
        Row::ItemCode(ItemCodeRow {
            item_code: code.into(),
        })
    }

    pub fn item_group(group: impl Into<String>) -> Self {
        Row::ItemGroup(ItemGroupRow {
            item_group: group.into(),
        })
    }

    pub fn collection(&self) -> Collection {
        match self {
            Row::ItemCode(_) => Collection::ItemCodes,
            Row::ItemGroup(_) => Collection::ItemGroups,
        }
    }
}

/// Trading side a scheme is offered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartySide {
    Selling,
    Buying,
}

/// Threshold rule that makes an invoice eligible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromoValidation {
    #[serde(rename = "Based on Minimum Amount")]
    MinimumAmount,
    #[serde(rename = "Based on Minimum Quantity")]
    MinimumQuantity,
}

/// A promotional scheme record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
    pub name: String,
    pub party: PartySide,
    pub apply_on: ApplyOn,
    #[serde(default)]
    pub item_codes: Vec<ItemCodeRow>,
    #[serde(default)]
    pub item_groups: Vec<ItemGroupRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<PromoValidation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customer_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub territories: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppliers: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supplier_groups: Vec<String>,
}

impl Scheme {
    /// Create an empty scheme with no rows, dates or conditions
    pub fn new(name: impl Into<String>, party: PartySide, apply_on: ApplyOn) -> Self {
        Scheme {
            name: name.into(),
            party,
            apply_on,
            item_codes: Vec::new(),
            item_groups: Vec::new(),
            valid_from: None,
            valid_to: None,
            validation: None,
            minimum_amount: None,
            discount_percentage: None,
            minimum_quantity: None,
            free_quantity: None,
            customers: Vec::new(),
            customer_groups: Vec::new(),
            territories: Vec::new(),
            suppliers: Vec::new(),
            supplier_groups: Vec::new(),
        }
    }

    pub fn with_item_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item_codes.extend(codes.into_iter().map(|c| ItemCodeRow {
            item_code: c.into(),
        }));
        self
    }

    pub fn with_item_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.item_groups.extend(groups.into_iter().map(|g| ItemGroupRow {
            item_group: g.into(),
        }));
        self
    }

    pub fn with_validity(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.valid_from = Some(from);
        self.valid_to = Some(to);
        self
    }

    pub fn with_minimum_amount(mut self, minimum: f64, discount_percentage: f64) -> Self {
        self.validation = Some(PromoValidation::MinimumAmount);
        self.minimum_amount = Some(minimum);
        self.discount_percentage = Some(discount_percentage);
        self
    }

    pub fn with_minimum_quantity(mut self, minimum: f64, free_quantity: f64) -> Self {
        self.validation = Some(PromoValidation::MinimumQuantity);
        self.minimum_quantity = Some(minimum);
        self.free_quantity = Some(free_quantity);
        self
    }

    /// Number of rows in a collection
    pub fn row_count(&self, collection: Collection) -> usize {
        match collection {
            Collection::ItemCodes => self.item_codes.len(),
            Collection::ItemGroups => self.item_groups.len(),
        }
    }

    pub fn has_rows(&self, collection: Collection) -> bool {
        self.row_count(collection) > 0
    }

    /// Drop every row of a collection
    pub fn clear(&mut self, collection: Collection) {
        match collection {
            Collection::ItemCodes => self.item_codes.clear(),
            Collection::ItemGroups => self.item_groups.clear(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        match row {
            Row::ItemCode(r) => self.item_codes.push(r),
            Row::ItemGroup(r) => self.item_groups.push(r),
        }
    }

    /// Remove a row by position; returns false when out of range
    pub fn remove_row(&mut self, collection: Collection, index: usize) -> bool {
        let len = self.row_count(collection);
        if index >= len {
            return false;
        }
        match collection {
            Collection::ItemCodes => {
                self.item_codes.remove(index);
            }
            Collection::ItemGroups => {
                self.item_groups.remove(index);
            }
        }
        true
    }

    /// True when both dates are set and `date` falls inside them
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        match (self.valid_from, self.valid_to) {
            (Some(from), Some(to)) => from <= date && date <= to,
            _ => false,
        }
    }

    /// False when no party selector is set (the scheme applies to everyone)
    pub fn has_party_limits(&self) -> bool {
        !(self.customers.is_empty()
            && self.customer_groups.is_empty()
            && self.territories.is_empty()
            && self.suppliers.is_empty()
            && self.supplier_groups.is_empty())
    }
}

#[cfg(test)]
#[path = "scheme_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Applying active schemes to invoices
//!
//! Each active scheme is checked in book order: the invoice party must match
//! the scheme's party selectors, then the invoice items covered by the scheme
//! must reach the scheme's amount or quantity threshold. Amount schemes
//! discount the matching rows; quantity schemes append zero-rate free rows.

use crate::book::{Catalog, SchemeBook};
use crate::scheme::{PartySide, PromoValidation, Scheme};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceKind {
    #[serde(rename = "Sales Invoice")]
    Sales,
    #[serde(rename = "Purchase Invoice")]
    Purchase,
}

impl InvoiceKind {
    pub fn party_side(self) -> PartySide {
        match self {
            InvoiceKind::Sales => PartySide::Selling,
            InvoiceKind::Purchase => PartySide::Buying,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub item_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(default)]
    pub qty: f64,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub base_net_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotional_scheme_applied: Option<String>,
    #[serde(default)]
    pub is_free_item: bool,
}

impl InvoiceItem {
    pub fn new(item_code: impl Into<String>, qty: f64, rate: f64) -> Self {
        InvoiceItem {
            item_code: item_code.into(),
            item_name: None,
            qty,
            rate,
            amount: qty * rate,
            base_net_amount: qty * rate,
            discount_percentage: None,
            promotional_scheme_applied: None,
            is_free_item: false,
        }
    }

    fn free_copy(&self, qty: f64, scheme: &str) -> Self {
        InvoiceItem {
            item_code: self.item_code.clone(),
            item_name: self.item_name.clone(),
            qty,
            rate: 0.0,
            amount: 0.0,
            base_net_amount: 0.0,
            discount_percentage: None,
            promotional_scheme_applied: Some(scheme.to_string()),
            is_free_item: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub kind: InvoiceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub territory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_group: Option<String>,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
}

/// What a scheme did to an invoice
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reward", rename_all = "snake_case")]
pub enum AppliedScheme {
    Discount {
        scheme: String,
        percentage: f64,
        items: usize,
    },
    FreeQuantity {
        scheme: String,
        quantity: f64,
        rows: usize,
    },
}

impl AppliedScheme {
    pub fn scheme(&self) -> &str {
        match self {
            AppliedScheme::Discount { scheme, .. } | AppliedScheme::FreeQuantity { scheme, .. } => {
                scheme
            }
        }
    }

    /// Message shown to the user after submission
    pub fn message(&self) -> String {
        match self {
            AppliedScheme::Discount {
                scheme, percentage, ..
            } => format!(
                "Promotional Scheme '{}' applied: {}% discount.",
                scheme, percentage
            ),
            AppliedScheme::FreeQuantity {
                scheme, quantity, ..
            } => format!("Free Quantity ({}) added for scheme '{}'.", quantity, scheme),
        }
    }
}

/// Apply every active scheme of the book to the invoice, in book order
pub fn apply_promotional_schemes(
    invoice: &mut Invoice,
    book: &SchemeBook,
    today: NaiveDate,
) -> Vec<AppliedScheme> {
    let side = invoice.kind.party_side();
    let mut applied = Vec::new();

    for scheme in book.active_for(side, today) {
        if !party_matches(invoice, scheme) {
            continue;
        }

        let codes = scheme_item_codes(scheme, book.catalog());
        let matching: Vec<usize> = invoice
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| codes.is_empty() || codes.contains(&item.item_code))
            .map(|(i, _)| i)
            .collect();
        if matching.is_empty() {
            continue;
        }

        if let Some(result) = apply_scheme(invoice, scheme, &matching) {
            applied.push(result);
        }
    }

    applied
}

fn apply_scheme(invoice: &mut Invoice, scheme: &Scheme, matching: &[usize]) -> Option<AppliedScheme> {
    match scheme.validation? {
        PromoValidation::MinimumAmount => {
            let total: f64 = matching
                .iter()
                .map(|&i| invoice.items[i].base_net_amount)
                .sum();
            let percentage = scheme.discount_percentage.unwrap_or(0.0);
            if total < scheme.minimum_amount.unwrap_or(0.0) || percentage <= 0.0 {
                return None;
            }
            for &i in matching {
                let item = &mut invoice.items[i];
                item.rate -= item.rate * (percentage / 100.0);
                item.discount_percentage = Some(percentage);
                item.promotional_scheme_applied = Some(scheme.name.clone());
            }
            Some(AppliedScheme::Discount {
                scheme: scheme.name.clone(),
                percentage,
                items: matching.len(),
            })
        }
        PromoValidation::MinimumQuantity => {
            let total: f64 = matching.iter().map(|&i| invoice.items[i].qty).sum();
            let quantity = scheme.free_quantity.unwrap_or(0.0);
            if total < scheme.minimum_quantity.unwrap_or(0.0) || quantity <= 0.0 {
                return None;
            }
            let free: Vec<InvoiceItem> = matching
                .iter()
                .map(|&i| invoice.items[i].free_copy(quantity, &scheme.name))
                .collect();
            let rows = free.len();
            invoice.items.extend(free);
            Some(AppliedScheme::FreeQuantity {
                scheme: scheme.name.clone(),
                quantity,
                rows,
            })
        }
    }
}

/// Whether the invoice's party satisfies every selector the scheme sets
pub fn party_matches(invoice: &Invoice, scheme: &Scheme) -> bool {
    if !scheme.has_party_limits() {
        return true;
    }

    let allowed = |selector: &[String], value: &Option<String>| {
        selector.is_empty() || value.as_ref().is_some_and(|v| selector.contains(v))
    };

    match invoice.kind {
        InvoiceKind::Sales => {
            allowed(&scheme.customers, &invoice.customer)
                && allowed(&scheme.customer_groups, &invoice.customer_group)
                && allowed(&scheme.territories, &invoice.territory)
        }
        InvoiceKind::Purchase => {
            allowed(&scheme.suppliers, &invoice.supplier)
                && allowed(&scheme.supplier_groups, &invoice.supplier_group)
        }
    }
}

/// Item codes a scheme covers: explicit codes plus every item of its groups.
/// An empty set means the scheme covers all items.
pub fn scheme_item_codes(scheme: &Scheme, catalog: &Catalog) -> BTreeSet<String> {
    let mut codes: BTreeSet<String> = scheme
        .item_codes
        .iter()
        .filter(|r| !r.item_code.is_empty())
        .map(|r| r.item_code.clone())
        .collect();

    let groups: BTreeSet<String> = scheme
        .item_groups
        .iter()
        .filter(|r| !r.item_group.is_empty())
        .map(|r| r.item_group.clone())
        .collect();
    if !groups.is_empty() {
        codes.extend(catalog.items_in_groups(&groups));
    }

    codes
}

#[cfg(test)]
#[path = "promotion_tests.rs"]
mod tests;

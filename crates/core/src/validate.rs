// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Save-time validation for schemes
//!
//! `validate` is the authoritative exclusivity gate: it rejects records that
//! could only exist if the interactive guard was bypassed (imports,
//! programmatic edits). `validate_scheme` is the full save hook.

use crate::scheme::{ApplyOn, Collection, PromoValidation, Scheme};
use thiserror::Error;

/// Reasons a scheme cannot be saved.
///
/// The `Display` output is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("You selected '{mode}' but added rows in '{collection}'. Please clear them.")]
    InconsistentState { mode: ApplyOn, collection: Collection },
    #[error("Valid From date cannot be later than Valid To date.")]
    InvalidDateRange,
    #[error("Please specify both Minimum Amount and Discount Percentage.")]
    MissingAmountCondition,
    #[error("Please specify both Minimum Quantity and Free Quantity.")]
    MissingQuantityCondition,
}

/// Check that only the collection selected by `apply_on` holds rows
pub fn validate(scheme: &Scheme) -> Result<(), ValidationError> {
    let inactive = scheme.apply_on.other().collection();
    if scheme.has_rows(inactive) {
        return Err(ValidationError::InconsistentState {
            mode: scheme.apply_on,
            collection: inactive,
        });
    }
    Ok(())
}

/// Full save gate: dates, then condition fields, then exclusivity
pub fn validate_scheme(scheme: &Scheme) -> Result<(), ValidationError> {
    validate_dates(scheme)?;
    validate_condition_fields(scheme)?;
    validate(scheme)
}

fn validate_dates(scheme: &Scheme) -> Result<(), ValidationError> {
    match (scheme.valid_from, scheme.valid_to) {
        (Some(from), Some(to)) if from > to => Err(ValidationError::InvalidDateRange),
        _ => Ok(()),
    }
}

fn validate_condition_fields(scheme: &Scheme) -> Result<(), ValidationError> {
    match scheme.validation {
        Some(PromoValidation::MinimumAmount)
            if !is_set(scheme.minimum_amount) || !is_set(scheme.discount_percentage) =>
        {
            Err(ValidationError::MissingAmountCondition)
        }
        Some(PromoValidation::MinimumQuantity)
            if !is_set(scheme.minimum_quantity) || !is_set(scheme.free_quantity) =>
        {
            Err(ValidationError::MissingQuantityCondition)
        }
        _ => Ok(()),
    }
}

// Zero counts as unset
fn is_set(value: Option<f64>) -> bool {
    value.is_some_and(|v| v != 0.0)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;

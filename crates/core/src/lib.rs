// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! promo-core: Core library for promotional scheme records
//!
//! This crate provides:
//! - The scheme record and its two mutually exclusive item collections
//! - A pure state machine guarding `apply_on` changes
//! - Save-time validation
//! - Application of active schemes to invoices
//! - TOML scheme book parsing

pub mod clock;
pub mod id;

pub mod book;
pub mod effect;
pub mod guard;
pub mod promotion;
pub mod scheme;
pub mod traced;
pub mod validate;

// Re-exports
pub use book::{load_book, load_invoice, parse_book, parse_invoice, Catalog, LoadError, SchemeBook};
pub use clock::{Clock, FakeClock, SystemClock};
pub use effect::{Effect, Event, LogLevel};
pub use guard::{
    on_mode_change, ExclusiveModeGuard, GuardEvent, GuardState, ModeDecision, PendingChange,
    SaveError,
};
pub use id::{ConfirmationToken, SequentialTokenGen, TokenGen, UuidTokenGen};
pub use promotion::{apply_promotional_schemes, AppliedScheme, Invoice, InvoiceItem, InvoiceKind};
pub use scheme::{
    ApplyOn, Collection, ItemCodeRow, ItemGroupRow, PartySide, PromoValidation, Row, Scheme,
};
pub use traced::TracedEffect;
pub use validate::{validate, validate_scheme, ValidationError};

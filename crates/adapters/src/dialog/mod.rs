// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Confirmation dialog adapters

mod fixed;
mod terminal;

pub use fixed::FixedDialog;
pub use terminal::{parse_answer, TerminalDialog};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DialogCall, FakeDialog};

use async_trait::async_trait;
use thiserror::Error;

/// The user's answer to a confirmation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Errors from dialog operations
#[derive(Debug, Error)]
pub enum DialogError {
    #[error("dialog closed without an answer")]
    Closed,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Adapter that asks the user to confirm a destructive change.
///
/// Implementations answer each call exactly once with exactly one of the
/// two outcomes, or fail if the dialog was abandoned.
#[async_trait]
pub trait ConfirmDialog: Clone + Send + Sync + 'static {
    async fn confirm(&self, message: &str) -> Result<Confirmation, DialogError>;
}

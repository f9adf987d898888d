// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host document adapters
//!
//! The host owns rendering. The guard only tells it which field to redraw
//! and which messages to show the user.

mod console;
mod noop;

pub use console::ConsoleHost;
pub use noop::NoOpHost;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeHost, HostCall};

use async_trait::async_trait;
use thiserror::Error;

/// Errors from host operations
#[derive(Debug, Error)]
pub enum HostError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Adapter for the document host (form UI)
#[async_trait]
pub trait HostAdapter: Clone + Send + Sync + 'static {
    /// Redraw a field after its value changed underneath the UI
    async fn refresh_field(&self, field: &str) -> Result<(), HostError>;

    /// Show an informational message
    async fn show_message(&self, message: &str) -> Result<(), HostError>;

    /// Show an error message verbatim; used when a save is blocked
    async fn show_error(&self, message: &str) -> Result<(), HostError>;
}

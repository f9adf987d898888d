// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::dialog::{ConfirmDialog, Confirmation, DialogError};
use crate::host::{HostAdapter, HostError};
use async_trait::async_trait;
use tracing::Instrument;

/// Wrapper that adds tracing to any ConfirmDialog
#[derive(Clone)]
pub struct TracedDialog<D> {
    inner: D,
}

impl<D> TracedDialog<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<D: ConfirmDialog> ConfirmDialog for TracedDialog<D> {
    async fn confirm(&self, message: &str) -> Result<Confirmation, DialogError> {
        let span = tracing::info_span!("dialog.confirm");
        async {
            tracing::info!(message, "asking");

            let start = std::time::Instant::now();
            let result = self.inner.confirm(message).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(answer) => tracing::info!(
                    ?answer,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "answered"
                ),
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "dialog abandoned"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any HostAdapter
#[derive(Clone)]
pub struct TracedHost<H> {
    inner: H,
}

impl<H> TracedHost<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<H: HostAdapter> HostAdapter for TracedHost<H> {
    async fn refresh_field(&self, field: &str) -> Result<(), HostError> {
        let span = tracing::info_span!("host.refresh", field);
        async {
            let result = self.inner.refresh_field(field).await;
            match &result {
                Ok(()) => tracing::debug!("refreshed"),
                Err(e) => tracing::error!(error = %e, "refresh failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn show_message(&self, message: &str) -> Result<(), HostError> {
        tracing::debug!(message_len = message.len(), "host.message");
        self.inner.show_message(message).await
    }

    async fn show_error(&self, message: &str) -> Result<(), HostError> {
        let span = tracing::info_span!("host.error");
        async {
            tracing::info!(message, "surfacing error");
            let result = self.inner.show_error(message).await;
            if let Err(e) = &result {
                tracing::error!(error = %e, "failed to show error");
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;

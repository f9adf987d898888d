// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op host adapter for headless use.

use super::{HostAdapter, HostError};
use async_trait::async_trait;

/// Host adapter that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpHost;

impl NoOpHost {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostAdapter for NoOpHost {
    async fn refresh_field(&self, _field: &str) -> Result<(), HostError> {
        Ok(())
    }

    async fn show_message(&self, _message: &str) -> Result<(), HostError> {
        Ok(())
    }

    async fn show_error(&self, _message: &str) -> Result<(), HostError> {
        Ok(())
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console host: messages to stdout, errors to stderr

use super::{HostAdapter, HostError};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

#[derive(Clone, Default)]
pub struct ConsoleHost;

impl ConsoleHost {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostAdapter for ConsoleHost {
    async fn refresh_field(&self, field: &str) -> Result<(), HostError> {
        // Nothing is rendered
        tracing::debug!(field, "refresh");
        Ok(())
    }

    async fn show_message(&self, message: &str) -> Result<(), HostError> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(format!("{}\n", message).as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }

    async fn show_error(&self, message: &str) -> Result<(), HostError> {
        let mut stderr = tokio::io::stderr();
        stderr.write_all(format!("{}\n", message).as_bytes()).await?;
        stderr.flush().await?;
        Ok(())
    }
}

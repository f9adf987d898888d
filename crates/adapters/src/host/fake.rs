// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake host adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{HostAdapter, HostError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Recorded host call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Refresh { field: String },
    Message { message: String },
    Error { message: String },
}

/// Fake host adapter for testing
#[derive(Clone, Default)]
pub struct FakeHost {
    calls: Arc<Mutex<Vec<HostCall>>>,
    fail_refresh: bool,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose field refreshes fail after being recorded
    pub fn failing_refresh() -> Self {
        Self {
            fail_refresh: true,
            ..Self::default()
        }
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Fields refreshed so far, in order
    pub fn refreshed(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::Refresh { field } => Some(field),
                _ => None,
            })
            .collect()
    }

    /// Error messages shown so far, in order
    pub fn errors(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::Error { message } => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: HostCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }
}

#[async_trait]
impl HostAdapter for FakeHost {
    async fn refresh_field(&self, field: &str) -> Result<(), HostError> {
        self.record(HostCall::Refresh {
            field: field.to_string(),
        });
        if self.fail_refresh {
            return Err(HostError::Io(std::io::Error::other("host detached")));
        }
        Ok(())
    }

    async fn show_message(&self, message: &str) -> Result<(), HostError> {
        self.record(HostCall::Message {
            message: message.to_string(),
        });
        Ok(())
    }

    async fn show_error(&self, message: &str) -> Result<(), HostError> {
        self.record(HostCall::Error {
            message: message.to_string(),
        });
        Ok(())
    }
}

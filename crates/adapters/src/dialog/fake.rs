// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake confirmation dialog for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ConfirmDialog, Confirmation, DialogError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Recorded dialog request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogCall {
    pub message: String,
}

#[derive(Debug, Clone, Copy)]
enum Scripted {
    Answer(Confirmation),
    Abandon,
}

/// Fake dialog with scripted answers.
///
/// Answers are consumed in order; once the script runs out every request is
/// cancelled. A held dialog blocks each request until [`FakeDialog::release`]
/// is called, which lets tests observe the record mid-confirmation.
#[derive(Clone, Default)]
pub struct FakeDialog {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<Mutex<Vec<DialogCall>>>,
    gate: Option<Arc<Semaphore>>,
}

impl FakeDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A dialog whose requests wait for `release`
    pub fn held() -> Self {
        Self {
            gate: Some(Arc::new(Semaphore::new(0))),
            ..Self::default()
        }
    }

    pub fn answer(self, answer: Confirmation) -> Self {
        self.push(Scripted::Answer(answer));
        self
    }

    /// Script a dialog that is closed without an answer
    pub fn abandon(self) -> Self {
        self.push(Scripted::Abandon);
        self
    }

    /// Let one held request proceed
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }

    /// Get all recorded requests
    pub fn calls(&self) -> Vec<DialogCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn push(&self, scripted: Scripted) {
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(scripted);
    }
}

#[async_trait]
impl ConfirmDialog for FakeDialog {
    async fn confirm(&self, message: &str) -> Result<Confirmation, DialogError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(DialogCall {
                message: message.to_string(),
            });

        if let Some(gate) = &self.gate {
            let permit = gate.acquire().await.map_err(|_| DialogError::Closed)?;
            permit.forget();
        }

        let next = self
            .script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        match next {
            Some(Scripted::Answer(answer)) => Ok(answer),
            Some(Scripted::Abandon) => Err(DialogError::Closed),
            None => Ok(Confirmation::Cancelled),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;

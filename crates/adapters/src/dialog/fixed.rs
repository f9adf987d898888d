// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dialog that always gives the same answer.
//!
//! Used for non-interactive runs (`--yes` / `--no`).

use super::{ConfirmDialog, Confirmation, DialogError};
use async_trait::async_trait;

#[derive(Clone, Copy, Debug)]
pub struct FixedDialog {
    answer: Confirmation,
}

impl FixedDialog {
    pub fn new(answer: Confirmation) -> Self {
        Self { answer }
    }

    pub fn always_confirm() -> Self {
        Self::new(Confirmation::Confirmed)
    }

    pub fn always_cancel() -> Self {
        Self::new(Confirmation::Cancelled)
    }
}

#[async_trait]
impl ConfirmDialog for FixedDialog {
    async fn confirm(&self, _message: &str) -> Result<Confirmation, DialogError> {
        Ok(self.answer)
    }
}

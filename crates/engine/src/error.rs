// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the form engine

use promo_adapters::HostError;
use promo_core::{SaveError, ValidationError};
use thiserror::Error;

/// Errors that can occur while driving a form session
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("host error: {0}")]
    Host(#[from] HostError),
    #[error("a mode change is awaiting confirmation")]
    ConfirmationPending,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<SaveError> for EngineError {
    fn from(err: SaveError) -> Self {
        match err {
            SaveError::ConfirmationPending => EngineError::ConfirmationPending,
            SaveError::Invalid(e) => EngineError::Validation(e),
        }
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Confirmation tokens
//!
//! Every pending confirmation is tagged with a token so a late or duplicated
//! dialog answer cannot resolve a different request.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifies one outstanding confirmation request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfirmationToken(pub String);

impl std::fmt::Display for ConfirmationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConfirmationToken {
    fn from(s: &str) -> Self {
        ConfirmationToken(s.to_string())
    }
}

/// Issues confirmation tokens
pub trait TokenGen: Clone + Send + Sync {
    fn next(&self) -> ConfirmationToken;
}

/// Random tokens for production use
#[derive(Clone, Default)]
pub struct UuidTokenGen;

impl TokenGen for UuidTokenGen {
    fn next(&self) -> ConfirmationToken {
        ConfirmationToken(uuid::Uuid::new_v4().to_string())
    }
}

/// Predictable tokens (`confirm-1`, `confirm-2`, ...) for tests
#[derive(Clone)]
pub struct SequentialTokenGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialTokenGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialTokenGen {
    fn default() -> Self {
        Self::new("confirm")
    }
}

impl TokenGen for SequentialTokenGen {
    fn next(&self) -> ConfirmationToken {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        ConfirmationToken(format!("{}-{}", self.prefix, n))
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects and events for state machine orchestration

use crate::id::ConfirmationToken;
use crate::scheme::{ApplyOn, Collection};
use serde::{Deserialize, Serialize};

/// Effects are side effects that the guard requests from its host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emit an event for other components to observe
    Emit(Event),
    /// Ask the user to confirm a destructive mode change
    RequestConfirmation {
        token: ConfirmationToken,
        message: String,
    },
    /// Tell the host UI to redraw a field
    RefreshField { field: String },
    /// Log a message
    Log { level: LogLevel, message: String },
}

/// Events emitted by the guard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    ModeChanged {
        scheme: String,
        from: ApplyOn,
        to: ApplyOn,
    },
    ModeReverted {
        scheme: String,
        kept: ApplyOn,
        proposed: ApplyOn,
    },
    ConfirmationRequested {
        scheme: String,
        token: ConfirmationToken,
        losing: Collection,
    },
    CollectionCleared {
        scheme: String,
        collection: Collection,
        rows: usize,
    },
    RowAdded {
        scheme: String,
        collection: Collection,
    },
    RowRemoved {
        scheme: String,
        collection: Collection,
        index: usize,
    },
    /// An edit arrived while a confirmation was outstanding
    EditRejected { scheme: String, reason: String },
}

impl Event {
    /// Get the event name for pattern matching
    /// Format: "category:action"
    pub fn name(&self) -> &'static str {
        match self {
            Event::ModeChanged { .. } => "mode:changed",
            Event::ModeReverted { .. } => "mode:reverted",
            Event::ConfirmationRequested { .. } => "confirmation:requested",
            Event::CollectionCleared { .. } => "collection:cleared",
            Event::RowAdded { .. } => "row:added",
            Event::RowRemoved { .. } => "row:removed",
            Event::EditRejected { .. } => "edit:rejected",
        }
    }
}

/// Log levels for effect-based logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;

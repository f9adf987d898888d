// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exclusive mode guard
//!
//! Keeps a scheme's two row collections mutually exclusive. Switching
//! `apply_on` away from a mode whose collection holds rows suspends the
//! change until the user confirms clearing those rows; cancelling restores
//! the previous mode with both collections untouched.
//!
//! While a confirmation is outstanding the record is frozen: further
//! toggles, row edits and saves are rejected, and [`ExclusiveModeGuard::scheme`]
//! only ever exposes the pre-transition record.

use crate::effect::{Effect, Event, LogLevel};
use crate::id::{ConfirmationToken, TokenGen};
use crate::scheme::{ApplyOn, Collection, Row, Scheme};
use crate::validate::{validate_scheme, ValidationError};
use thiserror::Error;

/// Outcome of proposing a new mode for a scheme
#[derive(Debug, Clone, PartialEq)]
pub enum ModeDecision {
    /// The proposed mode is already selected
    Unchanged,
    /// Nothing to clear; the returned record has the new mode applied
    Apply(Scheme),
    /// Rows would be lost; the change waits for the user
    Confirm(PendingChange),
}

/// A mode change waiting on user confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChange {
    from: ApplyOn,
    to: ApplyOn,
    losing: Collection,
    message: String,
}

impl PendingChange {
    pub fn from(&self) -> ApplyOn {
        self.from
    }

    pub fn to(&self) -> ApplyOn {
        self.to
    }

    /// The collection that confirming will clear
    pub fn losing(&self) -> Collection {
        self.losing
    }

    /// Message to show in the confirmation dialog
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Clear the losing collection and commit the new mode
    pub fn confirm(self, scheme: &Scheme) -> Scheme {
        let mut scheme = scheme.clone();
        scheme.clear(self.losing);
        scheme.apply_on = self.to;
        scheme
    }

    /// Discard the proposed mode; rows are left exactly as they were
    pub fn cancel(self, scheme: &Scheme) -> Scheme {
        let mut scheme = scheme.clone();
        scheme.apply_on = self.from;
        scheme
    }
}

/// Decide how a proposed mode change should proceed
pub fn on_mode_change(scheme: &Scheme, new_mode: ApplyOn) -> ModeDecision {
    if new_mode == scheme.apply_on {
        return ModeDecision::Unchanged;
    }

    let losing = scheme.apply_on.collection();
    if !scheme.has_rows(losing) {
        let mut next = scheme.clone();
        next.apply_on = new_mode;
        return ModeDecision::Apply(next);
    }

    ModeDecision::Confirm(PendingChange {
        from: scheme.apply_on,
        to: new_mode,
        losing,
        message: confirmation_message(new_mode, losing, scheme.row_count(losing)),
    })
}

fn confirmation_message(to: ApplyOn, losing: Collection, rows: usize) -> String {
    let noun = if rows == 1 { "row" } else { "rows" };
    format!(
        "Switching to '{}' will clear {} {} in '{}'. Do you want to continue?",
        to, rows, noun, losing
    )
}

/// Where the guard is in a mode-change interaction
#[derive(Debug, Clone, PartialEq)]
pub enum GuardState {
    Settled,
    AwaitingConfirmation {
        token: ConfirmationToken,
        change: PendingChange,
    },
}

/// Inputs that can change a guarded scheme
#[derive(Debug, Clone)]
pub enum GuardEvent {
    /// User picked a value for `apply_on`
    Toggle { to: ApplyOn },
    /// User accepted the confirmation dialog
    Confirm { token: ConfirmationToken },
    /// User dismissed the confirmation dialog
    Cancel { token: ConfirmationToken },
    AddRow { row: Row },
    RemoveRow { collection: Collection, index: usize },
}

/// Reasons a save is blocked
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("a mode change is awaiting confirmation")]
    ConfirmationPending,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A scheme under the protection of the mode guard
#[derive(Debug, Clone, PartialEq)]
pub struct ExclusiveModeGuard {
    scheme: Scheme,
    state: GuardState,
}

impl ExclusiveModeGuard {
    pub fn new(scheme: Scheme) -> Self {
        ExclusiveModeGuard {
            scheme,
            state: GuardState::Settled,
        }
    }

    /// The committed record (pre-transition while a confirmation is pending)
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, GuardState::AwaitingConfirmation { .. })
    }

    pub fn pending_token(&self) -> Option<&ConfirmationToken> {
        match &self.state {
            GuardState::AwaitingConfirmation { token, .. } => Some(token),
            GuardState::Settled => None,
        }
    }

    /// Pure transition function - returns new guard and effects
    pub fn transition(&self, event: GuardEvent, tokens: &impl TokenGen) -> (Self, Vec<Effect>) {
        let name = self.scheme.name.clone();

        match (&self.state, event) {
            // Settled: toggle either applies, waits, or does nothing
            (GuardState::Settled, GuardEvent::Toggle { to }) => {
                match on_mode_change(&self.scheme, to) {
                    ModeDecision::Unchanged => (self.clone(), vec![]),
                    ModeDecision::Apply(scheme) => {
                        let effects = vec![Effect::Emit(Event::ModeChanged {
                            scheme: name,
                            from: self.scheme.apply_on,
                            to,
                        })];
                        (ExclusiveModeGuard::new(scheme), effects)
                    }
                    ModeDecision::Confirm(change) => {
                        let token = tokens.next();
                        let effects = vec![
                            Effect::RequestConfirmation {
                                token: token.clone(),
                                message: change.message().to_string(),
                            },
                            Effect::Emit(Event::ConfirmationRequested {
                                scheme: name,
                                token: token.clone(),
                                losing: change.losing(),
                            }),
                        ];
                        let guard = ExclusiveModeGuard {
                            scheme: self.scheme.clone(),
                            state: GuardState::AwaitingConfirmation { token, change },
                        };
                        (guard, effects)
                    }
                }
            }

            // Awaiting → Settled with the losing collection cleared
            (
                GuardState::AwaitingConfirmation { token, change },
                GuardEvent::Confirm { token: answer },
            ) if *token == answer => {
                let rows = self.scheme.row_count(change.losing());
                let (from, to, losing) = (change.from(), change.to(), change.losing());
                let scheme = change.clone().confirm(&self.scheme);
                let effects = vec![
                    Effect::RefreshField {
                        field: losing.field().to_string(),
                    },
                    Effect::Emit(Event::CollectionCleared {
                        scheme: name.clone(),
                        collection: losing,
                        rows,
                    }),
                    Effect::Emit(Event::ModeChanged {
                        scheme: name,
                        from,
                        to,
                    }),
                ];
                (ExclusiveModeGuard::new(scheme), effects)
            }

            // Awaiting → Settled with the original record
            (
                GuardState::AwaitingConfirmation { token, change },
                GuardEvent::Cancel { token: answer },
            ) if *token == answer => {
                let (kept, proposed) = (change.from(), change.to());
                let scheme = change.clone().cancel(&self.scheme);
                let effects = vec![
                    Effect::RefreshField {
                        field: "apply_on".to_string(),
                    },
                    Effect::Emit(Event::ModeReverted {
                        scheme: name,
                        kept,
                        proposed,
                    }),
                ];
                (ExclusiveModeGuard::new(scheme), effects)
            }

            // Answers for some other request
            (
                GuardState::AwaitingConfirmation { token, .. },
                GuardEvent::Confirm { token: answer } | GuardEvent::Cancel { token: answer },
            ) => {
                let effects = vec![Effect::Log {
                    level: LogLevel::Warn,
                    message: format!(
                        "ignoring answer for {} while {} is pending",
                        answer, token
                    ),
                }];
                (self.clone(), effects)
            }

            // Single flight: nothing else touches the record mid-confirmation
            (
                GuardState::AwaitingConfirmation { token, .. },
                GuardEvent::Toggle { .. } | GuardEvent::AddRow { .. } | GuardEvent::RemoveRow { .. },
            ) => {
                let effects = vec![Effect::Emit(Event::EditRejected {
                    scheme: name,
                    reason: format!("confirmation {} is pending", token),
                })];
                (self.clone(), effects)
            }

            (GuardState::Settled, GuardEvent::Confirm { token } | GuardEvent::Cancel { token }) => {
                let effects = vec![Effect::Log {
                    level: LogLevel::Warn,
                    message: format!("no confirmation pending, ignoring {}", token),
                }];
                (self.clone(), effects)
            }

            (GuardState::Settled, GuardEvent::AddRow { row }) => {
                let collection = row.collection();
                let mut scheme = self.scheme.clone();
                scheme.push_row(row);
                let effects = vec![Effect::Emit(Event::RowAdded {
                    scheme: name,
                    collection,
                })];
                (ExclusiveModeGuard::new(scheme), effects)
            }

            (GuardState::Settled, GuardEvent::RemoveRow { collection, index }) => {
                let mut scheme = self.scheme.clone();
                if !scheme.remove_row(collection, index) {
                    let effects = vec![Effect::Log {
                        level: LogLevel::Warn,
                        message: format!("no row {} in {}", index, collection),
                    }];
                    return (self.clone(), effects);
                }
                let effects = vec![Effect::Emit(Event::RowRemoved {
                    scheme: name,
                    collection,
                    index,
                })];
                (ExclusiveModeGuard::new(scheme), effects)
            }
        }
    }

    /// Save gate: refuses while pending, otherwise runs full validation
    pub fn save(&self) -> Result<&Scheme, SaveError> {
        if self.is_pending() {
            return Err(SaveError::ConfirmationPending);
        }
        validate_scheme(&self.scheme)?;
        Ok(&self.scheme)
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;

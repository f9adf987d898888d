// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Form session: one guarded scheme driven by user interaction
//!
//! The guard lives behind an async mutex. The lock is held only for the pure
//! transition, never while the user is looking at a dialog, so a second
//! interaction during a confirmation sees the pending state and is rejected.

use crate::{EngineError, Executor};
use promo_adapters::{ConfirmDialog, HostAdapter};
use promo_core::{
    ApplyOn, Collection, ConfirmationToken, ExclusiveModeGuard, GuardEvent, Row, Scheme, TokenGen,
};
use tokio::sync::Mutex;

/// How a user interaction resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to do
    Unchanged,
    /// The record was changed
    Committed,
    /// The user declined; the record keeps its prior mode
    Reverted,
    /// Another confirmation was outstanding
    Rejected,
}

struct Step<'a, T: TokenGen> {
    rejected: bool,
    changed: bool,
    feedback: Vec<GuardEvent>,
    revert: Option<RevertOnDrop<'a, T>>,
}

/// Cancels a confirmation if the interaction waiting on it is dropped
///
/// Dropping `change_mode` mid-dialog (task abort, timeout, `select!`) would
/// otherwise leave the guard awaiting an answer nobody can give.
struct RevertOnDrop<'a, T: TokenGen> {
    guard: &'a Mutex<ExclusiveModeGuard>,
    tokens: &'a T,
    token: Option<ConfirmationToken>,
}

/// Drives an [`ExclusiveModeGuard`] against real adapters
pub struct FormSession<D, H, T> {
    guard: Mutex<ExclusiveModeGuard>,
    executor: Executor<D, H>,
    tokens: T,
}

impl<D, H, T> FormSession<D, H, T>
where
    D: ConfirmDialog,
    H: HostAdapter,
    T: TokenGen,
{
    pub fn new(scheme: Scheme, executor: Executor<D, H>, tokens: T) -> Self {
        Self {
            guard: Mutex::new(ExclusiveModeGuard::new(scheme)),
            executor,
            tokens,
        }
    }

    /// The committed record; pre-transition while a confirmation is pending
    pub async fn snapshot(&self) -> Scheme {
        self.guard.lock().await.scheme().clone()
    }

    pub async fn is_pending(&self) -> bool {
        self.guard.lock().await.is_pending()
    }

    /// User picked a new value for `apply_on`
    ///
    /// Always settles: the record either takes the new mode or keeps the old
    /// one. Host failures after the guard moved are logged, not returned.
    pub async fn change_mode(&self, to: ApplyOn) -> Outcome {
        let step = self.step(GuardEvent::Toggle { to }).await;
        if step.rejected {
            return Outcome::Rejected;
        }

        let Some(answer) = step.feedback.into_iter().next() else {
            return if step.changed {
                Outcome::Committed
            } else {
                Outcome::Unchanged
            };
        };

        let confirmed = matches!(answer, GuardEvent::Confirm { .. });
        self.step(answer).await;
        if let Some(revert) = step.revert {
            revert.disarm();
        }

        if confirmed {
            Outcome::Committed
        } else {
            Outcome::Reverted
        }
    }

    /// Cancel an outstanding confirmation, keeping the prior mode
    ///
    /// For hosts that lose the interaction some other way, e.g. a closed form.
    pub async fn abandon(&self) -> Outcome {
        let token = self.guard.lock().await.pending_token().cloned();
        match token {
            Some(token) => {
                tracing::info!(%token, "abandoning confirmation");
                self.step(GuardEvent::Cancel { token }).await;
                Outcome::Reverted
            }
            None => Outcome::Unchanged,
        }
    }

    pub async fn add_row(&self, row: Row) -> Outcome {
        self.step(GuardEvent::AddRow { row }).await.edit_outcome()
    }

    pub async fn remove_row(&self, collection: Collection, index: usize) -> Outcome {
        self.step(GuardEvent::RemoveRow { collection, index })
            .await
            .edit_outcome()
    }

    /// Save hook: blocked saves surface their message to the host verbatim
    pub async fn save(&self) -> Result<Scheme, EngineError> {
        let result = {
            let guard = self.guard.lock().await;
            guard.save().cloned()
        };

        match result {
            Ok(scheme) => {
                tracing::info!(scheme = %scheme.name, "saved");
                Ok(scheme)
            }
            Err(e) => {
                let message = e.to_string();
                tracing::info!(error = %message, "save blocked");
                self.executor.host().show_error(&message).await?;
                Err(e.into())
            }
        }
    }

    /// Run one transition under the lock, then its effects without it
    async fn step(&self, event: GuardEvent) -> Step<'_, T> {
        let (effects, rejected, changed, revert) = {
            let mut guard = self.guard.lock().await;
            let was_pending = guard.is_pending();
            let rejected = was_pending
                && matches!(
                    event,
                    GuardEvent::Toggle { .. }
                        | GuardEvent::AddRow { .. }
                        | GuardEvent::RemoveRow { .. }
                );
            let (next, effects) = guard.transition(event, &self.tokens);
            let changed = next.scheme() != guard.scheme();
            *guard = next;

            let revert = match guard.pending_token() {
                Some(token) if !was_pending => Some(RevertOnDrop {
                    guard: &self.guard,
                    tokens: &self.tokens,
                    token: Some(token.clone()),
                }),
                _ => None,
            };
            (effects, rejected, changed, revert)
        };

        let feedback = self.executor.execute_all(effects).await;
        Step {
            rejected,
            changed,
            feedback,
            revert,
        }
    }
}

impl<T: TokenGen> Step<'_, T> {
    fn edit_outcome(&self) -> Outcome {
        if self.rejected {
            Outcome::Rejected
        } else if self.changed {
            Outcome::Committed
        } else {
            Outcome::Unchanged
        }
    }
}

impl<T: TokenGen> RevertOnDrop<'_, T> {
    fn disarm(mut self) {
        self.token = None;
    }
}

impl<T: TokenGen> Drop for RevertOnDrop<'_, T> {
    fn drop(&mut self) {
        let Some(token) = self.token.take() else {
            return;
        };

        // Lock is never held across an await, so this only fails on a race
        // with a concurrent reader; `abandon` recovers from that.
        let Ok(mut guard) = self.guard.try_lock() else {
            tracing::error!(%token, "confirmation dropped while guard busy");
            return;
        };
        if guard.pending_token() != Some(&token) {
            return;
        }

        let cancel = GuardEvent::Cancel {
            token: token.clone(),
        };
        let (next, _) = guard.transition(cancel, self.tokens);
        *guard = next;
        tracing::warn!(%token, "confirmation dropped, keeping prior mode");
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;

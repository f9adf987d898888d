// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effect executor

use crate::EngineError;
use promo_adapters::{ConfirmDialog, Confirmation, HostAdapter};
use promo_core::{Effect, GuardEvent, LogLevel, TracedEffect};
use tracing::Instrument;

/// Executes guard effects using the configured adapters
pub struct Executor<D, H> {
    dialog: D,
    host: H,
}

impl<D, H> Executor<D, H>
where
    D: ConfirmDialog,
    H: HostAdapter,
{
    pub fn new(dialog: D, host: H) -> Self {
        Self { dialog, host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Execute a single effect with tracing
    ///
    /// Returns the dialog's answer as a guard event when the effect asked for
    /// confirmation; it must be fed back into the guard.
    pub async fn execute(&self, effect: Effect) -> Result<Option<GuardEvent>, EngineError> {
        let span = tracing::info_span!("effect", effect = effect.name());
        async {
            tracing::debug!(fields = ?effect.fields(), "executing");

            let start = std::time::Instant::now();
            let result = self.execute_inner(effect).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(event) => tracing::debug!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    has_event = event.is_some(),
                    "completed"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn execute_inner(&self, effect: Effect) -> Result<Option<GuardEvent>, EngineError> {
        match effect {
            Effect::Emit(event) => {
                tracing::info!(event = event.name(), ?event, "event");
                Ok(None)
            }

            Effect::RequestConfirmation { token, message } => {
                let answer = match self.dialog.confirm(&message).await {
                    Ok(answer) => answer,
                    Err(e) => {
                        // Abandoned dialogs keep the pre-transition mode
                        tracing::warn!(%token, error = %e, "dialog abandoned, cancelling");
                        Confirmation::Cancelled
                    }
                };
                Ok(Some(match answer {
                    Confirmation::Confirmed => GuardEvent::Confirm { token },
                    Confirmation::Cancelled => GuardEvent::Cancel { token },
                }))
            }

            Effect::RefreshField { field } => {
                self.host.refresh_field(&field).await?;
                Ok(None)
            }

            Effect::Log { level, message } => {
                match level {
                    LogLevel::Debug => tracing::debug!("{}", message),
                    LogLevel::Info => tracing::info!("{}", message),
                    LogLevel::Warn => tracing::warn!("{}", message),
                    LogLevel::Error => tracing::error!("{}", message),
                }
                Ok(None)
            }
        }
    }

    /// Execute multiple effects in order
    ///
    /// Returns any guard events produced by effects. The guard has already
    /// moved when its effects run, so a failing effect is logged by
    /// [`Executor::execute`] and the rest still run.
    pub async fn execute_all(&self, effects: Vec<Effect>) -> Vec<GuardEvent> {
        let mut feedback = Vec::new();
        for effect in effects {
            if let Ok(Some(event)) = self.execute(effect).await {
                feedback.push(event);
            }
        }
        feedback
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;

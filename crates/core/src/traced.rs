// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing infrastructure for guard effects

use crate::effect::Effect;

/// Trait for effects that should be traced
///
/// Provides consistent naming and structured fields for logging.
pub trait TracedEffect {
    /// Effect name for log spans (e.g., "emit", "refresh_field")
    fn name(&self) -> &'static str;

    /// Key-value pairs for structured logging
    fn fields(&self) -> Vec<(&'static str, String)>;
}

impl TracedEffect for Effect {
    fn name(&self) -> &'static str {
        match self {
            Effect::Emit(_) => "emit",
            Effect::RequestConfirmation { .. } => "request_confirmation",
            Effect::RefreshField { .. } => "refresh_field",
            Effect::Log { .. } => "log",
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::Emit(event) => vec![("event", event.name().to_string())],
            Effect::RequestConfirmation { token, .. } => vec![("token", token.to_string())],
            Effect::RefreshField { field } => vec![("field", field.clone())],
            Effect::Log { level, .. } => vec![("level", format!("{:?}", level))],
        }
    }
}

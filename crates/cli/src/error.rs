// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use promo_core::LoadError;
use std::fmt;
use std::path::Path;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Set the source error that caused this error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Common error builders for typical failure scenarios.
impl CliError {
    /// Error for a scheme book or invoice that could not be loaded.
    pub fn load_failed(what: &str, path: &Path, err: LoadError) -> Self {
        let mut error = CliError::new(format!("Failed to load {} '{}'", what, path.display()))
            .with_context(err.to_string());
        error = match &err {
            LoadError::Io { .. } => error.with_suggestion("Check that the file exists and is readable"),
            LoadError::Toml(_) => error
                .with_suggestion("Dates are quoted strings: valid_from = \"2025-10-01\"")
                .with_suggestion("Modes are spelled out: apply_on = \"Item Group\""),
            LoadError::DuplicateScheme(name) => {
                error.with_suggestion(format!("Rename one of the schemes called '{}'", name))
            }
            LoadError::UnknownScheme(_) => error,
        };
        error.with_source(err)
    }

    /// Error for when a scheme name is not in the book.
    pub fn scheme_not_found(name: &str, available: &[&str]) -> Self {
        let error = CliError::new(format!("Scheme '{}' not found", name));
        if available.is_empty() {
            return error.with_context("The scheme book is empty");
        }
        error
            .with_context(format!("Available schemes: {}", available.join(", ")))
            .with_suggestion("Scheme names are case-sensitive")
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `promo validate`: run the save-time checks over a scheme book

use crate::output::{self, OutputFormat};
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Args)]
pub struct ValidateArgs {
    /// Scheme book (TOML)
    pub book: PathBuf,
    /// Only check this scheme
    #[arg(long)]
    pub scheme: Option<String>,
}

#[derive(Serialize)]
struct SchemeCheck {
    scheme: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl fmt::Display for SchemeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(f, "ok       {}", self.scheme),
            Some(error) => write!(f, "invalid  {}: {}", self.scheme, error),
        }
    }
}

pub fn handle(args: ValidateArgs, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let book = super::load_book(&args.book)?;

    let schemes = match &args.scheme {
        Some(name) => vec![super::find_scheme(&book, name)?],
        None => book.schemes().iter().collect(),
    };

    let checks: Vec<SchemeCheck> = schemes
        .into_iter()
        .map(|scheme| {
            let error = promo_core::validate_scheme(scheme).err().map(|e| e.to_string());
            tracing::debug!(scheme = %scheme.name, valid = error.is_none(), "checked");
            SchemeCheck {
                scheme: scheme.name.clone(),
                valid: error.is_none(),
                error,
            }
        })
        .collect();

    output::print_list(&checks, format, "No schemes");

    if checks.iter().all(|c| c.valid) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

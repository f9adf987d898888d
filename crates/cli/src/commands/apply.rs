// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `promo apply`: apply active schemes to an invoice

use crate::error::CliError;
use crate::output::{self, OutputFormat};
use chrono::NaiveDate;
use clap::Args;
use promo_adapters::{ConsoleHost, HostAdapter, TracedHost};
use promo_core::{apply_promotional_schemes, AppliedScheme, Clock, InvoiceItem};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct ApplyArgs {
    /// Scheme book (TOML)
    pub book: PathBuf,
    /// Invoice to apply schemes to (TOML)
    pub invoice: PathBuf,
    /// Date to evaluate validity windows on (defaults to today)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

#[derive(Serialize)]
struct ApplyReport {
    applied: Vec<AppliedScheme>,
    messages: Vec<String>,
    items: Vec<InvoiceItem>,
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.applied.is_empty() {
            writeln!(f, "No promotional schemes applied")?;
        }
        writeln!(f, "{:<16} {:>8} {:>10}  SCHEME", "ITEM", "QTY", "RATE")?;
        for item in &self.items {
            let scheme = item.promotional_scheme_applied.as_deref().unwrap_or("-");
            let free = if item.is_free_item { " (free)" } else { "" };
            writeln!(
                f,
                "{:<16} {:>8} {:>10.2}  {}{}",
                item.item_code, item.qty, item.rate, scheme, free
            )?;
        }
        Ok(())
    }
}

pub async fn handle(
    args: ApplyArgs,
    format: OutputFormat,
    clock: &impl Clock,
) -> anyhow::Result<()> {
    let book = super::load_book(&args.book)?;
    let mut invoice = promo_core::load_invoice(&args.invoice)
        .map_err(|e| CliError::load_failed("invoice", &args.invoice, e))?;
    let today = super::evaluation_date(args.today, clock);

    let applied = apply_promotional_schemes(&mut invoice, &book, today);
    tracing::info!(applied = applied.len(), %today, "schemes applied");

    let messages: Vec<String> = applied.iter().map(AppliedScheme::message).collect();
    if format == OutputFormat::Text {
        let host = TracedHost::new(ConsoleHost::new());
        for message in &messages {
            host.show_message(message).await?;
        }
    }

    let report = ApplyReport {
        applied,
        messages,
        items: invoice.items,
    };
    output::print(&report, format);
    Ok(())
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `promo toggle`: switch a scheme's `apply_on` through the mode guard

use crate::output::{self, OutputFormat};
use clap::Args;
use promo_adapters::{
    ConfirmDialog, ConsoleHost, FixedDialog, HostAdapter, TerminalDialog, TracedDialog, TracedHost,
};
use promo_core::{ApplyOn, Collection, Scheme, UuidTokenGen};
use promo_engine::{EngineError, Executor, FormSession, Outcome};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Args)]
pub struct ToggleArgs {
    /// Scheme book (TOML)
    pub book: PathBuf,
    /// Scheme to edit
    #[arg(long)]
    pub scheme: String,
    /// New mode: "Item Code" or "Item Group"
    #[arg(long)]
    pub to: ApplyOn,
    /// Confirm clearing rows without asking
    #[arg(long, conflicts_with = "no")]
    pub yes: bool,
    /// Decline clearing rows without asking
    #[arg(long)]
    pub no: bool,
}

#[derive(Serialize)]
struct Cleared {
    collection: Collection,
    rows: usize,
}

#[derive(Serialize)]
struct ToggleReport {
    scheme: String,
    outcome: &'static str,
    apply_on: ApplyOn,
    item_codes: Vec<String>,
    item_groups: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cleared: Option<Cleared>,
    saved: bool,
}

impl ToggleReport {
    fn new(before: &Scheme, after: &Scheme, outcome: Outcome, saved: bool) -> Self {
        let cleared = [Collection::ItemCodes, Collection::ItemGroups]
            .into_iter()
            .find(|c| after.row_count(*c) < before.row_count(*c))
            .map(|collection| Cleared {
                collection,
                rows: before.row_count(collection),
            });

        ToggleReport {
            scheme: after.name.clone(),
            outcome: outcome_label(outcome),
            apply_on: after.apply_on,
            item_codes: after.item_codes.iter().map(|r| r.item_code.clone()).collect(),
            item_groups: after
                .item_groups
                .iter()
                .map(|r| r.item_group.clone())
                .collect(),
            cleared,
            saved,
        }
    }
}

impl fmt::Display for ToggleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = |rows: &[String]| {
            if rows.is_empty() {
                "(none)".to_string()
            } else {
                rows.join(", ")
            }
        };

        writeln!(f, "{}: {}", self.scheme, self.outcome)?;
        writeln!(f, "  Apply On: {}", self.apply_on)?;
        if let Some(cleared) = &self.cleared {
            writeln!(f, "  Cleared: {} row(s) in '{}'", cleared.rows, cleared.collection)?;
        }
        writeln!(f, "  Item Codes: {}", list(&self.item_codes))?;
        writeln!(f, "  Item Groups: {}", list(&self.item_groups))?;
        writeln!(f, "  Saved: {}", if self.saved { "yes" } else { "no" })
    }
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Unchanged => "unchanged",
        Outcome::Committed => "committed",
        Outcome::Reverted => "reverted",
        Outcome::Rejected => "rejected",
    }
}

pub async fn handle(args: ToggleArgs, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let book = super::load_book(&args.book)?;
    let scheme = super::find_scheme(&book, &args.scheme)?.clone();
    let host = TracedHost::new(ConsoleHost::new());

    if args.yes {
        run(scheme, args.to, FixedDialog::always_confirm(), host, format).await
    } else if args.no {
        run(scheme, args.to, FixedDialog::always_cancel(), host, format).await
    } else {
        run(scheme, args.to, TerminalDialog::new(), host, format).await
    }
}

async fn run<D, H>(
    scheme: Scheme,
    to: ApplyOn,
    dialog: D,
    host: H,
    format: OutputFormat,
) -> anyhow::Result<ExitCode>
where
    D: ConfirmDialog,
    H: HostAdapter,
{
    let before = scheme.clone();
    let executor = Executor::new(TracedDialog::new(dialog), host);
    let session = FormSession::new(scheme, executor, UuidTokenGen);

    let outcome = session.change_mode(to).await;
    let saved = match session.save().await {
        Ok(_) => true,
        // Already shown verbatim by the host
        Err(EngineError::Validation(_)) => false,
        Err(e) => return Err(e.into()),
    };

    let report = ToggleReport::new(&before, &session.snapshot().await, outcome, saved);
    output::print(&report, format);

    Ok(if saved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

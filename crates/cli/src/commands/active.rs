// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `promo active`: schemes currently offered on one side of trade

use crate::output::{self, OutputFormat};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use promo_core::{ApplyOn, Clock, PartySide};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Party {
    Selling,
    Buying,
}

impl From<Party> for PartySide {
    fn from(party: Party) -> Self {
        match party {
            Party::Selling => PartySide::Selling,
            Party::Buying => PartySide::Buying,
        }
    }
}

#[derive(Args)]
pub struct ActiveArgs {
    /// Scheme book (TOML)
    pub book: PathBuf,
    #[arg(long, value_enum)]
    pub party: Party,
    /// Date to evaluate validity windows on (defaults to today)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

#[derive(Serialize)]
struct ActiveScheme {
    name: String,
    apply_on: ApplyOn,
    valid_from: Option<NaiveDate>,
    valid_to: Option<NaiveDate>,
}

impl fmt::Display for ActiveScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = |d: Option<NaiveDate>| d.map_or_else(|| "-".to_string(), |d| d.to_string());
        write!(
            f,
            "{:<20} {:<11} {} .. {}",
            self.name,
            self.apply_on.label(),
            date(self.valid_from),
            date(self.valid_to)
        )
    }
}

pub fn handle(
    args: ActiveArgs,
    format: OutputFormat,
    clock: &impl Clock,
) -> anyhow::Result<()> {
    let book = super::load_book(&args.book)?;
    let today = super::evaluation_date(args.today, clock);

    let active: Vec<ActiveScheme> = book
        .active_for(args.party.into(), today)
        .map(|s| ActiveScheme {
            name: s.name.clone(),
            apply_on: s.apply_on,
            valid_from: s.valid_from,
            valid_to: s.valid_to,
        })
        .collect();

    output::print_list(&active, format, "No active schemes");
    Ok(())
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! promo - promotional scheme CLI

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{active, apply, toggle, validate};
use promo_core::SystemClock;
use std::process::ExitCode;

use crate::error::CliError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "promo",
    version,
    about = "promo - validate, toggle and apply promotional schemes"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every scheme as a save would
    Validate(validate::ValidateArgs),
    /// Switch a scheme between item codes and item groups
    Toggle(toggle::ToggleArgs),
    /// Apply active schemes to an invoice
    Apply(apply::ApplyArgs),
    /// List schemes valid on a date
    Active(active::ActiveArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            match e.downcast_ref::<CliError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let clock = SystemClock;

    match cli.command {
        Commands::Validate(args) => validate::handle(args, cli.format),
        Commands::Toggle(args) => toggle::handle(args, cli.format).await,
        Commands::Apply(args) => {
            apply::handle(args, cli.format, &clock).await?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Active(args) => {
            active::handle(args, cli.format, &clock)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("PROMO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

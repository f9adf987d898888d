// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures and a small assertion DSL for CLI specs.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub const BOOK: &str = r#"
[[scheme]]
name = "Monsoon Sale"
party = "Selling"
apply_on = "Item Code"
item_codes = ["SKU-TEA", "SKU-COFFEE"]
valid_from = "2025-06-01"
valid_to = "2025-09-30"
validation = "Based on Minimum Amount"
minimum_amount = 500.0
discount_percentage = 10.0

[[scheme]]
name = "Snack Attack"
party = "Selling"
apply_on = "Item Group"
item_groups = ["Snacks"]
valid_from = "2025-06-01"
valid_to = "2025-12-31"
validation = "Based on Minimum Quantity"
minimum_quantity = 5.0
free_quantity = 1.0

[[scheme]]
name = "Bulk Buy"
party = "Buying"
apply_on = "Item Code"
item_codes = ["SKU-TEA"]
valid_from = "2025-01-01"
valid_to = "2025-12-31"
validation = "Based on Minimum Quantity"
minimum_quantity = 100.0
free_quantity = 10.0

[catalog]
"SKU-TEA" = "Beverages"
"SKU-COFFEE" = "Beverages"
"SKU-CHIPS" = "Snacks"
"#;

/// Schemes that could only exist if the mode guard was bypassed on import
pub const BROKEN_BOOK: &str = r#"
[[scheme]]
name = "Imported"
party = "Selling"
apply_on = "Item Code"
item_groups = ["Beverages", "Snacks"]

[[scheme]]
name = "Backwards"
party = "Selling"
apply_on = "Item Code"
item_codes = ["SKU-TEA"]
valid_from = "2025-12-01"
valid_to = "2025-01-01"
"#;

pub const SALES_INVOICE: &str = r#"
kind = "Sales Invoice"
customer = "ACME"

[[items]]
item_code = "SKU-TEA"
qty = 4.0
rate = 100.0
base_net_amount = 400.0

[[items]]
item_code = "SKU-COFFEE"
qty = 2.0
rate = 150.0
base_net_amount = 300.0

[[items]]
item_code = "SKU-CHIPS"
qty = 6.0
rate = 20.0
base_net_amount = 120.0
"#;

/// A temporary directory holding input files
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// A promo invocation running inside the project
    pub fn promo(&self) -> Cli {
        let mut cmd = Command::cargo_bin("promo").unwrap();
        cmd.current_dir(self.path()).env_remove("PROMO_LOG");
        Cli { cmd }
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    /// Run and require a zero exit code
    pub fn passes(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run::from(output.clone());
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status,
            run.stdout,
            run.stderr
        );
        run
    }

    /// Run and require a non-zero exit code
    pub fn fails(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run::from(output.clone());
        assert!(
            !output.status.success(),
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout,
            run.stderr
        );
        run
    }
}

pub struct Run {
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Run {
    fn from(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Run {
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(
            !self.stdout.contains(needle),
            "stdout unexpectedly has {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}:\n{}",
            needle,
            self.stderr
        );
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

pub use predicates::prelude::*;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal confirmation dialog

use super::{ConfirmDialog, Confirmation, DialogError};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader, Stdin};
use tokio::sync::Mutex;

/// Prompts on stderr and reads a y/n answer from stdin
///
/// Clones share one buffered reader so input typed ahead of a prompt is kept
/// for the next one.
pub struct TerminalDialog<R = Stdin> {
    input: Arc<Mutex<BufReader<R>>>,
}

impl TerminalDialog {
    pub fn new() -> Self {
        Self::from_reader(tokio::io::stdin())
    }
}

impl Default for TerminalDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AsyncRead> TerminalDialog<R> {
    /// Read answers from `input` instead of stdin
    pub fn from_reader(input: R) -> Self {
        Self {
            input: Arc::new(Mutex::new(BufReader::new(input))),
        }
    }
}

impl<R> Clone for TerminalDialog<R> {
    fn clone(&self) -> Self {
        Self {
            input: Arc::clone(&self.input),
        }
    }
}

/// Interpret a typed answer. Anything but an explicit yes cancels.
pub fn parse_answer(line: &str) -> Confirmation {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Confirmation::Confirmed,
        _ => Confirmation::Cancelled,
    }
}

#[async_trait]
impl<R> ConfirmDialog for TerminalDialog<R>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    async fn confirm(&self, message: &str) -> Result<Confirmation, DialogError> {
        let mut input = self.input.lock().await;

        let mut stderr = tokio::io::stderr();
        stderr
            .write_all(format!("{} [y/N] ", message).as_bytes())
            .await?;
        stderr.flush().await?;

        let mut line = String::new();
        let read = input.read_line(&mut line).await?;
        if read == 0 {
            return Err(DialogError::Closed);
        }

        Ok(parse_answer(&line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_yes_confirms() {
        assert_eq!(parse_answer("y\n"), Confirmation::Confirmed);
        assert_eq!(parse_answer("  YES "), Confirmation::Confirmed);
    }

    #[test]
    fn everything_else_cancels() {
        assert_eq!(parse_answer("\n"), Confirmation::Cancelled);
        assert_eq!(parse_answer("n"), Confirmation::Cancelled);
        assert_eq!(parse_answer("yep"), Confirmation::Cancelled);
    }

    #[tokio::test]
    async fn answers_typed_ahead_carry_over_between_prompts() {
        let dialog = TerminalDialog::from_reader(&b"y\nno\n"[..]);
        let other = dialog.clone();

        assert_eq!(
            dialog.confirm("first?").await.unwrap(),
            Confirmation::Confirmed
        );
        assert_eq!(
            other.confirm("second?").await.unwrap(),
            Confirmation::Cancelled
        );
        assert!(matches!(
            dialog.confirm("third?").await,
            Err(DialogError::Closed)
        ));
    }
}

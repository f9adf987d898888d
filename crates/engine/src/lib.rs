// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Promotional scheme form engine

mod error;
mod executor;
mod session;

pub use error::EngineError;
pub use executor::Executor;
pub use session::{FormSession, Outcome};

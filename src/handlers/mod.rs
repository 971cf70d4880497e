//! Command Handlers module
//!
//! Parses commands and runs them against an account.

mod account_handler;
mod commands;

pub use account_handler::{AccountHandler, ScriptSummary};
pub use commands::*;

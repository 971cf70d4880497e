//! wallet_account Library
//!
//! A single wallet account: a balance plus an ordered history of deposits
//! and withdrawals, guarded by a deposit cap and a daily withdrawal limit.

pub mod aggregate;
pub mod config;
pub mod domain;
pub mod handlers;
mod error;

pub use aggregate::{Account, Statement};
pub use config::Config;
pub use domain::{AccountPolicy, Amount, AmountError, Balance, DomainError};
pub use domain::{Clock, FixedClock, Movement, MovementKind, SystemClock};
pub use error::{AppError, AppResult, ErrorResponse};

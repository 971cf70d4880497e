//! Aggregate module
//!
//! The account aggregate and its read model.

pub mod account;

pub use account::{Account, Statement};

//! Domain module
//!
//! Core domain types and business rules.

pub mod amount;
pub mod clock;
pub mod error;
pub mod movement;
pub mod policy;

pub use amount::{Amount, AmountError, Balance};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DomainError;
pub use movement::{Movement, MovementKind};
pub use policy::AccountPolicy;

//! Transaction policy
//!
//! Limits the account enforces on deposits and withdrawals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default number of deposits an account accepts
pub const DEFAULT_MAX_DEPOSITS: u32 = 3;

/// Default total amount that may be withdrawn per calendar day
pub const DEFAULT_DAILY_WITHDRAWAL_LIMIT: i64 = 1000;

/// Account limits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPolicy {
    /// Maximum number of deposits over the account's whole history
    pub max_deposits: u32,

    /// Maximum total withdrawn on a single date
    pub daily_withdrawal_limit: Decimal,
}

impl AccountPolicy {
    pub fn new(max_deposits: u32, daily_withdrawal_limit: Decimal) -> Self {
        Self {
            max_deposits,
            daily_withdrawal_limit,
        }
    }

    /// Check whether another deposit fits under the cap
    pub fn allows_deposit(&self, deposits_made: usize) -> bool {
        deposits_made < self.max_deposits as usize
    }

    /// What is left of the daily limit after `withdrawn` was taken out.
    ///
    /// May be negative when history was seeded past the limit.
    pub fn remaining_withdrawal(&self, withdrawn: Decimal) -> Decimal {
        self.daily_withdrawal_limit.saturating_sub(withdrawn)
    }
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            max_deposits: DEFAULT_MAX_DEPOSITS,
            daily_withdrawal_limit: Decimal::from(DEFAULT_DAILY_WITHDRAWAL_LIMIT),
        }
    }
}

//! Movements
//!
//! Immutable records of a single deposit or withdrawal.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Amount;

/// Kind of a movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }
}

/// A dated deposit or withdrawal.
///
/// The amount is always positive; the sign is carried by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    date: NaiveDate,
    amount: Amount,
    kind: MovementKind,
}

impl Movement {
    pub fn new(date: NaiveDate, amount: Amount, kind: MovementKind) -> Self {
        Self { date, amount, kind }
    }

    pub fn deposit(date: NaiveDate, amount: Amount) -> Self {
        Self::new(date, amount, MovementKind::Deposit)
    }

    pub fn withdrawal(date: NaiveDate, amount: Amount) -> Self {
        Self::new(date, amount, MovementKind::Withdrawal)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == MovementKind::Deposit
    }

    pub fn is_withdrawal(&self) -> bool {
        self.kind == MovementKind::Withdrawal
    }

    pub fn was_made_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Effect of this movement on a balance: positive for deposits,
    /// negative for withdrawals.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            MovementKind::Deposit => self.amount.value(),
            MovementKind::Withdrawal => -self.amount.value(),
        }
    }
}

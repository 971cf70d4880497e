//! Domain Error Types
//!
//! Pure domain errors that don't depend on the application layer.

use rust_decimal::Decimal;
use thiserror::Error;

/// Business rule violations raised by the account.
///
/// Every variant represents a rejected operation: the account is left
/// exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Deposit or withdrawal amount is zero or negative
    #[error("{amount}: the amount must be a positive value")]
    NegativeAmount { amount: Decimal },

    /// Deposit cap reached
    #[error("Already made the maximum of {max} deposits")]
    TooManyDeposits { max: u32 },

    /// Withdrawal would leave the balance below zero
    #[error("Cannot withdraw more than {balance}")]
    InsufficientBalance { balance: Decimal },

    /// Withdrawal exceeds what is left of today's limit
    #[error("Cannot withdraw more than {limit} per day, remaining limit: {remaining}")]
    DailyWithdrawalLimitExceeded { limit: Decimal, remaining: Decimal },

    /// Resulting balance falls outside the representable decimal range
    #[error("Balance {balance} cannot absorb this movement without overflowing")]
    BalanceOverflow { balance: Decimal },
}

impl DomainError {
    pub fn negative_amount(amount: Decimal) -> Self {
        Self::NegativeAmount { amount }
    }

    pub fn too_many_deposits(max: u32) -> Self {
        Self::TooManyDeposits { max }
    }

    pub fn insufficient_balance(balance: Decimal) -> Self {
        Self::InsufficientBalance { balance }
    }

    pub fn daily_limit_exceeded(limit: Decimal, remaining: Decimal) -> Self {
        Self::DailyWithdrawalLimitExceeded { limit, remaining }
    }

    pub fn balance_overflow(balance: Decimal) -> Self {
        Self::BalanceOverflow { balance }
    }

    /// Stable machine-readable code for this error kind
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount { .. } => "negative_amount",
            Self::TooManyDeposits { .. } => "too_many_deposits",
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::DailyWithdrawalLimitExceeded { .. } => "daily_withdrawal_limit_exceeded",
            Self::BalanceOverflow { .. } => "balance_overflow",
        }
    }

    /// Check if the caller can fix this by changing the request itself
    /// (as opposed to waiting for the daily limit to reset).
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::NegativeAmount { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_negative_amount_mentions_amount() {
        let err = DomainError::negative_amount(dec!(-1500));

        assert!(err.is_input_error());
        assert_eq!(err.error_code(), "negative_amount");
        assert!(err.to_string().contains("-1500"));
    }

    #[test]
    fn test_daily_limit_error_reports_limit_and_remaining() {
        let err = DomainError::daily_limit_exceeded(dec!(1000), dec!(400));

        assert!(!err.is_input_error());
        let message = err.to_string();
        assert!(message.contains("1000"));
        assert!(message.contains("400"));
    }

    #[test]
    fn test_insufficient_balance_reports_balance() {
        let err = DomainError::insufficient_balance(dec!(90));
        assert_eq!(err.error_code(), "insufficient_balance");
        assert!(err.to_string().contains("90"));
    }

    #[test]
    fn test_balance_overflow_error() {
        let err = DomainError::balance_overflow(rust_decimal::Decimal::MAX);

        assert!(!err.is_input_error());
        assert_eq!(err.error_code(), "balance_overflow");
    }
}

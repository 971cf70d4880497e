//! Amount type
//!
//! Domain primitive for monetary amounts with business rule validation.
//! All amounts are validated at construction time, ensuring a movement
//! can never carry a zero or negative value. Precision is not restricted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount represents a validated monetary value.
///
/// # Invariants
/// - Value is always positive (> 0)
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use wallet_account::domain::Amount;
///
/// let amount = Amount::new(Decimal::new(100, 0)).unwrap();
/// assert_eq!(amount.value(), Decimal::new(100, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount(Decimal);

/// Errors that can occur when creating an Amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount must be positive (got {0})")]
    NotPositive(Decimal),

    #[error("Amount arithmetic overflowed")]
    Overflow,

    #[error("Invalid amount format: {0}")]
    ParseError(String),
}

impl Amount {
    /// Create a new Amount with validation.
    ///
    /// # Errors
    /// - `AmountError::NotPositive` if value <= 0
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }

        Ok(Self(value))
    }

    /// Create an Amount from an integer (no decimal places).
    pub fn from_integer(value: i64) -> Result<Self, AmountError> {
        Self::new(Decimal::from(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())
            .map_err(|e| AmountError::ParseError(e.to_string()))?;
        Amount::new(decimal)
    }
}

impl TryFrom<String> for Amount {
    type Error = AmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Amount::from_str(&value)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.to_string()
    }
}

/// Balance represents an account balance.
///
/// Unlike Amount, a Balance may be zero or negative: accounts can be opened
/// with any starting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Balance(Decimal);

impl Balance {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a zero balance
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Check if balance is sufficient for withdrawal
    pub fn is_sufficient_for(&self, amount: &Amount) -> bool {
        self.0 >= amount.value()
    }

    /// Add amount to balance
    pub fn credit(&self, amount: &Amount) -> Result<Balance, AmountError> {
        self.0
            .checked_add(amount.value())
            .map(Balance)
            .ok_or(AmountError::Overflow)
    }

    /// Subtract amount from balance
    pub fn debit(&self, amount: &Amount) -> Result<Balance, AmountError> {
        self.0
            .checked_sub(amount.value())
            .map(Balance)
            .ok_or(AmountError::Overflow)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_positive() {
        let amount = Amount::new(dec!(100));
        assert!(amount.is_ok());
        assert_eq!(amount.unwrap().value(), dec!(100));
    }

    #[test]
    fn test_amount_zero_rejected() {
        let amount = Amount::new(Decimal::ZERO);
        assert!(matches!(amount, Err(AmountError::NotPositive(_))));
    }

    #[test]
    fn test_amount_negative_rejected() {
        let amount = Amount::new(dec!(-100));
        assert_eq!(amount, Err(AmountError::NotPositive(dec!(-100))));
    }

    #[test]
    fn test_amount_keeps_fine_precision() {
        // 0.000000001 has 9 decimal places
        let amount = Amount::new(dec!(0.000000001)).unwrap();
        assert_eq!(amount.value(), Decimal::new(1, 9));

        let smallest = Amount::new(Decimal::new(1, 28));
        assert!(smallest.is_ok());
    }

    #[test]
    fn test_amount_from_str() {
        let amount: Result<Amount, _> = " 123.456 ".parse();
        assert_eq!(amount.unwrap().value(), dec!(123.456));

        let bad: Result<Amount, _> = "twelve".parse();
        assert!(matches!(bad, Err(AmountError::ParseError(_))));
    }

    #[test]
    fn test_amount_display_is_normalized() {
        let amount = Amount::new(dec!(1500.00)).unwrap();
        assert_eq!(amount.to_string(), "1500");
    }

    #[test]
    fn test_amount_serde_as_string() {
        let amount = Amount::new(dec!(12.5)).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"12.5\"");

        let rejected: Result<Amount, _> = serde_json::from_str("\"-3\"");
        assert!(rejected.is_err());
    }

    #[test]
    fn test_balance_credit_debit() {
        let balance = Balance::zero();
        let balance = balance.credit(&Amount::from_integer(100).unwrap()).unwrap();
        assert_eq!(balance.value(), dec!(100));

        let balance = balance.debit(&Amount::from_integer(30).unwrap()).unwrap();
        assert_eq!(balance.value(), dec!(70));
    }

    #[test]
    fn test_balance_sufficiency() {
        let balance = Balance::new(dec!(50));
        assert!(balance.is_sufficient_for(&Amount::from_integer(50).unwrap()));
        assert!(!balance.is_sufficient_for(&Amount::from_integer(51).unwrap()));
    }

    #[test]
    fn test_balance_may_start_negative() {
        let balance = Balance::new(dec!(-20));
        assert!(!balance.is_sufficient_for(&Amount::from_integer(1).unwrap()));
        assert_eq!(
            balance.credit(&Amount::from_integer(25).unwrap()).unwrap().value(),
            dec!(5)
        );
    }

    #[test]
    fn test_balance_overflow_is_reported() {
        let one = Amount::from_integer(1).unwrap();

        assert_eq!(Balance::new(Decimal::MAX).credit(&one), Err(AmountError::Overflow));
        assert_eq!(Balance::new(Decimal::MIN).debit(&one), Err(AmountError::Overflow));
        assert!(!Balance::new(Decimal::MIN).is_sufficient_for(&one));
        assert!(Balance::new(Decimal::MAX).is_sufficient_for(&one));
    }
}

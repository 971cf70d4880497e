//! Command definitions
//!
//! Commands represent intentions to change or inspect the account. They are
//! parsed from single text lines such as `deposit 100` or
//! `withdrawn 2024-01-31`.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregate::Statement;
use crate::error::AppError;

/// A single account operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Deposit { amount: Decimal },
    Withdraw { amount: Decimal },
    WithdrawnOn { date: NaiveDate },
    Balance,
    Statement,
}

impl Command {
    /// Parse one script line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> Result<Option<Self>, AppError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }

    /// Whether the command changes the account
    pub fn is_mutation(&self) -> bool {
        matches!(self, Command::Deposit { .. } | Command::Withdraw { .. })
    }
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts
            .next()
            .ok_or_else(|| AppError::InvalidCommand("empty command".to_string()))?
            .to_ascii_lowercase();
        let argument = parts.next();
        if parts.next().is_some() {
            return Err(AppError::InvalidCommand(format!("too many arguments: {}", s)));
        }

        let command = match (verb.as_str(), argument) {
            ("deposit", Some(amount)) => Command::Deposit {
                amount: parse_amount(amount)?,
            },
            ("withdraw", Some(amount)) => Command::Withdraw {
                amount: parse_amount(amount)?,
            },
            ("withdrawn", Some(date)) => Command::WithdrawnOn {
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .map_err(|e| AppError::InvalidCommand(format!("invalid date {}: {}", date, e)))?,
            },
            ("balance", None) => Command::Balance,
            ("statement", None) => Command::Statement,
            ("deposit" | "withdraw" | "withdrawn", None) => {
                return Err(AppError::InvalidCommand(format!("{} needs an argument", verb)));
            }
            ("balance" | "statement", Some(_)) => {
                return Err(AppError::InvalidCommand(format!("{} takes no argument", verb)));
            }
            _ => return Err(AppError::InvalidCommand(format!("unknown command: {}", verb))),
        };

        Ok(command)
    }
}

// Sign is left to the account; "-500" parses so the account can reject it.
fn parse_amount(raw: &str) -> Result<Decimal, AppError> {
    Decimal::from_str(raw)
        .map_err(|e| AppError::InvalidCommand(format!("invalid amount {}: {}", raw, e)))
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandOutcome {
    Deposited {
        amount: Decimal,
        balance: Decimal,
    },
    Withdrew {
        amount: Decimal,
        balance: Decimal,
        remaining_withdrawal_limit: Decimal,
    },
    WithdrawnOn {
        date: NaiveDate,
        amount: Decimal,
    },
    Balance {
        balance: Decimal,
    },
    Statement(Statement),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "deposit 1500".parse::<Command>().unwrap(),
            Command::Deposit { amount: dec!(1500) }
        );
        assert_eq!(
            "  WITHDRAW   20.75 ".parse::<Command>().unwrap(),
            Command::Withdraw { amount: dec!(20.75) }
        );
        assert_eq!(
            "withdrawn 2024-01-31".parse::<Command>().unwrap(),
            Command::WithdrawnOn {
                date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
            }
        );
        assert_eq!("balance".parse::<Command>().unwrap(), Command::Balance);
        assert_eq!("statement".parse::<Command>().unwrap(), Command::Statement);
    }

    #[test]
    fn test_negative_amount_parses() {
        let command: Command = "withdraw -500".parse().unwrap();
        assert_eq!(command, Command::Withdraw { amount: dec!(-500) });
        assert!(command.is_mutation());
    }

    #[test]
    fn test_parse_line_skips_blanks_and_comments() {
        assert_eq!(Command::parse_line("").unwrap(), None);
        assert_eq!(Command::parse_line("   # opening deposits").unwrap(), None);
        assert_eq!(Command::parse_line("balance").unwrap(), Some(Command::Balance));
    }

    #[test]
    fn test_parse_errors() {
        for line in [
            "transfer 10",
            "deposit",
            "deposit ten",
            "deposit 10 20",
            "balance now",
            "withdrawn yesterday",
        ] {
            let err = line.parse::<Command>().unwrap_err();
            assert!(matches!(err, AppError::InvalidCommand(_)), "{}", line);
        }
    }

    #[test]
    fn test_command_serialization() {
        let json = serde_json::to_value(Command::Deposit { amount: dec!(12.5) }).unwrap();
        assert_eq!(json["type"], "deposit");

        let outcome = CommandOutcome::Balance { balance: dec!(3) };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "balance");
    }
}

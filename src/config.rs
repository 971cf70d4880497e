//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::policy::{DEFAULT_DAILY_WITHDRAWAL_LIMIT, DEFAULT_MAX_DEPOSITS};
use crate::domain::AccountPolicy;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Balance the account is opened with
    pub initial_balance: Decimal,

    /// Maximum number of deposits
    pub max_deposits: u32,

    /// Maximum amount withdrawn per day
    pub daily_withdrawal_limit: Decimal,

    /// Pinned date for scripted runs; the system date is used when unset
    pub today: Option<NaiveDate>,

    /// Log output format
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let initial_balance = parse_or(&lookup, "WALLET_INITIAL_BALANCE", Decimal::ZERO)?;

        let max_deposits = parse_or(&lookup, "WALLET_MAX_DEPOSITS", DEFAULT_MAX_DEPOSITS)?;

        let daily_withdrawal_limit = parse_or(
            &lookup,
            "WALLET_DAILY_WITHDRAWAL_LIMIT",
            Decimal::from(DEFAULT_DAILY_WITHDRAWAL_LIMIT),
        )?;
        if daily_withdrawal_limit < Decimal::ZERO {
            return Err(ConfigError::InvalidValue("WALLET_DAILY_WITHDRAWAL_LIMIT"));
        }

        let today = match lookup("WALLET_TODAY") {
            Some(value) => Some(
                NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                    .map_err(|_| ConfigError::InvalidValue("WALLET_TODAY"))?,
            ),
            None => None,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(_) => return Err(ConfigError::InvalidValue("LOG_FORMAT")),
        };

        Ok(Self {
            initial_balance,
            max_deposits,
            daily_withdrawal_limit,
            today,
            log_format,
        })
    }

    /// Limits to open the account with
    pub fn policy(&self) -> AccountPolicy {
        AccountPolicy::new(self.max_deposits, self.daily_withdrawal_limit)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_balance: Decimal::ZERO,
            max_deposits: DEFAULT_MAX_DEPOSITS,
            daily_withdrawal_limit: Decimal::from(DEFAULT_DAILY_WITHDRAWAL_LIMIT),
            today: None,
            log_format: LogFormat::Text,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue(key)),
        None => Ok(default),
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.initial_balance, Decimal::ZERO);
        assert_eq!(config.policy(), AccountPolicy::default());
        assert_eq!(config.today, None);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("WALLET_INITIAL_BALANCE", "-25.5"),
            ("WALLET_MAX_DEPOSITS", "5"),
            ("WALLET_DAILY_WITHDRAWAL_LIMIT", "250"),
            ("WALLET_TODAY", "2024-02-29"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.initial_balance, dec!(-25.5));
        assert_eq!(config.policy(), AccountPolicy::new(5, dec!(250)));
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup(&[("WALLET_MAX_DEPOSITS", "three")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("WALLET_MAX_DEPOSITS")));

        let err = Config::from_lookup(lookup(&[("WALLET_TODAY", "31/01/2024")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("WALLET_TODAY")));

        let err =
            Config::from_lookup(lookup(&[("WALLET_DAILY_WITHDRAWAL_LIMIT", "-1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("WALLET_DAILY_WITHDRAWAL_LIMIT")));

        let err = Config::from_lookup(lookup(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("LOG_FORMAT")));
    }
}

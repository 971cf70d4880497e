//! Common test utilities

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use wallet_account::{Account, Amount, FixedClock, Movement};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

pub fn yesterday() -> NaiveDate {
    today().pred_opt().unwrap()
}

/// Account opened on `today()` with a clock handle the test keeps
pub fn account_with_balance(balance: Decimal) -> (Account<FixedClock>, FixedClock) {
    let clock = FixedClock::new(today());
    (Account::with_clock(balance, clock.clone()), clock)
}

pub fn withdrawal_on(date: NaiveDate, amount: i64) -> Movement {
    Movement::withdrawal(date, Amount::from_integer(amount).unwrap())
}

pub fn deposit_on(date: NaiveDate, amount: i64) -> Movement {
    Movement::deposit(date, Amount::from_integer(amount).unwrap())
}

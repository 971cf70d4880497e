//! Account Aggregate
//!
//! Account is the core aggregate for a single wallet.
//! Commands are validated against the movement history; accepted commands
//! produce a movement which is then applied to update the balance.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    AccountPolicy, Amount, Balance, Clock, DomainError, Movement, MovementKind, SystemClock,
};

/// Account Aggregate
///
/// Holds a cached balance next to the ordered list of movements it was
/// derived from. The balance only changes through `deposit` and `withdraw`.
#[derive(Debug, Clone)]
pub struct Account<C = SystemClock> {
    /// Unique account ID
    id: Uuid,

    /// Balance the account was opened with
    initial_balance: Balance,

    /// Current balance
    balance: Balance,

    /// Movements in the order they were recorded
    movements: Vec<Movement>,

    /// Deposit and withdrawal limits
    policy: AccountPolicy,

    /// Source of "today" for new movements and daily limits
    clock: C,
}

impl Account<SystemClock> {
    /// Open an account dated by the system clock.
    ///
    /// The initial balance is not validated; it may be zero or negative.
    pub fn new(initial_balance: Decimal) -> Self {
        Self::with_clock(initial_balance, SystemClock)
    }
}

impl Default for Account<SystemClock> {
    fn default() -> Self {
        Self::new(Decimal::ZERO)
    }
}

impl<C: Clock> Account<C> {
    /// Open an account that takes its dates from `clock`.
    pub fn with_clock(initial_balance: Decimal, clock: C) -> Self {
        let balance = Balance::new(initial_balance);
        Self {
            id: Uuid::new_v4(),
            initial_balance: balance,
            balance,
            movements: Vec::new(),
            policy: AccountPolicy::default(),
            clock,
        }
    }

    /// Replace the default limits.
    pub fn with_policy(mut self, policy: AccountPolicy) -> Self {
        self.policy = policy;
        self
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Deposit money into the account.
    ///
    /// # Errors
    /// - `NegativeAmount` if `amount <= 0`
    /// - `TooManyDeposits` once the deposit cap is reached. The cap counts
    ///   every deposit in the history, not only today's.
    /// - `BalanceOverflow` if the new balance is not representable
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), DomainError> {
        let amount = positive(amount)?;

        if !self.policy.allows_deposit(self.deposit_count()) {
            return Err(DomainError::too_many_deposits(self.policy.max_deposits));
        }

        let movement = Movement::deposit(self.clock.today(), amount);
        self.apply(movement)
    }

    /// Withdraw money from the account.
    ///
    /// # Errors
    /// - `NegativeAmount` if `amount <= 0`
    /// - `InsufficientBalance` if the balance would drop below zero
    /// - `DailyWithdrawalLimitExceeded` if today's withdrawals plus `amount`
    ///   exceed the daily limit
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), DomainError> {
        let amount = positive(amount)?;

        if !self.balance.is_sufficient_for(&amount) {
            return Err(DomainError::insufficient_balance(self.balance.value()));
        }

        let today = self.clock.today();
        let remaining = self.remaining_withdrawal_limit(today);
        if amount.value() > remaining {
            return Err(DomainError::daily_limit_exceeded(
                self.policy.daily_withdrawal_limit,
                remaining,
            ));
        }

        let movement = Movement::withdrawal(today, amount);
        self.apply(movement)
    }

    /// Append a movement without validation and without touching the balance.
    ///
    /// Meant for seeding history in fixtures and administrative corrections.
    /// Afterwards `balance()` and `balance_from_history()` may disagree.
    pub fn record_movement(&mut self, movement: Movement) {
        tracing::debug!(
            account_id = %self.id,
            kind = movement.kind().as_str(),
            amount = %movement.amount(),
            date = %movement.date(),
            "Movement recorded without validation"
        );
        self.movements.push(movement);
    }

    fn apply(&mut self, movement: Movement) -> Result<(), DomainError> {
        let amount = movement.amount();
        let balance = match movement.kind() {
            MovementKind::Deposit => self.balance.credit(&amount),
            MovementKind::Withdrawal => self.balance.debit(&amount),
        }
        .map_err(|_| DomainError::balance_overflow(self.balance.value()))?;
        self.balance = balance;

        tracing::debug!(
            account_id = %self.id,
            kind = movement.kind().as_str(),
            amount = %amount,
            date = %movement.date(),
            balance = %self.balance,
            "Movement applied"
        );

        self.movements.push(movement);
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Total withdrawn on `date`; zero if nothing was withdrawn.
    ///
    /// Saturates at `Decimal::MAX`, which only seeded history can reach.
    pub fn withdrawn_on(&self, date: NaiveDate) -> Decimal {
        self.withdrawals()
            .filter(|movement| movement.was_made_on(date))
            .map(|movement| movement.amount().value())
            .fold(Decimal::ZERO, |total, amount| total.saturating_add(amount))
    }

    /// What can still be withdrawn on `date` under the daily limit.
    pub fn remaining_withdrawal_limit(&self, date: NaiveDate) -> Decimal {
        self.policy.remaining_withdrawal(self.withdrawn_on(date))
    }

    pub fn deposits(&self) -> impl Iterator<Item = &Movement> {
        self.movements.iter().filter(|movement| movement.is_deposit())
    }

    pub fn withdrawals(&self) -> impl Iterator<Item = &Movement> {
        self.movements.iter().filter(|movement| movement.is_withdrawal())
    }

    pub fn deposit_count(&self) -> usize {
        self.deposits().count()
    }

    /// Initial balance plus the signed sum of every movement.
    pub fn balance_from_history(&self) -> Decimal {
        self.movements
            .iter()
            .fold(self.initial_balance.value(), |total, movement| {
                total + movement.signed_amount()
            })
    }

    /// Snapshot of the account as of the clock's current date.
    pub fn statement(&self) -> Statement {
        let today = self.clock.today();
        Statement {
            account_id: self.id,
            date: today,
            initial_balance: self.initial_balance.value(),
            balance: self.balance.value(),
            deposits_made: self.deposit_count(),
            max_deposits: self.policy.max_deposits,
            withdrawn_today: self.withdrawn_on(today),
            remaining_withdrawal_limit: self.remaining_withdrawal_limit(today),
            movements: self.movements.clone(),
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn balance(&self) -> Decimal {
        self.balance.value()
    }

    pub fn initial_balance(&self) -> Decimal {
        self.initial_balance.value()
    }

    /// Read-only view of the history, oldest first.
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn movement_count(&self) -> usize {
        self.movements.len()
    }

    pub fn policy(&self) -> &AccountPolicy {
        &self.policy
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

fn positive(amount: Decimal) -> Result<Amount, DomainError> {
    Amount::new(amount).map_err(|_| DomainError::negative_amount(amount))
}

/// Serializable account snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub account_id: Uuid,
    pub date: NaiveDate,
    pub initial_balance: Decimal,
    pub balance: Decimal,
    pub deposits_made: usize,
    pub max_deposits: u32,
    pub withdrawn_today: Decimal,
    pub remaining_withdrawal_limit: Decimal,
    pub movements: Vec<Movement>,
}

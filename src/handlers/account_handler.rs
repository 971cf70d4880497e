//! Account Handler
//!
//! Executes commands against a single account and reports the outcome.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::aggregate::Account;
use crate::domain::{Clock, SystemClock};
use crate::error::{AppError, AppResult};

use super::{Command, CommandOutcome};

/// Counters for a processed script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScriptSummary {
    /// Commands that succeeded
    pub executed: usize,
    /// Commands the account rejected
    pub rejected: usize,
}

/// Handler owning one account
pub struct AccountHandler<C = SystemClock> {
    account: Account<C>,
}

impl<C: Clock> AccountHandler<C> {
    pub fn new(account: Account<C>) -> Self {
        Self { account }
    }

    /// Execute one command
    pub fn execute(&mut self, command: Command) -> AppResult<CommandOutcome> {
        let result = self.dispatch(&command);

        match &result {
            Ok(_) if command.is_mutation() => {
                tracing::info!(
                    account_id = %self.account.id(),
                    command = ?command,
                    balance = %self.account.balance(),
                    "Command accepted"
                );
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(
                    account_id = %self.account.id(),
                    command = ?command,
                    error_code = e.error_code(),
                    "Command rejected: {}",
                    e
                );
            }
        }

        result
    }

    fn dispatch(&mut self, command: &Command) -> AppResult<CommandOutcome> {
        let account = &mut self.account;

        let outcome = match *command {
            Command::Deposit { amount } => {
                account.deposit(amount)?;
                CommandOutcome::Deposited {
                    amount,
                    balance: account.balance(),
                }
            }
            Command::Withdraw { amount } => {
                account.withdraw(amount)?;
                CommandOutcome::Withdrew {
                    amount,
                    balance: account.balance(),
                    remaining_withdrawal_limit: account
                        .remaining_withdrawal_limit(account.clock().today()),
                }
            }
            Command::WithdrawnOn { date } => CommandOutcome::WithdrawnOn {
                date,
                amount: account.withdrawn_on(date),
            },
            Command::Balance => CommandOutcome::Balance {
                balance: account.balance(),
            },
            Command::Statement => CommandOutcome::Statement(account.statement()),
        };

        Ok(outcome)
    }

    /// Run a script of commands, one per line, writing one JSON object per
    /// command to `output`.
    ///
    /// Rejected operations are written as error objects and processing
    /// continues. A line that does not parse stops the run.
    pub fn run_script<R, W>(&mut self, input: R, mut output: W) -> AppResult<ScriptSummary>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = ScriptSummary::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let command = match Command::parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    return Err(AppError::InvalidCommand(format!(
                        "line {}: {}",
                        index + 1,
                        e
                    )));
                }
            };

            match self.execute(command) {
                Ok(outcome) => {
                    summary.executed += 1;
                    serde_json::to_writer(&mut output, &outcome)?;
                }
                Err(e) if e.is_rejection() => {
                    summary.rejected += 1;
                    serde_json::to_writer(&mut output, &e.to_response())?;
                }
                Err(e) => return Err(e),
            }
            writeln!(output)?;
        }

        output.flush()?;
        Ok(summary)
    }

    pub fn account(&self) -> &Account<C> {
        &self.account
    }
}

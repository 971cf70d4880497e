//! wallet_account - scripted wallet runner
//!
//! Reads account commands line by line from a file (first argument) or
//! stdin and prints one JSON result per command on stdout.

use std::fs::File;
use std::io::{self, BufReader};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wallet_account::config::LogFormat;
use wallet_account::handlers::{AccountHandler, ScriptSummary};
use wallet_account::{Account, AppResult, Clock, Config, FixedClock, SystemClock};

/// Initialize tracing/logging
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wallet_account=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn run<C: Clock>(config: &Config, clock: C, path: Option<&str>) -> AppResult<ScriptSummary> {
    let account = Account::with_clock(config.initial_balance, clock).with_policy(config.policy());
    tracing::info!(
        account_id = %account.id(),
        initial_balance = %account.initial_balance(),
        max_deposits = config.max_deposits,
        daily_withdrawal_limit = %config.daily_withdrawal_limit,
        "Account opened"
    );

    let mut handler = AccountHandler::new(account);
    let stdout = io::stdout().lock();

    match path {
        Some(path) => handler.run_script(BufReader::new(File::open(path)?), stdout),
        None => handler.run_script(io::stdin().lock(), stdout),
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let path = std::env::args().nth(1);

    let summary = match config.today {
        Some(today) => {
            tracing::info!(%today, "Using pinned date");
            run(&config, FixedClock::new(today), path.as_deref())?
        }
        None => run(&config, SystemClock, path.as_deref())?,
    };

    tracing::info!(
        executed = summary.executed,
        rejected = summary.rejected,
        "Script finished"
    );

    Ok(())
}

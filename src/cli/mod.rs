use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::application::{Haptics, LedgerConfig, LedgerStore, SystemClock};
use crate::domain::{parse_cents, AlertPolicy, DEFAULT_ALERT_THRESHOLD_PERCENT};

pub mod render;
pub mod session;

pub use session::{Command, Session};

/// Fintrack - Finance Tracker
#[derive(Parser)]
#[command(name = "fintrack")]
#[command(about = "Track income and expenses and get warned before the budget runs out")]
#[command(version)]
pub struct Cli {
    /// Opening income (e.g., "5200.00" or "5200")
    #[arg(long, default_value = "5200.00")]
    pub income: String,

    /// Opening expenses (e.g., "1850.00" or "1850")
    #[arg(long, default_value = "1850.00")]
    pub expenses: String,

    /// Warn when expenses reach this percentage of income
    #[arg(long, default_value_t = DEFAULT_ALERT_THRESHOLD_PERCENT,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    pub alert_threshold: u8,

    /// Length of the alert pulse in milliseconds
    #[arg(long, default_value_t = 200)]
    pub haptic_ms: u64,

    /// Print the totals as JSON after every change
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the session settings from the command-line flags.
    pub fn config(&self) -> Result<LedgerConfig> {
        let opening_income = parse_cents(&self.income)
            .context("Invalid opening income. Use '5200.00' or '5200'")?;
        let opening_expenses = parse_cents(&self.expenses)
            .context("Invalid opening expenses. Use '1850.00' or '1850'")?;
        let alert_policy = AlertPolicy::new(self.alert_threshold)
            .with_context(|| format!("Invalid alert threshold {}", self.alert_threshold))?;

        Ok(LedgerConfig {
            opening_income,
            opening_expenses,
            alert_policy,
            haptic_pulse: Duration::from_millis(self.haptic_ms),
        })
    }

    pub fn run(self) -> Result<()> {
        init_tracing(self.verbose);

        let config = self.config()?;
        tracing::debug!(?config, "starting session");

        let store = LedgerStore::from_config(&config, SystemClock)
            .context("Invalid opening balances")?;
        let mut session =
            Session::new(store, TerminalBell, config.haptic_pulse).with_json(self.json);

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        session.run(stdin.lock(), &mut stdout)
    }
}

/// Terminal stand-in for a vibration motor: rings the bell.
pub struct TerminalBell;

impl Haptics for TerminalBell {
    fn pulse(&mut self, duration: Duration) {
        eprint!("\x07");
        tracing::info!(pulse_ms = duration.as_millis() as u64, "buzz");
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fintrack={level}")));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

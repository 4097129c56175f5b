// Shared fixtures; each test binary uses only some of them.
#![allow(dead_code)]

use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use fintrack::application::{FixedClock, Haptics, LedgerConfig, LedgerStore};
use fintrack::domain::AlertPolicy;

/// Helper to parse a date string into a NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// The date every test store stamps on its transactions
pub fn today() -> NaiveDate {
    parse_date("2024-03-09")
}

/// Helper to create an empty store with a fixed clock and the default alert policy
pub fn test_store() -> LedgerStore<FixedClock> {
    LedgerStore::with_clock(AlertPolicy::default(), FixedClock(today()))
}

/// Helper to create a store seeded like the reference screen: 5200 income, 1850 expenses
pub fn seeded_store() -> Result<LedgerStore<FixedClock>> {
    let store = LedgerStore::from_config(&LedgerConfig::default(), FixedClock(today()))?;
    Ok(store)
}

/// Haptic device that remembers every pulse
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    pub pulses: Vec<Duration>,
}

impl Haptics for RecordingHaptics {
    fn pulse(&mut self, duration: Duration) {
        self.pulses.push(duration);
    }
}

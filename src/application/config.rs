use std::time::Duration;

use crate::domain::{AlertPolicy, Cents};

use super::DEFAULT_HAPTIC_PULSE;

/// Startup settings for a tracker session.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    /// Income recorded before the first user entry
    pub opening_income: Cents,
    /// Expenses recorded before the first user entry
    pub opening_expenses: Cents,
    pub alert_policy: AlertPolicy,
    pub haptic_pulse: Duration,
}

impl LedgerConfig {
    /// No opening balances, default alert and pulse.
    pub fn empty() -> Self {
        Self {
            opening_income: 0,
            opening_expenses: 0,
            ..Self::default()
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            opening_income: 520000,
            opening_expenses: 185000,
            alert_policy: AlertPolicy::default(),
            haptic_pulse: DEFAULT_HAPTIC_PULSE,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::{Cents, Transaction, TransactionKind};

/// Default share of income that expenses may reach before the alert fires.
pub const DEFAULT_ALERT_THRESHOLD_PERCENT: u8 = 80;

/// Decides when spending is close enough to income to warn the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct AlertPolicy {
    threshold_percent: u8,
}

impl AlertPolicy {
    /// Create a policy firing when expenses reach `threshold_percent` of income.
    /// Returns `None` outside 1..=100.
    pub fn new(threshold_percent: u8) -> Option<Self> {
        (1..=100)
            .contains(&threshold_percent)
            .then_some(Self { threshold_percent })
    }

    pub fn threshold_percent(&self) -> u8 {
        self.threshold_percent
    }

    /// `expenses >= threshold * income`, evaluated in exact integer arithmetic.
    /// Never active while income is zero.
    pub fn is_triggered(&self, total_income: Cents, total_expenses: Cents) -> bool {
        if total_income == 0 {
            return false;
        }
        i128::from(total_expenses) * 100
            >= i128::from(total_income) * i128::from(self.threshold_percent)
    }
}

impl TryFrom<u8> for AlertPolicy {
    type Error = String;

    fn try_from(threshold_percent: u8) -> Result<Self, Self::Error> {
        Self::new(threshold_percent)
            .ok_or_else(|| format!("alert threshold must be 1..=100, got {}", threshold_percent))
    }
}

impl From<AlertPolicy> for u8 {
    fn from(policy: AlertPolicy) -> Self {
        policy.threshold_percent
    }
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            threshold_percent: DEFAULT_ALERT_THRESHOLD_PERCENT,
        }
    }
}

/// Totals derived from the transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LedgerSnapshot {
    pub total_income: Cents,
    /// Absolute sum of expense amounts (always >= 0)
    pub total_expenses: Cents,
    pub remaining: Cents,
    pub alert_active: bool,
    pub transaction_count: usize,
}

impl LedgerSnapshot {
    /// Expenses as a percentage of income, for display.
    pub fn expense_ratio(&self) -> Option<f64> {
        if self.total_income == 0 {
            None
        } else {
            Some(self.total_expenses as f64 / self.total_income as f64 * 100.0)
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining < 0
    }
}

/// Recompute every derived total from scratch.
pub fn compute_snapshot(transactions: &[Transaction], policy: &AlertPolicy) -> LedgerSnapshot {
    let (total_income, total_expenses) =
        transactions
            .iter()
            .fold((0, 0), |(income, expenses), tx| match tx.kind {
                TransactionKind::Income => (income + tx.amount_cents, expenses),
                TransactionKind::Expense => (income, expenses + tx.amount_cents.abs()),
            });

    LedgerSnapshot {
        total_income,
        total_expenses,
        remaining: total_income - total_expenses,
        alert_active: policy.is_triggered(total_income, total_expenses),
        transaction_count: transactions.len(),
    }
}

/// Check that adding `tx` keeps every total representable.
pub fn fits_totals(current: &LedgerSnapshot, tx: &Transaction) -> bool {
    let (income, expenses) = match tx.kind {
        TransactionKind::Income => (
            current.total_income.checked_add(tx.amount_cents),
            Some(current.total_expenses),
        ),
        TransactionKind::Expense => (
            Some(current.total_income),
            tx.amount_cents
                .checked_abs()
                .and_then(|abs| current.total_expenses.checked_add(abs)),
        ),
    };
    match (income, expenses) {
        (Some(income), Some(expenses)) => income.checked_sub(expenses).is_some(),
        _ => false,
    }
}

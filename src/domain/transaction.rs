use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Cents;

pub type TransactionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money coming in (salary, refunds, ...)
    Income,
    /// Money going out (food, rent, ...)
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(TransactionKind::Income),
            "expense" => Some(TransactionKind::Expense),
            _ => None,
        }
    }

    /// Apply this kind's sign convention to a non-negative amount.
    pub fn signed(&self, amount_cents: Cents) -> Cents {
        match self {
            TransactionKind::Income => amount_cents,
            TransactionKind::Expense => -amount_cents,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single income or expense entry.
/// Transactions are immutable once recorded; the ledger only ever appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub description: String,
    /// Signed amount in cents: positive for income, negative for expense
    pub amount_cents: Cents,
    pub category: String,
    pub kind: TransactionKind,
    /// Calendar day the transaction was recorded, serialized as YYYY-MM-DD
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction from a non-negative amount.
    /// The stored amount is signed according to `kind`.
    pub fn new(
        description: impl Into<String>,
        amount_cents: Cents,
        kind: TransactionKind,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        assert!(amount_cents >= 0, "Transaction amount must not be negative");
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount_cents: kind.signed(amount_cents),
            category: category.into(),
            kind,
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The date in ISO 8601 form.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_kind_parsing_is_case_insensitive() {
        assert_eq!(TransactionKind::from_str("Income"), Some(TransactionKind::Income));
        assert_eq!(TransactionKind::from_str("EXPENSE"), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::from_str(" expense "), Some(TransactionKind::Expense));
        assert_eq!(TransactionKind::from_str("transfer"), None);
        assert_eq!(TransactionKind::from_str(""), None);
    }

    #[test]
    fn test_income_keeps_sign() {
        let tx = Transaction::new("Salary", 10000, TransactionKind::Income, "Work", day());
        assert_eq!(tx.amount_cents, 10000);
        assert!(tx.is_income());
    }

    #[test]
    fn test_expense_is_negated() {
        let tx = Transaction::new("Coffee", 450, TransactionKind::Expense, "Food", day());
        assert_eq!(tx.amount_cents, -450);
        assert!(tx.is_expense());
        assert_eq!(tx.date_string(), "2024-03-09");
    }

    #[test]
    fn test_zero_expense_is_zero() {
        let tx = Transaction::new("Free sample", 0, TransactionKind::Expense, "Food", day());
        assert_eq!(tx.amount_cents, 0);
    }

    #[test]
    fn test_date_serializes_as_iso_8601() {
        let tx = Transaction::new("Coffee", 450, TransactionKind::Expense, "Food", day());
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["kind"], "Expense");
    }

    #[test]
    #[should_panic(expected = "Transaction amount must not be negative")]
    fn test_transaction_rejects_negative_input() {
        Transaction::new("Oops", -1, TransactionKind::Income, "Misc", day());
    }
}

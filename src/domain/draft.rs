use serde::{Deserialize, Serialize};

use super::TransactionKind;

/// Raw, unvalidated input staged by the user before it is submitted to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: String,
    /// Free text, expected to be "Income" or "Expense"
    pub kind: String,
    pub category: String,
}

impl TransactionDraft {
    pub fn new() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            kind: TransactionKind::Expense.as_str().to_string(),
            category: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Clear every field and go back to an expense entry.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::new()
    }
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self::new()
    }
}

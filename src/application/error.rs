use thiserror::Error;

/// Reasons an entry is rejected. The ledger is left untouched in every case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Category must not be empty")]
    EmptyCategory,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount must not be negative: {0}")]
    NegativeAmount(String),

    #[error("Unknown transaction type '{0}' (expected Income or Expense)")]
    UnknownKind(String),
}

use crate::domain::{
    compute_snapshot, fits_totals, format_cents, parse_cents, AlertPolicy, Cents,
    LedgerSnapshot, ParseCentsError, Transaction, TransactionDraft, TransactionKind,
};

use super::{Clock, LedgerConfig, LedgerEvent, SystemClock, ValidationError};

/// Category used for the balances a tracker starts with.
pub const OPENING_BALANCE_CATEGORY: &str = "Opening balance";

/// In-memory, append-only transaction ledger with cached totals.
/// This is the primary interface for any front end (CLI, TUI, ...).
pub struct LedgerStore<C: Clock = SystemClock> {
    transactions: Vec<Transaction>,
    snapshot: LedgerSnapshot,
    policy: AlertPolicy,
    clock: C,
    events: Vec<LedgerEvent>,
}

impl LedgerStore<SystemClock> {
    /// Create an empty ledger dated by the system clock.
    pub fn new(policy: AlertPolicy) -> Self {
        Self::with_clock(policy, SystemClock)
    }
}

impl<C: Clock> LedgerStore<C> {
    /// Create an empty ledger using the given clock.
    pub fn with_clock(policy: AlertPolicy, clock: C) -> Self {
        Self {
            transactions: Vec::new(),
            snapshot: LedgerSnapshot::default(),
            policy,
            clock,
            events: Vec::new(),
        }
    }

    /// Create a ledger from a config, recording its opening balances.
    pub fn from_config(config: &LedgerConfig, clock: C) -> Result<Self, ValidationError> {
        let mut store = Self::with_clock(config.alert_policy, clock);
        store.seed_opening_balances(config.opening_income, config.opening_expenses)?;
        Ok(store)
    }

    // ========================
    // Mutations
    // ========================

    /// Validate and append one transaction, then recompute all totals.
    ///
    /// On error nothing is recorded and the previous snapshot stays current.
    pub fn add_transaction(
        &mut self,
        description: &str,
        amount: &str,
        kind: &str,
        category: &str,
    ) -> Result<LedgerSnapshot, ValidationError> {
        let result = self.validate(description, amount, kind, category).and_then(
            |(description, amount_cents, kind, category)| {
                let tx = Transaction::new(
                    description,
                    amount_cents,
                    kind,
                    category,
                    self.clock.today(),
                );
                self.record(tx)
            },
        );

        if let Err(err) = &result {
            tracing::debug!(error = %err, "rejected transaction");
        }
        result
    }

    /// Submit a staged draft. The draft is cleared on success and kept as-is on
    /// failure so it can be corrected.
    pub fn submit(&mut self, draft: &mut TransactionDraft) -> Result<LedgerSnapshot, ValidationError> {
        let snapshot =
            self.add_transaction(&draft.description, &draft.amount, &draft.kind, &draft.category)?;
        draft.reset();
        Ok(snapshot)
    }

    /// Record the balances the tracker starts with as ordinary transactions.
    /// Zero amounts are skipped. Either both balances are recorded or neither is.
    pub fn seed_opening_balances(
        &mut self,
        income: Cents,
        expenses: Cents,
    ) -> Result<LedgerSnapshot, ValidationError> {
        if let Some(negative) = [income, expenses].into_iter().find(|amount| *amount < 0) {
            return Err(ValidationError::NegativeAmount(format_cents(negative)));
        }

        let transactions_len = self.transactions.len();
        let events_len = self.events.len();
        let previous = self.snapshot;

        for (kind, amount, description) in [
            (TransactionKind::Income, income, "Opening income"),
            (TransactionKind::Expense, expenses, "Opening expenses"),
        ] {
            if amount == 0 {
                continue;
            }
            let tx = Transaction::new(
                description,
                amount,
                kind,
                OPENING_BALANCE_CATEGORY,
                self.clock.today(),
            );
            if let Err(err) = self.record(tx) {
                self.transactions.truncate(transactions_len);
                self.events.truncate(events_len);
                self.snapshot = previous;
                return Err(err);
            }
        }
        Ok(self.snapshot)
    }

    // ========================
    // Queries
    // ========================

    /// The totals as of the last successful mutation.
    pub fn current_snapshot(&self) -> LedgerSnapshot {
        self.snapshot
    }

    /// Every recorded transaction, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn policy(&self) -> &AlertPolicy {
        &self.policy
    }

    /// Take the alert events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.events)
    }

    // ========================
    // Internals
    // ========================

    fn validate(
        &self,
        description: &str,
        amount: &str,
        kind: &str,
        category: &str,
    ) -> Result<(String, Cents, TransactionKind, String), ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        let amount_cents = parse_cents(amount).map_err(|err| match err {
            ParseCentsError::InvalidFormat => {
                ValidationError::InvalidAmount(format!("'{}' is not a number", amount.trim()))
            }
            ParseCentsError::Overflow => {
                ValidationError::InvalidAmount(format!("'{}' is too large", amount.trim()))
            }
        })?;
        if amount_cents < 0 {
            return Err(ValidationError::NegativeAmount(amount.trim().to_string()));
        }

        let kind = TransactionKind::from_str(kind)
            .ok_or_else(|| ValidationError::UnknownKind(kind.trim().to_string()))?;

        Ok((description.to_string(), amount_cents, kind, category.to_string()))
    }

    /// Append and recompute. The append and the new snapshot are published together.
    fn record(&mut self, tx: Transaction) -> Result<LedgerSnapshot, ValidationError> {
        if !fits_totals(&self.snapshot, &tx) {
            return Err(ValidationError::InvalidAmount(format!(
                "{} would overflow the totals",
                format_cents(tx.amount_cents)
            )));
        }

        tracing::debug!(
            id = %tx.id,
            kind = %tx.kind,
            amount = %format_cents(tx.amount_cents),
            category = %tx.category,
            "recorded transaction"
        );
        self.transactions.push(tx);

        let previous = self.snapshot;
        self.snapshot = compute_snapshot(&self.transactions, &self.policy);
        self.track_alert(previous);

        Ok(self.snapshot)
    }

    fn track_alert(&mut self, previous: LedgerSnapshot) {
        match (previous.alert_active, self.snapshot.alert_active) {
            (false, true) => {
                let expense_ratio = self.snapshot.expense_ratio().unwrap_or_default();
                tracing::warn!(
                    expense_ratio,
                    threshold = self.policy.threshold_percent(),
                    "expenses reached the alert threshold"
                );
                self.events.push(LedgerEvent::AlertRaised { expense_ratio });
            }
            (true, false) => {
                tracing::info!("expenses back below the alert threshold");
                self.events.push(LedgerEvent::AlertCleared);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::application::FixedClock;

    fn store() -> LedgerStore<FixedClock> {
        let day = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        LedgerStore::with_clock(AlertPolicy::default(), FixedClock(day))
    }

    #[test]
    fn test_starts_empty() {
        let store = store();
        assert!(store.transactions().is_empty());
        assert_eq!(store.current_snapshot(), LedgerSnapshot::default());
    }

    #[test]
    fn test_validation_order() {
        let mut store = store();
        assert_eq!(
            store.add_transaction("", "", "", ""),
            Err(ValidationError::EmptyDescription)
        );
        assert_eq!(
            store.add_transaction("Coffee", "", "", " "),
            Err(ValidationError::EmptyCategory)
        );
        assert!(matches!(
            store.add_transaction("Coffee", "abc", "Expense", "Food"),
            Err(ValidationError::InvalidAmount(_))
        ));
        assert_eq!(
            store.add_transaction("Coffee", "-4.50", "Expense", "Food"),
            Err(ValidationError::NegativeAmount("-4.50".into()))
        );
        assert_eq!(
            store.add_transaction("Coffee", "4.50", "Gift", "Food"),
            Err(ValidationError::UnknownKind("Gift".into()))
        );
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let mut store = store();
        store.add_transaction("  Coffee ", "4.50", " expense", " Food ").unwrap();

        let tx = &store.transactions()[0];
        assert_eq!(tx.description, "Coffee");
        assert_eq!(tx.category, "Food");
        assert_eq!(tx.kind, TransactionKind::Expense);
    }

    #[test]
    fn test_negative_opening_balance_rejected() {
        let mut store = store();
        assert!(matches!(
            store.seed_opening_balances(-100, 0),
            Err(ValidationError::NegativeAmount(_))
        ));
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn test_negative_opening_expenses_record_nothing() {
        let mut store = store();

        let result = store.seed_opening_balances(100000, -500);

        assert_eq!(result, Err(ValidationError::NegativeAmount("-5.00".into())));
        assert!(store.transactions().is_empty());
        assert_eq!(store.current_snapshot(), LedgerSnapshot::default());
    }

    #[test]
    fn test_overflowing_opening_expenses_roll_back_income() {
        let mut store = store();
        store
            .add_transaction("Debt", "92233720368547758", "Expense", "Loans")
            .unwrap();
        let before = store.current_snapshot();

        let result = store.seed_opening_balances(1000, 100);

        assert!(matches!(result, Err(ValidationError::InvalidAmount(_))));
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.current_snapshot(), before);
        assert!(store.drain_events().is_empty());
    }

    #[test]
    fn test_zero_opening_balances_are_skipped() {
        let mut store = store();
        store.seed_opening_balances(0, 0).unwrap();
        assert!(store.transactions().is_empty());

        store.seed_opening_balances(1000, 0).unwrap();
        assert_eq!(store.transactions().len(), 1);
        assert_eq!(store.transactions()[0].category, OPENING_BALANCE_CATEGORY);
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let mut store = store();
        store
            .add_transaction("Jackpot", "92233720368547758", "Income", "Luck")
            .unwrap();
        let before = store.current_snapshot();

        let result = store.add_transaction("Jackpot", "1", "Income", "Luck");

        assert!(matches!(result, Err(ValidationError::InvalidAmount(_))));
        assert_eq!(store.current_snapshot(), before);
        assert_eq!(store.transactions().len(), 1);
    }
}

use std::io::{self, Write};

use crate::domain::{format_dollars, LedgerSnapshot, Transaction, TransactionDraft};

pub fn render_summary<W: Write>(out: &mut W, snapshot: &LedgerSnapshot) -> io::Result<()> {
    writeln!(out, "{:<12} {:>14}", "Income", format_dollars(snapshot.total_income))?;
    writeln!(out, "{:<12} {:>14}", "Expenses", format_dollars(snapshot.total_expenses))?;
    if snapshot.is_over_budget() {
        writeln!(
            out,
            "{:<12} {:>14}  (over budget)",
            "Remaining",
            format_dollars(snapshot.remaining)
        )?;
    } else {
        writeln!(out, "{:<12} {:>14}", "Remaining", format_dollars(snapshot.remaining))?;
    }

    if snapshot.alert_active {
        render_warning(out, snapshot)?;
    }
    Ok(())
}

/// The overspend banner, e.g. "Warning: Expenses at 83.7%!"
pub fn render_warning<W: Write>(out: &mut W, snapshot: &LedgerSnapshot) -> io::Result<()> {
    if let Some(ratio) = snapshot.expense_ratio() {
        writeln!(out, "!! Warning: Expenses at {:.1}%! !!", ratio)?;
    }
    Ok(())
}

pub fn render_transactions<W: Write>(out: &mut W, transactions: &[Transaction]) -> io::Result<()> {
    if transactions.is_empty() {
        writeln!(out, "No transactions yet.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<10} {:<8} {:<18} {:<24} {:>12}",
        "DATE", "TYPE", "CATEGORY", "DESCRIPTION", "AMOUNT"
    )?;
    writeln!(out, "{}", "-".repeat(76))?;
    for tx in transactions {
        writeln!(
            out,
            "{:<10} {:<8} {:<18} {:<24} {:>12}",
            tx.date_string(),
            tx.kind.as_str(),
            truncate(&tx.category, 18),
            truncate(&tx.description, 24),
            format_dollars(tx.amount_cents)
        )?;
    }
    Ok(())
}

pub fn render_draft<W: Write>(out: &mut W, draft: &TransactionDraft) -> io::Result<()> {
    writeln!(out, "  description: {}", draft.description)?;
    writeln!(out, "  amount:      {}", draft.amount)?;
    writeln!(out, "  kind:        {}", draft.kind)?;
    writeln!(out, "  category:    {}", draft.category)?;
    Ok(())
}

pub fn render_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  description <text>   set the description of the new entry")?;
    writeln!(out, "  amount <number>      set the amount (e.g. 4.50)")?;
    writeln!(out, "  kind <Income|Expense>")?;
    writeln!(out, "  category <text>      set the category")?;
    writeln!(out, "  form                 show the entry being edited")?;
    writeln!(out, "  add                  record the entry")?;
    writeln!(out, "  clear                clear the entry without recording it")?;
    writeln!(out, "  list                 show all transactions")?;
    writeln!(out, "  summary              show income, expenses and remaining budget")?;
    writeln!(out, "  quit                 leave")?;
    Ok(())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(snapshot: &LedgerSnapshot) -> String {
        let mut out = Vec::new();
        render_summary(&mut out, snapshot).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_without_alert() {
        let snapshot = LedgerSnapshot {
            total_income: 520000,
            total_expenses: 185000,
            remaining: 335000,
            alert_active: false,
            transaction_count: 2,
        };
        let text = rendered(&snapshot);

        assert!(text.contains("$5200.00"));
        assert!(text.contains("$1850.00"));
        assert!(text.contains("$3350.00"));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_summary_with_alert_and_overspend() {
        let snapshot = LedgerSnapshot {
            total_income: 100000,
            total_expenses: 125080,
            remaining: -25080,
            alert_active: true,
            transaction_count: 3,
        };
        let text = rendered(&snapshot);

        assert!(text.contains("-$250.80  (over budget)"));
        assert!(text.contains("Warning: Expenses at 125.1%!"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Food", 18), "Food");
        assert_eq!(truncate("A very long description here", 10), "A very ...");
    }
}

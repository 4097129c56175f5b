use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::{dispatch_alerts, Clock, Haptics, LedgerStore};
use crate::domain::{format_dollars, TransactionDraft};

use super::render::{render_draft, render_help, render_summary, render_transactions};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Description(String),
    Amount(String),
    Kind(String),
    Category(String),
    Form,
    Add,
    Clear,
    List,
    Summary,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let value = rest.trim().to_string();

        match name.to_lowercase().as_str() {
            "description" | "desc" => Some(Command::Description(value)),
            "amount" => Some(Command::Amount(value)),
            "kind" | "type" => Some(Command::Kind(value)),
            "category" | "cat" => Some(Command::Category(value)),
            "form" => Some(Command::Form),
            "add" => Some(Command::Add),
            "clear" => Some(Command::Clear),
            "list" => Some(Command::List),
            "summary" => Some(Command::Summary),
            "help" | "?" => Some(Command::Help),
            "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Interactive front end: stages input in a draft, submits it to the store,
/// renders the result and forwards alerts to the haptic device.
pub struct Session<C: Clock, H: Haptics> {
    store: LedgerStore<C>,
    draft: TransactionDraft,
    haptics: H,
    pulse: Duration,
    json: bool,
}

impl<C: Clock, H: Haptics> Session<C, H> {
    pub fn new(store: LedgerStore<C>, haptics: H, pulse: Duration) -> Self {
        Self {
            store,
            draft: TransactionDraft::new(),
            haptics,
            pulse,
            json: false,
        }
    }

    /// Print the snapshot as JSON after every change.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn store(&self) -> &LedgerStore<C> {
        &self.store
    }

    pub fn draft(&self) -> &TransactionDraft {
        &self.draft
    }

    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "Finance Tracker")?;
        writeln!(out, "Type 'help' for the list of commands.")?;
        writeln!(out)?;
        self.show_snapshot(out)?;
        // An alert already active at startup buzzes once, like any other edge.
        self.notify();

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(command) => self.execute(command, out)?,
                None => writeln!(
                    out,
                    "Unknown command '{}'. Type 'help' for the list of commands.",
                    line.trim()
                )?,
            }
            out.flush()?;
        }
        Ok(())
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::Description(value) => self.draft.description = value,
            Command::Amount(value) => self.draft.amount = value,
            Command::Kind(value) => self.draft.kind = value,
            Command::Category(value) => self.draft.category = value,
            Command::Form => render_draft(out, &self.draft)?,
            Command::Add => self.add(out)?,
            Command::Clear => {
                self.draft.reset();
                writeln!(out, "Entry cleared.")?;
            }
            Command::List => render_transactions(out, self.store.transactions())?,
            Command::Summary => self.show_snapshot(out)?,
            Command::Help => render_help(out)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn add<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match self.store.submit(&mut self.draft) {
            Ok(_) => {
                if let Some(tx) = self.store.transactions().last() {
                    writeln!(
                        out,
                        "Added {} {}: {} ({})",
                        tx.kind,
                        tx.category,
                        format_dollars(tx.amount_cents),
                        tx.date_string()
                    )?;
                }
                self.show_snapshot(out)?;
                self.notify();
            }
            Err(err) => {
                writeln!(out, "Error: {}", err)?;
            }
        }
        Ok(())
    }

    fn show_snapshot<W: Write>(&self, out: &mut W) -> Result<()> {
        let snapshot = self.store.current_snapshot();
        render_summary(out, &snapshot)?;
        if self.json {
            writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
        }
        Ok(())
    }

    fn notify(&mut self) {
        let events = self.store.drain_events();
        dispatch_alerts(&events, &mut self.haptics, self.pulse);
    }
}

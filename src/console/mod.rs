//! Interactive menu front-end.
//!
//! The console owns no data: it prompts, validates input with the
//! [`validation`](crate::validation) predicates, calls the store and renders
//! results. Input and output are generic so the whole loop can be driven
//! from a script in tests.

mod actions;
mod prompt;
pub mod table;

pub use table::render_table;

use crate::store::ContactStore;
use anyhow::Result;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

/// Raised when the input stream ends; the menu treats it as "exit".
#[derive(Error, Debug)]
#[error("input closed")]
pub struct InputClosed;

const RULE_WIDTH: usize = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    View,
    Edit,
    Delete,
    Search,
}

static MENU: [(&str, &str, Option<MenuAction>); 6] = [
    ("0", "Exit", None),
    ("1", "Add contact", Some(MenuAction::Add)),
    ("2", "View contacts", Some(MenuAction::View)),
    ("3", "Edit contact", Some(MenuAction::Edit)),
    ("4", "Delete contact", Some(MenuAction::Delete)),
    ("5", "Search contacts", Some(MenuAction::Search)),
];

/// Menu-driven console bound to one store.
pub struct Console<'a, R, W> {
    store: &'a mut ContactStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(store: &'a mut ContactStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// Errors from a single action are printed and the menu continues; only
    /// failures writing to the output end the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        self.report_recovery()?;

        loop {
            self.print_header("Contact Management System")?;
            for (key, label, _) in MENU.iter() {
                writeln!(self.output, " {}. {}", key, label)?;
            }

            let choice = match self.prompt("\nChoose an option: ") {
                Ok(choice) => choice,
                Err(e) if e.is::<InputClosed>() => return self.goodbye(),
                Err(e) => return Err(e),
            };

            let Some((_, _, action)) = MENU.iter().find(|(key, _, _)| *key == choice) else {
                writeln!(self.output, "\n[!] Invalid option. Please try again.")?;
                continue;
            };
            let Some(action) = action else {
                return self.goodbye();
            };

            debug!("Menu action {:?}", action);
            match self.dispatch(*action) {
                Ok(()) => {}
                Err(e) if e.is::<InputClosed>() => return self.goodbye(),
                Err(e) => writeln!(self.output, "\n[ERROR] {:#}", e)?,
            }

            match self.prompt("\nPress Enter to continue...") {
                Ok(_) => {}
                Err(e) if e.is::<InputClosed>() => return self.goodbye(),
                Err(e) => return Err(e),
            }
        }
    }

    fn dispatch(&mut self, action: MenuAction) -> Result<()> {
        match action {
            MenuAction::Add => self.action_add(),
            MenuAction::View => self.action_list(),
            MenuAction::Edit => self.action_edit(),
            MenuAction::Delete => self.action_delete(),
            MenuAction::Search => self.action_search(),
        }
    }

    fn report_recovery(&mut self) -> Result<()> {
        if let Some(recovery) = self.store.recovery() {
            if recovery.backed_up {
                writeln!(
                    self.output,
                    "[WARN] Data file corrupted or unreadable. Backed up to {}. Starting fresh.",
                    recovery.backup_path.display()
                )?;
            } else {
                writeln!(
                    self.output,
                    "[WARN] Data file corrupted or unreadable and could not be backed up. Starting fresh."
                )?;
            }
            writeln!(self.output, "Detail: {}", recovery.detail)?;
        }
        Ok(())
    }

    fn goodbye(&mut self) -> Result<()> {
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_header(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{}\n{}\n{}", rule, title, rule)?;
        Ok(())
    }
}

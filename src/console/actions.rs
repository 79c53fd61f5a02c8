//! One handler per menu entry.

use super::{render_table, Console};
use crate::models::{ContactUpdate, SortKey};
use crate::validation::{validate_email, validate_name, validate_phone};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const PHONE_HINT: &str = "  Invalid phone. Allowed: digits, + ( ), - spaces; length 7-15 digits.";
const EMAIL_HINT: &str = "  Invalid email format. Example: user@example.com";

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub(super) fn action_add(&mut self) -> Result<()> {
        self.print_header("Add New Contact")?;
        let name = self.prompt_nonempty("Name")?;
        let phone = self.prompt_valid("Phone", validate_phone, PHONE_HINT)?;
        let email = self.prompt_valid("Email", validate_email, EMAIL_HINT)?;

        let contact = self
            .store
            .add(&name, &phone, &email)
            .context("Failed to add contact")?;
        writeln!(self.output, "\n[OK] Added contact with ID {}.", contact.id)?;
        Ok(())
    }

    pub(super) fn action_list(&mut self) -> Result<()> {
        self.print_header("All Contacts")?;
        let field = self
            .prompt("Sort by (id/name/phone/email) [name]: ")?
            .to_lowercase();
        let contacts = self.store.list(SortKey::parse(&field));
        write!(self.output, "{}", render_table(&contacts))?;
        Ok(())
    }

    pub(super) fn action_edit(&mut self) -> Result<()> {
        self.print_header("Edit Contact")?;
        let Some(id) = self.prompt_id()? else {
            return Ok(());
        };
        let Some(current) = self.store.find_by_id(id).cloned() else {
            writeln!(self.output, "  Contact not found.")?;
            return Ok(());
        };

        writeln!(self.output, "Leave a field empty to keep the current value.")?;
        let name = self.prompt(&format!("Name [{}]: ", current.name))?;
        let phone = self.prompt(&format!("Phone [{}]: ", current.phone))?;
        let email = self.prompt(&format!("Email [{}]: ", current.email))?;

        // Only fields that were actually entered are checked.
        if !name.is_empty() && !validate_name(&name) {
            writeln!(self.output, "  Invalid name.")?;
            return Ok(());
        }
        if !phone.is_empty() && !validate_phone(&phone) {
            writeln!(self.output, "  Invalid phone.")?;
            return Ok(());
        }
        if !email.is_empty() && !validate_email(&email) {
            writeln!(self.output, "  Invalid email.")?;
            return Ok(());
        }

        let changes = ContactUpdate {
            name: Some(name).filter(|v| !v.is_empty()),
            phone: Some(phone).filter(|v| !v.is_empty()),
            email: Some(email).filter(|v| !v.is_empty()),
        };
        let updated = self
            .store
            .update(id, changes)
            .with_context(|| format!("Failed to update contact {}", id))?;

        match updated {
            Some(_) => writeln!(self.output, "  [OK] Contact updated.")?,
            None => writeln!(self.output, "  Update failed.")?,
        }
        Ok(())
    }

    pub(super) fn action_delete(&mut self) -> Result<()> {
        self.print_header("Delete Contact")?;
        let Some(id) = self.prompt_id()? else {
            return Ok(());
        };
        let Some(name) = self.store.find_by_id(id).map(|c| c.name.clone()) else {
            writeln!(self.output, "  Contact not found.")?;
            return Ok(());
        };

        let confirm = self.prompt(&format!(
            "Are you sure you want to delete '{}' (ID {})? [y/N]: ",
            name, id
        ))?;
        if !confirm.eq_ignore_ascii_case("y") {
            writeln!(self.output, "  Cancelled.")?;
            return Ok(());
        }

        let deleted = self
            .store
            .delete(id)
            .with_context(|| format!("Failed to delete contact {}", id))?;
        if deleted {
            writeln!(self.output, "  [OK] Contact deleted.")?;
        } else {
            writeln!(self.output, "  Delete failed.")?;
        }
        Ok(())
    }

    pub(super) fn action_search(&mut self) -> Result<()> {
        self.print_header("Search Contacts")?;
        let query = self.prompt_nonempty("Enter search text (name/phone/email)")?;
        let results = self.store.search(&query);
        if results.is_empty() {
            writeln!(self.output, "  No matches.")?;
            return Ok(());
        }
        write!(self.output, "{}", render_table(&results))?;
        Ok(())
    }
}

//! Line-oriented prompts.

use super::{Console, InputClosed};
use anyhow::Result;
use std::io::{BufRead, Write};

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    /// Print `label`, read one line and return it trimmed.
    pub(super) fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(InputClosed.into());
        }
        Ok(line.trim().to_string())
    }

    /// Prompt until a non-empty value is entered.
    pub(super) fn prompt_nonempty(&mut self, label: &str) -> Result<String> {
        loop {
            let value = self.prompt(&format!("{}: ", label))?;
            if !value.is_empty() {
                return Ok(value);
            }
            writeln!(self.output, "  Value cannot be empty. Try again.")?;
        }
    }

    /// Prompt until `is_valid` accepts the value, printing `hint` after each rejection.
    pub(super) fn prompt_valid(
        &mut self,
        label: &str,
        is_valid: fn(&str) -> bool,
        hint: &str,
    ) -> Result<String> {
        loop {
            let value = self.prompt(&format!("{}: ", label))?;
            if is_valid(&value) {
                return Ok(value);
            }
            writeln!(self.output, "{}", hint)?;
        }
    }

    /// Prompt for a contact id. `None` means the entry was not a number.
    pub(super) fn prompt_id(&mut self) -> Result<Option<u64>> {
        let raw = self.prompt_nonempty("Enter Contact ID")?;
        match raw.parse::<u64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "  ID must be a number.")?;
                Ok(None)
            }
        }
    }
}

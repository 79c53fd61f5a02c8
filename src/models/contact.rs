//! Contact model representing a person in the directory.

use serde::{Deserialize, Deserializer, Serialize};

/// A contact record as stored in the data file.
///
/// Every field is required and unknown fields are rejected, so a file whose
/// objects carry a different shape fails to load instead of being coerced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Unique identifier, always greater than zero
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u64,

    /// Display name
    pub name: String,

    /// Phone number as entered (trimmed)
    pub phone: String,

    /// Email address as entered (trimmed)
    pub email: String,
}

/// Reject `0` ids at parse time; negative and fractional numbers already fail as `u64`.
fn deserialize_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let id = u64::deserialize(deserializer)?;
    if id == 0 {
        return Err(serde::de::Error::custom("contact id must be greater than zero"));
    }
    Ok(id)
}

impl Contact {
    /// Create a contact, trimming the text fields.
    pub fn new(
        id: u64,
        name: impl AsRef<str>,
        phone: impl AsRef<str>,
        email: impl AsRef<str>,
    ) -> Self {
        Self {
            id,
            name: name.as_ref().trim().to_string(),
            phone: phone.as_ref().trim().to_string(),
            email: email.as_ref().trim().to_string(),
        }
    }

    /// Case-insensitive substring match against name, phone or email.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.phone.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }
}

/// Partial update for an existing contact.
///
/// A field left as `None`, or set to a blank string, keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ContactUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Apply the non-blank fields to `contact`.
    pub fn apply_to(&self, contact: &mut Contact) {
        overwrite_if_present(&mut contact.name, self.name.as_deref());
        overwrite_if_present(&mut contact.phone, self.phone.as_deref());
        overwrite_if_present(&mut contact.email, self.email.as_deref());
    }
}

fn overwrite_if_present(field: &mut String, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        *field = value.to_string();
    }
}

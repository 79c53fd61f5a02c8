//! Whole-record validation.

use super::{validate_email, validate_name, validate_phone};
use crate::error::ValidationError;

/// A name/phone/email triple checked before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactInput {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Check every field, reporting the first failure in name, phone, email order.
    ///
    /// Phone and email are checked after trimming, the same way the store
    /// will store them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !validate_name(&self.name) {
            return Err(ValidationError::EmptyName);
        }
        let phone = self.phone.trim();
        if !validate_phone(phone) {
            return Err(ValidationError::InvalidPhone(phone.to_string()));
        }
        let email = self.email.trim();
        if !validate_email(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

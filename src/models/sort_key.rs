//! Field used to order listings.

use super::Contact;
use std::cmp::Ordering;
use std::fmt;

/// Sort field for [`ContactStore::list`](crate::store::ContactStore::list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    ById,
    #[default]
    ByName,
    ByPhone,
    ByEmail,
}

impl SortKey {
    /// Map a field name to a sort key. Anything unrecognised, including an
    /// empty string, sorts by name.
    pub fn parse(field: &str) -> Self {
        match field {
            "id" => SortKey::ById,
            "phone" => SortKey::ByPhone,
            "email" => SortKey::ByEmail,
            _ => SortKey::ByName,
        }
    }

    /// Field name as accepted by [`SortKey::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::ById => "id",
            SortKey::ByName => "name",
            SortKey::ByPhone => "phone",
            SortKey::ByEmail => "email",
        }
    }

    /// Ascending comparison of two contacts on this field.
    pub fn compare(&self, a: &Contact, b: &Contact) -> Ordering {
        match self {
            SortKey::ById => a.id.cmp(&b.id),
            SortKey::ByName => a.name.cmp(&b.name),
            SortKey::ByPhone => a.phone.cmp(&b.phone),
            SortKey::ByEmail => a.email.cmp(&b.email),
        }
    }
}

impl From<&str> for SortKey {
    fn from(field: &str) -> Self {
        SortKey::parse(field)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

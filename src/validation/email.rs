//! Email validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`, where no part contains whitespace or another `@`.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Conservative shape check for an email address.
///
/// This is not an RFC 5322 validator: it requires exactly one `@`, at least
/// one `.` after it, and no whitespace anywhere.
///
/// # Example
///
/// ```
/// use contact_directory::validate_email;
///
/// assert!(validate_email("user@example.com"));
/// assert!(!validate_email("user@localhost"));
/// ```
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

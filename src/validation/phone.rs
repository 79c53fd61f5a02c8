//! Phone number validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything besides digits, `+`, parentheses, `-` and whitespace.
static DISALLOWED_PHONE_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9+()\-\s]").expect("phone pattern is valid"));

const MIN_DIGITS: usize = 7;
// E.164 maximum
const MAX_DIGITS: usize = 15;

/// Loose sanity check for a phone number.
///
/// Only digits, `+`, `(`, `)`, `-` and whitespace are allowed, and the number
/// must carry between 7 and 15 digits inclusive once formatting is stripped.
///
/// # Example
///
/// ```
/// use contact_directory::validate_phone;
///
/// assert!(validate_phone("+1 (555) 123-4567"));
/// assert!(!validate_phone("555.123.4567"));
/// ```
pub fn validate_phone(phone: &str) -> bool {
    if DISALLOWED_PHONE_CHAR.is_match(phone) {
        return false;
    }
    let digits = digit_count(phone);
    (MIN_DIGITS..=MAX_DIGITS).contains(&digits)
}

fn digit_count(phone: &str) -> usize {
    phone.chars().filter(|c| c.is_ascii_digit()).count()
}

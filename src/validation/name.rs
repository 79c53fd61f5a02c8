//! Name validation.

/// A name is valid when it has at least one non-whitespace character.
pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty()
}

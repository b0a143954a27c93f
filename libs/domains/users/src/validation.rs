//! Pure field validators for user input.
//!
//! Deterministic, synchronous, no side effects. Handlers run these before
//! any store access so invalid input never costs a round trip.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::UserError;

/// Simple email shape check: non-whitespace-non-@ local part, '@', domain
/// with at least one '.'. Syntactic only - no DNS or deliverability checks.
static EMAIL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Fails with [`UserError::EmptyName`] when the trimmed string is empty.
pub fn validate_name(name: &str) -> Result<(), UserError> {
    if name.trim().is_empty() {
        return Err(UserError::EmptyName);
    }
    Ok(())
}

/// Fails with [`UserError::InvalidEmailFormat`] unless the trimmed string
/// matches the email pattern.
pub fn validate_email(email: &str) -> Result<(), UserError> {
    if !EMAIL_FORMAT.is_match(email.trim()) {
        return Err(UserError::InvalidEmailFormat);
    }
    Ok(())
}

//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on:
//! - Reasonable UX limits for titles, descriptions, contact fields
//! - SurrealDB SCHEMALESS tables have no built-in length enforcement

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Request titles
pub const MAX_TITLE_LEN: usize = 200;

/// Long free text: descriptions, delivery details, terms, message bodies
pub const MAX_TEXT_LEN: usize = 2000;

/// Short identifiers: phone, location, timeline, business name, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image references
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (handlers) ───────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate the basic shape of an email address.
///
/// Deliberately loose: one `@` with non-empty parts and a length cap.
/// Deliverability is not our problem.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    if value.len() > MAX_EMAIL_LEN {
        return Err(AppError::Validation(format!(
            "email is too long ({} chars, max {MAX_EMAIL_LEN})",
            value.len()
        )));
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return Err(AppError::Validation("invalid email address".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank_and_oversized() {
        assert!(validate_required_text("chairs", "title", MAX_TITLE_LEN).is_ok());
        assert!(validate_required_text("   ", "title", MAX_TITLE_LEN).is_err());
        let long = "x".repeat(MAX_TITLE_LEN + 1);
        assert!(validate_required_text(&long, "title", MAX_TITLE_LEN).is_err());
    }

    #[test]
    fn optional_text_allows_none() {
        assert!(validate_optional_text(&None, "location", MAX_SHORT_TEXT_LEN).is_ok());
        let long = Some("x".repeat(MAX_SHORT_TEXT_LEN + 1));
        assert!(validate_optional_text(&long, "location", MAX_SHORT_TEXT_LEN).is_err());
    }

    #[test]
    fn email_shape_check() {
        assert!(validate_email("jane@soko.co.ke").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@missing-local.com").is_err());
        assert!(validate_email("trailing@").is_err());
        assert!(validate_email("two@@signs.com").is_err());
    }
}

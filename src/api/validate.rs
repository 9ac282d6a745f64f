// Field-level validation for request bodies. Errors are keyed by field name
// and surface to clients as `field_errors` on a VALIDATION_ERROR response.

use std::collections::HashMap;

pub type FieldErrors = HashMap<String, String>;

pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

pub fn into_result(errors: FieldErrors) -> Result<(), FieldErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn require_non_blank(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), "This field is required".to_string());
    }
}

pub fn require_max_len(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.insert(field.to_string(), format!("Must be at most {} characters", max));
    }
}

/// Loose shape check: one `@`, a non-empty local part, and a dotted domain.
pub fn is_plausible_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !value.chars().any(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

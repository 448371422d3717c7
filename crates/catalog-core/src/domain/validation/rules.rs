//! Reusable field rules.
//!
//! Every rule is a pure predicate returning `Err(ValidationError)` on
//! violation. Validators feed them to [`Notification::check`] so that one
//! failing rule never stops the others.
//!
//! [`Notification::check`]: super::Notification::check

use super::ValidationError;

/// `value` must contain at least one non-whitespace character.
pub fn not_blank(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(format!("'{field}' should not be empty")));
    }
    Ok(())
}

/// Trimmed character count of `value` must lie in `min..=max`.
pub fn length_between(field: &str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let length = value.trim().chars().count();
    if length < min || length > max {
        return Err(ValidationError::new(format!(
            "'{field}' must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

/// An optional field must be present.
pub fn present<T>(field: &str, value: Option<&T>) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(format!("'{field}' should not be null"))),
    }
}

/// Non-blank text whose trimmed length lies in `min..=max`.
///
/// Stops at the first violated rule so a field contributes at most one error.
pub fn required_text(field: &str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    not_blank(field, value)?;
    length_between(field, value, min, max)
}

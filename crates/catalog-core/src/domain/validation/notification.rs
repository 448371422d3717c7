//! The error accumulator used by every validation pass.
//!
//! A [`Notification`] collects independent [`ValidationError`]s in the order
//! the checks ran. It is append-only for the lifetime of one operation and
//! never deduplicates: two rules producing the same message yield two entries.

use std::fmt;

use serde::Serialize;

use crate::domain::error::DomainError;

/// A single violated rule.
///
/// Equality is by message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&str> for ValidationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Ordered accumulator of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    /// Create an empty notification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a notification holding a single error.
    pub fn create(error: impl Into<ValidationError>) -> Self {
        let mut notification = Self::new();
        notification.append(error);
        notification
    }

    /// Append one error at the end.
    pub fn append(&mut self, error: impl Into<ValidationError>) -> &mut Self {
        self.errors.push(error.into());
        self
    }

    /// Merge another notification's errors after this one's, keeping their order.
    pub fn append_all(&mut self, other: Notification) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    /// Record the outcome of a single rule. Returns `true` when the rule passed.
    pub fn check(&mut self, rule: Result<(), ValidationError>) -> bool {
        match rule {
            Ok(()) => true,
            Err(error) => {
                self.errors.push(error);
                false
            }
        }
    }

    /// Run `operation`, capturing any domain failure instead of propagating it.
    ///
    /// Accumulated failures (`DomainError::Notification`) contribute every one
    /// of their errors; any other domain error contributes its display message.
    /// Returns `None` whenever the operation failed.
    pub fn validate<T, F>(&mut self, operation: F) -> Option<T>
    where
        F: FnOnce() -> Result<T, DomainError>,
    {
        match operation() {
            Ok(value) => Some(value),
            Err(DomainError::Notification { notification, .. }) => {
                self.append_all(notification);
                None
            }
            Err(DomainError::Rule(error)) => {
                self.append(error);
                None
            }
            Err(other) => {
                self.append(other.to_string());
                None
            }
        }
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The first error recorded.
    ///
    /// Fails with [`DomainError::EmptyNotification`] when nothing was recorded.
    pub fn first(&self) -> Result<&ValidationError, DomainError> {
        self.errors.first().ok_or(DomainError::EmptyNotification)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Turn the accumulated state into a result.
    ///
    /// `Ok(())` when empty, otherwise a [`DomainError::Notification`] carrying
    /// every error under `message`.
    pub fn into_result(self, message: impl Into<String>) -> Result<(), DomainError> {
        if self.has_error() {
            Err(DomainError::notification(message, self))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl IntoIterator for Notification {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Notification {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl FromIterator<ValidationError> for Notification {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// domain/error.rs - DOMAIN FAILURES
// ============================================================================

use thiserror::Error;

use crate::domain::{
    validation::{Notification, ValidationError},
    value_objects::AggregateKind,
};

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (services re-wrap them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// One or more rules failed. Carries every accumulated error.
    #[error("{message}")]
    Notification {
        message: String,
        notification: Notification,
    },

    /// A single rule failure raised outside an accumulating pass.
    #[error("{0}")]
    Rule(ValidationError),

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("{kind} with ID {id} was not found")]
    NotFound { kind: AggregateKind, id: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("notification has no errors")]
    EmptyNotification,
}

impl DomainError {
    pub fn notification(message: impl Into<String>, notification: Notification) -> Self {
        Self::Notification {
            message: message.into(),
            notification,
        }
    }

    pub fn not_found(kind: AggregateKind, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Every validation error carried by this failure, in order.
    pub fn errors(&self) -> Vec<ValidationError> {
        match self {
            Self::Notification { notification, .. } => notification.errors().to_vec(),
            Self::Rule(error) => vec![error.clone()],
            _ => Vec::new(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Notification { notification, .. } => notification
                .iter()
                .map(|error| format!("• {error}"))
                .collect(),
            Self::Rule(error) => vec![format!("• {error}")],
            Self::NotFound { kind, .. } => vec![
                format!("No {} exists with that ID", kind.to_string().to_lowercase()),
                format!("Try: catalog {} list", kind.command_name()),
            ],
            Self::EmptyNotification => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Notification { .. } | Self::Rule(_) => ErrorCategory::Validation,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::EmptyNotification => ErrorCategory::Internal,
        }
    }
}

impl From<ValidationError> for DomainError {
    fn from(error: ValidationError) -> Self {
        Self::Rule(error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = DomainError::not_found(AggregateKind::CastMember, "abc");
        assert_eq!(err.to_string(), "CastMember with ID abc was not found");
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn notification_suggestions_list_every_error() {
        let mut notification = Notification::create("'name' should not be empty");
        notification.append("'rating' should not be null");
        let err = DomainError::notification("Could not create Aggregate Video", notification);

        assert_eq!(err.to_string(), "Could not create Aggregate Video");
        assert_eq!(err.suggestions().len(), 2);
        assert_eq!(err.errors().len(), 2);
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}

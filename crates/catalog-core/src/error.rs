//! Unified error handling for Catalog Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ValidationError};

/// Root error type for Catalog Core operations.
#[derive(Debug, Error, Clone)]
pub enum CatalogError {
    /// Errors from the domain layer (business rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (gateway and orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A side-effecting phase failed after validation passed.
    ///
    /// `subject` names the aggregate the operation was working on and
    /// `source` keeps the failure that triggered it.
    #[error("{message}")]
    Internal {
        message: String,
        subject: Option<String>,
        #[source]
        source: Option<Box<CatalogError>>,
    },
}

impl CatalogError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            subject: None,
            source: None,
        }
    }

    /// Wrap `cause` as an internal failure about `subject`.
    pub fn internal_with(
        message: impl Into<String>,
        subject: impl Into<String>,
        cause: CatalogError,
    ) -> Self {
        Self::Internal {
            message: message.into(),
            subject: Some(subject.into()),
            source: Some(Box::new(cause)),
        }
    }

    /// Every validation error carried by this failure, in order.
    pub fn errors(&self) -> Vec<ValidationError> {
        match self {
            Self::Domain(e) => e.errors(),
            _ => Vec::new(),
        }
    }

    /// Identifier of the aggregate an internal failure is about.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::Internal { subject, .. } => subject.as_deref(),
            _ => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Try: catalog config list".into(),
            ],
            Self::Internal { source, .. } => {
                let mut suggestions = Vec::new();
                if let Some(cause) = source {
                    suggestions.push(format!("Caused by: {cause}"));
                }
                suggestions.push("Run again with -vv for details".into());
                suggestions
            }
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Application(ApplicationError::StoreLockError) => true,
            Self::Internal {
                source: Some(cause),
                ..
            } => cause.is_retryable(),
            _ => false,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> CatalogResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> CatalogResult<T> {
        self.map_err(|e| CatalogError::internal(format!("{}: {}", msg.into(), e)))
    }
}

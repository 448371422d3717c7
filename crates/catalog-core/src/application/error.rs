//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the driven ports,
//! not business rules. Business rule failures are `DomainError` from
//! `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// An aggregate gateway failed.
    #[error("Gateway operation '{operation}' failed: {reason}")]
    Gateway { operation: String, reason: String },

    /// The media storage failed for a video.
    #[error("Media storage failed for video {video_id}: {reason}")]
    MediaStorage { video_id: String, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Catalog store error")]
    StoreLockError,

    /// A stored record could not be read or written.
    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}

impl ApplicationError {
    pub fn gateway(operation: impl Into<String>, reason: impl ToString) -> Self {
        Self::Gateway {
            operation: operation.into(),
            reason: reason.to_string(),
        }
    }

    pub fn media_storage(video_id: impl ToString, reason: impl ToString) -> Self {
        Self::MediaStorage {
            video_id: video_id.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Gateway { operation, .. } => vec![
                format!("The catalog store rejected '{operation}'"),
                "Check that the data directory exists and is writable".into(),
            ],
            Self::MediaStorage { video_id, .. } => vec![
                format!("Could not store media for video {video_id}"),
                "Check that the media directory exists and is writable".into(),
            ],
            Self::StoreLockError => vec![
                "The catalog store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::Serialization { .. } => vec![
                "A data file is corrupt or was written by another version".into(),
                "Try: catalog config get storage.data_dir to locate it".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Gateway { .. } | Self::MediaStorage { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
            Self::Serialization { .. } => ErrorCategory::Configuration,
        }
    }
}

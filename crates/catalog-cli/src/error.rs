//! Errors reported by the `catalog` binary.
//!
//! Use case failures arrive as [`CatalogError`] and keep its category, so a
//! rejected aggregate exits with 2, an unknown id with 3 and a broken store
//! with 1. A rejected aggregate is printed with every accumulated message,
//! one per line.

use std::{error::Error as _, io, path::PathBuf};

use owo_colors::OwoColorize;
use thiserror::Error;

pub use catalog_core::error::ErrorCategory;
use catalog_core::error::CatalogError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments clap accepted but the command cannot act on.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    Core(#[from] CatalogError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    /// A `--video`, `--banner`, ... path that is not a readable file.
    #[error("Media file not found: {}", path.display())]
    MediaFileNotFound { path: PathBuf },
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Lines printed under the report heading.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Print the resolved values: catalog config list".into(),
                "Create a default file: catalog init".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check permissions and free space of the data and media directories".into(),
            ],
            Self::Render(_) => vec!["Try again with --output-format plain".into()],
            Self::MediaFileNotFound { path } => vec![
                format!("No file exists at '{}'", path.display()),
                "Media options take a path to a local file".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::MediaFileNotFound { .. } => ErrorCategory::Validation,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => core.category(),
            Self::IoError { .. } | Self::Render(_) => ErrorCategory::Internal,
        }
    }

    /// 2 rejected input, 3 unknown id, 4 configuration, 1 anything else.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Validation => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        self.report(verbose).render(true)
    }

    pub fn format_plain(&self, verbose: bool) -> String {
        self.report(verbose).render(false)
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::NotFound => {
                tracing::warn!(category = ?self.category(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(category = ?self.category(), "{self}")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {source}");
        }
    }

    fn report(&self, verbose: bool) -> Report {
        let mut causes = Vec::new();
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                causes.push(err.to_string());
                source = err.source();
            }
        }

        let heading = match self {
            Self::Core(core) if core.category() == ErrorCategory::Validation => {
                "Validation errors:"
            }
            _ => "Suggestions:",
        };

        Report {
            headline: self.to_string(),
            causes,
            heading,
            lines: self.suggestions(),
            hint: !verbose,
        }
    }
}

/// What an error prints, before styling.
struct Report {
    headline: String,
    causes: Vec<String>,
    heading: &'static str,
    lines: Vec<String>,
    hint: bool,
}

impl Report {
    fn render(&self, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("Error:", |s| s.red().bold().to_string()),
            paint(&self.headline, |s| s.red().to_string())
        );
        for cause in &self.causes {
            out.push_str(&format!(
                "  Caused by: {}\n",
                paint(cause, |s| s.dimmed().to_string())
            ));
        }
        if !self.lines.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint(self.heading, |s| s.yellow().bold().to_string())
            ));
            for line in &self.lines {
                out.push_str(&format!("  {line}\n"));
            }
        }
        if self.hint {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", |s| s.dimmed().to_string())
            ));
        }
        out
    }
}

/// Attach a message to an I/O failure at the call site.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for io::Result<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use catalog_core::{
        application::ApplicationError,
        domain::{AggregateKind, DomainError, Notification},
    };

    fn validation_error() -> CliError {
        let mut notification = Notification::create("'name' should not be empty");
        notification.append("'type' should not be null");
        CliError::Core(
            DomainError::notification("Failed to create a Aggregate CastMember", notification)
                .into(),
        )
    }

    fn compensated_create() -> CliError {
        CliError::Core(CatalogError::internal_with(
            "An error on create video was observed [videoId: v1]",
            "v1",
            ApplicationError::gateway("create Video", "disk full").into(),
        ))
    }

    #[test]
    fn validation_lists_every_error() {
        let text = validation_error().format_plain(false);

        assert!(text.contains("Failed to create a Aggregate CastMember"));
        assert!(text.contains("Validation errors:"));
        assert!(text.contains("• 'name' should not be empty"));
        assert!(text.contains("• 'type' should not be null"));
    }

    #[test]
    fn exit_code_validation() {
        assert_eq!(validation_error().exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        let err = CliError::Core(DomainError::not_found(AggregateKind::Genre, "g1").into());
        assert_eq!(err.exit_code(), 3);
        assert!(err.suggestions().iter().any(|s| s.contains("catalog genre list")));
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(compensated_create().exit_code(), 1);
        assert_eq!(CliError::from(io::Error::other("e")).exit_code(), 1);
    }

    #[test]
    fn verbose_plain_format_shows_the_cause_chain() {
        let s = compensated_create().format_plain(true);

        assert!(s.contains(
            "Caused by: Application error: Gateway operation 'create Video' failed: disk full"
        ));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn plain_format_has_no_ansi_codes() {
        let s = compensated_create().format_plain(false);
        assert!(!s.contains('\u{1b}'));
        assert!(s.contains("Use -v / --verbose"));
    }

    #[test]
    fn colored_format_keeps_the_message() {
        let s = validation_error().format_colored(false);
        assert!(s.contains("• 'type' should not be null"));
    }

    #[test]
    fn rejected_media_path_is_a_user_error() {
        let err = CliError::MediaFileNotFound {
            path: PathBuf::from("/tmp/missing.mp4"),
        };
        assert!(err.format_plain(false).contains("Suggestions:"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn into_cli_io_error() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli = result.with_cli_context(|| "reading media");
        assert!(matches!(cli, Err(CliError::IoError { message, .. }) if message == "reading media"));
    }
}

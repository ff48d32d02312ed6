//! Unified error types for oas-explorer.
//!
//! The tool performs no I/O beyond loading one report document, so the
//! taxonomy is narrow: load/parse failures, report generation
//! failures, and validation of inputs. Correlation misses and
//! fingerprint collisions are not errors at all; they are normal
//! outcomes resolved locally by their consumers.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for oas-explorer operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExplorerError {
    /// Errors while loading a report document
    #[error("Failed to load report: {context}")]
    Load {
        context: String,
        #[source]
        source: LoadErrorKind,
    },

    /// Errors during report output generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific load error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoadErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Report contains no revisions")]
    EmptyReport,

    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

/// Specific output generation error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

/// Convenient Result type for oas-explorer operations
pub type Result<T> = std::result::Result<T, ExplorerError>;

impl ExplorerError {
    /// Create a load error with context
    pub fn load(context: impl Into<String>, source: LoadErrorKind) -> Self {
        Self::Load {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<std::io::Error> for ExplorerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ExplorerError {
    fn from(err: serde_json::Error) -> Self {
        Self::load(
            "JSON deserialization",
            LoadErrorKind::InvalidJson(err.to_string()),
        )
    }
}

/// Extension trait for adding context to errors.
pub trait ErrorContext<T> {
    /// Add context to an error, chained in front of existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<ExplorerError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context(e.into(), &ctx)
        })
    }
}

fn add_context(err: ExplorerError, new_ctx: &str) -> ExplorerError {
    match err {
        ExplorerError::Load { context, source } => ExplorerError::Load {
            context: chain(new_ctx, &context),
            source,
        },
        ExplorerError::Report { context, source } => ExplorerError::Report {
            context: chain(new_ctx, &context),
            source,
        },
        ExplorerError::Io {
            path,
            message,
            source,
        } => ExplorerError::Io {
            path,
            message: chain(new_ctx, &message),
            source,
        },
        ExplorerError::Validation(msg) => ExplorerError::Validation(chain(new_ctx, &msg)),
    }
}

fn chain(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExplorerError::load("at report.json", LoadErrorKind::EmptyReport);
        assert!(err.to_string().contains("Failed to load report"));

        let err = ExplorerError::validation("bad input");
        assert!(err.to_string().contains("bad input"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ExplorerError::io("/tmp/report.json", io_err);
        assert!(err.to_string().contains("/tmp/report.json"));
    }

    #[test]
    fn test_context_chaining() {
        let initial: Result<()> = Err(ExplorerError::load(
            "inner",
            LoadErrorKind::InvalidJson("oops".into()),
        ));
        let wrapped = initial.context("outer");
        match wrapped {
            Err(ExplorerError::Load { context, .. }) => {
                assert_eq!(context, "outer: inner");
            }
            _ => panic!("expected Load error"),
        }
    }

    #[test]
    fn test_with_context_lazy() {
        let ok: Result<i32> = Ok(1);
        let mut called = false;
        let _ = ok.with_context(|| {
            called = true;
            "never"
        });
        assert!(!called);
    }
}

// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LootSummaryError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LootSummaryError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, LootSummaryError>;

/// Domain-layer specific errors.
///
/// These are hard validation failures: the offending call is aborted with no
/// state mutation. Unknown option names passed to `set` are deliberately NOT
/// an error (forward compatibility with older saved settings); only `get`
/// rejects them.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid entry key: {reason}")]
    InvalidKey { reason: String },

    #[error("Invalid quantity {value} for '{key}': {reason}")]
    InvalidQuantity {
        key: String,
        value: u64,
        reason: String,
    },

    #[error("Unknown option '{name}'")]
    UnknownOption { name: String },

    #[error("Invalid value for option '{name}': {details}")]
    InvalidOptionValue { name: String, details: String },

    #[error("Malformed item link '{link}'")]
    MalformedLink { link: String },

    #[error("Unknown quality tier '{value}'")]
    UnknownQuality { value: String },

    #[error("Unknown currency '{value}'")]
    UnknownCurrency { value: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors raised by the summary pipeline.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Emit was requested but the pipeline produced zero lines. Raised
    /// instead of silently succeeding so misuse is visible to the caller.
    #[error("Summary is empty: nothing to print")]
    EmptySummary,

    /// An entry registered in insertion order lost its quantities between
    /// accumulation and emit. Interleaved add/print sequences are the only
    /// known cause; treated as unrecoverable.
    #[error("Entry '{key}' has no quantities while present in key order")]
    MissingQuantities { key: String },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read catalog '{path}': {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} input: {details}")]
    Serialization { format: String, details: String },

    #[error("Chat output failed: {message}")]
    SinkWrite { message: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::SinkWrite {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for LootSummaryError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LootSummaryError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LootSummaryError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LootSummaryError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LootSummaryError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_wraps_domain_error() {
        let inner: Result<()> = Err(DomainError::InvalidKey {
            reason: "empty".into(),
        }
        .into());
        let err = inner.context("while adding loot").unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.starts_with("while adding loot"));
        assert!(rendered.contains("Invalid entry key"));
    }

    #[test]
    fn with_context_is_lazy() {
        let ok: std::result::Result<u8, DomainError> = Ok(7);
        let value = ok.with_context(|| unreachable!("must not be called")).unwrap();
        assert_eq!(value, 7);
    }
}

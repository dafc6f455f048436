// errors.rs

use crate::domain::ListingSummary;
use thiserror::Error;

/// Whole-document failures. Raised before any fragment is parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Invalid XML character U+{code:04X} at line {line}, column {column}")]
    InvalidCharacter { code: u32, line: usize, column: usize },

    #[error("Unrecognized root element '{0}'")]
    UnrecognizedRoot(String),

    #[error("The document has no root element")]
    MissingRoot,

    #[error("Malformed XML at byte {position}: {message}")]
    Malformed { position: usize, message: String },

    #[error("Failed to build parser worker pool: {0}")]
    WorkerPool(String),
}

/// A value inside one listing fragment could not be coerced. Always caught
/// per fragment and reported as data, never raised from `parse`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Field '{field}' has an invalid decimal value '{value}'")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("Field '{field}' has an invalid number '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Field '{field}' has an invalid flag value '{value}'")]
    InvalidFlag { field: &'static str, value: String },

    #[error("Field '{field}' has an unparsable date/time '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("Inspection '{0}' does not match 'DD-MON-YYYY hh:mm[am|pm] to hh:mm[am|pm]'")]
    InvalidInspection(String),

    #[error("Media id '{0}' is not a single letter")]
    InvalidMediaId(String),

    #[error("Unrecognized country '{0}'")]
    UnrecognizedCountry(String),

    #[error("Unrecognized listing status '{0}'")]
    UnrecognizedStatus(String),

    #[error("Required field '{0}' is missing")]
    Missing(&'static str),

    #[error("Malformed listing: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionReason {
    /// Incoming and existing are different concrete listing types.
    KindMismatch,
    /// The incoming status cannot be held by this listing type.
    StatusNotAllowed,
    /// No merge rule exists for the incoming status.
    UnhandledStatus,
}

/// A merge was refused. Always returned to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Cannot merge incoming {incoming} into existing {existing}: {reason:?}")]
pub struct TransitionError {
    pub existing: ListingSummary,
    pub incoming: ListingSummary,
    pub reason: TransitionReason,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {name} has an invalid value '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// Errors surfaced by the command-line glue.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Usage: listing_feed <feed.xml>")]
    Usage,

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

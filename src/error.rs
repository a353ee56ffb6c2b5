use std::path::PathBuf;

use thiserror::Error;

/// Faults that abort a whole lint run.
///
/// Per-file parse failures and warnings are not errors at this level; they are
/// reported through [`crate::validator::FileOutcome`] and never stop the batch.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("IO error: {path} - {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    #[error("File discovery failed: {path} - {reason}")]
    Discovery { path: PathBuf, reason: String },

    #[error("Schema parser failed unexpectedly: {path} - {details}")]
    Collaborator { path: PathBuf, details: String },

    #[error("Concurrent operation error: {details}")]
    Concurrency { details: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl LintError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LintError::Io {
            path: path.into(),
            source,
        }
    }
}

/// The recognised parse-failure signal of a schema parser: the document could
/// not be turned into a schema at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ParserError {
    pub message: String,
}

impl ParserError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Everything a [`crate::xdatenfelder::SchemaParser`] may fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error(transparent)]
    Parse(#[from] ParserError),

    /// Anything outside the parse-error contract. Not normalised per file.
    #[error("internal parser fault: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, LintError>;

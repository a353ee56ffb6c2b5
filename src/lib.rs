//! # xdlint Library
//!
//! Lints XDatenfelder v2.0 documents: discovers `.xml` files, validates them
//! concurrently and reports findings with a pass/fail verdict.

pub mod cli;
pub mod error;
pub mod file_discovery;
pub mod linter;
pub mod output;
pub mod validator;
pub mod warning;
pub mod xdatenfelder;

pub use cli::{Cli, Config};
pub use error::{CollaboratorError, LintError, ParserError};
pub use file_discovery::FileDiscovery;
pub use linter::{Linter, RunTally};
pub use output::Output;
pub use validator::{FileOutcome, FileValidationResult, ValidationConfig, ValidationEngine};
pub use warning::{Warning, WarningBuckets, WarningCollection};
pub use xdatenfelder::{
    InputConstraints, SchemaMessage, SchemaParser, SchemaSummary, XDatenfelderParser,
};

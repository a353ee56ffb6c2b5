//! Per-file validation and concurrent fan-out over a batch of files.
//!
//! Each file is read asynchronously and handed to the [`SchemaParser`] on the
//! blocking pool. Files are independent: every file gets its own tokio task,
//! and results are joined back in the order the paths were supplied,
//! regardless of completion order.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::try_join_all;
use tokio::fs;
use tokio::sync::Semaphore;

use crate::error::{CollaboratorError, LintError, Result};
use crate::file_discovery::relative_path;
use crate::output::Output;
use crate::xdatenfelder::SchemaParser;

/// Validation configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Upper bound on simultaneously running validations; `None` launches
    /// every file at once.
    pub max_concurrent_validations: Option<usize>,
}

/// Outcome of validating one file. A file either fails to parse or yields
/// zero or more rendered warning lines, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Error { message: String },
    Warnings { messages: Vec<String> },
}

impl FileOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, FileOutcome::Error { .. })
    }

    /// Clean parse with no findings.
    pub fn is_clean(&self) -> bool {
        matches!(self, FileOutcome::Warnings { messages } if messages.is_empty())
    }
}

/// Result of validating a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileValidationResult {
    /// Absolute path of the validated file
    pub path: PathBuf,
    /// Path as shown in diagnostics, relative to the working directory
    pub display_path: PathBuf,
    pub outcome: FileOutcome,
}

#[derive(Clone)]
pub struct ValidationEngine {
    parser: Arc<dyn SchemaParser>,
    output: Output,
    cwd: PathBuf,
    config: ValidationConfig,
}

impl ValidationEngine {
    /// `cwd` is the directory diagnostics paths are made relative to.
    pub fn new(
        parser: Arc<dyn SchemaParser>,
        output: Output,
        cwd: PathBuf,
        config: ValidationConfig,
    ) -> Self {
        Self {
            parser,
            output,
            cwd,
            config,
        }
    }

    /// Validate all files concurrently. Results are in input order.
    ///
    /// Any fault outside the parse-error contract (unreadable file, parser
    /// fault, panicked task) fails the whole batch.
    pub async fn validate_files(&self, files: Vec<PathBuf>) -> Result<Vec<FileValidationResult>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let semaphore = self
            .config
            .max_concurrent_validations
            .map(|limit| Arc::new(Semaphore::new(limit.min(Semaphore::MAX_PERMITS))));

        let validation_tasks: Vec<_> = files
            .into_iter()
            .map(|file_path| {
                let engine = self.clone();
                let semaphore = semaphore.clone();

                tokio::spawn(async move {
                    let _permit = match semaphore {
                        Some(semaphore) => Some(semaphore.acquire_owned().await.map_err(|_| {
                            LintError::Concurrency {
                                details: "validation semaphore closed".to_string(),
                            }
                        })?),
                        None => None,
                    };

                    engine.validate_file(&file_path).await
                })
            })
            .collect();

        let task_results =
            try_join_all(validation_tasks)
                .await
                .map_err(|e| LintError::Concurrency {
                    details: format!("Task join error: {}", e),
                })?;

        task_results.into_iter().collect()
    }

    /// Read, parse and render one file.
    ///
    /// Content is decoded as UTF-8 lossily; invalid sequences become U+FFFD
    /// and are left for the parser to judge.
    pub async fn validate_file(&self, file_path: &Path) -> Result<FileValidationResult> {
        let display_path = relative_path(file_path, &self.cwd);
        tracing::debug!(path = %display_path.display(), "validating");

        let bytes = fs::read(file_path)
            .await
            .map_err(|e| LintError::io(file_path, e))?;
        let text = String::from_utf8_lossy(&bytes).into_owned();

        let parser = Arc::clone(&self.parser);
        let parsed = tokio::task::spawn_blocking(move || parser.parse(&text))
            .await
            .map_err(|e| LintError::Concurrency {
                details: format!("Join error: {}", e),
            })?;

        let outcome = match parsed {
            Ok(message) => {
                tracing::debug!(
                    path = %display_path.display(),
                    schema = %message.schema.identifier,
                    data_fields = message.schema.data_fields,
                    data_groups = message.schema.data_groups,
                    rules = message.schema.rules,
                    warnings = message.warnings.len(),
                    "parsed"
                );
                let messages = message
                    .warnings
                    .flatten()
                    .into_iter()
                    .map(|warning| self.output.format_warning(&display_path, warning))
                    .collect();
                FileOutcome::Warnings { messages }
            }
            Err(CollaboratorError::Parse(error)) => {
                tracing::debug!(path = %display_path.display(), %error, "parse failed");
                FileOutcome::Error {
                    message: self.output.format_error(&display_path, &error.message),
                }
            }
            Err(CollaboratorError::Internal(details)) => {
                return Err(LintError::Collaborator {
                    path: file_path.to_path_buf(),
                    details,
                });
            }
        };

        Ok(FileValidationResult {
            path: file_path.to_path_buf(),
            display_path,
            outcome,
        })
    }
}

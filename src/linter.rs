//! Batch orchestration: discover, validate concurrently, report, tally.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::Config;
use crate::error::{LintError, Result};
use crate::file_discovery::FileDiscovery;
use crate::output::Output;
use crate::validator::{FileOutcome, FileValidationResult, ValidationConfig, ValidationEngine};
use crate::xdatenfelder::SchemaParser;

/// Counters for one lint run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    pub total_errors: usize,
    pub total_warnings: usize,
}

impl RunTally {
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Error { .. } => self.total_errors += 1,
            FileOutcome::Warnings { messages } => self.total_warnings += messages.len(),
        }
    }

    /// Errors always fail a run; warnings only in strict mode.
    pub fn is_failure(&self, strict: bool) -> bool {
        self.total_errors > 0 || (strict && self.total_warnings > 0)
    }
}

pub struct Linter {
    root: PathBuf,
    cwd: PathBuf,
    discovery: FileDiscovery,
    engine: ValidationEngine,
    output: Output,
}

impl Linter {
    pub fn new(config: &Config, parser: Arc<dyn SchemaParser>, cwd: PathBuf) -> Self {
        let output = Output::new(config.color);
        let engine = ValidationEngine::new(
            parser,
            output,
            cwd.clone(),
            ValidationConfig {
                max_concurrent_validations: config.jobs,
            },
        );

        Self {
            root: config.path.clone(),
            cwd,
            discovery: FileDiscovery::new(),
            engine,
            output,
        }
    }

    /// Run the whole batch. Per-file diagnostics go to `diagnostics`, the
    /// summary line to `summary`.
    ///
    /// Nothing is printed until every file has been validated; a fault that
    /// aborts the batch therefore produces no partial output.
    pub async fn run<D: Write, S: Write>(
        &self,
        diagnostics: &mut D,
        summary: &mut S,
    ) -> Result<RunTally> {
        let files = self.discovery.discover_files(&self.root, &self.cwd).await?;
        tracing::debug!(root = %self.root.display(), files = files.len(), "discovered files");

        let results = self.engine.validate_files(files).await?;

        let tally = report(&results, diagnostics)?;

        writeln!(
            summary,
            "{}",
            self.output
                .format_summary(tally.total_warnings, tally.total_errors)
        )
        .map_err(LintError::Output)?;

        Ok(tally)
    }
}

/// Print every result in order and count them.
fn report<D: Write>(results: &[FileValidationResult], diagnostics: &mut D) -> Result<RunTally> {
    let mut tally = RunTally::default();

    for result in results {
        match &result.outcome {
            FileOutcome::Error { message } => {
                writeln!(diagnostics, "{}", message).map_err(LintError::Output)?;
            }
            FileOutcome::Warnings { messages } => {
                for message in messages {
                    writeln!(diagnostics, "{}", message).map_err(LintError::Output)?;
                }
            }
        }
        tally.record(&result.outcome);
    }

    Ok(tally)
}

use clap::Parser;
use std::path::PathBuf;
use tokio::sync::Semaphore;

use crate::error::{LintError, Result};

/// Runtime configuration derived from the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub strict: bool,
    pub jobs: Option<usize>,
    pub color: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            path: cli.path.clone(),
            strict: cli.strict,
            jobs: cli.jobs,
            color: !cli.no_color && atty::is(atty::Stream::Stderr),
            verbose: cli.verbose,
        }
    }
}

/// A linter for XDatenfelder v2.0.
#[derive(Parser, Debug, Clone)]
#[command(name = "xdlint")]
#[command(about = "A linter for XDatenfelder v2.0.")]
#[command(version)]
pub struct Cli {
    /// Path to a folder or a XDatenfelder .xml file
    pub path: PathBuf,

    /// Fail if there are warnings.
    #[arg(short = 's', long = "strict")]
    pub strict: bool,

    /// Maximum number of files validated at the same time (default: no limit)
    #[arg(short = 'j', long = "jobs")]
    pub jobs: Option<usize>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(jobs) = self.jobs
            && jobs == 0
        {
            return Err(LintError::Config(
                "Number of jobs must be greater than 0".to_string(),
            ));
        }
        if let Some(jobs) = self.jobs
            && jobs > Semaphore::MAX_PERMITS
        {
            return Err(LintError::Config(format!(
                "Number of jobs must be at most {}",
                Semaphore::MAX_PERMITS
            )));
        }
        Ok(())
    }
}

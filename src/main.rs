use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use xdlint::{Cli, Config, Linter, XDatenfelderParser};

/// Filter used when `RUST_LOG` is unset. Debug output is limited to this
/// crate so dependency internals stay quiet.
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "xdlint=debug" } else { "warn" }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_args();
    cli.validate()?;

    let config = Config::from_cli(&cli);
    init_tracing(config.verbose);

    let cwd = std::env::current_dir()?;
    let linter = Linter::new(&config, Arc::new(XDatenfelderParser::new()), cwd);

    let tally = linter
        .run(&mut std::io::stderr(), &mut std::io::stdout())
        .await?;

    if tally.is_failure(config.strict) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(true), "xdlint=debug");
        assert_eq!(default_filter(false), "warn");
        assert!(default_filter(true).parse::<EnvFilter>().is_ok());
    }
}

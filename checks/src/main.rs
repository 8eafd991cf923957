mod cli;
mod outcome;
mod registry;
mod report;
mod run;
mod suite;

use anyhow::Result;
use clap::{Parser, Subcommand};
use polity::logging;

#[derive(Parser)]
#[command(name = "checks", version, about = "Check harness for the polity engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every registered check id.
    List,
    /// Run checks and report pass/fail per check.
    Run {
        /// Only run checks whose id contains this text.
        #[arg(long)]
        filter: Option<String>,
        /// Emit outcomes as JSON.
        #[arg(long)]
        json: bool,
        /// Exit non-zero when any check fails.
        #[arg(long)]
        deny_failures: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(cli::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let registry = suite::democracy()?;
    match cli.command {
        Command::List => {
            cli::list_checks(&registry)?;
            Ok(0)
        }
        Command::Run {
            filter,
            json,
            deny_failures,
        } => {
            let failed = cli::run_and_report(&registry, filter.as_deref(), json)?;
            Ok(cli::exit_code(failed, deny_failures))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_defaults() {
        let cli = Cli::parse_from(["checks", "run"]);
        assert!(matches!(
            cli.command,
            Command::Run {
                filter: None,
                json: false,
                deny_failures: false,
            }
        ));
    }

    #[test]
    fn parse_run_with_filter() {
        let cli = Cli::parse_from(["checks", "run", "--filter", "Zero", "--deny-failures"]);
        match cli.command {
            Command::Run {
                filter,
                deny_failures,
                ..
            } => {
                assert_eq!(filter.as_deref(), Some("Zero"));
                assert!(deny_failures);
            }
            Command::List => panic!("expected run"),
        }
    }
}

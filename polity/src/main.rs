//! Polity scenario inspector.
//!
//! Loads a scenario file (`polity` attributes plus an `actions` plan), optionally
//! replays the plan, and prints the resulting state.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use polity::core::polity::Polity;
use polity::exit_codes;
use polity::io::scenario::ScenarioFile;
use polity::{logging, render};
use tracing::debug;

#[derive(Parser)]
#[command(name = "polity", version, about = "Action-driven polity state engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the polity described by a scenario file.
    Show {
        /// Path to the scenario TOML.
        scenario: PathBuf,
        /// Replay the action plan before printing.
        #[arg(short, long)]
        execute: bool,
        /// Emit a JSON snapshot instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List the planned actions in execution order.
    Plan {
        /// Path to the scenario TOML.
        scenario: PathBuf,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Show {
            scenario,
            execute,
            json,
        } => cmd_show(&scenario, execute, json),
        Command::Plan { scenario } => cmd_plan(&scenario),
    }
}

fn load_polity(path: &Path) -> Result<Polity> {
    let polity = ScenarioFile::load(path)?.into_polity();
    debug!(polity = polity.name(), actions = polity.actions().len(), "scenario loaded");
    Ok(polity)
}

fn cmd_show(path: &Path, execute: bool, json: bool) -> Result<()> {
    let mut polity = load_polity(path)?;
    if execute {
        polity.execute_actions();
    }
    if json {
        let payload =
            serde_json::to_string_pretty(&polity.snapshot()).context("serialize snapshot")?;
        println!("{payload}");
    } else {
        print!("{}", render::display(&polity));
        println!("Voters Per Party: {:.2}", polity.voters_per_party());
    }
    Ok(())
}

fn cmd_plan(path: &Path) -> Result<()> {
    let polity = load_polity(path)?;
    print!("{}", render::plan(&polity));
    Ok(())
}

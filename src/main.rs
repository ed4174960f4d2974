//! Dry-run inspector for fixture files
//!
//! Parses a fixture file and prints every command it would dispatch, without
//! connecting to a backend. Useful for checking what a fixture will do to a
//! store before pointing a test at it.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use kv_fixtures::common::{logging, paths};
use kv_fixtures::{replay_path, CommandExecutor, Result};

#[derive(Parser)]
#[command(name = "kv-fixtures", about = "Replay scripted data-store command files")]
#[command(version, long_about = None)]
struct Cli {
    /// Fixture file name, resolved under <cwd>/tests/files/
    file: String,

    /// Treat FILE as an explicit path instead of a tests/files name
    #[arg(long)]
    path: bool,

    /// Only print the summary line
    #[arg(short, long)]
    quiet: bool,
}

/// Prints each dispatch instead of executing it
struct DryRun {
    quiet: bool,
    dispatched: usize,
}

impl CommandExecutor for DryRun {
    fn execute(&mut self, command: &str, args: &[String]) -> Result<()> {
        if !self.quiet {
            println!("  {} {} {}", "✓".green(), command, args.join(" ").dimmed());
        }
        self.dispatched += 1;
        Ok(())
    }
}

fn main() {
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let path = if cli.path {
        PathBuf::from(&cli.file)
    } else {
        paths::fixture_path(&cli.file)?
    };

    let mut client = DryRun {
        quiet: cli.quiet,
        dispatched: 0,
    };
    replay_path(&path, &mut client)?;

    println!(
        "{} {} command(s) from {}",
        "Replayed".green().bold(),
        client.dispatched,
        path.display()
    );

    Ok(())
}

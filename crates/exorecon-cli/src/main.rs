//! exorecon CLI
//!
//! Reconcile source catalogs against the reference catalog and review the
//! proposed changes.

use clap::{Parser, Subcommand};
use exorecon_core::logging_facility::{init, Profile};
use std::path::PathBuf;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "exorecon")]
#[command(about = "exorecon - exoplanet catalog reconciliation", long_about = None)]
struct Cli {
    /// Config file (default: ./exorecon.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database path, overriding the config file
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Log profile, overriding the config file
    #[arg(long, global = true)]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare source catalogs against the reference and replace the pending list
    Update(commands::update::UpdateArgs),
    /// Show the last update time and the number of pending changes
    Status,
    /// Show pending changes
    Show(commands::show::ShowArgs),
    /// Accept changes and record them in the ledger
    Accept(commands::review::ReviewArgs),
    /// Deny changes
    Deny(commands::review::ReviewArgs),
    /// Postpone changes until the next update
    Postpone(commands::review::ReviewArgs),
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = config::resolve(cli.config.as_deref(), cli.db, cli.log_profile)?;
    init(settings.log_profile);

    match cli.command {
        Commands::Update(args) => commands::update::execute(args, &settings),
        Commands::Status => commands::status::execute(&settings),
        Commands::Show(args) => commands::show::execute(args, &settings),
        Commands::Accept(args) => {
            commands::review::execute(commands::review::Action::Accept, args, &settings)
        }
        Commands::Deny(args) => {
            commands::review::execute(commands::review::Action::Deny, args, &settings)
        }
        Commands::Postpone(args) => {
            commands::review::execute(commands::review::Action::Postpone, args, &settings)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

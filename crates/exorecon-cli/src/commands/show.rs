//! Show command
//!
//! Usage: exorecon show (--all | --number <N> | --range <FROM-TO>)

use clap::{ArgGroup, Args};
use exorecon_core::ProposedChange;
use exorecon_engine::RangeSpec;

use crate::commands::open_session;
use crate::config::Settings;

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("selection").required(true).args(["all", "number", "range"])))]
pub struct ShowArgs {
    /// Every pending change
    #[arg(long)]
    pub all: bool,

    /// One change by 1-based position
    #[arg(long)]
    pub number: Option<usize>,

    /// Positions such as 2-5, s-e or e-s (reversed ranges walk backwards)
    #[arg(long)]
    pub range: Option<RangeSpec>,
}

fn print_change(number: usize, change: &ProposedChange) {
    println!("\nShowing number: {}\n", number);
    println!("{}", change);
}

/// Execute show
pub fn execute(args: ShowArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(settings)?;

    if let Some(number) = args.number {
        print_change(number, session.get(number)?);
        return Ok(());
    }

    let spec = match args.range {
        Some(spec) => spec,
        None if session.is_empty() => {
            println!("No pending changes.");
            return Ok(());
        }
        None => RangeSpec::all(),
    };
    let shown = session.range(&spec)?;
    for (number, change) in &shown {
        print_change(*number, change);
    }
    if args.all {
        println!("Number of changes shown: {}", shown.len());
    }
    Ok(())
}

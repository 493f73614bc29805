//! Update command
//!
//! Usage: exorecon update --reference <OEC.json> --source nasa=<FILE> --source eu=<FILE>

use clap::Args;
use exorecon_core::{EmitPolicy, Origin};
use exorecon_engine::{reconcile, run_update, Catalog};
use exorecon_store::SqliteChangeStore;
use std::path::PathBuf;

use crate::config::Settings;

/// `<origin>=<path>`, origin being `nasa` or `eu`
#[derive(Debug, Clone)]
pub struct SourceArg {
    pub origin: Origin,
    pub path: PathBuf,
}

fn parse_source(value: &str) -> Result<SourceArg, String> {
    let (origin, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected <origin>=<path>, got '{}'", value))?;
    Ok(SourceArg {
        origin: origin.parse().map_err(|e| format!("{}", e))?,
        path: PathBuf::from(path),
    })
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Reference catalog (JSON list of stars)
    #[arg(long)]
    pub reference: PathBuf,

    /// Source catalog as <origin>=<path>; repeat per origin
    #[arg(long = "source", value_parser = parse_source, required = true)]
    pub sources: Vec<SourceArg>,

    /// Also propose changes to star fields
    #[arg(long)]
    pub star_modifications: bool,

    /// Also propose planets missing from the reference
    #[arg(long)]
    pub additions: bool,
}

impl UpdateArgs {
    fn policy(&self, configured: EmitPolicy) -> EmitPolicy {
        EmitPolicy {
            star_modifications: configured.star_modifications || self.star_modifications,
            additions: configured.additions || self.additions,
        }
    }
}

/// Execute update
pub fn execute(args: UpdateArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let reference = Catalog::load(&args.reference)?;
    let sources = args
        .sources
        .iter()
        .map(|s| Catalog::load(&s.path).map(|catalog| (s.origin, catalog)))
        .collect::<Result<Vec<_>, _>>()?;

    let report = reconcile(&reference, &sources, &args.policy(settings.emit))?;
    let mut store = SqliteChangeStore::open(&settings.db_path)?;
    let stamped = run_update(&mut store, &report)?;

    for summary in &report.origins {
        println!(
            "{}: {} stars compared, {} not in reference, {} changes",
            summary.origin,
            summary.compared_stars,
            summary.unmatched_stars.len(),
            summary.change_count
        );
    }
    println!(
        "Update {} finished at {}: {} proposed changes pending",
        report.pass_id,
        stamped.format(exorecon_core::change_store::LAST_UPDATE_FORMAT),
        report.change_count()
    );
    Ok(())
}

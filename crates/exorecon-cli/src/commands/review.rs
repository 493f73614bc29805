//! Review commands
//!
//! Usage: exorecon (accept | deny | postpone) (<N> | --all)

use clap::{ArgGroup, Args};
use exorecon_store::SqliteAcceptedLedger;

use crate::commands::open_session;
use crate::config::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Accept,
    Deny,
    Postpone,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).args(["number", "all"])))]
pub struct ReviewArgs {
    /// 1-based position of the change
    pub number: Option<usize>,

    /// Every pending change
    #[arg(long)]
    pub all: bool,
}

/// Execute accept / deny / postpone
pub fn execute(
    action: Action,
    args: ReviewArgs,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(settings)?;

    let outcome = match (action, args.number) {
        (Action::Accept, Some(number)) => {
            let ledger = SqliteAcceptedLedger::open(&settings.db_path)?;
            session
                .accept(number, &ledger)
                .map(|c| format!("Accepted: {}", c.object_name()))
        }
        (Action::Accept, None) => {
            let ledger = SqliteAcceptedLedger::open(&settings.db_path)?;
            session
                .accept_all(&ledger)
                .map(|n| format!("Accepted {} changes", n))
        }
        (Action::Deny, Some(number)) => session
            .deny(number)
            .map(|c| format!("Denied: {}", c.object_name())),
        (Action::Deny, None) => Ok(format!("Denied {} changes", session.deny_all())),
        (Action::Postpone, Some(number)) => session
            .postpone(number)
            .map(|c| format!("Postponed: {}", c.object_name())),
        (Action::Postpone, None) => Ok(format!("Postponed {} changes", session.postpone_all())),
    };

    // Persist whatever was removed before a failure
    session.save()?;
    println!("{}", outcome?);
    Ok(())
}

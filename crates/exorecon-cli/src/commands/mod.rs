//! Subcommand implementations.

pub mod review;
pub mod show;
pub mod status;
pub mod update;

use crate::config::Settings;
use exorecon_engine::ReviewSession;
use exorecon_store::SqliteChangeStore;

/// Open the configured database and load a review session over it
pub(crate) fn open_session(
    settings: &Settings,
) -> Result<ReviewSession<SqliteChangeStore>, Box<dyn std::error::Error>> {
    let store = SqliteChangeStore::open(&settings.db_path)?;
    Ok(ReviewSession::load(store)?)
}

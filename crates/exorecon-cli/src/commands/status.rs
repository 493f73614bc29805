//! Status command
//!
//! Usage: exorecon status

use crate::commands::open_session;
use crate::config::Settings;

/// Execute status
pub fn execute(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(settings)?;
    println!("{}", session.status());
    Ok(())
}

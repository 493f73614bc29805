//! Migration framework
//!
//! - Embedded SQL migrations, applied in order
//! - Idempotent application
//! - SHA-256 checksums verified against already applied migrations

mod checksums;
mod embedded;
mod runner;

pub use checksums::compute_checksum;
pub use embedded::{get_migrations, Migration};
pub use runner::{apply_migrations, verify_migration};

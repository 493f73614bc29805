//! Configuration file loading.
//!
//! Discovers `exorecon.toml` in the working directory. Every key has a
//! default, and command-line flags take precedence over the file.

use anyhow::Context;
use exorecon_core::logging_facility::Profile;
use exorecon_core::EmitPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "exorecon.toml";

/// Default location of the change database.
pub const DEFAULT_DB_PATH: &str = ".exorecon/changes.db";

/// Top-level configuration from exorecon.toml.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExoreconConfig {
    /// SQLite file holding pending and accepted changes.
    pub db_path: PathBuf,

    /// `development` or `production`.
    pub log_profile: Profile,

    /// Optional change families emitted by `update`.
    pub emit: EmitPolicy,
}

impl Default for ExoreconConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_profile: Profile::Development,
            emit: EmitPolicy::default(),
        }
    }
}

/// Settings after merging the config file with command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub log_profile: Profile,
    pub emit: EmitPolicy,
}

/// Look for `exorecon.toml` in `dir`.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path.display());
        Some(config_path)
    } else {
        None
    }
}

/// Load and parse a config file.
pub fn load_config(path: &Path) -> anyhow::Result<ExoreconConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path.display()))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<ExoreconConfig> {
    let config: ExoreconConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load the explicit config file, else the discovered one, else defaults.
///
/// An explicit path that does not exist is an error.
pub fn load_or_default(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<ExoreconConfig> {
    match explicit.map(Path::to_path_buf).or_else(|| discover_config(dir)) {
        Some(path) => load_config(&path),
        None => Ok(ExoreconConfig::default()),
    }
}

/// Merge the config file with command-line overrides.
pub fn resolve(
    config_path: Option<&Path>,
    db: Option<PathBuf>,
    log_profile: Option<Profile>,
) -> anyhow::Result<Settings> {
    let cwd = std::env::current_dir().context("determine working directory")?;
    let config = load_or_default(config_path, &cwd)?;
    Ok(Settings {
        db_path: db.unwrap_or(config.db_path),
        log_profile: log_profile.unwrap_or(config.log_profile),
        emit: config.emit,
    })
}

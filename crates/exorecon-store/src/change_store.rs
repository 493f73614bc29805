//! SQLite-backed pending change list.

#![allow(clippy::result_large_err)]

use chrono::NaiveDateTime;
use exorecon_core::change_store::{ChangeStore, LAST_UPDATE_FORMAT};
use exorecon_core::errors::ExError;
use exorecon_core::{log_op_end, log_op_error, log_op_start, ProposedChange};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::time::Instant;

use crate::db;
use crate::errors::{from_rusqlite, serialization_error, Result};

const LAST_UPDATE_KEY: &str = "last_update";

/// Pending changes stored one row per change, keyed by review position.
///
/// Each row keeps the full change as JSON plus a few denormalized columns for
/// inspection with plain SQL.
pub struct SqliteChangeStore {
    conn: Connection,
}

impl SqliteChangeStore {
    /// Open (and migrate) the database file at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            conn: db::open(path)?,
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: db::open_in_memory()?,
        })
    }

    /// Wrap an already migrated connection
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Number of stored pending changes
    pub fn pending_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM pending_changes", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn read_pending(&self) -> Result<Vec<ProposedChange>> {
        let mut stmt = self
            .conn
            .prepare("SELECT payload_json FROM pending_changes ORDER BY position")
            .map_err(from_rusqlite)?;
        let payloads: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        payloads
            .iter()
            .map(|json| serde_json::from_str(json).map_err(|e| serialization_error("load_pending", e)))
            .collect()
    }

    fn write_pending(&mut self, changes: &[ProposedChange]) -> Result<()> {
        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        tx.execute("DELETE FROM pending_changes", [])
            .map_err(from_rusqlite)?;
        for (position, change) in changes.iter().enumerate() {
            let payload =
                serde_json::to_string(change).map_err(|e| serialization_error("save_pending", e))?;
            tx.execute(
                "INSERT INTO pending_changes (position, object_name, origin, change_kind, payload_json)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    position as i64,
                    change.object_name(),
                    change.origin().code(),
                    change.kind_label(),
                    payload,
                ],
            )
            .map_err(from_rusqlite)?;
        }
        tx.commit().map_err(from_rusqlite)
    }
}

impl ChangeStore for SqliteChangeStore {
    fn load_pending(&self) -> std::result::Result<Vec<ProposedChange>, ExError> {
        let start = Instant::now();
        log_op_start!("load_pending");
        match self.read_pending() {
            Ok(changes) => {
                log_op_end!(
                    "load_pending",
                    duration_ms = start.elapsed().as_millis() as u64,
                    change_count = changes.len()
                );
                Ok(changes)
            }
            Err(err) => {
                log_op_error!(
                    "load_pending",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    fn save_pending(&mut self, changes: &[ProposedChange]) -> std::result::Result<(), ExError> {
        let start = Instant::now();
        log_op_start!("save_pending", change_count = changes.len());
        match self.write_pending(changes) {
            Ok(()) => {
                log_op_end!(
                    "save_pending",
                    duration_ms = start.elapsed().as_millis() as u64,
                    change_count = changes.len()
                );
                Ok(())
            }
            Err(err) => {
                log_op_error!(
                    "save_pending",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    fn last_update(&self) -> std::result::Result<Option<NaiveDateTime>, ExError> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                [LAST_UPDATE_KEY],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?;

        value
            .map(|text| {
                NaiveDateTime::parse_from_str(&text, LAST_UPDATE_FORMAT)
                    .map_err(|e| serialization_error("last_update", e))
            })
            .transpose()
    }

    fn set_last_update(&mut self, at: NaiveDateTime) -> std::result::Result<(), ExError> {
        self.conn
            .execute(
                "INSERT INTO settings (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                rusqlite::params![LAST_UPDATE_KEY, at.format(LAST_UPDATE_FORMAT).to_string()],
            )
            .map_err(from_rusqlite)?;
        Ok(())
    }
}

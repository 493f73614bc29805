//! Ledger of accepted changes.
//!
//! Recording an accepted change is the write-back this crate can perform on
//! its own; editing the reference catalog itself is left to whoever consumes
//! the ledger.

#![allow(clippy::result_large_err)]

use chrono::Utc;
use exorecon_core::change_store::LAST_UPDATE_FORMAT;
use exorecon_core::errors::ExError;
use exorecon_core::{Addition, Modification, ProposedChange, WriteBack};
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;

use crate::db;
use crate::errors::{from_rusqlite, serialization_error, Result};

/// One row of `accepted_changes`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedRecord {
    pub accepted_at: String,
    pub change_kind: String,
    pub object_name: String,
    pub system_name: Option<String>,
    pub field: Option<String>,
    pub value_in_origin: Option<String>,
    pub origin: String,
}

/// `WriteBack` that appends every accepted change to `accepted_changes`
pub struct SqliteAcceptedLedger {
    conn: Connection,
}

impl SqliteAcceptedLedger {
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

    /// Accepted changes, oldest first
    pub fn accepted(&self) -> Result<Vec<AcceptedRecord>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT accepted_at, change_kind, object_name, system_name, field, value_in_origin, origin
                 FROM accepted_changes ORDER BY id",
            )
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(AcceptedRecord {
                    accepted_at: row.get(0)?,
                    change_kind: row.get(1)?,
                    object_name: row.get(2)?,
                    system_name: row.get(3)?,
                    field: row.get(4)?,
                    value_in_origin: row.get(5)?,
                    origin: row.get(6)?,
                })
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }

    fn record(&self, change: &ProposedChange) -> Result<()> {
        let payload =
            serde_json::to_string(change).map_err(|e| serialization_error("record_accepted", e))?;
        let (field, value) = match change.as_modification() {
            Some(m) => (
                Some(m.field_modified().to_string()),
                Some(m.value_in_origin().to_string()),
            ),
            None => (None, None),
        };

        self.conn
            .execute(
                "INSERT INTO accepted_changes
                    (accepted_at, change_kind, object_name, system_name, field, value_in_origin, origin, payload_json)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                rusqlite::params![
                    Utc::now().naive_utc().format(LAST_UPDATE_FORMAT).to_string(),
                    change.kind_label(),
                    change.object_name(),
                    change.system_name(),
                    field,
                    value,
                    change.origin().code(),
                    payload,
                ],
            )
            .map_err(from_rusqlite)?;

        tracing::info!(
            op = "record_accepted",
            change_kind = change.kind_label(),
            object = change.object_name(),
            "accepted change recorded"
        );
        Ok(())
    }
}

impl WriteBack for SqliteAcceptedLedger {
    fn apply_modification(&self, change: &Modification) -> std::result::Result<(), ExError> {
        self.record(&ProposedChange::Modification(change.clone()))
    }

    fn apply_addition(&self, change: &Addition) -> std::result::Result<(), ExError> {
        self.record(&ProposedChange::Addition(change.clone()))
    }
}

//! Pending-change persistence port.

use chrono::NaiveDateTime;

use crate::change::ProposedChange;
use crate::errors::{ExError, ExErrorKind};

/// Text format of the last-update timestamp
pub const LAST_UPDATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Durable home of the pending change list and the last-update timestamp.
///
/// `save_pending` replaces the whole list; `load_pending` returns it in the
/// saved order.
#[allow(clippy::result_large_err)]
pub trait ChangeStore {
    fn load_pending(&self) -> Result<Vec<ProposedChange>, ExError>;

    fn save_pending(&mut self, changes: &[ProposedChange]) -> Result<(), ExError>;

    fn last_update(&self) -> Result<Option<NaiveDateTime>, ExError>;

    fn set_last_update(&mut self, at: NaiveDateTime) -> Result<(), ExError>;
}

/// In-process store.
///
/// Changes are kept serialized so a reload goes through the same JSON shape
/// as the on-disk store.
#[derive(Debug, Default)]
pub struct MemoryChangeStore {
    pending: Vec<String>,
    last_update: Option<String>,
}

impl MemoryChangeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn serialization_error(op: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(op)
        .with_message(err.to_string())
}

impl ChangeStore for MemoryChangeStore {
    fn load_pending(&self) -> Result<Vec<ProposedChange>, ExError> {
        self.pending
            .iter()
            .map(|json| serde_json::from_str(json).map_err(|e| serialization_error("load_pending", e)))
            .collect()
    }

    fn save_pending(&mut self, changes: &[ProposedChange]) -> Result<(), ExError> {
        self.pending = changes
            .iter()
            .map(|c| serde_json::to_string(c).map_err(|e| serialization_error("save_pending", e)))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    fn last_update(&self) -> Result<Option<NaiveDateTime>, ExError> {
        self.last_update
            .as_deref()
            .map(|text| {
                NaiveDateTime::parse_from_str(text, LAST_UPDATE_FORMAT).map_err(|e| {
                    ExError::new(ExErrorKind::Serialization)
                        .with_op("last_update")
                        .with_message(e.to_string())
                })
            })
            .transpose()
    }

    fn set_last_update(&mut self, at: NaiveDateTime) -> Result<(), ExError> {
        self.last_update = Some(at.format(LAST_UPDATE_FORMAT).to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::{sort_changes, Addition, Modification};
    use crate::model::{Entity, FieldSet, FieldValue, Origin, Planet, Star};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn changes() -> Vec<ProposedChange> {
        let star = Star::new("11 Com", "11 Com").with_planet(
            Planet::new("11 Com b")
                .with_fields(FieldSet::new().with("mass", 19.4))
                .with_errors(FieldSet::new().with("masserrorplus", 1.5)),
        );
        let planet = Entity::from(Arc::clone(star.planet("11 Com b").unwrap()));
        sort_changes(vec![
            ProposedChange::from(Modification::new(
                Origin::ExoplanetEu,
                planet.clone(),
                &planet,
                "mass",
                FieldValue::Number(20.0),
                FieldValue::Number(19.4),
            )),
            ProposedChange::from(Addition::new(
                Origin::NasaArchive,
                Entity::from(Planet::new("11 Com a")),
            )),
        ])
    }

    #[test]
    fn test_round_trip_keeps_order_and_reports() {
        let mut store = MemoryChangeStore::new();
        let saved = changes();
        store.save_pending(&saved).unwrap();

        let loaded = store.load_pending().unwrap();
        let before: Vec<String> = saved.iter().map(ToString::to_string).collect();
        let after: Vec<String> = loaded.iter().map(ToString::to_string).collect();
        assert_eq!(before, after);
        assert_eq!(loaded[0].object_name(), "11 Com a");
    }

    #[test]
    fn test_last_update_round_trip() {
        let mut store = MemoryChangeStore::new();
        assert_eq!(store.last_update().unwrap(), None);

        let at = NaiveDate::from_ymd_opt(2026, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 5)
            .unwrap();
        store.set_last_update(at).unwrap();
        assert_eq!(store.last_update().unwrap(), Some(at));
    }
}

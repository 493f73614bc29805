//! Single-entity comparison.

use crate::diff::join::{inner_join_diff, outer_join, outer_join_new_only};
use crate::diff::model::{ChangedFields, EntityDiff, JoinResult};
use crate::errors::{ReconcileError, Result};
use crate::model::{Entity, Origin};

/// A same-kind pair of entities tagged with the origin of the left side.
///
/// The left entity comes from the source catalog, the right one from the
/// reference catalog. Operates on the flat field sets only.
#[derive(Debug, Clone, Copy)]
pub struct EntityComparator<'a> {
    left: &'a Entity,
    right: &'a Entity,
    origin: Origin,
}

impl<'a> EntityComparator<'a> {
    /// Pair two entities for comparison.
    ///
    /// # Errors
    /// * `KindMismatch` - the entities are not the same kind
    pub fn new(left: &'a Entity, right: &'a Entity, origin: Origin) -> Result<Self> {
        if left.kind() != right.kind() {
            return Err(ReconcileError::KindMismatch {
                left_kind: left.kind(),
                left_name: left.name().to_string(),
                right_kind: right.kind(),
                right_name: right.name().to_string(),
            });
        }
        Ok(Self {
            left,
            right,
            origin,
        })
    }

    pub fn left(&self) -> &'a Entity {
        self.left
    }

    pub fn right(&self) -> &'a Entity {
        self.right
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Left-driven outer join of the two field sets
    pub fn outer_join(&self) -> JoinResult {
        outer_join(self.left.fields(), self.right.fields())
    }

    /// Fields carried by the left side only
    pub fn new_fields(&self) -> JoinResult {
        outer_join_new_only(self.left.fields(), self.right.fields())
    }

    /// Fields carried by both sides with differing values
    pub fn changed_fields(&self) -> ChangedFields {
        inner_join_diff(self.left.fields(), self.right.fields())
    }

    pub fn diff(&self) -> EntityDiff {
        EntityDiff {
            changed: self.changed_fields(),
            new_fields: self.new_fields(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntityKind, FieldSet, FieldValue, Planet, Star};

    #[test]
    fn test_kind_mismatch_fails_construction() {
        let star = Entity::from(Star::new("11 Com", "11 Com"));
        let planet = Entity::from(Planet::new("11 Com b"));

        let err = EntityComparator::new(&star, &planet, Origin::ExoplanetEu).unwrap_err();
        assert_eq!(
            err,
            ReconcileError::KindMismatch {
                left_kind: EntityKind::Star,
                left_name: "11 Com".to_string(),
                right_kind: EntityKind::Planet,
                right_name: "11 Com b".to_string(),
            }
        );
    }

    #[test]
    fn test_planet_diff() {
        let source = Entity::from(
            Planet::new("11 Com b").with_fields(
                FieldSet::new()
                    .with("mass", 20.0)
                    .with("period", 326.03)
                    .with("discoverymethod", "RV"),
            ),
        );
        let reference = Entity::from(
            Planet::new("11 Com b").with_fields(
                FieldSet::new()
                    .with("mass", 19.4)
                    .with("period", 326.03),
            ),
        );

        let comparator = EntityComparator::new(&source, &reference, Origin::NasaArchive).unwrap();
        let diff = comparator.diff();

        assert_eq!(diff.changed.len(), 1);
        assert_eq!(diff.changed["mass"].left, FieldValue::Number(20.0));
        assert_eq!(diff.changed["mass"].right, FieldValue::Number(19.4));
        let new: Vec<&str> = diff.new_fields.fields().collect();
        assert_eq!(new, vec!["discoverymethod"]);
        assert_eq!(comparator.outer_join().len(), 3);
        assert_eq!(comparator.origin(), Origin::NasaArchive);
    }
}

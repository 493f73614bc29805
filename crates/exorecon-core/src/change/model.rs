//! Proposed change value objects.
//!
//! Changes are immutable once built: every field is private and exposed
//! through accessors that the write-back collaborator relies on.

use serde::{Deserialize, Serialize};

use crate::change::bounds::UncertaintyBounds;
use crate::model::{Entity, EntityKind, FieldValue, Origin};

/// An entity observed in a source catalog but missing from the reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addition {
    origin: Origin,
    entity: Entity,
}

impl Addition {
    pub fn new(origin: Origin, entity: Entity) -> Self {
        Self { origin, entity }
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The entity to insert into the reference catalog
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn object_name(&self) -> &str {
        self.entity.name()
    }

    pub fn entity_kind(&self) -> EntityKind {
        self.entity.kind()
    }

    pub fn system_name(&self) -> Option<&str> {
        self.entity.system_name()
    }
}

/// One field whose value differs between a source catalog and the reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modification {
    origin: Origin,
    reference: Entity,
    field: String,
    value_in_origin: FieldValue,
    value_in_reference: FieldValue,
    bounds: UncertaintyBounds,
}

impl Modification {
    /// Build a modification of `field` on the reference entity.
    ///
    /// `source` is the same object as seen by the origin catalog; it is only
    /// read to resolve the origin-side bounds.
    pub fn new(
        origin: Origin,
        reference: Entity,
        source: &Entity,
        field: impl Into<String>,
        value_in_origin: FieldValue,
        value_in_reference: FieldValue,
    ) -> Self {
        let field = field.into();
        let bounds = UncertaintyBounds::resolve(&reference, source, &field);
        Self {
            origin,
            reference,
            field,
            value_in_origin,
            value_in_reference,
            bounds,
        }
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The reference-catalog entity being modified
    pub fn reference(&self) -> &Entity {
        &self.reference
    }

    pub fn object_name(&self) -> &str {
        self.reference.name()
    }

    pub fn entity_kind(&self) -> EntityKind {
        self.reference.kind()
    }

    pub fn system_name(&self) -> Option<&str> {
        self.reference.system_name()
    }

    pub fn field_modified(&self) -> &str {
        &self.field
    }

    /// Value the origin catalog reports; written back on acceptance
    pub fn value_in_origin(&self) -> &FieldValue {
        &self.value_in_origin
    }

    pub fn value_in_reference(&self) -> &FieldValue {
        &self.value_in_reference
    }

    pub fn bounds(&self) -> &UncertaintyBounds {
        &self.bounds
    }
}

/// Entry of the change list produced by a reconciliation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum ProposedChange {
    Addition(Addition),
    Modification(Modification),
}

impl ProposedChange {
    /// Name of the referenced entity; the ordering key of a change list
    pub fn object_name(&self) -> &str {
        match self {
            ProposedChange::Addition(a) => a.object_name(),
            ProposedChange::Modification(m) => m.object_name(),
        }
    }

    pub fn origin(&self) -> Origin {
        match self {
            ProposedChange::Addition(a) => a.origin(),
            ProposedChange::Modification(m) => m.origin(),
        }
    }

    pub fn entity_kind(&self) -> EntityKind {
        match self {
            ProposedChange::Addition(a) => a.entity_kind(),
            ProposedChange::Modification(m) => m.entity_kind(),
        }
    }

    pub fn system_name(&self) -> Option<&str> {
        match self {
            ProposedChange::Addition(a) => a.system_name(),
            ProposedChange::Modification(m) => m.system_name(),
        }
    }

    /// "addition" or "modification"
    pub fn kind_label(&self) -> &'static str {
        match self {
            ProposedChange::Addition(_) => "addition",
            ProposedChange::Modification(_) => "modification",
        }
    }

    pub fn as_modification(&self) -> Option<&Modification> {
        match self {
            ProposedChange::Modification(m) => Some(m),
            ProposedChange::Addition(_) => None,
        }
    }

    pub fn as_addition(&self) -> Option<&Addition> {
        match self {
            ProposedChange::Addition(a) => Some(a),
            ProposedChange::Modification(_) => None,
        }
    }
}

impl From<Addition> for ProposedChange {
    fn from(a: Addition) -> Self {
        ProposedChange::Addition(a)
    }
}

impl From<Modification> for ProposedChange {
    fn from(m: Modification) -> Self {
        ProposedChange::Modification(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldSet, Planet, Star};
    use std::sync::Arc;

    fn eleven_com() -> (Entity, Entity) {
        let reference = Star::new("11 Com", "11 Com").with_planet(
            Planet::new("11 Com b")
                .with_fields(FieldSet::new().with("mass", 19.4))
                .with_errors(FieldSet::new().with("masserrorplus", 1.5)),
        );
        let source = Star::new("11 Com", "11 Com").with_planet(
            Planet::new("11 Com b")
                .with_fields(FieldSet::new().with("mass", 20.0))
                .with_errors(FieldSet::new().with("masslowerlimit", 17.0)),
        );
        (
            Entity::from(Arc::clone(reference.planet("11 Com b").unwrap())),
            Entity::from(Arc::clone(source.planet("11 Com b").unwrap())),
        )
    }

    #[test]
    fn test_modification_accessors_for_write_back() {
        let (reference, source) = eleven_com();
        let m = Modification::new(
            Origin::ExoplanetEu,
            reference,
            &source,
            "mass",
            FieldValue::Number(20.0),
            FieldValue::Number(19.4),
        );

        assert_eq!(m.object_name(), "11 Com b");
        assert_eq!(m.system_name(), Some("11 Com"));
        assert_eq!(m.field_modified(), "mass");
        assert_eq!(m.value_in_origin(), &FieldValue::Number(20.0));
        assert_eq!(m.value_in_reference(), &FieldValue::Number(19.4));
        assert_eq!(m.entity_kind(), EntityKind::Planet);
    }

    #[test]
    fn test_modification_resolves_bounds_from_both_sides() {
        let (reference, source) = eleven_com();
        let m = Modification::new(
            Origin::NasaArchive,
            reference,
            &source,
            "mass",
            FieldValue::Number(20.0),
            FieldValue::Number(19.4),
        );

        assert_eq!(m.bounds().reference_upper, Some(FieldValue::Number(1.5)));
        assert_eq!(m.bounds().reference_lower, None);
        assert_eq!(m.bounds().origin_upper, None);
        assert_eq!(m.bounds().origin_lower, Some(FieldValue::Number(17.0)));
    }

    #[test]
    fn test_addition_refers_to_entity() {
        let star = Star::new("HD 3", "HD 3").with_planet(Planet::new("HD 3 c"));
        let planet = Arc::clone(star.planet("HD 3 c").unwrap());
        let change = ProposedChange::from(Addition::new(
            Origin::ExoplanetEu,
            Entity::from(Arc::clone(&planet)),
        ));

        assert_eq!(change.object_name(), "HD 3 c");
        assert_eq!(change.kind_label(), "addition");
        assert_eq!(change.system_name(), Some("HD 3"));
        assert!(change.as_modification().is_none());
        // Shared handle, not a copy
        assert_eq!(Arc::strong_count(&planet), 3);
    }

    #[test]
    fn test_change_json_is_tagged() {
        let change = ProposedChange::from(Addition::new(
            Origin::NasaArchive,
            Entity::from(Planet::new("p")),
        ));
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["change"], "addition");
        assert_eq!(json["origin"], "nasa");
        assert_eq!(json["entity"]["kind"], "Planet");
    }
}

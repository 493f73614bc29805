//! Proposed change generation from a star diff.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::change::model::{Addition, Modification, ProposedChange};
use crate::diff::model::StarDiff;
use crate::model::{Entity, Origin};

/// Which optional change families a pass emits.
///
/// Planet field modifications are always emitted. Both switches default to
/// off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitPolicy {
    /// One modification per differing star field
    pub star_modifications: bool,
    /// One addition per planet found only in the source star
    pub additions: bool,
}

impl EmitPolicy {
    pub fn all() -> Self {
        Self {
            star_modifications: true,
            additions: true,
        }
    }
}

/// Planet field modifications for every matched planet, in diff order
pub fn generate_proposed_changes(diff: &StarDiff, origin: Origin) -> Vec<ProposedChange> {
    generate_with_policy(diff, origin, &EmitPolicy::default())
}

/// Changes for `diff` under `policy`.
///
/// Order: planet modifications, then star modifications, then additions.
pub fn generate_with_policy(
    diff: &StarDiff,
    origin: Origin,
    policy: &EmitPolicy,
) -> Vec<ProposedChange> {
    let mut changes = Vec::new();

    for (planet_name, changed) in &diff.planet_changed_fields {
        let Some(pair) = diff.matched_planets.get(planet_name) else {
            continue;
        };
        let reference = Entity::Planet(Arc::clone(&pair.reference));
        let source = Entity::Planet(Arc::clone(&pair.source));
        for (field, change) in changed {
            changes.push(ProposedChange::from(Modification::new(
                origin,
                reference.clone(),
                &source,
                field.as_str(),
                change.left.clone(),
                change.right.clone(),
            )));
        }
    }

    if policy.star_modifications {
        let reference = Entity::Star(Arc::clone(&diff.reference_star));
        let source = Entity::Star(Arc::clone(&diff.source_star));
        for (field, change) in &diff.star_changed {
            changes.push(ProposedChange::from(Modification::new(
                origin,
                reference.clone(),
                &source,
                field.as_str(),
                change.left.clone(),
                change.right.clone(),
            )));
        }
    }

    if policy.additions {
        changes.extend(diff.new_planets.left.iter().map(|planet| {
            ProposedChange::from(Addition::new(origin, Entity::Planet(Arc::clone(planet))))
        }));
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::StarComparator;
    use crate::model::{EntityKind, FieldSet, FieldValue, Planet, Star};

    fn pair() -> (Entity, Entity) {
        let source = Star::new("11 Com", "11 Com")
            .with_fields(FieldSet::new().with("temperature", 4742.0))
            .with_planet(
                Planet::new("11 Com b")
                    .with_fields(FieldSet::new().with("mass", 20.0).with("period", 326.03)),
            )
            .with_planet(Planet::new("11 Com c"));
        let reference = Star::new("11 Com", "11 Com")
            .with_fields(FieldSet::new().with("temperature", 4800.0))
            .with_planet(
                Planet::new("11 Com b")
                    .with_fields(FieldSet::new().with("mass", 19.4).with("period", 326.03)),
            );
        (Entity::from(source), Entity::from(reference))
    }

    #[test]
    fn test_default_policy_emits_planet_modifications_only() {
        let (source, reference) = pair();
        let diff = StarComparator::new(&source, &reference, Origin::ExoplanetEu)
            .unwrap()
            .star_diff()
            .unwrap();

        let changes = generate_proposed_changes(&diff, Origin::ExoplanetEu);
        assert_eq!(changes.len(), 1);
        let m = changes[0].as_modification().unwrap();
        assert_eq!(m.object_name(), "11 Com b");
        assert_eq!(m.field_modified(), "mass");
        assert_eq!(m.value_in_origin(), &FieldValue::Number(20.0));
        assert_eq!(m.value_in_reference(), &FieldValue::Number(19.4));
        assert_eq!(m.origin(), Origin::ExoplanetEu);
    }

    #[test]
    fn test_full_policy_order() {
        let (source, reference) = pair();
        let diff = StarComparator::new(&source, &reference, Origin::NasaArchive)
            .unwrap()
            .star_diff()
            .unwrap();

        let changes = generate_with_policy(&diff, Origin::NasaArchive, &EmitPolicy::all());
        let summary: Vec<(&str, &str, EntityKind)> = changes
            .iter()
            .map(|c| (c.kind_label(), c.object_name(), c.entity_kind()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("modification", "11 Com b", EntityKind::Planet),
                ("modification", "11 Com", EntityKind::Star),
                ("addition", "11 Com c", EntityKind::Planet),
            ]
        );
    }

    #[test]
    fn test_policy_toml_defaults() {
        let policy: EmitPolicy = serde_json::from_str(r#"{"additions": true}"#).unwrap();
        assert!(policy.additions);
        assert!(!policy.star_modifications);
    }
}

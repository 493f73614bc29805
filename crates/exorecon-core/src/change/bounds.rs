//! Uncertainty bound resolution.
//!
//! A numeric field `mass` may carry sibling fields such as `masserrorplus` or
//! `masslowerlimit`. Bounds are looked up in the entity's uncertainty set
//! first, then among its regular fields. Within each direction the error
//! suffix wins over the limit suffix.

use serde::{Deserialize, Serialize};

use crate::model::{Entity, FieldValue};

const UPPER_SUFFIXES: [&str; 2] = ["errorplus", "upperlimit"];
const LOWER_SUFFIXES: [&str; 2] = ["errorminus", "lowerlimit"];

/// Resolve one bound of `field` on `entity`; `None` when nothing usable exists
fn resolve(entity: &Entity, field: &str, suffixes: &[&str]) -> Option<FieldValue> {
    suffixes.iter().find_map(|suffix| {
        let name = format!("{}{}", field, suffix);
        [entity.errors(), entity.fields()]
            .into_iter()
            .filter_map(|set| set.get(&name))
            .find(|value| !value.is_absent())
            .cloned()
    })
}

/// Upper bound of `field`, or `None`
pub fn upper_bound(entity: &Entity, field: &str) -> Option<FieldValue> {
    resolve(entity, field, &UPPER_SUFFIXES)
}

/// Lower bound of `field`, or `None`
pub fn lower_bound(entity: &Entity, field: &str) -> Option<FieldValue> {
    resolve(entity, field, &LOWER_SUFFIXES)
}

/// The four bounds attached to a modification.
///
/// `None` renders as `N/A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UncertaintyBounds {
    pub reference_upper: Option<FieldValue>,
    pub reference_lower: Option<FieldValue>,
    pub origin_upper: Option<FieldValue>,
    pub origin_lower: Option<FieldValue>,
}

impl UncertaintyBounds {
    /// Resolve all four bounds of `field`; never fails
    pub fn resolve(reference: &Entity, source: &Entity, field: &str) -> Self {
        Self {
            reference_upper: upper_bound(reference, field),
            reference_lower: lower_bound(reference, field),
            origin_upper: upper_bound(source, field),
            origin_lower: lower_bound(source, field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldSet, Planet};

    #[test]
    fn test_missing_bounds_resolve_to_none() {
        let planet = Entity::from(
            Planet::new("11 Com b").with_fields(FieldSet::new().with("mass", 19.4)),
        );
        assert_eq!(
            UncertaintyBounds::resolve(&planet, &planet, "mass"),
            UncertaintyBounds::default()
        );
    }

    #[test]
    fn test_bounds_from_error_set() {
        let planet = Entity::from(
            Planet::new("11 Com b")
                .with_fields(FieldSet::new().with("mass", 19.4))
                .with_errors(
                    FieldSet::new()
                        .with("masserrorplus", 1.5)
                        .with("masserrorminus", 1.5),
                ),
        );
        assert_eq!(upper_bound(&planet, "mass"), Some(FieldValue::Number(1.5)));
        assert_eq!(lower_bound(&planet, "mass"), Some(FieldValue::Number(1.5)));
    }

    #[test]
    fn test_limits_found_among_regular_fields() {
        let planet = Entity::from(
            Planet::new("HD 2 b").with_fields(
                FieldSet::new()
                    .with("radius", 1.1)
                    .with("radiusupperlimit", 1.4),
            ),
        );
        assert_eq!(upper_bound(&planet, "radius"), Some(FieldValue::Number(1.4)));
        assert_eq!(lower_bound(&planet, "radius"), None);
    }

    #[test]
    fn test_error_suffix_preferred_over_limit() {
        let planet = Entity::from(Planet::new("p").with_errors(
            FieldSet::new()
                .with("periodupperlimit", 9.0)
                .with("perioderrorplus", 0.2),
        ));
        assert_eq!(upper_bound(&planet, "period"), Some(FieldValue::Number(0.2)));
    }

    #[test]
    fn test_prefix_collision_is_not_a_bound() {
        // "massive" starts with "mass" but its remainder is not a bound suffix
        let planet = Entity::from(Planet::new("p").with_errors(
            FieldSet::new()
                .with("massiveerrorplus", 3.0)
                .with("masserrorplusx", 4.0),
        ));
        assert_eq!(upper_bound(&planet, "mass"), None);
    }

    #[test]
    fn test_absent_bound_is_treated_as_missing() {
        let planet = Entity::from(Planet::new("p").with_errors(
            FieldSet::new().with("masserrorminus", FieldValue::Absent),
        ));
        assert_eq!(lower_bound(&planet, "mass"), None);
    }
}

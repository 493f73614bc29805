//! Hierarchical star comparison.
//!
//! A star comparison diffs the two stars' own field sets, then pairs planets
//! by name and diffs each matched pair with a nested [`EntityComparator`].
//! Planets present on one side only are reported, not compared.

use indexmap::IndexMap;
use std::sync::Arc;
use std::time::Instant;

use crate::change::generate::{generate_with_policy, EmitPolicy};
use crate::change::model::ProposedChange;
use crate::diff::comparator::EntityComparator;
use crate::diff::join::{inner_join_diff, outer_join_new_only};
use crate::diff::model::{NewPlanets, PlanetPair, StarDiff};
use crate::errors::{ReconcileError, Result};
use crate::model::{Entity, Origin, Planet, Star};
use crate::{log_op_end, log_op_error, log_op_start};

/// Planet identity across catalogs.
///
/// Exact, case-sensitive name equality: "Kepler-10 b" and "Kepler-10b" are two
/// different planets and show up as new on both sides.
pub fn planet_names_match(a: &str, b: &str) -> bool {
    a == b
}

fn find_counterpart<'s>(name: &str, star: &'s Star) -> Option<&'s Arc<Planet>> {
    star.planets()
        .find(|candidate| planet_names_match(name, &candidate.name))
}

/// Planets of `star` with no counterpart in `other`, in `star` order
fn unmatched_planets(star: &Star, other: &Star) -> Vec<Arc<Planet>> {
    star.planets()
        .filter(|planet| find_counterpart(&planet.name, other).is_none())
        .cloned()
        .collect()
}

/// Comparator for two stars, recursing into their planets
#[derive(Debug, Clone, Copy)]
pub struct StarComparator<'a> {
    inner: EntityComparator<'a>,
}

impl<'a> StarComparator<'a> {
    /// Pair two entities for a star comparison.
    ///
    /// # Errors
    /// * `KindMismatch` - the entities are not the same kind
    pub fn new(left: &'a Entity, right: &'a Entity, origin: Origin) -> Result<Self> {
        Ok(Self {
            inner: EntityComparator::new(left, right, origin)?,
        })
    }

    pub fn origin(&self) -> Origin {
        self.inner.origin()
    }

    fn stars(&self) -> Result<(&'a Arc<Star>, &'a Arc<Star>)> {
        let (left, right) = (self.inner.left(), self.inner.right());
        match (left.as_star(), right.as_star()) {
            (Some(l), Some(r)) => Ok((l, r)),
            _ => Err(ReconcileError::KindIncompatible {
                kind: left.kind(),
                name: left.name().to_string(),
            }),
        }
    }

    /// Diff the two stars and every planet pair sharing a name.
    ///
    /// # Errors
    /// * `KindIncompatible` - the compared entities are not stars
    pub fn star_diff(&self) -> Result<StarDiff> {
        let start = Instant::now();
        let (left, right) = match self.stars() {
            Ok(stars) => stars,
            Err(err) => {
                log_op_error!(
                    "star_diff",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64
                );
                return Err(err);
            }
        };
        log_op_start!(
            "star_diff",
            star = left.name.as_str(),
            origin = self.origin().code()
        );

        let star_changed = inner_join_diff(&left.fields, &right.fields);
        let star_new = outer_join_new_only(&left.fields, &right.fields);
        let new_planets = NewPlanets {
            left: unmatched_planets(left, right),
            right: unmatched_planets(right, left),
        };

        let mut planet_new_fields = IndexMap::new();
        let mut planet_changed_fields = IndexMap::new();
        let mut matched_planets = IndexMap::new();

        for planet in left.planets() {
            let Some(counterpart) = find_counterpart(&planet.name, right) else {
                continue;
            };
            let source = Entity::Planet(Arc::clone(planet));
            let reference = Entity::Planet(Arc::clone(counterpart));
            let nested = EntityComparator::new(&source, &reference, self.origin())?;
            let diff = nested.diff();

            planet_new_fields.insert(planet.name.clone(), diff.new_fields);
            planet_changed_fields.insert(planet.name.clone(), diff.changed);
            matched_planets.insert(
                planet.name.clone(),
                PlanetPair {
                    source: Arc::clone(planet),
                    reference: Arc::clone(counterpart),
                },
            );
        }

        let diff = StarDiff {
            source_star: Arc::clone(left),
            reference_star: Arc::clone(right),
            star_changed,
            star_new,
            new_planets,
            planet_new_fields,
            planet_changed_fields,
            matched_planets,
        };

        log_op_end!(
            "star_diff",
            duration_ms = start.elapsed().as_millis() as u64,
            star = left.name.as_str(),
            matched_planets = diff.matched_planets.len(),
            change_count = diff.planet_change_count()
        );
        Ok(diff)
    }

    /// Proposed changes under the default emission policy (planet field
    /// modifications only)
    ///
    /// # Errors
    /// * `KindIncompatible` - the compared entities are not stars
    pub fn proposed_changes(&self) -> Result<Vec<ProposedChange>> {
        self.proposed_changes_with(&EmitPolicy::default())
    }

    /// Proposed changes under an explicit emission policy
    ///
    /// # Errors
    /// * `KindIncompatible` - the compared entities are not stars
    pub fn proposed_changes_with(&self, policy: &EmitPolicy) -> Result<Vec<ProposedChange>> {
        let diff = self.star_diff()?;
        Ok(generate_with_policy(&diff, self.origin(), policy))
    }
}

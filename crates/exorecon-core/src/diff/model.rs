//! Diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Collections use `IndexMap` and `Vec` in the order the left side was visited,
//! so identical inputs serialize identically.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::model::{FieldValue, Planet, Star};

/// One row of a left-driven outer join.
///
/// `None` on a side means that side does not carry the field (rendered `N/A`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JoinRow {
    pub field: String,
    pub left: Option<FieldValue>,
    pub right: Option<FieldValue>,
}

impl JoinRow {
    /// True when either side lacks the field
    pub fn is_new(&self) -> bool {
        self.left.is_none() || self.right.is_none()
    }
}

/// Ordered rows produced by an outer join
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct JoinResult {
    pub rows: Vec<JoinRow>,
}

impl JoinResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Field names in row order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.field.as_str())
    }

    pub fn row(&self, field: &str) -> Option<&JoinRow> {
        self.rows.iter().find(|r| r.field == field)
    }
}

/// Values of a field present on both sides that differ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldChange {
    /// Value on the left (source) side
    pub left: FieldValue,
    /// Value on the right (reference) side
    pub right: FieldValue,
}

/// Field name → differing pair, in left insertion order
pub type ChangedFields = IndexMap<String, FieldChange>;

/// Field-level diff of a single entity pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityDiff {
    /// Fields present on both sides with differing values
    pub changed: ChangedFields,
    /// Fields present on one side only
    pub new_fields: JoinResult,
}

/// Planets present on only one side of a star comparison
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NewPlanets {
    /// In the left star but not the right, in left order
    pub left: Vec<Arc<Planet>>,
    /// In the right star but not the left, in right order
    pub right: Vec<Arc<Planet>>,
}

/// Planets with the same name on both sides
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanetPair {
    /// Planet from the source (left) star
    pub source: Arc<Planet>,
    /// Planet from the reference (right) star
    pub reference: Arc<Planet>,
}

/// Hierarchical diff of two stars and their planets.
///
/// Every map is keyed by planet name and ordered as the left star's planets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StarDiff {
    /// Star from the source (left) catalog
    pub source_star: Arc<Star>,
    /// Star from the reference (right) catalog
    pub reference_star: Arc<Star>,
    /// Star fields present on both sides with differing values
    pub star_changed: ChangedFields,
    /// Star fields present on the left only
    pub star_new: JoinResult,
    /// Planets missing from either side
    pub new_planets: NewPlanets,
    /// Matched planet name → fields present on one side only
    pub planet_new_fields: IndexMap<String, JoinResult>,
    /// Matched planet name → differing fields
    pub planet_changed_fields: IndexMap<String, ChangedFields>,
    /// Matched planet name → both planets
    pub matched_planets: IndexMap<String, PlanetPair>,
}

impl StarDiff {
    /// True when nothing differs at any level
    pub fn is_empty(&self) -> bool {
        self.star_changed.is_empty()
            && self.star_new.is_empty()
            && self.new_planets.left.is_empty()
            && self.new_planets.right.is_empty()
            && self.planet_new_fields.values().all(JoinResult::is_empty)
            && self.planet_changed_fields.values().all(|c| c.is_empty())
    }

    /// Number of planet field changes across all matched planets
    pub fn planet_change_count(&self) -> usize {
        self.planet_changed_fields.values().map(|c| c.len()).sum()
    }
}

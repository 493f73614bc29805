use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::field_set::FieldSet;

/// Entity category; only entities of the same kind can be compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Star,
    Planet,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Star => f.write_str("Star"),
            EntityKind::Planet => f.write_str("Planet"),
        }
    }
}

/// Non-owning back-reference from a planet to its host star, by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRef {
    pub star: String,
    pub system: String,
}

/// Planet - a catalog object orbiting a star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,

    /// Observable attributes compared during reconciliation
    #[serde(default)]
    pub fields: FieldSet,

    /// Uncertainty fields (`<field>errorplus`, `<field>lowerlimit`, ...)
    #[serde(default)]
    pub errors: FieldSet,

    /// Set when the planet is attached to a star
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<HostRef>,
}

impl Planet {
    /// Create a detached planet with no fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: FieldSet::new(),
            errors: FieldSet::new(),
            host: None,
        }
    }

    pub fn with_fields(mut self, fields: FieldSet) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_errors(mut self, errors: FieldSet) -> Self {
        self.errors = errors;
        self
    }

    /// Name of the system the host star belongs to, once attached
    pub fn system_name(&self) -> Option<&str> {
        self.host.as_ref().map(|h| h.system.as_str())
    }
}

/// Star - owns its planets, keyed and ordered by planet name
///
/// Planet names are unique within one star; adding a planet whose name is
/// already present replaces the earlier one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StarRecord", into = "StarRecord")]
pub struct Star {
    pub name: String,
    pub system_name: String,
    pub fields: FieldSet,
    pub errors: FieldSet,
    planets: IndexMap<String, Arc<Planet>>,
}

impl Star {
    /// Create a star with no fields and no planets
    pub fn new(name: impl Into<String>, system_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            system_name: system_name.into(),
            fields: FieldSet::new(),
            errors: FieldSet::new(),
            planets: IndexMap::new(),
        }
    }

    pub fn with_fields(mut self, fields: FieldSet) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_errors(mut self, errors: FieldSet) -> Self {
        self.errors = errors;
        self
    }

    /// Attach a planet, pointing its back-reference at this star
    pub fn add_planet(&mut self, mut planet: Planet) {
        planet.host = Some(HostRef {
            star: self.name.clone(),
            system: self.system_name.clone(),
        });
        self.planets.insert(planet.name.clone(), Arc::new(planet));
    }

    /// Builder-style `add_planet`
    pub fn with_planet(mut self, planet: Planet) -> Self {
        self.add_planet(planet);
        self
    }

    /// Planets in insertion order
    pub fn planets(&self) -> impl Iterator<Item = &Arc<Planet>> {
        self.planets.values()
    }

    /// Look up a planet by its exact name
    pub fn planet(&self, name: &str) -> Option<&Arc<Planet>> {
        self.planets.get(name)
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }
}

/// Wire shape of a star: planets as a plain list, back-references implied
#[derive(Serialize, Deserialize)]
struct StarRecord {
    name: String,
    #[serde(default)]
    system_name: Option<String>,
    #[serde(default)]
    fields: FieldSet,
    #[serde(default)]
    errors: FieldSet,
    #[serde(default)]
    planets: Vec<Planet>,
}

impl From<StarRecord> for Star {
    fn from(record: StarRecord) -> Self {
        // A star without an explicit system belongs to the system named after it
        let system_name = record.system_name.unwrap_or_else(|| record.name.clone());
        let mut star = Star::new(record.name, system_name)
            .with_fields(record.fields)
            .with_errors(record.errors);
        for planet in record.planets {
            star.add_planet(planet);
        }
        star
    }
}

impl From<Star> for StarRecord {
    fn from(star: Star) -> Self {
        StarRecord {
            name: star.name,
            system_name: Some(star.system_name),
            fields: star.fields,
            errors: star.errors,
            planets: star
                .planets
                .into_values()
                .map(|p| Arc::try_unwrap(p).unwrap_or_else(|shared| (*shared).clone()))
                .collect(),
        }
    }
}

/// Any comparable catalog object, shared read-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "object")]
pub enum Entity {
    Star(Arc<Star>),
    Planet(Arc<Planet>),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Star(_) => EntityKind::Star,
            Entity::Planet(_) => EntityKind::Planet,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::Star(s) => &s.name,
            Entity::Planet(p) => &p.name,
        }
    }

    pub fn fields(&self) -> &FieldSet {
        match self {
            Entity::Star(s) => &s.fields,
            Entity::Planet(p) => &p.fields,
        }
    }

    pub fn errors(&self) -> &FieldSet {
        match self {
            Entity::Star(s) => &s.errors,
            Entity::Planet(p) => &p.errors,
        }
    }

    /// Owning system name; `None` for a planet never attached to a star
    pub fn system_name(&self) -> Option<&str> {
        match self {
            Entity::Star(s) => Some(&s.system_name),
            Entity::Planet(p) => p.system_name(),
        }
    }

    pub fn as_star(&self) -> Option<&Arc<Star>> {
        match self {
            Entity::Star(s) => Some(s),
            Entity::Planet(_) => None,
        }
    }
}

impl From<Arc<Star>> for Entity {
    fn from(star: Arc<Star>) -> Self {
        Entity::Star(star)
    }
}

impl From<Arc<Planet>> for Entity {
    fn from(planet: Arc<Planet>) -> Self {
        Entity::Planet(planet)
    }
}

impl From<Star> for Entity {
    fn from(star: Star) -> Self {
        Entity::Star(Arc::new(star))
    }
}

impl From<Planet> for Entity {
    fn from(planet: Planet) -> Self {
        Entity::Planet(Arc::new(planet))
    }
}

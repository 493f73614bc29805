//! Star catalogs.
//!
//! A catalog file is a JSON array of stars, each with its planets inline:
//!
//! ```json
//! [{"name": "11 Com", "fields": {"mass": 2.7},
//!   "planets": [{"name": "11 Com b", "fields": {"mass": 19.4}}]}]
//! ```

#![allow(clippy::result_large_err)]

use exorecon_core::errors::ExError;
use exorecon_core::Star;
use exorecon_store::errors::{io_error, serialization_error};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Name-indexed stars in file order.
///
/// A later star with an already seen name replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Star>", into = "Vec<Star>")]
pub struct Catalog {
    stars: IndexMap<String, Arc<Star>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, star: Star) {
        self.stars.insert(star.name.clone(), Arc::new(star));
    }

    pub fn with_star(mut self, star: Star) -> Self {
        self.insert(star);
        self
    }

    pub fn star(&self, name: &str) -> Option<&Arc<Star>> {
        self.stars.get(name)
    }

    pub fn stars(&self) -> impl Iterator<Item = &Arc<Star>> {
        self.stars.values()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ExError> {
        serde_json::from_str(json).map_err(|e| serialization_error("load_catalog", e))
    }

    /// Read a catalog file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ExError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| io_error("read_catalog", e))?;
        Self::from_json_str(&json).map_err(|e| e.with_entity(path.display().to_string()))
    }
}

impl From<Vec<Star>> for Catalog {
    fn from(stars: Vec<Star>) -> Self {
        stars.into_iter().collect()
    }
}

impl From<Catalog> for Vec<Star> {
    fn from(catalog: Catalog) -> Self {
        catalog
            .stars
            .into_values()
            .map(|s| Arc::try_unwrap(s).unwrap_or_else(|shared| (*shared).clone()))
            .collect()
    }
}

impl FromIterator<Star> for Catalog {
    fn from_iter<I: IntoIterator<Item = Star>>(iter: I) -> Self {
        iter.into_iter().fold(Catalog::new(), Catalog::with_star)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exorecon_core::FieldValue;

    #[test]
    fn test_parse_catalog_json() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"name": "11 Com", "fields": {"mass": 2.7, "spectraltype": "G8 III"},
                 "planets": [{"name": "11 Com b", "fields": {"mass": 19.4, "radius": null}}]},
                {"name": "HD 1", "system_name": "HD 1 system"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let star = catalog.star("11 Com").unwrap();
        assert_eq!(star.system_name, "11 Com");
        let planet = star.planet("11 Com b").unwrap();
        assert_eq!(planet.fields.get("mass"), Some(&FieldValue::Number(19.4)));
        assert_eq!(planet.fields.get("radius"), Some(&FieldValue::Absent));
        assert_eq!(planet.system_name(), Some("11 Com"));
        assert_eq!(catalog.star("HD 1").unwrap().system_name, "HD 1 system");
    }

    #[test]
    fn test_malformed_catalog_is_serialization_error() {
        let err = Catalog::from_json_str("{\"name\": 1}").unwrap_err();
        assert_eq!(err.code(), "ERR_SERIALIZATION");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Catalog::load("/nonexistent/catalog.json").unwrap_err();
        assert_eq!(err.code(), "ERR_IO");
    }
}

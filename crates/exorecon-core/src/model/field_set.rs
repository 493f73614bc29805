use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering of a value (or bound) that one side does not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// A scalar catalog value.
///
/// JSON strings, numbers and `null` map onto `Text`, `Number` and `Absent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Absent,
}

impl FieldValue {
    /// Text view of the value, if it is textual
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check if the value is absent
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

/// Exact equality; two NaNs are the same value so a set always equals itself.
impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a == b,
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (FieldValue::Absent, FieldValue::Absent) => true,
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Absent => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Absent)
    }
}

/// Field name → value mapping describing one entity's observable attributes
///
/// Names are unique; iteration follows insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct FieldSet {
    fields: IndexMap<String, FieldValue>,
}

impl FieldSet {
    /// Create a new empty FieldSet
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Get a value by field name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Set a value, keeping the original position if the name already exists
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style `set`
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Check if a field name exists
    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    /// `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// Get the number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let set = FieldSet::new()
            .with("radius", 1.2)
            .with("mass", 19.4)
            .with("period", 326.03);
        let names: Vec<&str> = set.keys().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["radius", "mass", "period"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut set = FieldSet::new().with("a", "1").with("b", "2");
        set.set("a", "3");
        let pairs: Vec<(String, String)> = set
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "3".to_string()),
                ("b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_json_scalars_map_to_variants() {
        let set: FieldSet =
            serde_json::from_str(r#"{"name":"11 Com b","mass":19.4,"radius":null}"#).unwrap();
        assert_eq!(set.get("name"), Some(&FieldValue::from("11 Com b")));
        assert_eq!(set.get("mass"), Some(&FieldValue::Number(19.4)));
        assert_eq!(set.get("radius"), Some(&FieldValue::Absent));
    }

    #[test]
    fn test_display_of_numbers_matches_catalog_text() {
        assert_eq!(FieldValue::Number(20.0).to_string(), "20");
        assert_eq!(FieldValue::Number(19.4).to_string(), "19.4");
        assert_eq!(FieldValue::Absent.to_string(), NOT_AVAILABLE);
    }

    #[test]
    fn test_nan_equals_itself() {
        assert_eq!(FieldValue::Number(f64::NAN), FieldValue::Number(f64::NAN));
        assert_ne!(FieldValue::Number(1.0), FieldValue::from("1"));
    }
}

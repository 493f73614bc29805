//! Correlation types for reconciliation tracking
//!
//! A reconciliation pass compares every configured source catalog against the
//! reference catalog. Each pass is tagged with a `PassId` so that log events,
//! reports and persisted changes from the same run can be correlated.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single reconciliation pass
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PassId(String);

impl PassId {
    /// Generate a new PassId using UUIDv7 (time-ordered)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for PassId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PassId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_id_generation() {
        let id1 = PassId::new();
        let id2 = PassId::new();

        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_pass_id_display() {
        let id = PassId::new();
        assert_eq!(format!("{}", id), id.as_str());
    }

    #[test]
    fn test_pass_ids_are_time_ordered() {
        let earlier = PassId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let later = PassId::new();
        assert!(earlier.as_str() < later.as_str());
    }

    #[test]
    fn test_pass_id_serde_is_transparent_string() {
        let id = PassId::from_string("0190a3c2-0000-7000-8000-000000000000".to_string());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"0190a3c2-0000-7000-8000-000000000000\"");
        let back: PassId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

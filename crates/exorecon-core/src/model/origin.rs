use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ReconcileError;

/// External catalog that supplied the "new" side of a comparison
///
/// Provenance only; comparison logic never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Origin {
    #[serde(rename = "nasa")]
    NasaArchive,
    #[serde(rename = "eu")]
    ExoplanetEu,
}

impl Origin {
    pub const ALL: [Origin; 2] = [Origin::NasaArchive, Origin::ExoplanetEu];

    /// Short code used in configuration, storage and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            Origin::NasaArchive => "nasa",
            Origin::ExoplanetEu => "eu",
        }
    }

    /// Human-readable catalog name used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Origin::NasaArchive => "NASA archive",
            Origin::ExoplanetEu => "exoplanet.eu",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Origin {
    type Err = ReconcileError;

    /// Accepts either the short code or the catalog name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Origin::ALL
            .into_iter()
            .find(|o| {
                needle.eq_ignore_ascii_case(o.code()) || needle.eq_ignore_ascii_case(o.label())
            })
            .ok_or_else(|| ReconcileError::UnknownOrigin {
                label: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes_and_labels() {
        assert_eq!("nasa".parse::<Origin>().unwrap(), Origin::NasaArchive);
        assert_eq!("NASA archive".parse::<Origin>().unwrap(), Origin::NasaArchive);
        assert_eq!("EU".parse::<Origin>().unwrap(), Origin::ExoplanetEu);
        assert_eq!("exoplanet.eu".parse::<Origin>().unwrap(), Origin::ExoplanetEu);
    }

    #[test]
    fn test_unknown_origin_is_rejected() {
        let err = "oec".parse::<Origin>().unwrap_err();
        assert_eq!(
            err,
            ReconcileError::UnknownOrigin {
                label: "oec".to_string()
            }
        );
    }

    #[test]
    fn test_serde_uses_short_code() {
        assert_eq!(serde_json::to_string(&Origin::ExoplanetEu).unwrap(), "\"eu\"");
        let back: Origin = serde_json::from_str("\"nasa\"").unwrap();
        assert_eq!(back, Origin::NasaArchive);
    }
}

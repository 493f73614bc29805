//! Human-readable change reports.
//!
//! The layout is line oriented so a reviewer can scan it in a terminal.
//! Missing values and bounds render as `N/A`.

use std::fmt::{self, Display, Formatter};

use crate::change::model::{Addition, Modification, ProposedChange};
use crate::model::{Entity, EntityKind, FieldValue, NOT_AVAILABLE};

/// Display name of the reference catalog in reports
pub const REFERENCE_CATALOG: &str = "Open Exoplanet Catalogue";

fn bound(value: &Option<FieldValue>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn write_stats(f: &mut Formatter<'_>, entity: &Entity) -> fmt::Result {
    for (name, value) in entity.fields().iter() {
        writeln!(f, "  {}: {}", name, value)?;
    }
    for (name, value) in entity.errors().iter() {
        writeln!(f, "  {}: {}", name, value)?;
    }
    if let Some(star) = entity.as_star() {
        for planet in star.planets() {
            writeln!(f, "  planet: {}", planet.name)?;
        }
    }
    Ok(())
}

impl Display for Addition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Proposed addition:")?;
        writeln!(f)?;
        writeln!(f, "Name of object added: {}", self.object_name())?;
        writeln!(f, "Origin: {}", self.origin())?;
        writeln!(f, "Type of object: {}", self.entity_kind())?;
        if let Some(system) = self.system_name() {
            writeln!(f, "Part of System: {}", system)?;
        }
        writeln!(f, "Stats:")?;
        write_stats(f, self.entity())
    }
}

impl Display for Modification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let bounds = self.bounds();
        writeln!(f, "Proposed modification:")?;
        writeln!(f)?;
        writeln!(f, "Name of object modified: {}", self.object_name())?;
        writeln!(f, "Origin: {}", self.origin())?;
        writeln!(f, "Type of object modified: {}", self.entity_kind())?;
        if let Some(system) = self.system_name() {
            writeln!(f, "Part of System: {}", system)?;
        }
        writeln!(f, "Field modified: {}", self.field_modified())?;
        writeln!(
            f,
            "Value according to {}: {}",
            self.origin(),
            self.value_in_origin()
        )?;
        writeln!(
            f,
            "Value according to {}: {}",
            REFERENCE_CATALOG,
            self.value_in_reference()
        )?;
        writeln!(f, "OEC Upper Limit: {}", bound(&bounds.reference_upper))?;
        writeln!(f, "OEC Lower Limit: {}", bound(&bounds.reference_lower))?;
        writeln!(f, "Origin Upper Limit: {}", bound(&bounds.origin_upper))?;
        writeln!(f, "Origin Lower Limit: {}", bound(&bounds.origin_lower))
    }
}

impl Display for ProposedChange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProposedChange::Addition(a) => a.fmt(f),
            ProposedChange::Modification(m) => m.fmt(f),
        }
    }
}

/// One-line summary used by list views: `<kind> <name> [<field>] (<origin>)`
pub fn summary_line(change: &ProposedChange) -> String {
    match change {
        ProposedChange::Addition(a) => {
            let kind = match a.entity_kind() {
                EntityKind::Star => "star",
                EntityKind::Planet => "planet",
            };
            format!("addition {} {} ({})", kind, a.object_name(), a.origin())
        }
        ProposedChange::Modification(m) => format!(
            "modification {} [{}] ({})",
            m.object_name(),
            m.field_modified(),
            m.origin()
        ),
    }
}

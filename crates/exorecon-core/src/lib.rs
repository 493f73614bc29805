//! exorecon core - record diff and change proposal engine
//!
//! This crate compares a star (and the planets it owns) as described by an
//! external source catalog against the same star in the reference catalog,
//! and turns the differences into an ordered list of proposed changes:
//! - Field-set join and diff primitives
//! - Entity and star comparators
//! - Addition / Modification change model with uncertainty bounds
//! - Stable merge-sort ordering of change lists
//! - Persistence (`ChangeStore`) and write-back (`WriteBack`) ports
//!
//! The crate is synchronous and never mutates its inputs.

pub mod change;
pub mod change_store;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod write_back;

pub use exorecon_core_types as core_types;

// Re-export commonly used types
pub use change::{sort_changes, Addition, EmitPolicy, Modification, ProposedChange};
pub use change_store::{ChangeStore, MemoryChangeStore};
pub use diff::{EntityComparator, StarComparator, StarDiff};
pub use errors::{ExError, ExErrorKind, ReconcileError, Result};
pub use model::{Entity, EntityKind, FieldSet, FieldValue, Origin, Planet, Star};
pub use write_back::{apply_change, NoopWriteBack, WriteBack};

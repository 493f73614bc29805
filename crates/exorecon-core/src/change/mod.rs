//! Proposed change model.
//!
//! A star diff turns into a flat list of [`ProposedChange`]s: one
//! [`Modification`] per differing field, optionally one [`Addition`] per
//! newly observed planet. A list is put in review order by [`sort_changes`].

pub mod bounds;
pub mod generate;
pub mod model;
pub mod ordering;
pub mod report;

pub use bounds::{lower_bound, upper_bound, UncertaintyBounds};
pub use generate::{generate_proposed_changes, generate_with_policy, EmitPolicy};
pub use model::{Addition, Modification, ProposedChange};
pub use ordering::sort_changes;
pub use report::{summary_line, REFERENCE_CATALOG};

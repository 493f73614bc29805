//! Record diff engine.
//!
//! Compares the field sets of two catalog objects and, for stars, the planets
//! they own.
//!
//! ## Entry point
//!
//! ```ignore
//! use exorecon_core::diff::StarComparator;
//!
//! let comparator = StarComparator::new(&source_star, &reference_star, Origin::ExoplanetEu)?;
//! let diff = comparator.star_diff()?;
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: every result is ordered by the left side's insertion
//!   order, so identical inputs produce identical output.
//! - **Totality**: once the kind check passes, a diff never fails; missing
//!   fields surface as `None` (`N/A`), not as errors.
//! - **Purity**: comparators only read their inputs.

pub mod comparator;
pub mod join;
pub mod model;
pub mod star;

pub use comparator::EntityComparator;
pub use join::{full_outer_join, inner_join_diff, outer_join, outer_join_new_only};
pub use model::{EntityDiff, FieldChange, JoinResult, JoinRow, StarDiff};
pub use star::{planet_names_match, StarComparator};

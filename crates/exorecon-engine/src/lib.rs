//! exorecon engine - orchestration layer
//!
//! Coordinates the core diff engine with persistence:
//! - `catalog`: reference and source catalogs as ordered star collections
//! - `reconcile`: one pass over every source catalog, producing an ordered
//!   change list
//! - `session`: the review workflow over the pending list

pub mod catalog;
pub mod reconcile;
pub mod session;

pub use catalog::Catalog;
pub use reconcile::{reconcile, run_update, OriginSummary, ReconcileReport};
pub use session::{RangeBound, RangeSpec, ReviewSession, Status};

//! Core types shared across exorecon facilities
//!
//! This crate provides foundational types used by the error, logging and
//! reconciliation layers:
//!
//! - **Correlation types**: PassId identifying one reconciliation pass
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::PassId;

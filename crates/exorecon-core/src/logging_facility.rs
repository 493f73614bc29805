//! Structured logging for reconciliation passes
//!
//! - One initialization point, `init(profile)`
//! - Operation boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - An in-memory capture layer for asserting events in tests
//!
//! Field names come from `exorecon_core_types::schema`.
//!
//! # Usage
//!
//! ```rust
//! use exorecon_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};

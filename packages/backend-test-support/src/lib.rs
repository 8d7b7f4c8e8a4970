//! Shared helpers for the padel backend test binaries.
//!
//! Kept in its own crate so integration tests and unit tests install the
//! same subscriber and assert error bodies the same way.

pub mod logging;
pub mod problem_details;
pub mod unique;

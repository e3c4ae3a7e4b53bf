//! Incentive Planner Core - scheduling rules for weekly voting incentives.
//!
//! This crate holds the pure logic behind creating an incentive ("bribe"):
//! UTC week windows, the earliest allowed start, duration bounds per signer
//! and the per-week payment instructions handed to a transaction builder.
//! It performs no I/O; signing and submission happen elsewhere.

pub mod constants;
pub mod errors;
pub mod incentives;
pub mod utils;

pub use incentives::*;
pub use utils::CalendarInstant;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

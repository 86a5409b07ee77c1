//! Services module
//!
//! Business logic layer used by the API handlers.

pub mod compare;

pub use compare::{CompareError, CompareService};

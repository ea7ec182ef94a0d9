//! Shared utilities.
//!
//! - [`errors`]: Error type returned by the school resource services

pub mod errors;

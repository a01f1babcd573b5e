//! Utility modules for the Campushub API.
//!
//! - [`errors`]: Application error types and handling
//! - [`pagination`]: Request pagination utilities

pub mod errors;
pub mod pagination;

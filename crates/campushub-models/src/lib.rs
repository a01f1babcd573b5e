//! # Campushub Models
//!
//! Domain value types for the Campushub API.
//!
//! This crate provides the validated value objects shared across the
//! application, most notably the French phone number normalizer used for
//! teacher contact details.
//!
//! # Modules
//!
//! - [`value_types`]: Validated newtypes ([`value_types::PhoneNumber`],
//!   [`value_types::Email`])
//!
//! # Example
//!
//! ```ignore
//! use campushub_models::value_types::PhoneNumber;
//!
//! let phone = PhoneNumber::new("06 11 12 13 14")?;
//! assert_eq!(phone.as_str(), "+336 11 12 13 14");
//! ```

pub mod value_types;

pub use value_types::{Email, PhoneNumber, ValueTypeError};

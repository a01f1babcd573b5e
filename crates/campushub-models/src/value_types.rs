//! Strongly-typed value types with validation for domain primitives.
//!
//! This module provides newtype wrappers for teacher contact details,
//! ensuring they are always valid when used. Phone numbers are additionally
//! normalized to a single canonical form at construction time, so a
//! [`PhoneNumber`] is never observable in a non-canonical state.
//!
//! # Example
//!
//! ```ignore
//! use campushub_models::value_types::{Email, PhoneNumber};
//!
//! let phone = PhoneNumber::new("06.11.12.13.14").unwrap();
//! assert_eq!(phone.as_str(), "+336 11 12 13 14");
//!
//! let email: Email = "teacher@univ.fr".parse().unwrap();
//! ```

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Type,
    postgres::{PgHasArrayType, PgTypeInfo},
};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::ValidateEmail;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueTypeError {
    /// The input was empty or whitespace-only. This is a precondition
    /// failure (caller misuse), distinct from a malformed value.
    Blank,
    /// The phone number matched none of the recognized shapes. Carries the
    /// offending raw input for diagnostics.
    BadFormattedPhoneNumber(String),
    /// The email address is invalid.
    InvalidEmail(String),
}

impl std::error::Error for ValueTypeError {}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "value cannot be empty"),
            Self::BadFormattedPhoneNumber(raw) => {
                write!(f, "'{}' is not a valid French phone number", raw)
            }
            Self::InvalidEmail(raw) => write!(f, "'{}' is not a valid email address", raw),
        }
    }
}

// ============================================================================
// PhoneNumber
// ============================================================================

/// A validated French phone number, stored in canonical form.
///
/// Three input shapes are recognized, after stripping the insignificant
/// separators space and `.`:
///
/// | Shape               | Pattern                        | Example         |
/// |---------------------|--------------------------------|-----------------|
/// | Local               | `0` + 9 digits (no lead `0`)   | `0611121314`    |
/// | International short | `+33` + 9 digits (no lead `0`) | `+33611121314`  |
/// | International full  | `0033` + 9 digits (no lead `0`)| `0033611121314` |
///
/// All three converge to the same canonical form: `+33` followed by the
/// trunk digit, then the 8-digit body in space-separated two-digit groups
/// (e.g. `+336 11 12 13 14`). The canonical form is itself a valid input,
/// so normalization is a fixed point.
///
/// # Example
///
/// ```ignore
/// use campushub_models::value_types::PhoneNumber;
///
/// let phone = PhoneNumber::new("+33 6 11 12 13 14").unwrap();
/// assert_eq!(phone.as_str(), "+336 11 12 13 14");
///
/// // Same digits, same canonical value
/// assert_eq!(phone, PhoneNumber::new("0611121314").unwrap());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[schema(value_type = String, example = "+336 11 12 13 14")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Number of significant digits (trunk digit + 8-digit body).
    const SIGNIFICANT_DIGITS: usize = 9;

    /// Parse and normalize a raw phone number string.
    ///
    /// # Errors
    ///
    /// - [`ValueTypeError::Blank`] when the input is empty or
    ///   whitespace-only.
    /// - [`ValueTypeError::BadFormattedPhoneNumber`] when the input matches
    ///   none of the recognized shapes; carries the raw input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValueTypeError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValueTypeError::Blank);
        }

        let stripped: String = raw.chars().filter(|c| *c != ' ' && *c != '.').collect();
        let significant = Self::significant_digits(&stripped)
            .ok_or_else(|| ValueTypeError::BadFormattedPhoneNumber(raw.clone()))?;

        Ok(Self(Self::canonicalize(significant)))
    }

    /// Create a PhoneNumber without validation.
    ///
    /// # Safety
    ///
    /// The caller must ensure the number is already in canonical form. This
    /// is intended for loading from a trusted source (e.g., database) where
    /// normalization was already performed.
    #[inline]
    pub fn new_unchecked(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    /// Get the canonical phone number as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner String.
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Extract the nine significant digits from a separator-stripped input,
    /// or `None` when it matches no recognized shape.
    fn significant_digits(stripped: &str) -> Option<&str> {
        let digits = if let Some(rest) = stripped.strip_prefix("+33") {
            rest
        } else if let Some(rest) = stripped.strip_prefix("0033") {
            rest
        } else if let Some(rest) = stripped.strip_prefix('0') {
            // Local shape: the leading zero is dropped; the trunk digit
            // cannot itself be zero, or the canonical form would not
            // re-normalize
            return (Self::all_digits(rest) && !rest.starts_with('0')).then_some(rest);
        } else {
            return None;
        };

        // International shapes never carry the national leading zero
        (Self::all_digits(digits) && !digits.starts_with('0')).then_some(digits)
    }

    fn all_digits(s: &str) -> bool {
        s.len() == Self::SIGNIFICANT_DIGITS && s.bytes().all(|b| b.is_ascii_digit())
    }

    /// Format nine significant digits as `+33X XX XX XX XX`.
    fn canonicalize(digits: &str) -> String {
        let (trunk, body) = digits.split_at(1);
        let mut out = String::with_capacity(16);
        out.push_str("+33");
        out.push_str(trunk);
        for group in 0..4 {
            out.push(' ');
            out.push_str(&body[group * 2..group * 2 + 2]);
        }
        out
    }
}

impl fmt::Debug for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhoneNumber({})", self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValueTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for PhoneNumber {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> String {
        phone.0
    }
}

impl PartialEq<str> for PhoneNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// SQLx Type implementation for Postgres
impl Type<sqlx::Postgres> for PhoneNumber {
    fn type_info() -> PgTypeInfo {
        <String as Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, sqlx::Postgres> for PhoneNumber {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<'r> Decode<'r, sqlx::Postgres> for PhoneNumber {
    fn decode(
        value: <sqlx::Postgres as Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as Decode<'r, sqlx::Postgres>>::decode(value)?;
        // Trust database values - they are stored canonical
        Ok(Self::new_unchecked(s))
    }
}

impl PgHasArrayType for PhoneNumber {
    fn array_type_info() -> PgTypeInfo {
        <String as PgHasArrayType>::array_type_info()
    }
}

// Serde Deserialize with normalization
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Email
// ============================================================================

/// A validated email address.
///
/// This type guarantees that the contained string is a valid email address
/// according to the validator crate's email validation rules.
///
/// # Example
///
/// ```ignore
/// use campushub_models::value_types::Email;
///
/// let email: Email = "teacher@univ.fr".parse().unwrap();
/// assert_eq!(email.as_str(), "teacher@univ.fr");
///
/// assert!("not-an-email".parse::<Email>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[schema(value_type = String, format = "email", example = "teacher@univ.fr")]
pub struct Email(String);

impl Email {
    /// Create a new Email from a string, validating it.
    pub fn new(email: impl Into<String>) -> Result<Self, ValueTypeError> {
        let email = email.into();
        Self::validate(&email)?;
        Ok(Self(email))
    }

    /// Create an Email without validation.
    ///
    /// # Safety
    ///
    /// The caller must ensure the email is valid. This is intended for use
    /// when loading from a trusted source (e.g., database) where validation
    /// was already performed.
    #[inline]
    pub fn new_unchecked(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner String.
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    fn validate(email: &str) -> Result<(), ValueTypeError> {
        if email.trim().is_empty() {
            return Err(ValueTypeError::Blank);
        }

        if !email.validate_email() {
            return Err(ValueTypeError::InvalidEmail(email.to_string()));
        }

        Ok(())
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Email {
    type Error = ValueTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Email {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Email> for String {
    fn from(email: Email) -> String {
        email.0
    }
}

impl PartialEq<str> for Email {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// SQLx Type implementation for Postgres
impl Type<sqlx::Postgres> for Email {
    fn type_info() -> PgTypeInfo {
        <String as Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, sqlx::Postgres> for Email {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<'r> Decode<'r, sqlx::Postgres> for Email {
    fn decode(
        value: <sqlx::Postgres as Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(Self::new_unchecked(s))
    }
}

impl PgHasArrayType for Email {
    fn array_type_info() -> PgTypeInfo {
        <String as PgHasArrayType>::array_type_info()
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

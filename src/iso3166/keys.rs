//! Validation rules for the three ISO 3166-1 key types.
//!
//! Every key that enters an index or a lookup passes through this module,
//! so the shape rules live in exactly one place:
//!
//! - alpha-2: two ASCII letters, normalized to uppercase
//! - alpha-3: three ASCII letters, normalized to uppercase
//! - numeric: three decimal digits, returned unchanged (leading zeros matter)
//!
//! Record fields arrive as [`serde_json::Value`] because records are opaque
//! JSON-like maps; the type check runs before any format check.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};

use super::error::{Iso3166Error, Result};

static ALPHA2_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-zA-Z]{2}$").unwrap());
static ALPHA3_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-zA-Z]{3}$").unwrap());
static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^[0-9]{3}$").unwrap());

/// The three key types every record must carry.
///
/// Displays as (and parses from) the lowercase field-selector form used by
/// [`Registry::list_by`](super::registry::Registry::list_by): `alpha2`,
/// `alpha3`, `numeric`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum KeyField {
    Alpha2,
    Alpha3,
    Numeric,
}

impl KeyField {
    /// Parse a field-selector string, rejecting anything outside the
    /// required-key set.
    pub fn parse(selector: &str) -> Result<Self> {
        selector
            .parse()
            .map_err(|_| Iso3166Error::InvalidField(selector.to_string()))
    }
}

/// Assert that input looks like an alpha-2 key and return its uppercase form.
///
/// # Errors
/// - [`Iso3166Error::InvalidKeyType`] if the value is not a string
/// - [`Iso3166Error::InvalidKeyFormat`] if it is not exactly two letters
pub fn validate_alpha2(input: &Value) -> Result<String> {
    validate_key(KeyField::Alpha2, input)
}

/// Assert that input looks like an alpha-3 key and return its uppercase form.
///
/// # Errors
/// - [`Iso3166Error::InvalidKeyType`] if the value is not a string
/// - [`Iso3166Error::InvalidKeyFormat`] if it is not exactly three letters
pub fn validate_alpha3(input: &Value) -> Result<String> {
    validate_key(KeyField::Alpha3, input)
}

/// Assert that input looks like a numeric key and return it unchanged.
///
/// # Errors
/// - [`Iso3166Error::InvalidKeyType`] if the value is not a string
/// - [`Iso3166Error::InvalidKeyFormat`] if it is not exactly three digits
pub fn validate_numeric(input: &Value) -> Result<String> {
    validate_key(KeyField::Numeric, input)
}

/// Validate a dynamically typed value against the rules for `field`.
///
/// The type check always precedes the format check.
pub fn validate_key(field: KeyField, input: &Value) -> Result<String> {
    let key = input.as_str().ok_or(Iso3166Error::InvalidKeyType {
        field,
        actual: json_type_name(input),
    })?;
    normalize(field, key)
}

/// Validate an already string-typed key against the rules for `field`,
/// returning the canonical (index) form.
///
/// This is the query-path entry point: a `&str` cannot fail the type check,
/// only the format check.
pub fn normalize(field: KeyField, key: &str) -> Result<String> {
    let pattern: &Regex = match field {
        KeyField::Alpha2 => &ALPHA2_PATTERN,
        KeyField::Alpha3 => &ALPHA3_PATTERN,
        KeyField::Numeric => &NUMERIC_PATTERN,
    };

    if !pattern.is_match(key) {
        return Err(Iso3166Error::InvalidKeyFormat {
            field,
            value: key.to_string(),
        });
    }

    // Digits have no case; alpha codes are canonically uppercase.
    match field {
        KeyField::Numeric => Ok(key.to_string()),
        KeyField::Alpha2 | KeyField::Alpha3 => Ok(key.to_ascii_uppercase()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Custom error types for the iso3166-registry crate.

use thiserror::Error;

use super::keys::KeyField;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Iso3166Error {
    /// A validation input was not a string-typed value.
    #[error("expected {field} key to be a string, got: {actual}")]
    InvalidKeyType {
        field: KeyField,
        /// JSON type name of the rejected value (e.g. `number`, `null`).
        actual: &'static str,
    },

    /// A string input does not match the shape required for its key type.
    #[error("not a valid {field} key: {value}")]
    InvalidKeyFormat { field: KeyField, value: String },

    /// A record supplied at construction lacks one of the required keys.
    #[error("each entry must have a valid {0} key")]
    MissingKey(KeyField),

    /// Two records supplied at construction share a key value.
    #[error("duplicate {field} key: {value}")]
    DuplicateKey { field: KeyField, value: String },

    /// A well-formed key has no matching record.
    #[error("ISO 3166-1 does not contain: {0}")]
    NotFound(String),

    /// `list_by` was called with an unsupported field name.
    #[error("invalid value for field selector, got \"{0}\", expected one of: alpha2, alpha3, numeric")]
    InvalidField(String),
}

/// A convenience `Result` type alias using the crate's `Iso3166Error` type.
pub type Result<T> = std::result::Result<T, Iso3166Error>;

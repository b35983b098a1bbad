//! # iso3166-registry
//!
//! Indexed, validated lookups over the ISO 3166-1 country code table.
//! Supports O(1) retrieval by alpha-2, alpha-3, and numeric codes, plus
//! ordered iteration and listing keyed by any of the three code types.
pub mod iso3166;

// Re-export the main types for convenience
pub use iso3166::{
    data,
    error::{Iso3166Error, Result},
    iter::{ListBy, Records},
    keys::{self, KeyField},
    models::Record,
    registry::Registry,
};

//! Core ISO 3166-1 registry module

pub mod data;
pub mod error;
pub mod iter;
pub mod keys;
pub mod models;
pub mod registry;

pub use error::{Iso3166Error, Result};
pub use keys::KeyField;
pub use models::Record;
pub use registry::Registry;

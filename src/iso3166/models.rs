//! Core data structures for registry entries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::keys::KeyField;

/// One country's data entry: an opaque, order-preserving key/value mapping.
///
/// Every record must carry string values under the `alpha2`, `alpha3` and
/// `numeric` keys before it is handed to
/// [`Registry::build`](super::registry::Registry::build); beyond those three
/// it may carry arbitrary descriptive fields (name, currency, ...).
///
/// The mapping is JSON-shaped so an external loader can deserialize records
/// straight from whatever source format it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Create a record carrying the three required keys.
    pub fn new(
        alpha2: impl Into<String>,
        alpha3: impl Into<String>,
        numeric: impl Into<String>,
    ) -> Self {
        let required: [(KeyField, String); 3] = [
            (KeyField::Alpha2, alpha2.into()),
            (KeyField::Alpha3, alpha3.into()),
            (KeyField::Numeric, numeric.into()),
        ];

        let mut fields = Map::new();
        for (field, value) in required {
            let name: &str = field.as_ref();
            fields.insert(name.to_string(), Value::String(value));
        }
        Self { fields }
    }

    /// Attach an arbitrary descriptive field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Look up any field by name.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Look up one of the three required keys, untyped.
    ///
    /// `None` means the key is absent entirely; a present-but-non-string
    /// value is still returned and left for the validators to reject.
    pub fn key(&self, field: KeyField) -> Option<&Value> {
        let name: &str = field.as_ref();
        self.fields.get(name)
    }

    /// The record's alpha-2 code, if present and string-typed.
    pub fn alpha2(&self) -> Option<&str> {
        self.key(KeyField::Alpha2).and_then(Value::as_str)
    }

    /// The record's alpha-3 code, if present and string-typed.
    pub fn alpha3(&self) -> Option<&str> {
        self.key(KeyField::Alpha3).and_then(Value::as_str)
    }

    /// The record's numeric code, if present and string-typed.
    pub fn numeric(&self) -> Option<&str> {
        self.key(KeyField::Numeric).and_then(Value::as_str)
    }

    /// The full underlying mapping, insertion order preserved.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

//! The registry: construction-time validation, index building, and lookups.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::info;

use super::error::{Iso3166Error, Result};
use super::iter::{ListBy, Records};
use super::keys::{self, KeyField};
use super::models::Record;

/// Normalized required-key triple for one record, captured at build time.
///
/// Lookup indexes and `list_by` work off these canonical values, so neither
/// path has to re-validate record fields after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct KeySet {
    pub(super) alpha2: String,
    pub(super) alpha3: String,
    pub(super) numeric: String,
}

impl KeySet {
    pub(super) fn get(&self, field: KeyField) -> &str {
        match field {
            KeyField::Alpha2 => &self.alpha2,
            KeyField::Alpha3 => &self.alpha3,
            KeyField::Numeric => &self.numeric,
        }
    }
}

/// The in-memory indexed collection of ISO 3166-1 records.
///
/// Built once from an ordered record list; read-only for its entire
/// lifetime. All keyed lookups are O(1) index hits, never full scans, and
/// iteration always follows the original record order.
#[derive(Debug)]
pub struct Registry {
    records: Vec<Record>,
    keysets: Vec<KeySet>,
    by_alpha2: HashMap<String, usize>,
    by_alpha3: HashMap<String, usize>,
    by_numeric: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry from an ordered sequence of records.
    ///
    /// Each record is checked for the three required keys in the order
    /// alpha2, alpha3, numeric; the looked-up values must pass the
    /// corresponding [`keys`] validator. Keys are indexed in their
    /// normalized form, and each normalized key must be unique across the
    /// collection.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A record lacks a required key ([`Iso3166Error::MissingKey`])
    /// - A required value is non-string or malformed (the validator's own
    ///   [`Iso3166Error::InvalidKeyType`] / [`Iso3166Error::InvalidKeyFormat`])
    /// - Two records share a key value ([`Iso3166Error::DuplicateKey`])
    pub fn build(records: Vec<Record>) -> Result<Self> {
        let mut keysets = Vec::with_capacity(records.len());
        let mut by_alpha2 = HashMap::with_capacity(records.len());
        let mut by_alpha3 = HashMap::with_capacity(records.len());
        let mut by_numeric = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            let keyset = KeySet {
                alpha2: required_key(record, KeyField::Alpha2)?,
                alpha3: required_key(record, KeyField::Alpha3)?,
                numeric: required_key(record, KeyField::Numeric)?,
            };

            index_unique(&mut by_alpha2, KeyField::Alpha2, &keyset.alpha2, position)?;
            index_unique(&mut by_alpha3, KeyField::Alpha3, &keyset.alpha3, position)?;
            index_unique(&mut by_numeric, KeyField::Numeric, &keyset.numeric, position)?;

            keysets.push(keyset);
        }

        info!(
            "ISO 3166-1 registry built: {} records indexed by alpha2, alpha3, numeric",
            records.len()
        );

        Ok(Self {
            records,
            keysets,
            by_alpha2,
            by_alpha3,
            by_numeric,
        })
    }

    /// Look up a record by its alpha-2 code, case-insensitively.
    ///
    /// # Errors
    /// Propagates the validator's failures for a malformed key; returns
    /// [`Iso3166Error::NotFound`] if no record carries the key.
    pub fn get_by_alpha2(&self, key: &str) -> Result<&Record> {
        self.lookup(KeyField::Alpha2, key)
    }

    /// Look up a record by its alpha-3 code, case-insensitively.
    ///
    /// # Errors
    /// Propagates the validator's failures for a malformed key; returns
    /// [`Iso3166Error::NotFound`] if no record carries the key.
    pub fn get_by_alpha3(&self, key: &str) -> Result<&Record> {
        self.lookup(KeyField::Alpha3, key)
    }

    /// Look up a record by its three-digit numeric code.
    ///
    /// Numeric keys are matched verbatim; validation does not transform them.
    ///
    /// # Errors
    /// Propagates the validator's failures for a malformed key; returns
    /// [`Iso3166Error::NotFound`] if no record carries the key.
    pub fn get_by_numeric(&self, key: &str) -> Result<&Record> {
        self.lookup(KeyField::Numeric, key)
    }

    /// The full backing collection, in original order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over all records in original order.
    ///
    /// Finite and restartable: each call starts a fresh pass over the full
    /// collection.
    pub fn iter(&self) -> Records<'_> {
        Records::new(&self.records)
    }

    /// Returns an iterator of `(key, record)` pairs keyed by the named field.
    ///
    /// Only the required-key selectors `alpha2`, `alpha3` and `numeric` are
    /// accepted. Pair keys are the normalized field values, matching what
    /// the lookup indexes store.
    ///
    /// # Errors
    /// Returns [`Iso3166Error::InvalidField`] for any other selector.
    pub fn list_by(&self, selector: &str) -> Result<ListBy<'_>> {
        Ok(self.list_by_field(KeyField::parse(selector)?))
    }

    /// Like [`list_by`](Self::list_by), with the selector already parsed.
    pub fn list_by_field(&self, field: KeyField) -> ListBy<'_> {
        ListBy::new(field, &self.keysets, &self.records)
    }

    fn lookup(&self, field: KeyField, key: &str) -> Result<&Record> {
        let normalized = keys::normalize(field, key)?;
        let index = match field {
            KeyField::Alpha2 => &self.by_alpha2,
            KeyField::Alpha3 => &self.by_alpha3,
            KeyField::Numeric => &self.by_numeric,
        };
        match index.get(&normalized) {
            Some(&position) => Ok(&self.records[position]),
            None => Err(Iso3166Error::NotFound(normalized)),
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Record;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn required_key(record: &Record, field: KeyField) -> Result<String> {
    let value = record.key(field).ok_or(Iso3166Error::MissingKey(field))?;
    keys::validate_key(field, value)
}

fn index_unique(
    index: &mut HashMap<String, usize>,
    field: KeyField,
    key: &str,
    position: usize,
) -> Result<()> {
    match index.entry(key.to_string()) {
        Entry::Occupied(_) => Err(Iso3166Error::DuplicateKey {
            field,
            value: key.to_string(),
        }),
        Entry::Vacant(slot) => {
            slot.insert(position);
            Ok(())
        }
    }
}

//! Iterators for sequential access to registry records.
//!
//! Both iterators borrow the registry, are finite, and are restartable:
//! calling [`Registry::iter`](super::registry::Registry::iter) or
//! [`Registry::list_by`](super::registry::Registry::list_by) again starts a
//! fresh pass yielding the same sequence. No mutation is possible through
//! either handle.

use std::iter::Zip;
use std::slice;

use super::keys::KeyField;
use super::models::Record;
use super::registry::KeySet;

/// Iterator over all records in original order.
///
/// Created by [`Registry::iter`](super::registry::Registry::iter).
#[derive(Debug)]
pub struct Records<'a> {
    inner: slice::Iter<'a, Record>,
}

impl<'a> Records<'a> {
    pub(super) fn new(records: &'a [Record]) -> Self {
        Self {
            inner: records.iter(),
        }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Records<'_> {}

/// Iterator over `(key, record)` pairs keyed by one of the required fields.
///
/// Yields exactly one pair per record, in original record order, keyed by
/// that record's normalized field value.
///
/// Created by [`Registry::list_by`](super::registry::Registry::list_by).
#[derive(Debug)]
pub struct ListBy<'a> {
    field: KeyField,
    inner: Zip<slice::Iter<'a, KeySet>, slice::Iter<'a, Record>>,
}

impl<'a> ListBy<'a> {
    pub(super) fn new(field: KeyField, keysets: &'a [KeySet], records: &'a [Record]) -> Self {
        Self {
            field,
            inner: keysets.iter().zip(records.iter()),
        }
    }

    /// The field this listing is keyed by.
    pub fn field(&self) -> KeyField {
        self.field
    }
}

impl<'a> Iterator for ListBy<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        let (keyset, record) = self.inner.next()?;
        Some((keyset.get(self.field), record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ListBy<'_> {}

use indexmap::map::Entry;
use indexmap::IndexMap;
use log::{debug, trace};

use crate::{Collection, MergeError, Record, Value, ID_FIELD};

/// Accumulates records keyed by one field, merging records that share a key.
///
/// The first record seen for a key fixes that key's position in the output.
/// Every later record with the same key is overlaid onto it, so its fields
/// win over earlier ones (last write wins, shallow).
///
/// # Example
///
/// ```
/// use record_merge::{record, Collection, Merger};
///
/// let mut merger = Merger::new();
/// merger.absorb(Collection::First, [record! { "id" => "1", "name" => "John" }])?;
/// merger.absorb(Collection::Second, [record! { "id" => "1", "marks" => 80 }])?;
///
/// let merged = merger.finish();
/// assert_eq!(merged, [record! { "id" => "1", "name" => "John", "marks" => 80 }]);
/// # Ok::<(), record_merge::MergeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merger {
    key_field: String,
    /// key -> merged record, in first-seen order
    entries: IndexMap<Value, Record>,
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

impl Merger {
    /// Create a merger keyed on the `id` field.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_field(ID_FIELD)
    }

    /// Create a merger keyed on an arbitrary field.
    pub fn with_key_field(field: impl Into<String>) -> Self {
        Self {
            key_field: field.into(),
            entries: IndexMap::new(),
        }
    }

    /// Name of the field records are keyed on.
    #[must_use]
    pub fn key_field(&self) -> &str {
        &self.key_field
    }

    /// Absorb a single record found at `position` of `collection`.
    ///
    /// Fails with [`MergeError::MissingKey`] if the record has no key field,
    /// leaving the merger unchanged.
    pub fn push(
        &mut self,
        collection: Collection,
        position: usize,
        record: Record,
    ) -> Result<(), MergeError> {
        let key = record
            .key(&self.key_field)
            .cloned()
            .ok_or_else(|| MergeError::MissingKey {
                collection,
                position,
                field: self.key_field.clone(),
            })?;

        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                trace!(
                    "overlaying record {position} of the {collection} collection onto {}={}",
                    self.key_field,
                    slot.key()
                );
                slot.get_mut().overlay_owned(record);
            }
        }
        Ok(())
    }

    /// Absorb a whole collection in order.
    ///
    /// Positions in errors count from zero within `records`. Records before
    /// the failing one have already been absorbed when an error is returned.
    pub fn absorb<I>(&mut self, collection: Collection, records: I) -> Result<(), MergeError>
    where
        I: IntoIterator<Item = Record>,
    {
        for (position, record) in records.into_iter().enumerate() {
            self.push(collection, position, record)?;
        }
        Ok(())
    }

    /// Get the merged record for a key.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Record> {
        self.entries.get(key)
    }

    /// Number of distinct keys seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been absorbed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the merger, yielding merged records in first-seen key order.
    #[must_use]
    pub fn finish(self) -> Vec<Record> {
        self.entries.into_values().collect()
    }
}

/// Merge two collections of records by their `id` field.
///
/// Records of `first` are taken in order, then records of `second`. A record
/// whose `id` was already seen is overlaid onto the earlier one, so on a field
/// conflict the later value wins. The result lists one record per distinct
/// `id`, in the order each `id` first appeared. Neither input is modified.
///
/// # Errors
///
/// Returns [`MergeError::MissingKey`] if any record lacks an `id` field. No
/// partial result is returned in that case.
///
/// # Example
///
/// ```
/// use record_merge::{merge, record};
///
/// let first = [record! { "id" => "1", "name" => "John", "age" => 20 }];
/// let second = [record! { "id" => "2", "marks" => 80 }];
///
/// let merged = merge(&first, &second)?;
/// assert_eq!(
///     merged,
///     [
///         record! { "id" => "1", "name" => "John", "age" => 20 },
///         record! { "id" => "2", "marks" => 80 },
///     ]
/// );
/// # Ok::<(), record_merge::MergeError>(())
/// ```
pub fn merge(first: &[Record], second: &[Record]) -> Result<Vec<Record>, MergeError> {
    merge_all(&[first, second])
}

/// Merge any number of collections by their `id` field.
///
/// Behaves like [`merge`] applied left to right: collection `i` is absorbed
/// after collection `i - 1`, and errors tag it with [`Collection::at`]`(i)`.
///
/// # Errors
///
/// Returns [`MergeError::MissingKey`] if any record lacks an `id` field.
pub fn merge_all(collections: &[&[Record]]) -> Result<Vec<Record>, MergeError> {
    let mut merger = Merger::new();
    for (index, records) in collections.iter().enumerate() {
        merger.absorb(Collection::at(index), records.iter().cloned())?;
    }

    let merged = merger.finish();
    debug!(
        "merged {} records from {} collections into {}",
        collections.iter().map(|c| c.len()).sum::<usize>(),
        collections.len(),
        merged.len()
    );
    Ok(merged)
}

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;

use crate::Value;

/// Name of the field that identifies a record during a merge.
pub const ID_FIELD: &str = "id";

/// One entity's fields, in insertion order.
///
/// Overwriting a field keeps its original position. Two records are equal when
/// they hold the same fields with the same values, regardless of order.
///
/// # Example
///
/// ```
/// use record_merge::{record, Value};
///
/// let mut student = record! { "id" => "1", "name" => "John", "age" => 20 };
/// let marks = record! { "id" => "1", "marks" => 80 };
///
/// student.overlay(&marks);
/// assert_eq!(student.get("marks"), Some(&Value::from(80)));
/// assert_eq!(student.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record holding only an `id` field.
    pub fn with_id(id: impl Into<Value>) -> Self {
        let mut record = Self::new();
        record.insert(ID_FIELD, id);
        record
    }

    /// Set a field, returning the previous value if there was one.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    /// Get a field's value.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Remove a field, keeping the order of the remaining ones.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.shift_remove(field)
    }

    /// Check whether the record has a field.
    #[must_use]
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// The record's `id` value, if present.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.key(ID_FIELD)
    }

    /// The value of the field used as merge key.
    #[must_use]
    pub fn key(&self, field: &str) -> Option<&Value> {
        self.get(field)
    }

    /// Overlay `other`'s fields onto this record.
    ///
    /// Every field of `other` is set on `self`, overwriting any existing value.
    /// The overwrite is shallow: a nested map replaces the old value as a whole.
    /// Fields only present in `self` are left alone.
    pub fn overlay(&mut self, other: &Record) {
        for (field, value) in &other.fields {
            self.fields.insert(field.clone(), value.clone());
        }
    }

    /// Owned variant of [`Record::overlay`].
    pub fn overlay_owned(&mut self, other: Record) {
        self.fields.extend(other.fields);
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(field, value)` pairs in order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.fields.iter()
    }

    /// Iterate over field names in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Build a [`Record`] from `field => value` pairs, kept in the order written.
///
/// Values go through [`Value`]'s `From` impls, so text, integers and
/// `[(key, value); N]` arrays (nested maps) are all accepted.
///
/// ```
/// use record_merge::record;
///
/// let r = record! {
///     "id" => "3",
///     "roll_no" => 11,
///     "extra_info" => [("hello", "world")],
/// };
/// assert_eq!(r.fields().collect::<Vec<_>>(), ["id", "roll_no", "extra_info"]);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($field:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert($field, $value);
        )+
        record
    }};
}

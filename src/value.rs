use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

/// A single field value inside a [`Record`](crate::Record).
///
/// Values are opaque to the merge: they are compared and hashed when used as
/// a key, and otherwise moved around wholesale. A [`Value::Map`] is never
/// merged recursively; a later map replaces an earlier one.
///
/// # Example
///
/// ```
/// use record_merge::Value;
///
/// let name = Value::from("Shrey");
/// let age = Value::from(25);
///
/// assert_eq!(name.as_text(), Some("Shrey"));
/// assert_eq!(age.as_int(), Some(25));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// A text value.
    Text(String),
    /// An integer value.
    Int(i64),
    /// A flat nested mapping of text to text.
    Map(IndexMap<String, String>),
}

impl Value {
    /// Get the text if this is a [`Value::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer if this is a [`Value::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the nested mapping if this is a [`Value::Map`].
    #[must_use]
    pub fn as_map(&self) -> Option<&IndexMap<String, String>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

// IndexMap has no Hash impl. Map equality ignores order, so the entries are
// hashed order-independently to stay consistent with Eq.
impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Self::Text(s) => s.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Map(m) => {
                m.len().hash(state);
                let mut entries: Vec<_> = m.iter().collect();
                entries.sort_unstable();
                for (k, v) in entries {
                    k.hash(state);
                    v.hash(state);
                }
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Map(m) => {
                f.write_str("{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k:?}: {v:?}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<IndexMap<String, String>> for Value {
    fn from(m: IndexMap<String, String>) -> Self {
        Self::Map(m)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Value {
    fn from(entries: [(K, V); N]) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

//! # Grants
//!
//! The value side of a permission-set entry. A grant is either
//! unconditional (JSON `true`) or conditioned on per-attribute value
//! filters (JSON object mapping attribute name to the allowed values).

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Per-attribute allowed-value sets attached to a conditional grant.
///
/// Insertion order is preserved so that derived choice lists render
/// deterministically.
pub type ValueFilters = IndexMap<String, Vec<Value>>;

/// A concrete data record, used to evaluate per-record filters.
///
/// Records are ephemeral: one per rendered row or form, discarded on
/// re-render. The permission set itself never holds records.
pub type Record = serde_json::Map<String, Value>;

/// A single permission grant.
///
/// # Example
///
/// ```
/// use trellis_permissions::Grant;
///
/// let grant: Grant = serde_json::from_str("true").unwrap();
/// assert_eq!(grant, Grant::Unconditional);
///
/// let grant: Grant = serde_json::from_str(r#"{"status": ["draft"]}"#).unwrap();
/// assert!(matches!(grant, Grant::Filtered(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Grant {
    /// Allow with no record conditions.
    Unconditional,
    /// Allow only for records matching every attribute filter.
    Filtered(ValueFilters),
}

impl Grant {
    /// The value filters, if this grant carries any.
    pub fn value_filters(&self) -> Option<&ValueFilters> {
        match self {
            Grant::Unconditional => None,
            Grant::Filtered(filters) => Some(filters),
        }
    }

    /// Check this grant against a concrete record.
    ///
    /// Every filter attribute's record value must be a member of its
    /// allowed set. A missing attribute counts as a mismatch (deny), not an
    /// error. An empty filter mapping passes vacuously, so it behaves like
    /// an unconditional grant.
    pub fn permits(&self, record: &Record) -> bool {
        let filters = match self {
            Grant::Unconditional => return true,
            Grant::Filtered(filters) => filters,
        };
        for (attr, allowed) in filters {
            let matched = record.get(attr).is_some_and(|v| allowed.contains(v));
            if !matched {
                tracing::trace!(%attr, "record value outside allowed set");
                return false;
            }
        }
        true
    }
}

impl<'de> Deserialize<'de> for Grant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Filters(ValueFilters),
        }

        // Key presence is what grants; any boolean value reads as an
        // unconditional grant. Denies are spelled with the `~` key prefix.
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Flag(_) => Grant::Unconditional,
            Raw::Filters(filters) => Grant::Filtered(filters),
        })
    }
}

impl Serialize for Grant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Grant::Unconditional => serializer.serialize_bool(true),
            Grant::Filtered(filters) => filters.serialize(serializer),
        }
    }
}

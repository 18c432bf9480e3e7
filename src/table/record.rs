//! Record Abstractions
//!
//! A record is anything with a stable identifier, comparable fields for
//! sorting, a name-like field for search, and zero or more editable fields.

use std::cmp::Ordering;
use std::sync::Arc;

/// Stable unique identifier of a record.
///
/// Keeps the JSON kind the backend used so mutations can echo it back
/// exactly: `"42"` and `42` are different identifiers.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum RecordId {
    Text(Arc<str>),
    Number(serde_json::Number),
}

impl RecordId {
    /// Create a textual RecordId
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self::Text(id.into())
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Text(s) => f.write_str(s),
            RecordId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A comparable field value
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Field is absent on this record
    Missing,
    Bool(bool),
    Number(f64),
    Text(Arc<str>),
}

impl FieldValue {
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Missing => 0,
            FieldValue::Bool(_) => 1,
            FieldValue::Number(_) => 2,
            FieldValue::Text(_) => 3,
        }
    }

    /// Total order used for sorting.
    ///
    /// `Missing` is less than every present value. Values of different kinds
    /// order by kind (bool < number < text).
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Number)
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(value: Option<i64>) -> Self {
        value.map_or(FieldValue::Missing, |v| FieldValue::Number(v as f64))
    }
}

impl From<Option<&str>> for FieldValue {
    fn from(value: Option<&str>) -> Self {
        value.map_or(FieldValue::Missing, |v| FieldValue::Text(v.into()))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// A record that can be owned and displayed by a [`TableController`](super::TableController)
pub trait TableRecord: Clone + Send + Sync + 'static {
    /// Names of the fields the user may stage and commit
    const EDITABLE_FIELDS: &'static [&'static str];

    /// Stable identifier
    fn record_id(&self) -> &RecordId;

    /// Name-like field matched by the search filter
    fn display_name(&self) -> Option<&str>;

    /// Value of a sortable field; unknown keys are `Missing`
    fn field(&self, key: &str) -> FieldValue;

    /// Current committed value of an editable numeric field
    fn editable_value(&self, field: &str) -> Option<i64>;

    /// Whether the record is shown to shoppers
    fn is_visible(&self) -> bool;

    /// Update the visibility flag in place
    fn set_visible(&mut self, visible: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sorts_below_present() {
        assert_eq!(
            FieldValue::Missing.compare(&FieldValue::Number(-1.0)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Text("a".into()).compare(&FieldValue::Missing),
            Ordering::Greater
        );
        assert_eq!(
            FieldValue::Missing.compare(&FieldValue::Missing),
            Ordering::Equal
        );
    }

    #[test]
    fn test_same_kind_comparison() {
        assert_eq!(
            FieldValue::Number(2.0).compare(&FieldValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Text("Pen".into()).compare(&FieldValue::Text("Mug".into())),
            Ordering::Greater
        );
        assert_eq!(
            FieldValue::Bool(false).compare(&FieldValue::Bool(true)),
            Ordering::Less
        );
    }

    #[test]
    fn test_record_id_keeps_kind() {
        let text = RecordId::from("42");
        let number = RecordId::Number(42.into());
        assert_eq!(text.to_string(), "42");
        assert_eq!(number.to_string(), "42");
        assert_ne!(text, number);
    }
}

//! Edit Session
//!
//! Staged (uncommitted) values for the one record currently in edit mode.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

use super::record::{RecordId, TableRecord};

/// Staged field values, kept as the text the user typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedValues {
    values: BTreeMap<&'static str, String>,
}

impl StagedValues {
    /// Raw staged text for a field
    pub fn text(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Staged value coerced to an integer. Blank, missing and non-numeric
    /// values become `0`; fractional values are truncated.
    pub fn number(&self, field: &str) -> i64 {
        let Some(raw) = self.text(field).map(str::trim) else {
            return 0;
        };
        if let Ok(value) = raw.parse::<i64>() {
            return value;
        }
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => value.trunc() as i64,
            _ => 0,
        }
    }

    /// Iterate `(field, text)` pairs in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn set(&mut self, field: &'static str, value: String) {
        self.values.insert(field, value);
    }
}

/// An open edit session for a single record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    record_id: RecordId,
    staged: StagedValues,
}

impl EditSession {
    /// Open a session seeded from the record's editable fields.
    /// Missing numeric values seed as `0`.
    pub fn begin<R: TableRecord>(record: &R) -> Self {
        let mut staged = StagedValues::default();
        for field in R::EDITABLE_FIELDS {
            let value = record.editable_value(field).unwrap_or(0);
            staged.set(field, value.to_string());
        }
        Self {
            record_id: record.record_id().clone(),
            staged,
        }
    }

    pub fn record_id(&self) -> &RecordId {
        &self.record_id
    }

    pub fn staged(&self) -> &StagedValues {
        &self.staged
    }

    /// Replace the staged text of an editable field
    pub fn stage<R: TableRecord>(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
        let Some(field) = R::EDITABLE_FIELDS.iter().copied().find(|f| *f == field) else {
            return Err(Error::UnknownField {
                field: field.to_string(),
            });
        };
        self.staged.set(field, value.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged(pairs: &[(&'static str, &str)]) -> StagedValues {
        let mut values = StagedValues::default();
        for (field, value) in pairs {
            values.set(field, value.to_string());
        }
        values
    }

    #[test]
    fn test_number_coercion() {
        let values = staged(&[
            ("blank", "   "),
            ("int", " 12 "),
            ("neg", "-3"),
            ("frac", "7.9"),
            ("junk", "abc"),
        ]);
        assert_eq!(values.number("blank"), 0);
        assert_eq!(values.number("int"), 12);
        assert_eq!(values.number("neg"), -3);
        assert_eq!(values.number("frac"), 7);
        assert_eq!(values.number("junk"), 0);
        assert_eq!(values.number("absent"), 0);
    }
}

//! Derived View
//!
//! Sorting and search filtering over the owned record list. The derived view
//! is recomputed on demand and never stored.

use std::cmp::Ordering;

use super::record::TableRecord;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Current sort key and direction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    key: Option<String>,
    direction: SortDirection,
}

impl SortState {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Select a sort key. Re-selecting the current key flips the direction;
    /// a new key starts ascending.
    pub fn select(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    /// Direction shown for a column, if it is the active sort key
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        (self.key.as_deref() == Some(key)).then_some(self.direction)
    }
}

/// Case-insensitive substring match against identifier and name
pub fn matches_search<R: TableRecord>(record: &R, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    record
        .record_id()
        .to_string()
        .to_lowercase()
        .contains(needle_lower)
        || record
            .display_name()
            .is_some_and(|name| name.to_lowercase().contains(needle_lower))
}

/// Sort (stable) then filter the records
pub fn derive_view<'a, R: TableRecord>(
    records: &'a [R],
    sort: &SortState,
    search: &str,
) -> Vec<&'a R> {
    let mut view: Vec<&R> = records.iter().collect();

    if let Some(key) = sort.key() {
        let direction = sort.direction();
        view.sort_by(|a, b| direction.apply(a.field(key).compare(&b.field(key))));
    }

    let needle = search.to_lowercase();
    view.retain(|record| matches_search(*record, &needle));
    view
}

//! Listing rows and the typed directory entries they can be built from.

use serde::{Deserialize, Serialize};

use crate::{
    column::SortKey,
    value::{NumericValue, SortValue},
};

/// Name shown for the pinned parent-directory row.
pub const PARENT_ENTRY_NAME: &str = "..";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Stable row identifier: the row's position in the server-rendered order.
pub struct RowId(pub u32);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One body row with its per-column sort values.
pub struct ListingRow {
    /// Row identifier.
    pub id: RowId,
    /// Parent-directory rows are always ordered first.
    pub pinned: bool,
    /// Value for [`SortKey::Name`].
    pub name: String,
    /// Value for [`SortKey::Size`].
    pub size: NumericValue,
    /// Value for [`SortKey::Date`].
    pub date: NumericValue,
}

impl ListingRow {
    /// Builds a row from raw attribute strings, as read from server-rendered markup.
    ///
    /// Missing values become an empty name or unparsable numbers.
    pub fn from_raw(
        id: RowId,
        pinned: bool,
        name: Option<&str>,
        size: Option<&str>,
        date: Option<&str>,
    ) -> Self {
        Self {
            id,
            pinned,
            name: name.unwrap_or_default().to_string(),
            size: size.map(NumericValue::parse).unwrap_or_default(),
            date: date.map(NumericValue::parse).unwrap_or_default(),
        }
    }

    /// Builds a row from a typed directory entry.
    pub fn from_entry(id: RowId, entry: &ListingEntry) -> Self {
        Self {
            id,
            pinned: false,
            name: entry.name.clone(),
            size: entry.size.map(NumericValue::from_u64).unwrap_or_default(),
            date: entry
                .modified_at_unix_ms
                .map(NumericValue::from_u64)
                .unwrap_or_default(),
        }
    }

    /// Builds the pinned parent-directory row.
    pub fn parent(id: RowId) -> Self {
        Self {
            id,
            pinned: true,
            name: PARENT_ENTRY_NAME.to_string(),
            size: NumericValue::UNPARSABLE,
            date: NumericValue::UNPARSABLE,
        }
    }

    /// Returns the typed value this row carries for `key`.
    pub fn value(&self, key: SortKey) -> SortValue<'_> {
        match key {
            SortKey::Name => SortValue::Text(&self.name),
            SortKey::Size => SortValue::Numeric(self.size),
            SortKey::Date => SortValue::Numeric(self.date),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Directory entry kind.
pub enum ListingEntryKind {
    /// File entry.
    File,
    /// Directory entry.
    Directory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Directory entry as produced by a listing source.
pub struct ListingEntry {
    /// Base name of the entry.
    pub name: String,
    /// File or directory kind.
    pub kind: ListingEntryKind,
    /// File size in bytes (files only).
    #[serde(default)]
    pub size: Option<u64>,
    /// Last-modified time in unix milliseconds when available.
    #[serde(default)]
    pub modified_at_unix_ms: Option<u64>,
}

/// Builds rows for a directory listing, with an optional pinned parent row first.
///
/// Row ids follow the returned order, so the parent row (when present) is `RowId(0)`.
pub fn rows_from_entries(entries: &[ListingEntry], with_parent: bool) -> Vec<ListingRow> {
    let mut rows = Vec::with_capacity(entries.len() + usize::from(with_parent));
    if with_parent {
        rows.push(ListingRow::parent(RowId(0)));
    }
    for entry in entries {
        let id = RowId(rows.len() as u32);
        rows.push(ListingRow::from_entry(id, entry));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_raw_values_fall_back_to_empty_and_unparsable() {
        let row = ListingRow::from_raw(RowId(3), false, None, Some("4 KiB"), None);
        assert_eq!(row.value(SortKey::Name), SortValue::Text(""));
        assert_eq!(
            row.value(SortKey::Size),
            SortValue::Numeric(NumericValue(Some(4.0)))
        );
        assert_eq!(
            row.value(SortKey::Date),
            SortValue::Numeric(NumericValue::UNPARSABLE)
        );
    }

    #[test]
    fn rows_from_entries_puts_parent_first() {
        let entries = vec![ListingEntry {
            name: "notes.txt".to_string(),
            kind: ListingEntryKind::File,
            size: Some(12),
            modified_at_unix_ms: None,
        }];

        let rows = rows_from_entries(&entries, true);

        assert_eq!(rows.len(), 2);
        assert!(rows[0].pinned);
        assert_eq!(rows[0].name, PARENT_ENTRY_NAME);
        assert_eq!(rows[1].id, RowId(1));
        assert_eq!(rows[1].size, NumericValue(Some(12.0)));
        assert!(!rows[1].date.is_parsable());
    }
}

//! Target-independent reading of listing markup snapshots into a [`ListingTable`].
//!
//! The DOM layer copies the attributes it needs into these snapshots so header binding and
//! row construction can be exercised without a browser.

use std::collections::HashMap;

use leptos::logging;
use listing_sort::{
    ColumnHeader, ListingRow, ListingTable, MarkupConfig, RowId, SortDirection, SortKey,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Attributes read from one header cell.
pub struct HeaderMarkup {
    /// Raw sort-key attribute value.
    pub sort_key: Option<String>,
    /// Raw direction attribute value.
    pub direction: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Attributes read from one body row.
pub struct RowMarkup {
    /// Raw `class` attribute.
    pub class_name: String,
    /// Raw per-column value attributes that were present.
    pub values: HashMap<SortKey, String>,
}

impl HeaderMarkup {
    /// Reads a header cell through `attr`, which returns the value of a named attribute.
    pub fn read(config: &MarkupConfig, attr: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            sort_key: attr(&config.sort_key_attr),
            direction: attr(&config.direction_attr),
        }
    }
}

impl RowMarkup {
    /// Reads a body row through `attr`, which returns the value of a named attribute.
    pub fn read(
        config: &MarkupConfig,
        class_name: String,
        attr: impl Fn(&str) -> Option<String>,
    ) -> Self {
        Self {
            class_name,
            values: SortKey::ALL
                .into_iter()
                .filter_map(|key| attr(&config.row_value_attr(key)).map(|value| (key, value)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A header cell that receives a click handler.
pub struct BoundHeader {
    /// Position of the cell in the header snapshot list.
    pub index: usize,
    /// Column the cell sorts by.
    pub key: SortKey,
}

#[derive(Debug, Clone, PartialEq)]
/// Table model plus the header cells to bind.
pub struct ParsedListing {
    /// Table model in server-rendered order.
    pub table: ListingTable,
    /// Headers with a recognized, non-duplicate sort key.
    pub bound_headers: Vec<BoundHeader>,
}

/// Returns `true` when `class_name` contains `pinned_class` as a whole class token.
pub fn is_pinned(class_name: &str, pinned_class: &str) -> bool {
    class_name
        .split_ascii_whitespace()
        .any(|class| class == pinned_class)
}

/// Builds the table model from header and row snapshots.
///
/// Headers without a sort key, with an unknown key, or repeating an earlier key are skipped
/// and logged; they never receive a click handler. Row ids follow row snapshot order.
pub fn parse_listing(
    config: &MarkupConfig,
    headers: &[HeaderMarkup],
    rows: &[RowMarkup],
) -> ParsedListing {
    let mut columns: Vec<ColumnHeader> = Vec::new();
    let mut bound_headers = Vec::new();

    for (index, header) in headers.iter().enumerate() {
        let Some(raw_key) = header.sort_key.as_deref() else {
            logging::warn!("listing header {index} has no `{}`", config.sort_key_attr);
            continue;
        };
        let key = match raw_key.parse::<SortKey>() {
            Ok(key) => key,
            Err(err) => {
                logging::warn!("listing header {index} not sortable: {err}");
                continue;
            }
        };
        if columns.iter().any(|column| column.key == key) {
            logging::warn!("listing header {index} repeats sort key `{key}`");
            continue;
        }
        columns.push(ColumnHeader {
            key,
            direction: SortDirection::from_attr(header.direction.as_deref()),
        });
        bound_headers.push(BoundHeader { index, key });
    }

    let rows = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let value = |key: SortKey| row.values.get(&key).map(String::as_str);
            ListingRow::from_raw(
                RowId(idx as u32),
                is_pinned(&row.class_name, &config.pinned_class),
                value(SortKey::Name),
                value(SortKey::Size),
                value(SortKey::Date),
            )
        })
        .collect();

    ParsedListing {
        table: ListingTable::new(columns, rows),
        bound_headers,
    }
}

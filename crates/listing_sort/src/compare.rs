//! Row comparator and stable reordering.

use std::cmp::Ordering;

use crate::{
    column::{SortDirection, SortKey},
    row::{ListingRow, RowId},
    value::SortValue,
};

/// Compares two rows for the active column.
///
/// Pinned rows come before all other rows and compare equal to each other. Unparsable
/// numeric values stay after parsable ones regardless of direction. Every other comparison
/// is reversed for [`SortDirection::Descending`].
pub fn compare_rows(
    a: &ListingRow,
    b: &ListingRow,
    key: SortKey,
    direction: SortDirection,
) -> Ordering {
    match (a.pinned, b.pinned) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }

    let ordering = match (a.value(key), b.value(key)) {
        (SortValue::Text(left), SortValue::Text(right)) => compare_text_ignore_case(left, right),
        (SortValue::Numeric(left), SortValue::Numeric(right))
            if left.is_parsable() != right.is_parsable() =>
        {
            return left.cmp_ascending(right);
        }
        (SortValue::Numeric(left), SortValue::Numeric(right)) => left.cmp_ascending(right),
        // Both sides come from the same key.
        _ => Ordering::Equal,
    };

    match direction {
        SortDirection::Descending => ordering.reverse(),
        SortDirection::None | SortDirection::Ascending => ordering,
    }
}

// Lowercased names compare by UTF-16 code unit, the order browsers use for strings.
fn compare_text_ignore_case(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .encode_utf16()
        .cmp(right.to_lowercase().encode_utf16())
}

/// Stably sorts `rows` in place for the given column and direction.
pub fn sort_rows(rows: &mut [ListingRow], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| compare_rows(a, b, key, direction));
}

/// Returns the row ids in their current order.
pub fn row_order(rows: &[ListingRow]) -> Vec<RowId> {
    rows.iter().map(|row| row.id).collect()
}

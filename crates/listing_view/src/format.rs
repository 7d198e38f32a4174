//! Display formatting for listing cells.

use chrono::{DateTime, Utc};
use listing_sort::{ListingEntry, ListingEntryKind, SortDirection};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with a binary unit (`"1.5 KB"`); missing sizes render as `"-"`.
pub fn format_size(size: Option<u64>) -> String {
    let Some(bytes) = size else {
        return "-".to_string();
    };
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", SIZE_UNITS[unit])
}

/// Formats a unix-millisecond timestamp as `Tue Nov 14 22:13:20 2023` (UTC).
pub fn format_modified(modified_at_unix_ms: Option<u64>) -> String {
    modified_at_unix_ms
        .and_then(|ms| i64::try_from(ms).ok())
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|at| at.format("%a %b %d %H:%M:%S %Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Type column label for an entry.
pub fn kind_label(entry: &ListingEntry) -> &'static str {
    match entry.kind {
        ListingEntryKind::Directory => "Folder",
        ListingEntryKind::File => "File",
    }
}

/// Header glyph for a column direction.
pub fn direction_glyph(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::None => "",
        SortDirection::Ascending => " \u{25B2}",
        SortDirection::Descending => " \u{25BC}",
    }
}

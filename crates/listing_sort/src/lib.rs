//! Typed sort model for directory listing tables.
//!
//! This crate is the target-independent core of the listing sorter. It owns the closed
//! [`SortKey`] set, the per-column [`SortDirection`] state machine, typed row values, the
//! row comparator, and the [`reduce_sort`] transition that turns a header click into render
//! effects. Concrete rendering lives behind [`ListingSurface`]: the browser adapter in
//! `listing_sort_web` moves existing row nodes, and `listing_view` renders reactively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod compare;
pub mod config;
pub mod error;
pub mod reducer;
pub mod row;
pub mod surface;
pub mod value;

pub use column::{ColumnHeader, SortDirection, SortKey};
pub use compare::{compare_rows, row_order, sort_rows};
pub use config::{MarkupConfig, CONFIG_ATTR};
pub use error::SortError;
pub use reducer::{reduce_sort, ListingTable, SortAction, SortEffect};
pub use row::{
    rows_from_entries, ListingEntry, ListingEntryKind, ListingRow, RowId, PARENT_ENTRY_NAME,
};
pub use surface::{apply_effects, ListingSorter, ListingSurface, MemoryListingSurface};
pub use value::{NumericValue, SortValue};

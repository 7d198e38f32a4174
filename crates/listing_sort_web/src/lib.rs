//! Browser (`wasm32`) binding of the [`listing_sort`] reducer to server-rendered listing markup.
//!
//! The page template owns the table: a container with a stable id, header cells tagged with a
//! sort-key attribute, and body rows carrying per-column value attributes. This crate reads
//! that markup into a [`listing_sort::ListingTable`], binds one click handler per recognized
//! header, and renders reducer effects by moving the existing row nodes.
//!
//! - `markup`: target-independent snapshot parsing (header binding, row values, pinned rows)
//! - `dom`: live DOM surface and [`TableSorter`]
//! - `ready`: readiness gate and document-level entrypoints

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dom;
pub mod markup;
pub mod ready;

pub use dom::{DomListingSurface, TableSorter};
pub use markup::{is_pinned, parse_listing, BoundHeader, HeaderMarkup, ParsedListing, RowMarkup};
pub use ready::{attach_to_document, init_when_ready, report_attach, run_when_ready};

//! Error type shared by the sort reducer and the markup adapters.

use thiserror::Error;

use crate::column::SortKey;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while attaching to a listing table or applying a sort.
pub enum SortError {
    /// No element carries the configured container id.
    #[error("listing container `#{0}` not found")]
    ContainerNotFound(String),
    /// The container has no body region matching the configured selector.
    #[error("listing body region not found")]
    BodyNotFound,
    /// A sort was requested for a column the table does not have.
    #[error("no sortable `{0}` column in listing header")]
    ColumnNotPresent(SortKey),
    /// A header carries a sort-key attribute outside the known key set.
    #[error("unknown sort key `{0}`")]
    UnknownSortKey(String),
    /// Markup configuration could not be parsed.
    #[error("invalid listing sort config: {0}")]
    InvalidConfig(String),
    /// A browser DOM call failed.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl SortError {
    /// Returns `true` for missing-markup errors that leave the page in server-rendered order.
    pub fn is_markup_precondition(&self) -> bool {
        matches!(self, Self::ContainerNotFound(_) | Self::BodyNotFound)
    }
}

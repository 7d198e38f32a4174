//! Column keys and the per-column direction state machine.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::SortError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Column identifier driving row comparison.
pub enum SortKey {
    /// Entry base name, compared case-insensitively.
    Name,
    /// Entry size, compared numerically.
    Size,
    /// Last-modified timestamp, compared numerically.
    Date,
}

impl SortKey {
    /// Every key the listing knows how to sort by.
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Size, SortKey::Date];

    /// Attribute/serialized spelling of the key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Size => "size",
            Self::Date => "date",
        }
    }

    /// Human-readable header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
            Self::Date => "Modified",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = SortError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SortError::UnknownSortKey(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Current sort direction of a single column.
pub enum SortDirection {
    /// Column is not driving the sort.
    #[default]
    None,
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Direction a column moves to when its header is activated.
    ///
    /// Only `Ascending` flips to `Descending`; every other state goes to `Ascending`.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::None | Self::Descending => Self::Ascending,
        }
    }

    /// Returns `true` when the column is the active sort column.
    pub fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Value written to the header's direction attribute (`None` removes the attribute).
    pub fn attr_value(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Ascending => Some("asc"),
            Self::Descending => Some("desc"),
        }
    }

    /// Parses a direction attribute value; anything unrecognized is `None`.
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("asc") => Self::Ascending,
            Some(value) if value.eq_ignore_ascii_case("desc") => Self::Descending,
            _ => Self::None,
        }
    }

    /// Value for the `aria-sort` attribute on the header cell.
    pub fn aria_sort(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// A sortable column descriptor from the header region.
pub struct ColumnHeader {
    /// Key the column sorts by.
    pub key: SortKey,
    /// Current direction flag.
    pub direction: SortDirection,
}

impl ColumnHeader {
    /// Creates an inactive column.
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_ascending_toggles_to_descending() {
        assert_eq!(SortDirection::None.toggled(), SortDirection::Ascending);
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
    }

    #[test]
    fn sort_key_parses_trimmed_and_case_insensitive() {
        assert_eq!(" Size ".parse::<SortKey>().expect("size"), SortKey::Size);
        assert_eq!("DATE".parse::<SortKey>().expect("date"), SortKey::Date);
        assert_eq!(
            "owner".parse::<SortKey>(),
            Err(SortError::UnknownSortKey("owner".to_string()))
        );
    }

    #[test]
    fn direction_attr_round_trips() {
        for direction in [
            SortDirection::None,
            SortDirection::Ascending,
            SortDirection::Descending,
        ] {
            assert_eq!(SortDirection::from_attr(direction.attr_value()), direction);
        }
        assert_eq!(SortDirection::from_attr(Some("sideways")), SortDirection::None);
    }

    #[test]
    fn serde_values_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&SortKey::Date).expect("serialize"),
            "\"date\""
        );
        assert_eq!(
            serde_json::to_string(&SortDirection::Descending).expect("serialize"),
            "\"descending\""
        );
    }
}

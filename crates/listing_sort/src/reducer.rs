//! Sort actions, render effects, and transition logic for a listing table.

use leptos::logging;

use crate::{
    column::{ColumnHeader, SortDirection, SortKey},
    compare::{row_order, sort_rows},
    error::SortError,
    row::{ListingRow, RowId},
};

#[derive(Debug, Clone, PartialEq, Default)]
/// The sorter's view of one listing table: header columns plus body rows in display order.
pub struct ListingTable {
    columns: Vec<ColumnHeader>,
    rows: Vec<ListingRow>,
}

impl ListingTable {
    /// Creates a table from its header columns and rows in current display order.
    ///
    /// If the markup marks more than one column as active, the first one keeps its direction
    /// and the rest are reset so at most one column is active.
    pub fn new(mut columns: Vec<ColumnHeader>, rows: Vec<ListingRow>) -> Self {
        let mut seen_active = false;
        for column in &mut columns {
            if column.direction.is_active() {
                if seen_active {
                    column.direction = SortDirection::None;
                }
                seen_active = true;
            }
        }
        Self { columns, rows }
    }

    /// Header columns in header order.
    pub fn columns(&self) -> &[ColumnHeader] {
        &self.columns
    }

    /// Rows in current display order.
    pub fn rows(&self) -> &[ListingRow] {
        &self.rows
    }

    /// Current display order as row ids.
    pub fn order(&self) -> Vec<RowId> {
        row_order(&self.rows)
    }

    /// Returns `true` when the table has a column for `key`.
    pub fn has_column(&self, key: SortKey) -> bool {
        self.columns.iter().any(|column| column.key == key)
    }

    /// Direction flag of the column for `key` (`None` when the column is absent).
    pub fn direction(&self, key: SortKey) -> SortDirection {
        self.columns
            .iter()
            .find(|column| column.key == key)
            .map(|column| column.direction)
            .unwrap_or_default()
    }

    /// The column currently driving the sort, if any.
    pub fn active_column(&self) -> Option<ColumnHeader> {
        self.columns
            .iter()
            .copied()
            .find(|column| column.direction.is_active())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by [`reduce_sort`].
pub enum SortAction {
    /// A header for `key` was clicked.
    Activate {
        /// Column that was clicked.
        key: SortKey,
    },
    /// Establish the default view once the sorter attaches.
    InitialSort {
        /// Column to sort ascending when present.
        default_key: SortKey,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Render intents emitted by [`reduce_sort`] for a [`crate::ListingSurface`] to apply.
pub enum SortEffect {
    /// Update a header's direction flag.
    SetDirection {
        /// Column to update.
        key: SortKey,
        /// New direction.
        direction: SortDirection,
    },
    /// Render body rows in this order.
    Reorder(Vec<RowId>),
}

/// Applies a [`SortAction`] to the table and collects the resulting render effects.
///
/// # Errors
///
/// Returns [`SortError::ColumnNotPresent`] when `Activate` names a column the table lacks.
/// `InitialSort` for a missing column is not an error: the table keeps its current order
/// and no effects are returned.
pub fn reduce_sort(
    table: &mut ListingTable,
    action: SortAction,
) -> Result<Vec<SortEffect>, SortError> {
    match action {
        SortAction::Activate { key } => activate(table, key),
        SortAction::InitialSort { default_key } => {
            if !table.has_column(default_key) {
                logging::log!("listing has no `{default_key}` column; keeping rendered order");
                return Ok(Vec::new());
            }
            activate(table, default_key)
        }
    }
}

fn activate(table: &mut ListingTable, key: SortKey) -> Result<Vec<SortEffect>, SortError> {
    let current = table
        .columns
        .iter()
        .find(|column| column.key == key)
        .map(|column| column.direction)
        .ok_or(SortError::ColumnNotPresent(key))?;
    let next = current.toggled();

    let mut effects = Vec::new();
    for column in &mut table.columns {
        let direction = if column.key == key {
            next
        } else {
            SortDirection::None
        };
        if column.direction != direction {
            column.direction = direction;
            effects.push(SortEffect::SetDirection {
                key: column.key,
                direction,
            });
        }
    }

    sort_rows(&mut table.rows, key, next);
    effects.push(SortEffect::Reorder(table.order()));
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn columns() -> Vec<ColumnHeader> {
        SortKey::ALL.into_iter().map(ColumnHeader::new).collect()
    }

    fn table() -> ListingTable {
        ListingTable::new(
            columns(),
            vec![
                ListingRow::from_raw(RowId(0), false, Some("b"), Some("2"), Some("300")),
                ListingRow::from_raw(RowId(1), false, Some("a"), Some("10"), Some("100")),
                ListingRow::from_raw(RowId(2), true, Some(".."), None, None),
            ],
        )
    }

    #[test]
    fn activate_sets_direction_and_emits_reorder() {
        let mut table = table();

        let effects =
            reduce_sort(&mut table, SortAction::Activate { key: SortKey::Name }).expect("sort");

        assert_eq!(
            effects,
            vec![
                SortEffect::SetDirection {
                    key: SortKey::Name,
                    direction: SortDirection::Ascending,
                },
                SortEffect::Reorder(vec![RowId(2), RowId(1), RowId(0)]),
            ]
        );
        assert_eq!(table.direction(SortKey::Name), SortDirection::Ascending);
    }

    #[test]
    fn switching_columns_resets_previous_column() {
        let mut table = table();
        reduce_sort(&mut table, SortAction::Activate { key: SortKey::Name }).expect("name");

        let effects =
            reduce_sort(&mut table, SortAction::Activate { key: SortKey::Size }).expect("size");

        assert!(effects.contains(&SortEffect::SetDirection {
            key: SortKey::Name,
            direction: SortDirection::None,
        }));
        assert_eq!(table.direction(SortKey::Name), SortDirection::None);
        assert_eq!(table.direction(SortKey::Size), SortDirection::Ascending);
        assert_eq!(
            table.active_column(),
            Some(ColumnHeader {
                key: SortKey::Size,
                direction: SortDirection::Ascending,
            })
        );
    }

    #[test]
    fn activating_missing_column_is_an_error() {
        let mut table = ListingTable::new(vec![ColumnHeader::new(SortKey::Name)], Vec::new());
        assert_eq!(
            reduce_sort(&mut table, SortAction::Activate { key: SortKey::Date }),
            Err(SortError::ColumnNotPresent(SortKey::Date))
        );
    }

    #[test]
    fn initial_sort_without_default_column_keeps_order() {
        let mut table = ListingTable::new(
            vec![ColumnHeader::new(SortKey::Size)],
            vec![ListingRow::from_raw(RowId(0), false, Some("z"), Some("1"), None)],
        );

        let effects = reduce_sort(
            &mut table,
            SortAction::InitialSort {
                default_key: SortKey::Name,
            },
        )
        .expect("initial sort");

        assert!(effects.is_empty());
        assert_eq!(table.direction(SortKey::Size), SortDirection::None);
    }

    #[test]
    fn markup_with_several_active_columns_is_normalized() {
        let table = ListingTable::new(
            vec![
                ColumnHeader {
                    key: SortKey::Size,
                    direction: SortDirection::Descending,
                },
                ColumnHeader {
                    key: SortKey::Name,
                    direction: SortDirection::Ascending,
                },
            ],
            Vec::new(),
        );

        assert_eq!(table.direction(SortKey::Size), SortDirection::Descending);
        assert_eq!(table.direction(SortKey::Name), SortDirection::None);
    }
}

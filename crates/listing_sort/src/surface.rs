//! Render surface contract and the sorter that drives it.

use std::collections::HashMap;

use crate::{
    column::{SortDirection, SortKey},
    error::SortError,
    reducer::{reduce_sort, ListingTable, SortAction, SortEffect},
    row::RowId,
};

/// Render target for sort effects (page markup, a reactive view, or a test recorder).
pub trait ListingSurface {
    /// Writes a column's direction flag.
    ///
    /// # Errors
    ///
    /// Returns an error when the surface cannot reflect the direction.
    fn set_direction(&mut self, key: SortKey, direction: SortDirection) -> Result<(), SortError>;

    /// Renders body rows in `order`. Rows are moved, never created or destroyed.
    ///
    /// # Errors
    ///
    /// Returns an error when the surface cannot reorder its rows.
    fn reorder(&mut self, order: &[RowId]) -> Result<(), SortError>;
}

/// Applies reducer effects to a surface in emission order.
///
/// # Errors
///
/// Returns the first surface error; later effects are not applied.
pub fn apply_effects<S: ListingSurface + ?Sized>(
    surface: &mut S,
    effects: &[SortEffect],
) -> Result<(), SortError> {
    for effect in effects {
        match effect {
            SortEffect::SetDirection { key, direction } => {
                surface.set_direction(*key, *direction)?
            }
            SortEffect::Reorder(order) => surface.reorder(order)?,
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
/// In-memory surface that records the last applied directions and row order.
pub struct MemoryListingSurface {
    directions: HashMap<SortKey, SortDirection>,
    order: Vec<RowId>,
    reorder_count: usize,
}

impl MemoryListingSurface {
    /// Last direction written for `key`.
    pub fn direction(&self, key: SortKey) -> SortDirection {
        self.directions.get(&key).copied().unwrap_or_default()
    }

    /// Last rendered row order.
    pub fn order(&self) -> &[RowId] {
        &self.order
    }

    /// Number of reorder effects applied.
    pub fn reorder_count(&self) -> usize {
        self.reorder_count
    }
}

impl ListingSurface for MemoryListingSurface {
    fn set_direction(&mut self, key: SortKey, direction: SortDirection) -> Result<(), SortError> {
        self.directions.insert(key, direction);
        Ok(())
    }

    fn reorder(&mut self, order: &[RowId]) -> Result<(), SortError> {
        self.order = order.to_vec();
        self.reorder_count += 1;
        Ok(())
    }
}

#[derive(Debug)]
/// Pairs a [`ListingTable`] with the surface it renders to.
///
/// Every action runs synchronously: reduce, then apply effects, before returning.
pub struct ListingSorter<S> {
    table: ListingTable,
    surface: S,
}

impl<S: ListingSurface> ListingSorter<S> {
    /// Wraps a table and surface without sorting.
    pub fn new(table: ListingTable, surface: S) -> Self {
        Self { table, surface }
    }

    /// Wraps a table and surface, then applies the initial sort on `default_key`.
    ///
    /// # Errors
    ///
    /// Returns surface errors raised while rendering the initial order.
    pub fn attach(
        table: ListingTable,
        surface: S,
        default_key: SortKey,
    ) -> Result<Self, SortError> {
        let mut sorter = Self::new(table, surface);
        sorter.dispatch(SortAction::InitialSort { default_key })?;
        Ok(sorter)
    }

    /// Handles a header click for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::ColumnNotPresent`] for unknown columns, or surface errors.
    pub fn click(&mut self, key: SortKey) -> Result<(), SortError> {
        self.dispatch(SortAction::Activate { key })
    }

    /// Reduces an action and renders its effects.
    ///
    /// # Errors
    ///
    /// Returns reducer or surface errors.
    pub fn dispatch(&mut self, action: SortAction) -> Result<(), SortError> {
        let effects = reduce_sort(&mut self.table, action)?;
        apply_effects(&mut self.surface, &effects)
    }

    /// Current table state.
    pub fn table(&self) -> &ListingTable {
        &self.table
    }

    /// Render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

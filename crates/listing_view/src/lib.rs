//! Client-rendered directory listing with sortable column headers.
//!
//! Rows are rendered through a keyed `<For>` over a row-order signal, so a sort only moves
//! existing row views. The order and header directions come from the same
//! [`listing_sort::reduce_sort`] transition the markup adapter uses.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod format;
pub mod links;

use std::{collections::HashMap, rc::Rc};

use leptos::*;
use listing_sort::{
    rows_from_entries, ColumnHeader, ListingEntry, ListingEntryKind, ListingSorter, ListingSurface,
    ListingTable, RowId, SortDirection, SortError, SortKey, PARENT_ENTRY_NAME,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    format::{direction_glyph, format_modified, format_size, kind_label},
    links::{breadcrumbs, entry_href, normalize_listing_path, parent_href},
};

/// Class on the parent-directory row, shared with the markup sorter's default config.
pub const PINNED_ROW_CLASS: &str = "parent-dir";

#[derive(Debug, Clone, Copy)]
/// [`ListingSurface`] that writes row order and header directions into reactive signals.
pub struct SignalListingSurface {
    /// Row order rendered by the body.
    pub order: RwSignal<Vec<RowId>>,
    /// Direction flag per column.
    pub directions: RwSignal<HashMap<SortKey, SortDirection>>,
}

impl ListingSurface for SignalListingSurface {
    fn set_direction(&mut self, key: SortKey, direction: SortDirection) -> Result<(), SortError> {
        self.directions.update(|directions| {
            directions.insert(key, direction);
        });
        Ok(())
    }

    fn reorder(&mut self, order: &[RowId]) -> Result<(), SortError> {
        if self.order.with_untracked(|current| current.as_slice() != order) {
            self.order.set(order.to_vec());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pre-formatted cell text for one rendered row.
pub struct DisplayRow {
    /// Name cell; directories end in `/`.
    pub name: String,
    /// Link target of the name cell.
    pub href: String,
    /// Type cell.
    pub kind: &'static str,
    /// Size cell.
    pub size: String,
    /// Modified cell.
    pub modified: String,
    /// Parent-directory row.
    pub pinned: bool,
}

/// Formats display rows indexed by [`RowId`], matching [`rows_from_entries`] ids.
pub fn display_rows(cwd: &str, entries: &[ListingEntry], with_parent: bool) -> Vec<DisplayRow> {
    let parent = with_parent.then(|| DisplayRow {
        name: format!("{PARENT_ENTRY_NAME}/"),
        href: parent_href(cwd),
        kind: "Folder",
        size: "-".to_string(),
        modified: "-".to_string(),
        pinned: true,
    });
    parent
        .into_iter()
        .chain(entries.iter().map(|entry| {
            let is_dir = entry.kind == ListingEntryKind::Directory;
            DisplayRow {
                name: if is_dir {
                    format!("{}/", entry.name)
                } else {
                    entry.name.clone()
                },
                href: entry_href(cwd, entry),
                kind: kind_label(entry),
                size: if is_dir {
                    "-".to_string()
                } else {
                    format_size(entry.size)
                },
                modified: format_modified(entry.modified_at_unix_ms),
                pinned: false,
            }
        }))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
/// Listing launch parameters accepted by [`ListingPane`].
pub struct ListingParams {
    /// Directory path shown in the pane header.
    pub cwd: String,
    /// Directory entries to list.
    pub entries: Vec<ListingEntry>,
}

impl ListingParams {
    /// Reads params from a JSON launch payload; malformed payloads yield an empty listing.
    ///
    /// Hidden entries (names starting with `.`) are dropped.
    pub fn from_launch_params(launch_params: &Value) -> Self {
        let mut params: Self = match serde_json::from_value(launch_params.clone()) {
            Ok(params) => params,
            Err(err) => {
                logging::warn!("listing launch params ignored: {err}");
                return Self::default();
            }
        };
        params.entries.retain(|entry| !entry.name.starts_with('.'));
        params
    }

    /// Returns `true` when the listing is below the root and shows a parent row.
    pub fn has_parent(&self) -> bool {
        normalize_listing_path(&self.cwd) != "/"
    }
}

/// Listing pane: breadcrumb header, sortable table, and item count.
#[component]
pub fn ListingPane(launch_params: Value) -> impl IntoView {
    let params = ListingParams::from_launch_params(&launch_params);
    let with_parent = params.has_parent();
    let item_count = params.entries.len();
    let cwd = normalize_listing_path(&params.cwd);
    let crumbs = breadcrumbs(&cwd)
        .into_iter()
        .enumerate()
        .map(|(idx, crumb)| {
            let label = match crumb.href {
                Some(href) => view! { <a href=href>{crumb.label}</a> }.into_view(),
                None => crumb.label.into_view(),
            };
            view! { <span class="crumb">{(idx > 0).then_some(" / ")}{label}</span> }
        })
        .collect_view();

    view! {
        <section class="listing-pane">
            <div class="pane-header">
                <h1 class="pane-path">"Index of " {crumbs}</h1>
            </div>
            <div class="listing-wrap">
                <SortableListing entries=params.entries with_parent=with_parent cwd=cwd />
            </div>
            <div class="app-statusbar">
                <span>{format!("{item_count} item(s)")}</span>
            </div>
        </section>
    }
}

/// Sortable listing table, initially sorted by name ascending.
#[component]
pub fn SortableListing(
    entries: Vec<ListingEntry>,
    #[prop(optional)] with_parent: bool,
    /// Directory the entries live in; links resolve against it.
    #[prop(optional, into)]
    cwd: String,
) -> impl IntoView {
    let rows = rows_from_entries(&entries, with_parent);
    let display = Rc::new(display_rows(&cwd, &entries, with_parent));
    let surface = SignalListingSurface {
        order: create_rw_signal(rows.iter().map(|row| row.id).collect()),
        directions: create_rw_signal(HashMap::new()),
    };
    let columns = SortKey::ALL.into_iter().map(ColumnHeader::new).collect();
    let table = ListingTable::new(columns, rows);
    let sorter = match ListingSorter::attach(table.clone(), surface, SortKey::Name) {
        Ok(sorter) => sorter,
        Err(err) => {
            logging::warn!("listing initial sort failed: {err}");
            ListingSorter::new(table, surface)
        }
    };
    let sorter = store_value(sorter);
    let on_sort = Callback::new(move |key: SortKey| {
        sorter.update_value(|sorter| {
            if let Err(err) = sorter.click(key) {
                logging::warn!("listing sort failed: {err}");
            }
        });
    });

    view! {
        <table class="listing-table" role="grid" aria-label="Directory listing">
            <thead>
                <tr>
                    {SortKey::ALL
                        .into_iter()
                        .map(|key| {
                            view! {
                                <SortHeader
                                    sort_key=key
                                    directions=surface.directions
                                    on_sort=on_sort
                                />
                            }
                        })
                        .collect_view()}
                    <th>"Type"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || surface.order.get()
                    key=|id| *id
                    children=move |id: RowId| {
                        display
                            .get(id.0 as usize)
                            .cloned()
                            .map(|row| view! { <ListingRowView row=row /> })
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
fn SortHeader(
    sort_key: SortKey,
    directions: RwSignal<HashMap<SortKey, SortDirection>>,
    on_sort: Callback<SortKey>,
) -> impl IntoView {
    let direction = Signal::derive(move || {
        directions.with(|directions| directions.get(&sort_key).copied().unwrap_or_default())
    });

    view! {
        <th
            data-sort-by=sort_key.as_str()
            data-sort-direction=move || direction.get().attr_value()
            aria-sort=move || direction.get().aria_sort()
        >
            <button type="button" class="listing-sort" on:click=move |_| on_sort.call(sort_key)>
                {sort_key.label()}
                {move || direction_glyph(direction.get())}
            </button>
        </th>
    }
}

#[component]
fn ListingRowView(row: DisplayRow) -> impl IntoView {
    view! {
        <tr class=if row.pinned { PINNED_ROW_CLASS } else { "" }>
            <td>
                <a href=row.href>{row.name}</a>
            </td>
            <td>{row.size}</td>
            <td>{row.modified}</td>
            <td>{row.kind}</td>
        </tr>
    }
}

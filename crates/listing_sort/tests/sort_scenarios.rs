use listing_sort::{
    ColumnHeader, ListingRow, ListingSorter, ListingTable, MemoryListingSurface, RowId,
    SortDirection, SortKey,
};
use pretty_assertions::assert_eq;

fn all_columns() -> Vec<ColumnHeader> {
    SortKey::ALL.into_iter().map(ColumnHeader::new).collect()
}

fn named_rows(entries: &[(&str, bool)]) -> Vec<ListingRow> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, (name, pinned))| {
            ListingRow::from_raw(RowId(idx as u32), *pinned, Some(*name), None, None)
        })
        .collect()
}

fn rendered_names(sorter: &ListingSorter<MemoryListingSurface>) -> Vec<String> {
    let rows = sorter.table().rows();
    sorter
        .surface()
        .order()
        .iter()
        .map(|id| {
            rows.iter()
                .find(|row| row.id == *id)
                .map(|row| row.name.clone())
                .expect("rendered row exists")
        })
        .collect()
}

fn listing() -> ListingTable {
    let row = |id, name, size, date| {
        ListingRow::from_raw(RowId(id), false, Some(name), Some(size), Some(date))
    };
    ListingTable::new(
        all_columns(),
        vec![
            row(0, "src", "4096", "1700000300"),
            row(1, "Cargo.toml", "812", "1700000100"),
            ListingRow::parent(RowId(2)),
            row(3, "README.md", "15k", "1700000200"),
            row(4, "build.rs", "96", "1700000400"),
        ],
    )
}

#[test]
fn initial_sort_orders_by_name_with_parent_first() {
    let table = ListingTable::new(
        all_columns(),
        named_rows(&[("b", false), ("a", false), ("..", true)]),
    );

    let sorter = ListingSorter::attach(table, MemoryListingSurface::default(), SortKey::Name)
        .expect("attach");

    assert_eq!(rendered_names(&sorter), vec!["..", "a", "b"]);
    assert_eq!(sorter.table().direction(SortKey::Name), SortDirection::Ascending);
}

#[test]
fn second_name_click_sorts_descending_keeping_parent_first() {
    let table = ListingTable::new(
        all_columns(),
        named_rows(&[("b", false), ("a", false), ("..", true)]),
    );
    let mut sorter = ListingSorter::attach(table, MemoryListingSurface::default(), SortKey::Name)
        .expect("attach");

    sorter.click(SortKey::Name).expect("toggle");

    assert_eq!(rendered_names(&sorter), vec!["..", "b", "a"]);
    assert_eq!(sorter.surface().direction(SortKey::Name), SortDirection::Descending);
}

#[test]
fn size_sort_is_numeric_not_lexicographic() {
    let table = ListingTable::new(
        all_columns(),
        vec![
            ListingRow::from_raw(RowId(0), false, Some("ten"), Some("10"), None),
            ListingRow::from_raw(RowId(1), false, Some("two"), Some("2"), None),
            ListingRow::from_raw(RowId(2), false, Some("one"), Some("1"), None),
        ],
    );
    let mut sorter = ListingSorter::new(table, MemoryListingSurface::default());

    sorter.click(SortKey::Size).expect("size");

    assert_eq!(rendered_names(&sorter), vec!["one", "two", "ten"]);
}

#[test]
fn toggling_any_column_reverses_non_pinned_order() {
    for key in SortKey::ALL {
        let mut sorter = ListingSorter::new(listing(), MemoryListingSurface::default());

        sorter.click(key).expect("ascending");
        let ascending = rendered_names(&sorter);
        sorter.click(key).expect("descending");
        let descending = rendered_names(&sorter);

        assert_eq!(ascending[0], "..", "{key}");
        assert_eq!(descending[0], "..", "{key}");
        let mut reversed = ascending[1..].to_vec();
        reversed.reverse();
        assert_eq!(descending[1..].to_vec(), reversed, "{key}");
    }
}

#[test]
fn every_click_leaves_exactly_one_active_column() {
    let mut sorter = ListingSorter::new(listing(), MemoryListingSurface::default());
    let clicks = [
        SortKey::Date,
        SortKey::Date,
        SortKey::Size,
        SortKey::Name,
        SortKey::Name,
        SortKey::Date,
    ];

    for key in clicks {
        sorter.click(key).expect("click");
        for other in SortKey::ALL {
            let expected_active = other == key;
            assert_eq!(
                sorter.table().direction(other).is_active(),
                expected_active,
                "after clicking {key}, column {other}"
            );
            assert_eq!(
                sorter.surface().direction(other),
                sorter.table().direction(other)
            );
        }
    }
}

#[test]
fn date_sort_uses_numeric_timestamps() {
    let mut sorter = ListingSorter::new(listing(), MemoryListingSurface::default());

    sorter.click(SortKey::Date).expect("date");

    assert_eq!(
        rendered_names(&sorter),
        vec!["..", "Cargo.toml", "README.md", "src", "build.rs"]
    );
}

#[test]
fn size_sort_uses_leading_numeric_prefix() {
    let mut sorter = ListingSorter::new(listing(), MemoryListingSurface::default());

    sorter.click(SortKey::Size).expect("size");

    assert_eq!(
        rendered_names(&sorter),
        vec!["..", "README.md", "build.rs", "Cargo.toml", "src"]
    );
}

#[test]
fn clicking_with_no_rows_completes() {
    let table = ListingTable::new(all_columns(), Vec::new());
    let mut sorter = ListingSorter::new(table, MemoryListingSurface::default());

    sorter.click(SortKey::Name).expect("empty click");
    sorter.click(SortKey::Size).expect("empty click");

    assert!(sorter.surface().order().is_empty());
    assert_eq!(sorter.surface().reorder_count(), 2);
}

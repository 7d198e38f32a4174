use std::collections::HashMap;

use listing_sort::{
    ListingSorter, MarkupConfig, MemoryListingSurface, RowId, SortDirection, SortKey,
};
use listing_sort_web::{parse_listing, HeaderMarkup, RowMarkup};
use pretty_assertions::assert_eq;

fn header(key: &str) -> HeaderMarkup {
    HeaderMarkup {
        sort_key: Some(key.to_string()),
        direction: None,
    }
}

fn row(class_name: &str, name: &str, size: &str, date: &str) -> RowMarkup {
    RowMarkup {
        class_name: class_name.to_string(),
        values: HashMap::from([
            (SortKey::Name, name.to_string()),
            (SortKey::Size, size.to_string()),
            (SortKey::Date, date.to_string()),
        ]),
    }
}

fn rendered_listing() -> (Vec<HeaderMarkup>, Vec<RowMarkup>) {
    (
        vec![header("name"), header("size"), header("date")],
        vec![
            row("dir", "photos", "-", "1699990000"),
            row("parent-dir", "..", "-", "-"),
            row("file", "Zeta.log", "1.5 MB", "1700000000"),
            row("file", "alpha.txt", "300", "1690000000"),
        ],
    )
}

#[test]
fn rendered_markup_sorts_by_name_on_attach() {
    let (headers, rows) = rendered_listing();
    let config = MarkupConfig::default();
    let parsed = parse_listing(&config, &headers, &rows);

    let sorter =
        ListingSorter::attach(parsed.table, MemoryListingSurface::default(), config.default_key)
            .expect("attach");

    assert_eq!(
        sorter.surface().order(),
        &[RowId(1), RowId(3), RowId(0), RowId(2)]
    );
    assert_eq!(sorter.surface().direction(SortKey::Name), SortDirection::Ascending);
}

#[test]
fn unparsable_sizes_sort_after_numbers_in_both_directions() {
    let (headers, rows) = rendered_listing();
    let parsed = parse_listing(&MarkupConfig::default(), &headers, &rows);
    let mut sorter = ListingSorter::new(parsed.table, MemoryListingSurface::default());

    sorter.click(SortKey::Size).expect("ascending");
    assert_eq!(
        sorter.surface().order(),
        &[RowId(1), RowId(2), RowId(3), RowId(0)]
    );

    sorter.click(SortKey::Size).expect("descending");
    assert_eq!(
        sorter.surface().order(),
        &[RowId(1), RowId(3), RowId(2), RowId(0)]
    );
}

#[test]
fn configured_default_key_drives_initial_sort() {
    let (headers, rows) = rendered_listing();
    let config = MarkupConfig::from_json(r#"{"default_key":"date"}"#).expect("config");
    let parsed = parse_listing(&config, &headers, &rows);

    let sorter =
        ListingSorter::attach(parsed.table, MemoryListingSurface::default(), config.default_key)
            .expect("attach");

    assert_eq!(
        sorter.surface().order(),
        &[RowId(1), RowId(3), RowId(0), RowId(2)]
    );
    assert_eq!(sorter.table().direction(SortKey::Name), SortDirection::None);
}

fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[test]
fn server_page_markup_is_read_with_default_config() {
    let config = MarkupConfig::default();
    let header_cells = [
        attrs(&[("data-sort-by", "name")]),
        attrs(&[("data-sort-by", "size"), ("data-sort-direction", "")]),
        attrs(&[("data-sort-by", "date")]),
    ];
    let body_rows = [
        ("", attrs(&[("data-name", "zImage"), ("data-size", "4194304"), ("data-date", "1700")])),
        ("parent-dir", attrs(&[("data-name", ".."), ("data-size", "-"), ("data-date", "-")])),
        ("", attrs(&[("data-name", "boot.img"), ("data-size", "1024"), ("data-date", "1600")])),
    ];

    let headers: Vec<HeaderMarkup> = header_cells
        .iter()
        .map(|cell| HeaderMarkup::read(&config, |attr| cell.get(attr).cloned()))
        .collect();
    let rows: Vec<RowMarkup> = body_rows
        .iter()
        .map(|(class_name, cell)| {
            RowMarkup::read(&config, class_name.to_string(), |attr| cell.get(attr).cloned())
        })
        .collect();
    let parsed = parse_listing(&config, &headers, &rows);

    assert_eq!(parsed.bound_headers.len(), 3);
    assert_eq!(parsed.table.direction(SortKey::Size), SortDirection::None);
    assert!(parsed.table.rows()[1].pinned);

    let sorter =
        ListingSorter::attach(parsed.table, MemoryListingSurface::default(), config.default_key)
            .expect("attach");
    assert_eq!(sorter.surface().order(), &[RowId(1), RowId(2), RowId(0)]);
    assert_eq!(sorter.surface().direction(SortKey::Name), SortDirection::Ascending);
}

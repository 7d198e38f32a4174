//! Listing paths, entry links, and breadcrumb segments.

use listing_sort::{ListingEntry, ListingEntryKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One breadcrumb in the pane header.
pub struct Breadcrumb {
    /// Segment text.
    pub label: String,
    /// Link target; the current directory is rendered as plain text.
    pub href: Option<String>,
}

/// Normalizes a listing path: `/`-rooted, `.`/`..` resolved, no trailing slash except for `/`.
pub fn normalize_listing_path(path: &str) -> String {
    let mut out = String::new();
    for segment in path.trim().split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." {
            if let Some(idx) = out.rfind('/') {
                out.truncate(idx);
            }
            continue;
        }
        out.push('/');
        out.push_str(segment);
    }

    if out.is_empty() {
        "/".to_string()
    } else {
        out
    }
}

fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

fn with_trailing_slash(mut path: String) -> String {
    if !path.ends_with('/') {
        path.push('/');
    }
    path
}

/// Link to the directory above `cwd`, always ending in `/`.
pub fn parent_href(cwd: &str) -> String {
    let parent = normalize_listing_path(&format!("{}/..", normalize_listing_path(cwd)));
    with_trailing_slash(encode_path(&parent))
}

/// Link to `entry` inside `cwd`; directory links end in `/`.
pub fn entry_href(cwd: &str, entry: &ListingEntry) -> String {
    let base = with_trailing_slash(encode_path(&normalize_listing_path(cwd)));
    let href = format!("{base}{}", urlencoding::encode(&entry.name));
    match entry.kind {
        ListingEntryKind::Directory => with_trailing_slash(href),
        ListingEntryKind::File => href,
    }
}

/// Breadcrumbs for `cwd`: `Home`, then one per path segment. Every crumb but the current
/// directory links to its accumulated path.
pub fn breadcrumbs(cwd: &str) -> Vec<Breadcrumb> {
    let path = normalize_listing_path(cwd);
    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
    let mut crumbs = vec![Breadcrumb {
        label: "Home".to_string(),
        href: Some("/".to_string()),
    }];

    let mut accumulated = String::from("/");
    for (idx, segment) in segments.iter().enumerate() {
        accumulated.push_str(&urlencoding::encode(segment));
        accumulated.push('/');
        crumbs.push(Breadcrumb {
            label: (*segment).to_string(),
            href: (idx + 1 < segments.len()).then(|| accumulated.clone()),
        });
    }
    crumbs
}

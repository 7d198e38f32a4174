//! Browser entrypoint for directory listing pages.
//!
//! Activates the markup sorter on the server-rendered listing table and, when the page embeds
//! a JSON listing payload, mounts the client-rendered listing view.

mod page;

pub use page::{parse_listing_payload, LISTING_APP_ID, LISTING_DATA_ID};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn start() {
    console_error_panic_hook::set_once();
    listing_sort_web::init_when_ready(listing_sort::MarkupConfig::default());
    listing_sort_web::run_when_ready(page::mount_client_listing);
}

//! Page-level hooks: markup sorter activation and the optional client-rendered listing.

use serde_json::Value;

/// Id of the `<script type="application/json">` element holding a client-rendered listing.
pub const LISTING_DATA_ID: &str = "listing-data";
/// Id of the element the client-rendered listing mounts into.
pub const LISTING_APP_ID: &str = "listing-app";

/// Parses the embedded listing payload.
///
/// # Errors
///
/// Returns an error when the payload is not a JSON object.
pub fn parse_listing_payload(raw: &str) -> Result<Value, String> {
    let value: Value = serde_json::from_str(raw.trim()).map_err(|err| err.to_string())?;
    if !value.is_object() {
        return Err("listing payload must be a JSON object".to_string());
    }
    Ok(value)
}

/// Mounts the client-rendered listing when the page embeds a payload and a mount point.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub(crate) fn mount_client_listing() {
    use leptos::logging;
    use listing_view::ListingPane;
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(data) = document.get_element_by_id(LISTING_DATA_ID) else {
        return;
    };
    let Some(mount) = document
        .get_element_by_id(LISTING_APP_ID)
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        logging::warn!("listing payload present but `#{LISTING_APP_ID}` is missing");
        return;
    };

    let launch_params = match parse_listing_payload(&data.text_content().unwrap_or_default()) {
        Ok(value) => value,
        Err(err) => {
            logging::warn!("listing payload ignored: {err}");
            return;
        }
    };
    leptos::mount_to(mount, move || {
        leptos::view! { <ListingPane launch_params=launch_params /> }
    });
}

//! Page-readiness gate and document-level entrypoints.

use leptos::logging;
use listing_sort::{MarkupConfig, SortError};

use crate::dom::TableSorter;

/// Attaches a sorter to the configured container in the current document.
///
/// # Errors
///
/// Returns [`SortError::ContainerNotFound`] when no element has the configured id, plus any
/// error from [`TableSorter::attach`].
pub fn attach_to_document(config: &MarkupConfig) -> Result<TableSorter, SortError> {
    #[cfg(target_arch = "wasm32")]
    {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| SortError::Dom("document unavailable".to_string()))?;
        let container = document
            .get_element_by_id(&config.container_id)
            .ok_or_else(|| SortError::ContainerNotFound(config.container_id.clone()))?;
        TableSorter::attach(&container, config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(SortError::ContainerNotFound(config.container_id.clone()))
    }
}

/// Waits until the page structure is available, then attaches a sorter.
///
/// Missing markup is logged and leaves the page in its server-rendered order.
pub fn init_when_ready(config: MarkupConfig) {
    run_when_ready(move || report_attach(attach_to_document(&config)));
}

/// Runs `task` once the document has finished parsing (immediately if it already has).
pub fn run_when_ready(task: impl FnOnce() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = wait_for_structure().await {
                logging::warn!("page readiness wait failed: {err}");
                return;
            }
            task();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = task;
        logging::warn!("listing page hooks are only available when compiled for wasm32");
    }
}

/// Logs the outcome of an attach attempt.
pub fn report_attach(result: Result<TableSorter, SortError>) {
    match result {
        Ok(sorter) => logging::log!("listing sorter attached: {sorter:?}"),
        Err(err) if err.is_markup_precondition() => {
            logging::warn!("listing sorter not attached, keeping rendered order: {err}");
        }
        Err(err) => logging::warn!("listing sorter not attached: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
async fn wait_for_structure() -> Result<(), SortError> {
    use std::{cell::RefCell, rc::Rc};

    use futures::channel::oneshot;
    use wasm_bindgen::{closure::Closure, JsCast};

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SortError::Dom("document unavailable".to_string()))?;
    if document.ready_state() != web_sys::DocumentReadyState::Loading {
        return Ok(());
    }

    let (tx, rx) = oneshot::channel::<()>();
    let sender = Rc::new(RefCell::new(Some(tx)));
    let on_ready = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
        if let Some(tx) = sender.borrow_mut().take() {
            let _ = tx.send(());
        }
    }));
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(|err| SortError::Dom(format!("listen for DOMContentLoaded: {err:?}")))?;

    rx.await
        .map_err(|_| SortError::Dom("DOMContentLoaded listener was dropped".to_string()))?;
    let _ = document
        .remove_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
    Ok(())
}

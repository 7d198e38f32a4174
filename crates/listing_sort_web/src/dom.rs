//! DOM binding: snapshot the rendered table, bind header clicks, and move row nodes.

use std::{cell::RefCell, rc::Rc};

use leptos::logging;
use listing_sort::{
    ListingSorter, ListingSurface, MarkupConfig, RowId, SortAction, SortDirection, SortError,
    SortKey, CONFIG_ATTR,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, Event};

use crate::markup::{parse_listing, HeaderMarkup, RowMarkup};

fn dom_error(context: &str, err: JsValue) -> SortError {
    SortError::Dom(format!("{context}: {err:?}"))
}

/// Render surface over the live header cells and body row elements.
pub struct DomListingSurface {
    body: Element,
    rows: Vec<Element>,
    headers: Vec<(SortKey, Element)>,
    direction_attr: String,
    rendered: Vec<RowId>,
}

impl ListingSurface for DomListingSurface {
    fn set_direction(&mut self, key: SortKey, direction: SortDirection) -> Result<(), SortError> {
        for (_, header) in self.headers.iter().filter(|(header_key, _)| *header_key == key) {
            match direction.attr_value() {
                Some(value) => header
                    .set_attribute(&self.direction_attr, value)
                    .map_err(|err| dom_error("set direction attribute", err))?,
                None => header
                    .remove_attribute(&self.direction_attr)
                    .map_err(|err| dom_error("remove direction attribute", err))?,
            }
            header
                .set_attribute("aria-sort", direction.aria_sort())
                .map_err(|err| dom_error("set aria-sort", err))?;
        }
        Ok(())
    }

    fn reorder(&mut self, order: &[RowId]) -> Result<(), SortError> {
        if order == self.rendered.as_slice() {
            return Ok(());
        }
        // Appending an attached node moves it, so this detaches and re-appends every row.
        for id in order {
            let row = self
                .rows
                .get(id.0 as usize)
                .ok_or_else(|| SortError::Dom(format!("row {} is not in the listing", id.0)))?;
            self.body
                .append_child(row)
                .map_err(|err| dom_error("append row", err))?;
        }
        self.rendered = order.to_vec();
        Ok(())
    }
}

#[derive(Clone)]
/// Handle to a sorter bound to a listing container.
///
/// Click handlers hold their own reference to the shared state, so dropping the handle does
/// not unbind them; bindings live for the page lifetime.
pub struct TableSorter {
    inner: Rc<RefCell<ListingSorter<DomListingSurface>>>,
}

impl std::fmt::Debug for TableSorter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableSorter")
            .field("table", self.inner.borrow().table())
            .finish()
    }
}

impl TableSorter {
    /// Binds the sorter to `container` and applies the initial sort.
    ///
    /// A JSON `data-sort-config` attribute on the container overrides `config`; an invalid
    /// override is logged and ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::BodyNotFound`] when the container has no body region, or
    /// [`SortError::Dom`] when the browser rejects a query or listener registration.
    pub fn attach(container: &Element, config: &MarkupConfig) -> Result<Self, SortError> {
        let config = container_config(container, config);

        let body = container
            .query_selector(&config.body_selector)
            .map_err(|err| dom_error("query body region", err))?
            .ok_or(SortError::BodyNotFound)?;
        let header_elements = query_elements(container, &config.header_selector)?;
        let row_elements = child_elements(&body);

        let header_markup: Vec<HeaderMarkup> = header_elements
            .iter()
            .map(|header| HeaderMarkup::read(&config, |attr| header.get_attribute(attr)))
            .collect();
        let row_markup: Vec<RowMarkup> = row_elements
            .iter()
            .map(|row| RowMarkup::read(&config, row.class_name(), |attr| row.get_attribute(attr)))
            .collect();

        let parsed = parse_listing(&config, &header_markup, &row_markup);
        if parsed.bound_headers.is_empty() {
            logging::warn!("listing `#{}` has no sortable headers", config.container_id);
        }

        let surface = DomListingSurface {
            body,
            rendered: parsed.table.order(),
            rows: row_elements,
            headers: parsed
                .bound_headers
                .iter()
                .map(|bound| (bound.key, header_elements[bound.index].clone()))
                .collect(),
            direction_attr: config.direction_attr.clone(),
        };
        let sorter = Self {
            inner: Rc::new(RefCell::new(ListingSorter::new(parsed.table, surface))),
        };

        for bound in &parsed.bound_headers {
            sorter.bind_click(&header_elements[bound.index], bound.key)?;
        }

        sorter.dispatch(SortAction::InitialSort {
            default_key: config.default_key,
        });
        Ok(sorter)
    }

    /// Runs the header-click behavior for `key`, logging failures.
    pub fn click(&self, key: SortKey) {
        self.dispatch(SortAction::Activate { key });
    }

    /// Current direction flag for `key`.
    pub fn direction(&self, key: SortKey) -> SortDirection {
        self.inner.borrow().table().direction(key)
    }

    fn dispatch(&self, action: SortAction) {
        if let Err(err) = self.inner.borrow_mut().dispatch(action) {
            logging::warn!("listing sort failed: {err}");
        }
    }

    fn bind_click(&self, header: &Element, key: SortKey) -> Result<(), SortError> {
        let sorter = self.clone();
        let on_click = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_| sorter.click(key)));
        header
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|err| dom_error("bind header click", err))?;
        on_click.forget();
        Ok(())
    }
}

fn container_config(container: &Element, fallback: &MarkupConfig) -> MarkupConfig {
    let Some(raw) = container.get_attribute(CONFIG_ATTR) else {
        return fallback.clone();
    };
    match MarkupConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("ignoring `{CONFIG_ATTR}` on listing container: {err}");
            fallback.clone()
        }
    }
}

fn query_elements(container: &Element, selector: &str) -> Result<Vec<Element>, SortError> {
    let nodes = container
        .query_selector_all(selector)
        .map_err(|err| dom_error("query header cells", err))?;
    let mut elements = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        elements.push(element);
    }
    Ok(elements)
}

fn child_elements(body: &Element) -> Vec<Element> {
    let children = body.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .collect()
}

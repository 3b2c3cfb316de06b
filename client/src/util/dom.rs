//! Thin `web-sys` helpers over the server-rendered document.
//!
//! Lookups return `Option`/`Vec` so a missing element simply skips that unit
//! of work.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn html_by_id(id: &str) -> Option<HtmlElement> {
    by_id(id)?.dyn_into::<HtmlElement>().ok()
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Every element in the document matching `selector`.
pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map(elements)
        .unwrap_or_default()
}

/// First descendant of `root` matching `selector`.
pub fn first(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Show (`display` cleared) or hide (`display: none`) an element.
pub fn set_display(el: &Element, visible: bool) {
    let Some(el) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let value = if visible { "" } else { "none" };
    if let Err(err) = el.style().set_property("display", value) {
        log::warn!("failed to set display on <{}>: {err:?}", el.tag_name());
    }
}

/// Create `<tag class=class>` with static inner markup.
pub fn create(tag: &str, class: &str, inner_html: &str) -> Option<Element> {
    let el = document()?.create_element(tag).ok()?;
    el.set_class_name(class);
    if !inner_html.is_empty() {
        el.set_inner_html(inner_html);
    }
    Some(el)
}

/// Append `child` to `parent`, logging instead of failing.
pub fn append(parent: &Element, child: &Element) {
    if let Err(err) = parent.append_child(child) {
        log::warn!("append to <{}> failed: {err:?}", parent.tag_name());
    }
}

/// Attach a listener that lives as long as the page.
pub fn on(target: &web_sys::EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("failed to listen for {event}: {err:?}");
    }
    closure.forget();
}

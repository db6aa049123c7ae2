//! Thin web-sys glue shared by the behavior units.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps lookups, inline style writes and listener plumbing in one place so
//! the unit modules only express what changes on the page. Style and class
//! writes are best-effort: a rejected write is logged, never propagated.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::anchor::ScrollBlock;
use crate::error::PageError;

/// `value` as `T`, or `None` when the JS object is of another type.
pub fn cast<T: JsCast>(value: impl JsCast) -> Option<T> {
    match value.dyn_into::<T>() {
        Ok(cast) => Some(cast),
        Err(_) => None,
    }
}

/// The page document.
pub fn document() -> Result<Document, PageError> {
    web_sys::window().and_then(|w| w.document()).ok_or(PageError::NoDocument)
}

/// Element with `id`, as an `HtmlElement`.
pub fn by_id(document: &Document, id: &str) -> Result<HtmlElement, PageError> {
    document
        .get_element_by_id(id)
        .and_then(cast::<HtmlElement>)
        .ok_or_else(|| PageError::MissingElement(format!("#{id}")))
}

/// First element matching `selector`.
pub fn query(document: &Document, selector: &str) -> Result<HtmlElement, PageError> {
    document
        .query_selector(selector)?
        .and_then(cast::<HtmlElement>)
        .ok_or_else(|| PageError::MissingElement(selector.to_owned()))
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, PageError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(cast::<HtmlElement>)
        .collect())
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(e) = result {
        log::warn!("class {class} not updated: {e:?}");
    }
}

/// Write one inline style property.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("style {property} not updated: {e:?}");
    }
}

pub fn set_display(el: &HtmlElement, value: &str) {
    set_style(el, "display", value);
}

/// Inline style of the `<html>` element, where the custom properties live.
pub fn set_root_property(document: &Document, property: &str, value: &str) {
    match document.document_element().and_then(cast::<HtmlElement>) {
        Some(root) => set_style(&root, property, value),
        None => log::warn!("no root element for {property}"),
    }
}

/// Attach an event listener for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    listen(target, "click", handler)
}

/// Smoothly scroll `el` into view, aligned per `block`.
pub fn scroll_to(el: &Element, block: ScrollBlock) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(match block {
        ScrollBlock::Start => ScrollLogicalPosition::Start,
        ScrollBlock::Center => ScrollLogicalPosition::Center,
    });
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Run `f` once after `ms` milliseconds.
pub fn after<F>(ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(ms, f).forget();
}

//! Thin web-sys helpers shared by the installers.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::consts::{ARIA_PRESSED, PREFERS_DARK_QUERY, PREFERS_REDUCED_MOTION_QUERY};
use crate::error::PageError;
use crate::prefs::MediaSignals;

pub(crate) fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub(crate) fn document(window: &Window) -> Result<Document, PageError> {
    window.document().ok_or(PageError::NoDocument)
}

/// Sample both media queries once.
pub(crate) fn media_signals(window: &Window) -> MediaSignals {
    MediaSignals {
        prefers_dark: media_matches(window, PREFERS_DARK_QUERY),
        prefers_reduced_motion: media_matches(window, PREFERS_REDUCED_MOTION_QUERY),
    }
}

fn media_matches(window: &Window, query: &str) -> bool {
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        Ok(None) | Err(_) => false,
    }
}

/// Elements for each id that exists, in the order given.
pub(crate) fn elements_by_ids(document: &Document, ids: &[String]) -> Vec<Element> {
    ids.iter().filter_map(|id| document.get_element_by_id(id)).collect()
}

pub(crate) fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id).and_then(as_html)
}

fn as_html(element: Element) -> Option<HtmlElement> {
    match element.dyn_into::<HtmlElement>() {
        Ok(html) => Some(html),
        Err(_) => None,
    }
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i)
            && let Ok(element) = node.dyn_into::<Element>()
        {
            out.push(element);
        }
    }
    Ok(out)
}

/// Like [`query_all`], keeping only HTML elements (focusable, styleable).
pub(crate) fn query_all_html(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, PageError> {
    Ok(query_all(document, selector)?.into_iter().filter_map(as_html).collect())
}

/// Reflect a toggle state on every button through `aria-pressed`.
pub(crate) fn set_pressed(buttons: &[Element], pressed: bool) -> Result<(), PageError> {
    let value = if pressed { "true" } else { "false" };
    for button in buttons {
        button.set_attribute(ARIA_PRESSED, value)?;
    }
    Ok(())
}

/// Attach `handler` for the lifetime of the page.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), PageError> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Attach a passive `handler` (it never calls `preventDefault`).
pub(crate) fn listen_passive(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), PageError> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.as_ref().unchecked_ref(),
        &options,
    )?;
    callback.forget();
    Ok(())
}

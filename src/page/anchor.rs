//! Offset smooth scrolling for in-page navigation links.

use wasm_bindgen::JsValue;
use web_sys::{Element, Event, ScrollBehavior, ScrollToOptions, Window};

use super::{PageContext, dom};
use crate::anchor::{ScrollMode, fragment_id, scroll_target};
use crate::error::PageError;

pub(super) fn install(ctx: &PageContext) -> Result<(), PageError> {
    let links = dom::query_all(&ctx.document, &ctx.config.selectors.nav_links)?;
    let mode = ScrollMode::for_reduced_motion(ctx.prefs.signals().prefers_reduced_motion);

    for link in &links {
        let anchor = link.clone();
        let window = ctx.window.clone();
        let document = ctx.document.clone();
        let offset = ctx.config.header_offset_px;
        dom::listen(link, "click", move |event: Event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_id(&href).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };
            event.prevent_default();
            if let Err(e) = scroll_to(&window, &target, offset, mode) {
                log::warn!("folio: cannot scroll to {href}: {e}");
                return;
            }
            if let Err(e) = push_fragment(&window, &href) {
                log::debug!("folio: cannot record {href} in history: {e}");
            }
        })?;
    }
    Ok(())
}

fn scroll_to(window: &Window, target: &Element, offset: f64, mode: ScrollMode) -> Result<(), PageError> {
    let top = scroll_target(target.get_bounding_client_rect().top(), window.scroll_y()?, offset);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(match mode {
        ScrollMode::Smooth => ScrollBehavior::Smooth,
        ScrollMode::Instant => ScrollBehavior::Instant,
    });
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

fn push_fragment(window: &Window, href: &str) -> Result<(), PageError> {
    window.history()?.push_state_with_url(&JsValue::NULL, "", Some(href))?;
    Ok(())
}

//! Scroll-spy over the in-page navigation links.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{PageContext, dom};
use crate::consts::ARIA_CURRENT;
use crate::error::PageError;
use crate::spy::ScrollSpy;

pub(super) fn install(ctx: &PageContext) -> Result<(), PageError> {
    let links = dom::query_all(&ctx.document, &ctx.config.selectors.nav_links)?;
    let spy = ScrollSpy::new(
        links
            .iter()
            .map(|a| a.get_attribute("href").unwrap_or_default())
            .collect(),
    );
    let sections: Vec<Element> = spy
        .section_ids()
        .into_iter()
        .filter_map(|id| ctx.document.get_element_by_id(id))
        .collect();
    if sections.is_empty() {
        log::debug!("folio: no linked sections, skipping scroll-spy");
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Some(mark) = spy.mark(&entry.target().id(), entry.is_intersecting()) else {
                    continue;
                };
                if let Some(link) = links.get(mark.link)
                    && let Err(e) = set_current(link, mark.current)
                {
                    log::warn!("folio: scroll-spy update failed: {e}");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&ctx.config.spy_root_margin);
    options.set_threshold(&JsValue::from_f64(0.0));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for section in &sections {
        observer.observe(section);
    }
    log::debug!("folio: scroll-spy watching {} sections", sections.len());
    Ok(())
}

fn set_current(link: &Element, current: bool) -> Result<(), PageError> {
    if current {
        link.set_attribute(ARIA_CURRENT, "true")?;
    } else {
        link.remove_attribute(ARIA_CURRENT)?;
    }
    Ok(())
}

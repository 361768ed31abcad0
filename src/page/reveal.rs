//! Reveal-on-scroll for cards.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{PageContext, dom};
use crate::error::PageError;
use crate::reveal::{RevealLedger, RevealStep};

pub(super) fn install(ctx: &PageContext) -> Result<(), PageError> {
    let cards = dom::query_all(&ctx.document, &ctx.config.selectors.cards)?;
    if cards.is_empty() {
        log::debug!("folio: no cards, skipping reveal");
        return Ok(());
    }

    let reveal_class = ctx.config.classes.reveal.clone();
    let mut ledger = RevealLedger::new(cards.len());
    let tracked = cards.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let card = entry.target();
                let Some(index) = tracked.iter().position(|c| *c == card) else {
                    continue;
                };
                let step = ledger.observe(index, entry.is_intersecting());
                if !step.reveals() {
                    continue;
                }
                if let Err(e) = card.class_list().add_1(&reveal_class) {
                    log::warn!("folio: reveal failed: {}", PageError::from(e));
                }
                observer.unobserve(&card);
                if step == RevealStep::RevealLast {
                    observer.disconnect();
                    log::debug!("folio: all cards revealed");
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(ctx.config.reveal_threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for card in &cards {
        observer.observe(card);
    }
    Ok(())
}

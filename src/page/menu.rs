//! ArrowLeft/ArrowRight focus cycling across menu items.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};

use super::{PageContext, dom};
use crate::error::PageError;
use crate::menu::{MenuKey, cycle};

pub(super) fn install(ctx: &PageContext) -> Result<(), PageError> {
    let items = Rc::new(dom::query_all_html(&ctx.document, &ctx.config.selectors.menu_items)?);
    if items.is_empty() {
        log::debug!("folio: no menu items, skipping keyboard navigation");
        return Ok(());
    }

    for (index, item) in items.iter().enumerate() {
        let items = Rc::clone(&items);
        dom::listen(item, "keydown", move |event: Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let Some(key) = MenuKey::from_key(&event.key()) else {
                return;
            };
            event.prevent_default();
            let Some(next) = cycle(index, items.len(), key).and_then(|i| items.get(i)) else {
                return;
            };
            if let Err(e) = next.focus() {
                log::warn!("folio: cannot move menu focus: {}", PageError::from(e));
            }
        })?;
    }
    Ok(())
}

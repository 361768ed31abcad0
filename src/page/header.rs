//! Hide the sticky header while scrolling down.

use web_sys::Element;

use super::{PageContext, dom};
use crate::error::PageError;
use crate::header::{HeaderTracker, HeaderVisibility};

pub(super) fn install(ctx: &PageContext) -> Result<(), PageError> {
    let Some(nav) = ctx.document.get_element_by_id(&ctx.config.ids.nav_wrap) else {
        log::debug!("folio: no #{} element, skipping header", ctx.config.ids.nav_wrap);
        return Ok(());
    };

    let mut tracker = HeaderTracker::new(ctx.window.scroll_y()?, ctx.config.hide_after_px);
    let window = ctx.window.clone();
    let hide_class = ctx.config.classes.nav_hide.clone();
    let show_class = ctx.config.classes.nav_show.clone();
    dom::listen_passive(&ctx.document, "scroll", move |_event| {
        let y = match window.scroll_y() {
            Ok(y) => y,
            Err(e) => {
                log::warn!("folio: cannot read scroll offset: {}", PageError::from(e));
                return;
            }
        };
        if let Err(e) = apply(&nav, &hide_class, &show_class, tracker.observe(y)) {
            log::warn!("folio: header update failed: {e}");
        }
    })
}

fn apply(nav: &Element, hide_class: &str, show_class: &str, visibility: HeaderVisibility) -> Result<(), PageError> {
    let hidden = visibility.is_hidden();
    let classes = nav.class_list();
    classes.toggle_with_force(hide_class, hidden)?;
    classes.toggle_with_force(show_class, !hidden)?;
    Ok(())
}

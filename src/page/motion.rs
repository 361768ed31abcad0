//! Animated header background toggle.
//!
//! The `animate` class on the header wrapper is the current state. Reduced
//! motion pins it off; clicks still persist the (forced) value.

use std::rc::Rc;

use web_sys::Element;

use super::{PageContext, dom};
use crate::error::PageError;
use crate::prefs::Motion;

pub(super) fn install(ctx: &PageContext) -> Result<(), PageError> {
    let Some(nav) = ctx.document.get_element_by_id(&ctx.config.ids.nav_wrap) else {
        log::debug!("folio: no #{} element, skipping motion toggle", ctx.config.ids.nav_wrap);
        return Ok(());
    };
    let buttons = Rc::new(dom::elements_by_ids(&ctx.document, &ctx.config.ids.motion_toggles));
    let animate_class = ctx.config.classes.animate.clone();

    let initial = ctx.prefs.restore_motion();
    apply(&nav, &buttons, &animate_class, initial)?;
    if ctx.prefs.signals().prefers_reduced_motion {
        log::debug!("folio: reduced motion requested, background animation pinned off");
    }

    for button in buttons.iter() {
        let nav = nav.clone();
        let buttons = Rc::clone(&buttons);
        let prefs = Rc::clone(&ctx.prefs);
        let animate_class = animate_class.clone();
        dom::listen(button, "click", move |_event| {
            let current = Motion::from_on(nav.class_list().contains(&animate_class));
            let next = prefs.set_motion(current.toggled());
            if let Err(e) = apply(&nav, &buttons, &animate_class, next) {
                log::warn!("folio: motion toggle failed: {e}");
            }
        })?;
    }
    Ok(())
}

fn apply(nav: &Element, buttons: &[Element], animate_class: &str, motion: Motion) -> Result<(), PageError> {
    nav.class_list().toggle_with_force(animate_class, motion.is_on())?;
    dom::set_pressed(buttons, motion.is_on())
}

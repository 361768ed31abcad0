//! Light/dark theme toggle.
//!
//! The `dark` class on `<html>` is the current state. Every toggle button
//! (desktop and mobile) flips it and mirrors it in `aria-pressed`.

use std::rc::Rc;

use web_sys::Element;

use super::{PageContext, dom};
use crate::error::PageError;
use crate::prefs::Theme;

pub(super) fn install(ctx: &PageContext) -> Result<(), PageError> {
    let buttons = Rc::new(dom::elements_by_ids(&ctx.document, &ctx.config.ids.theme_toggles));
    let dark_class = ctx.config.classes.dark.clone();

    let initial = ctx.prefs.restore_theme();
    apply(&ctx.root, &buttons, &dark_class, initial)?;
    log::debug!("folio: theme {} ({} toggles)", initial.as_str(), buttons.len());

    for button in buttons.iter() {
        let root = ctx.root.clone();
        let buttons = Rc::clone(&buttons);
        let prefs = Rc::clone(&ctx.prefs);
        let dark_class = dark_class.clone();
        dom::listen(button, "click", move |_event| {
            let current = Theme::from_dark(root.class_list().contains(&dark_class));
            let next = prefs.set_theme(current.toggled());
            if let Err(e) = apply(&root, &buttons, &dark_class, next) {
                log::warn!("folio: theme toggle failed: {e}");
            }
        })?;
    }
    Ok(())
}

fn apply(root: &Element, buttons: &[Element], dark_class: &str, theme: Theme) -> Result<(), PageError> {
    root.class_list().toggle_with_force(dark_class, theme.is_dark())?;
    dom::set_pressed(buttons, theme.is_dark())
}

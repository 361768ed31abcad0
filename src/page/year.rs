//! Footer copyright year.

use super::PageContext;
use crate::error::PageError;

pub(super) fn install(ctx: &PageContext) -> Result<(), PageError> {
    let Some(el) = ctx.document.get_element_by_id(&ctx.config.ids.year) else {
        log::debug!("folio: no #{} element, skipping year", ctx.config.ids.year);
        return Ok(());
    };
    let year = js_sys::Date::new_0().get_full_year();
    el.set_text_content(Some(&year.to_string()));
    Ok(())
}

//! Scroll progress bar.

use web_sys::{Document, HtmlElement};

use super::{PageContext, dom};
use crate::error::PageError;
use crate::progress::{ScrollMetrics, width_value};

pub(super) fn install(ctx: &PageContext) -> Result<(), PageError> {
    let Some(bar) = dom::html_by_id(&ctx.document, &ctx.config.ids.progress) else {
        log::debug!("folio: no #{} element, skipping progress bar", ctx.config.ids.progress);
        return Ok(());
    };
    update(&ctx.document, &bar)?;

    let document = ctx.document.clone();
    dom::listen_passive(&ctx.document, "scroll", move |_event| {
        if let Err(e) = update(&document, &bar) {
            log::warn!("folio: progress update failed: {e}");
        }
    })
}

fn metrics(document: &Document) -> Option<ScrollMetrics> {
    let root = document.document_element()?;
    let mut scroll_top = root.scroll_top();
    if scroll_top == 0
        && let Some(body) = document.body()
    {
        scroll_top = body.scroll_top();
    }
    Some(ScrollMetrics {
        scroll_top: f64::from(scroll_top),
        scroll_height: f64::from(root.scroll_height()),
        client_height: f64::from(root.client_height()),
    })
}

fn update(document: &Document, bar: &HtmlElement) -> Result<(), PageError> {
    let Some(metrics) = metrics(document) else {
        return Ok(());
    };
    bar.style().set_property("width", &width_value(metrics.percent()))?;
    Ok(())
}

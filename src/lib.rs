//! Progressive enhancement runtime for the portfolio landing page.
//!
//! This crate is compiled to WebAssembly and runs once per page load. It
//! wires independent behaviors onto the static markup: persisted theme and
//! background-animation toggles, a scroll progress bar, scroll-spy
//! navigation, reveal-on-scroll cards, a direction-aware sticky header,
//! arrow-key menu navigation, and offset smooth scrolling for in-page links.
//!
//! Every decision those behaviors make lives in a target-independent module
//! so it can be unit-tested natively. The `browser` feature adds the
//! `web-sys` glue in `page` and the `wasm_bindgen(start)` entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Page configuration (ids, selectors, keys, thresholds) |
//! | [`prefs`] | Theme and motion preferences and their resolution rules |
//! | [`store`] | Key-value persistence seam for the two preferences |
//! | [`progress`] | Scroll progress percentage |
//! | [`spy`] | Scroll-spy link matching |
//! | [`reveal`] | One-shot reveal bookkeeping |
//! | [`header`] | Header hide/show on scroll direction |
//! | [`menu`] | Arrow-key focus cycling |
//! | [`anchor`] | In-page link targets and scroll offsets |
//! | [`error`] | Crate error type |
//! | [`consts`] | Default ids, keys, classes and thresholds |

pub mod anchor;
pub mod config;
pub mod consts;
pub mod error;
pub mod header;
pub mod menu;
#[cfg(feature = "browser")]
pub mod page;
pub mod prefs;
pub mod progress;
pub mod reveal;
pub mod spy;
pub mod store;

#[cfg(feature = "browser")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point invoked by the generated JS glue once the module loads.
#[cfg(feature = "browser")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, config_err) = page::load_config();
    if let Err(e) = console_log::init_with_level(config.level()) {
        log::warn!("folio: logger already installed: {e}");
    }
    if let Some(e) = config_err {
        log::warn!("folio: ignoring page config: {e}");
    }

    page::init(&config);
}

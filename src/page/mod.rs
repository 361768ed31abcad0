//! Browser wiring: one installer per page behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`init`] runs once from the wasm start hook. It builds a [`PageContext`]
//! and hands it to each installer in turn. Installers read the elements they
//! need, apply initial state, and attach listeners that live as long as the
//! page. They share nothing except the context.
//!
//! ERROR HANDLING
//! ==============
//! Absent markup is a silent no-op (logged at debug). A DOM call that throws
//! disables only the behavior that made it; the remaining installers still
//! run.

mod anchor;
mod dom;
mod header;
mod menu;
mod motion;
mod progress;
mod reveal;
mod spy;
mod theme;
mod year;

use std::rc::Rc;

use web_sys::{Document, Element, Window};

use crate::config::{Config, ConfigError};
use crate::consts::CONFIG_SCRIPT_ID;
use crate::error::PageError;
use crate::prefs::Preferences;
use crate::store::{LocalStore, MemoryStore, PrefStore};

type Installer = fn(&PageContext) -> Result<(), PageError>;

const INSTALLERS: [(&str, Installer); 9] = [
    ("year", year::install),
    ("theme", theme::install),
    ("motion", motion::install),
    ("progress", progress::install),
    ("scroll-spy", spy::install),
    ("reveal", reveal::install),
    ("header", header::install),
    ("menu keys", menu::install),
    ("anchors", anchor::install),
];

/// Handles shared by every installer.
pub struct PageContext {
    pub window: Window,
    pub document: Document,
    /// The `<html>` element.
    pub root: Element,
    pub config: Rc<Config>,
    pub prefs: Rc<Preferences>,
}

impl PageContext {
    /// Resolve the global window and document and open preference storage.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NoWindow`] or [`PageError::NoDocument`] outside
    /// a browser document.
    pub fn new(config: Config) -> Result<Self, PageError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let root = document.document_element().ok_or(PageError::NoDocument)?;
        let signals = dom::media_signals(&window);

        let store: Box<dyn PrefStore> = match LocalStore::open(&window) {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("folio: preferences will not persist: {e}");
                Box::new(MemoryStore::new())
            }
        };
        let prefs = Preferences::new(store, config.theme_key.clone(), config.motion_key.clone(), signals);

        Ok(Self {
            window,
            document,
            root,
            config: Rc::new(config),
            prefs: Rc::new(prefs),
        })
    }
}

/// Read the optional JSON config block.
///
/// Always yields a usable config; a rejected block is returned alongside the
/// defaults so the caller can log it once logging is up.
pub fn load_config() -> (Config, Option<ConfigError>) {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_SCRIPT_ID))
        .and_then(|el| el.text_content());
    match raw {
        None => (Config::default(), None),
        Some(raw) => match Config::from_json(&raw) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        },
    }
}

/// Wire every page behavior.
pub fn init(config: &Config) {
    let ctx = match PageContext::new(config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            log::error!("folio: cannot enhance page: {e}");
            return;
        }
    };

    let mut wired = 0;
    for (name, install) in INSTALLERS {
        match install(&ctx) {
            Ok(()) => wired += 1,
            Err(e) => log::warn!("folio: {name} disabled: {e}"),
        }
    }
    log::info!("folio: {wired}/{} behaviors wired", INSTALLERS.len());
}

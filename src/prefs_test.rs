use super::*;
use crate::store::{MemoryStore, PrefStore};
use std::rc::Rc;

const SYSTEM_LIGHT: MediaSignals = MediaSignals { prefers_dark: false, prefers_reduced_motion: false };
const SYSTEM_DARK: MediaSignals = MediaSignals { prefers_dark: true, prefers_reduced_motion: false };
const REDUCED: MediaSignals = MediaSignals { prefers_dark: false, prefers_reduced_motion: true };

fn prefs(store: &Rc<MemoryStore>, signals: MediaSignals) -> Preferences {
    Preferences::new(Box::new(Rc::clone(store)), "fp-theme", "fp-anim", signals)
}

fn stored(store: &MemoryStore, key: &str) -> Option<String> {
    store.get(key).expect("memory get")
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_from_stored_values() {
    assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
    assert_eq!(Theme::from_stored("sepia"), Some(Theme::Light));
    assert_eq!(Theme::from_stored(""), None);
}

#[test]
fn theme_toggle_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn resolve_theme_prefers_stored_value() {
    assert_eq!(resolve_theme(Some("light"), SYSTEM_DARK), Theme::Light);
    assert_eq!(resolve_theme(Some("dark"), SYSTEM_LIGHT), Theme::Dark);
}

#[test]
fn resolve_theme_falls_back_to_system() {
    assert_eq!(resolve_theme(None, SYSTEM_DARK), Theme::Dark);
    assert_eq!(resolve_theme(None, SYSTEM_LIGHT), Theme::Light);
    assert_eq!(resolve_theme(Some(""), SYSTEM_DARK), Theme::Dark);
}

#[test]
fn restore_theme_persists_resolved_value() {
    let store = Rc::new(MemoryStore::new());
    let theme = prefs(&store, SYSTEM_DARK).restore_theme();
    assert_eq!(theme, Theme::Dark);
    assert_eq!(stored(&store, "fp-theme").as_deref(), Some("dark"));
}

#[test]
fn toggled_theme_survives_reload() {
    let store = Rc::new(MemoryStore::new());

    let first_visit = prefs(&store, SYSTEM_DARK);
    let current = first_visit.restore_theme();
    first_visit.set_theme(current.toggled());

    // The system still prefers dark, but the explicit choice wins.
    let reload = prefs(&store, SYSTEM_DARK);
    assert_eq!(reload.restore_theme(), Theme::Light);
}

// =============================================================
// Motion
// =============================================================

#[test]
fn motion_from_stored_values() {
    assert_eq!(Motion::from_stored("on"), Some(Motion::On));
    assert_eq!(Motion::from_stored("off"), Some(Motion::Off));
    assert_eq!(Motion::from_stored("yes"), Some(Motion::Off));
    assert_eq!(Motion::from_stored(""), None);
}

#[test]
fn motion_defaults_on() {
    assert_eq!(resolve_motion(None, SYSTEM_LIGHT), Motion::On);
}

#[test]
fn reduced_motion_overrides_stored_on() {
    assert_eq!(resolve_motion(Some("on"), REDUCED), Motion::Off);
    assert_eq!(resolve_motion(None, REDUCED), Motion::Off);
}

#[test]
fn reduced_motion_overrides_toggle_request() {
    let store = Rc::new(MemoryStore::with_entries([("fp-anim", "on")]));
    let prefs = prefs(&store, REDUCED);
    assert_eq!(prefs.restore_motion(), Motion::Off);
    assert_eq!(prefs.set_motion(Motion::On), Motion::Off);
    assert_eq!(stored(&store, "fp-anim").as_deref(), Some("off"));
}

#[test]
fn motion_choice_survives_reload() {
    let store = Rc::new(MemoryStore::new());
    let first_visit = prefs(&store, SYSTEM_LIGHT);
    assert_eq!(first_visit.restore_motion(), Motion::On);
    first_visit.set_motion(Motion::Off);

    assert_eq!(prefs(&store, SYSTEM_LIGHT).restore_motion(), Motion::Off);
}

#[test]
fn theme_and_motion_use_separate_keys() {
    let store = Rc::new(MemoryStore::new());
    let prefs = prefs(&store, SYSTEM_LIGHT);
    prefs.set_theme(Theme::Dark);
    prefs.set_motion(Motion::Off);
    assert_eq!(stored(&store, "fp-theme").as_deref(), Some("dark"));
    assert_eq!(stored(&store, "fp-anim").as_deref(), Some("off"));
}

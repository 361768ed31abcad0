#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_stock_page() {
    let config = Config::default();
    assert_eq!(config.theme_key, "fp-theme");
    assert_eq!(config.motion_key, "fp-anim");
    assert_eq!(config.header_offset_px, 66.0);
    assert_eq!(config.hide_after_px, 10.0);
    assert_eq!(config.reveal_threshold, 0.12);
    assert_eq!(config.ids.theme_toggles, vec!["toggleTheme", "toggleThemeMobile"]);
    assert_eq!(config.selectors.nav_links, ".menu a[href^=\"#\"]");
    assert_eq!(config.classes.nav_hide, "nav-hide");
    assert!(config.validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    let config = Config::from_json("{}").expect("empty object should parse");
    assert_eq!(config, Config::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = Config::from_json(r#"{ "headerOffsetPx": 80, "ids": { "progress": "bar" } }"#)
        .expect("partial override should parse");
    assert_eq!(config.header_offset_px, 80.0);
    assert_eq!(config.ids.progress, "bar");
    assert_eq!(config.ids.nav_wrap, "navWrap");
    assert_eq!(config.theme_key, "fp-theme");
}

#[test]
fn malformed_json_is_parse_error() {
    let err = Config::from_json("{ headerOffsetPx: 1").expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn wrong_type_is_parse_error() {
    let err = Config::from_json(r#"{ "revealThreshold": "high" }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn reveal_threshold_out_of_range_rejected() {
    let err = Config::from_json(r#"{ "revealThreshold": 1.5 }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "revealThreshold", .. }));
}

#[test]
fn negative_offset_rejected() {
    let err = Config::from_json(r#"{ "headerOffsetPx": -4 }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "headerOffsetPx", .. }));
}

#[test]
fn empty_or_shared_storage_keys_rejected() {
    let err = Config::from_json(r#"{ "themeKey": "  " }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "themeKey", .. }));

    let err = Config::from_json(r#"{ "themeKey": "k", "motionKey": "k" }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "motionKey", .. }));
}

#[test]
fn unknown_log_level_rejected() {
    let err = Config::from_json(r#"{ "logLevel": "loud" }"#).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { field: "logLevel", .. }));
}

#[test]
fn level_parses_case_insensitively() {
    let config = Config::from_json(r#"{ "logLevel": "DEBUG" }"#).expect("should parse");
    assert_eq!(config.level(), log::Level::Debug);
    assert_eq!(Config::default().level(), log::Level::Info);
}

#[test]
fn error_messages_name_the_field() {
    let err = Config::from_json(r#"{ "hideAfterPx": -1 }"#).expect_err("should fail");
    assert!(err.to_string().contains("hideAfterPx"));
}

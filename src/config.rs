//! Page configuration: markup contract, storage keys and tuning values.
//!
//! DESIGN
//! ======
//! Every field has a default matching the stock landing page (see
//! [`crate::consts`]). A host page may override any subset by embedding a
//! JSON object in `<script type="application/json" id="folio-config">`;
//! missing fields keep their defaults. A block that fails to parse or
//! validate is ignored as a whole so a typo never half-applies.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::consts;

/// Error returned by [`Config::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config block is not valid JSON or has wrongly typed fields.
    #[error("failed to parse page config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid page config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level page configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Storage key for the colour theme.
    pub theme_key: String,
    /// Storage key for the background animation flag.
    pub motion_key: String,
    /// Sticky header height subtracted from anchor scroll targets, in pixels.
    pub header_offset_px: f64,
    /// Scroll offset below which the header never hides, in pixels.
    pub hide_after_px: f64,
    /// Visible fraction at which a card is revealed.
    pub reveal_threshold: f64,
    /// `IntersectionObserver` root margin used by scroll-spy.
    pub spy_root_margin: String,
    /// `log` level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    pub ids: ElementIds,
    pub selectors: Selectors,
    pub classes: ClassNames,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_key: consts::THEME_KEY.to_owned(),
            motion_key: consts::MOTION_KEY.to_owned(),
            header_offset_px: consts::HEADER_OFFSET_PX,
            hide_after_px: consts::HIDE_AFTER_PX,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            spy_root_margin: consts::SPY_ROOT_MARGIN.to_owned(),
            log_level: consts::DEFAULT_LOG_LEVEL.to_owned(),
            ids: ElementIds::default(),
            selectors: Selectors::default(),
            classes: ClassNames::default(),
        }
    }
}

/// Ids of the singleton elements the page wires up.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub nav_wrap: String,
    pub progress: String,
    pub theme_toggles: Vec<String>,
    pub motion_toggles: Vec<String>,
    pub year: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            nav_wrap: consts::NAV_WRAP_ID.to_owned(),
            progress: consts::PROGRESS_ID.to_owned(),
            theme_toggles: consts::THEME_TOGGLE_IDS.iter().map(|s| (*s).to_owned()).collect(),
            motion_toggles: consts::MOTION_TOGGLE_IDS.iter().map(|s| (*s).to_owned()).collect(),
            year: consts::YEAR_ID.to_owned(),
        }
    }
}

/// CSS selectors for element collections.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub nav_links: String,
    pub menu_items: String,
    pub cards: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_links: consts::NAV_LINK_SELECTOR.to_owned(),
            menu_items: consts::MENU_ITEM_SELECTOR.to_owned(),
            cards: consts::CARD_SELECTOR.to_owned(),
        }
    }
}

/// Class names toggled on page elements.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassNames {
    pub dark: String,
    pub animate: String,
    pub nav_hide: String,
    pub nav_show: String,
    pub reveal: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            dark: consts::DARK_CLASS.to_owned(),
            animate: consts::ANIMATE_CLASS.to_owned(),
            nav_hide: consts::NAV_HIDE_CLASS.to_owned(),
            nav_show: consts::NAV_SHOW_CLASS.to_owned(),
            reveal: consts::REVEAL_CLASS.to_owned(),
        }
    }
}

impl Config {
    /// Parse a JSON override block on top of the defaults and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for values that fail [`Config::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable by the installers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_empty("themeKey", &self.theme_key)?;
        non_empty("motionKey", &self.motion_key)?;
        if self.theme_key == self.motion_key {
            return Err(invalid("motionKey", "must differ from themeKey"));
        }
        non_negative("headerOffsetPx", self.header_offset_px)?;
        non_negative("hideAfterPx", self.hide_after_px)?;
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(invalid("revealThreshold", format!("{} is outside 0..=1", self.reveal_threshold)));
        }
        if log::Level::from_str(&self.log_level).is_err() {
            return Err(invalid("logLevel", format!("unknown level `{}`", self.log_level)));
        }
        Ok(())
    }

    /// Configured log level, falling back to `info` for unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.into() }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, format!("{value} is not a finite, non-negative number")));
    }
    Ok(())
}

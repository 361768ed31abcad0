//! Theme and background-motion preferences.
//!
//! DESIGN
//! ======
//! Both preferences follow the same pattern: restore from storage on load,
//! fall back to a system signal when nothing is stored, apply, and write the
//! applied value back. Motion has one extra rule: a reduced-motion request
//! forces it off no matter what was stored or clicked, and the forced value
//! is what gets persisted.
//!
//! The page DOM stays the source of truth for the *current* state; this
//! module only decides what the next state is and records it.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use crate::store::{PrefStore, read_or_none, write_or_warn};

/// Colour theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value.
    ///
    /// An empty value counts as "nothing stored". Any other value that is not
    /// `"dark"` selects the light theme.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "dark" => Some(Self::Dark),
            _ => Some(Self::Light),
        }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }
}

/// Animated background state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    On,
    Off,
}

impl Motion {
    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    /// Interpret a stored value; empty means nothing stored, anything but
    /// `"on"` means off.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "on" => Some(Self::On),
            _ => Some(Self::Off),
        }
    }

    #[must_use]
    pub fn from_on(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }

    #[must_use]
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        Self::from_on(!self.is_on())
    }
}

/// System-level media signals sampled at start-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MediaSignals {
    /// `(prefers-color-scheme: dark)` matches.
    pub prefers_dark: bool,
    /// `(prefers-reduced-motion: reduce)` matches.
    pub prefers_reduced_motion: bool,
}

/// Theme to apply on load given the stored value and system signals.
#[must_use]
pub fn resolve_theme(stored: Option<&str>, signals: MediaSignals) -> Theme {
    stored
        .and_then(Theme::from_stored)
        .unwrap_or_else(|| Theme::from_dark(signals.prefers_dark))
}

/// Motion state actually applied for a requested state.
#[must_use]
pub fn effective_motion(requested: Motion, signals: MediaSignals) -> Motion {
    if signals.prefers_reduced_motion { Motion::Off } else { requested }
}

/// Motion state to apply on load; defaults to on when nothing is stored.
#[must_use]
pub fn resolve_motion(stored: Option<&str>, signals: MediaSignals) -> Motion {
    let requested = stored.and_then(Motion::from_stored).unwrap_or_default();
    effective_motion(requested, signals)
}

/// Persisted preference controller shared by the toggle handlers.
pub struct Preferences {
    store: Box<dyn PrefStore>,
    theme_key: String,
    motion_key: String,
    signals: MediaSignals,
}

impl Preferences {
    #[must_use]
    pub fn new(
        store: Box<dyn PrefStore>,
        theme_key: impl Into<String>,
        motion_key: impl Into<String>,
        signals: MediaSignals,
    ) -> Self {
        Self {
            store,
            theme_key: theme_key.into(),
            motion_key: motion_key.into(),
            signals,
        }
    }

    #[must_use]
    pub fn signals(&self) -> MediaSignals {
        self.signals
    }

    /// Resolve the theme for this page load and persist it.
    pub fn restore_theme(&self) -> Theme {
        let stored = read_or_none(self.store.as_ref(), &self.theme_key);
        self.set_theme(resolve_theme(stored.as_deref(), self.signals))
    }

    /// Persist `theme` and return it.
    pub fn set_theme(&self, theme: Theme) -> Theme {
        write_or_warn(self.store.as_ref(), &self.theme_key, theme.as_str());
        theme
    }

    /// Resolve the motion state for this page load and persist it.
    pub fn restore_motion(&self) -> Motion {
        let stored = read_or_none(self.store.as_ref(), &self.motion_key);
        self.set_motion(resolve_motion(stored.as_deref(), self.signals))
    }

    /// Apply the reduced-motion override to `requested`, persist the result
    /// and return it.
    pub fn set_motion(&self, requested: Motion) -> Motion {
        let motion = effective_motion(requested, self.signals);
        write_or_warn(self.store.as_ref(), &self.motion_key, motion.as_str());
        motion
    }
}

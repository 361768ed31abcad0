//! Default markup contract and tuning values for the page.
//!
//! Everything here is a default of [`crate::config::Config`]; host pages can
//! override any of it through the JSON config block.

// ── Storage ─────────────────────────────────────────────────────

/// Storage key for the persisted colour theme.
pub const THEME_KEY: &str = "fp-theme";

/// Storage key for the persisted background animation flag.
pub const MOTION_KEY: &str = "fp-anim";

// ── Media queries ───────────────────────────────────────────────

pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub const PREFERS_REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// ── Element ids ─────────────────────────────────────────────────

pub const NAV_WRAP_ID: &str = "navWrap";
pub const PROGRESS_ID: &str = "progress";
pub const THEME_TOGGLE_IDS: [&str; 2] = ["toggleTheme", "toggleThemeMobile"];
pub const MOTION_TOGGLE_IDS: [&str; 2] = ["toggleAnim", "toggleAnimMobile"];
pub const YEAR_ID: &str = "year";

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_SCRIPT_ID: &str = "folio-config";

// ── Selectors ───────────────────────────────────────────────────

/// In-page navigation links; drives both scroll-spy and smooth scrolling.
pub const NAV_LINK_SELECTOR: &str = ".menu a[href^=\"#\"]";

/// Menu items that participate in arrow-key navigation.
pub const MENU_ITEM_SELECTOR: &str = ".menu a[role=\"menuitem\"]";

pub const CARD_SELECTOR: &str = ".card";

// ── Classes and attributes ──────────────────────────────────────

pub const DARK_CLASS: &str = "dark";
pub const ANIMATE_CLASS: &str = "animate";
pub const NAV_HIDE_CLASS: &str = "nav-hide";
pub const NAV_SHOW_CLASS: &str = "nav-show";
pub const REVEAL_CLASS: &str = "reveal";

pub const ARIA_PRESSED: &str = "aria-pressed";
pub const ARIA_CURRENT: &str = "aria-current";

// ── Geometry ────────────────────────────────────────────────────

/// Height of the sticky header, subtracted from anchor scroll targets.
pub const HEADER_OFFSET_PX: f64 = 66.0;

/// Scroll offset below which the header never hides.
pub const HIDE_AFTER_PX: f64 = 10.0;

/// Fraction of a card that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.12;

/// Shrinks the viewport to its horizontal centre line for scroll-spy.
pub const SPY_ROOT_MARGIN: &str = "-50% 0px -50% 0px";

// ── Logging ─────────────────────────────────────────────────────

pub const DEFAULT_LOG_LEVEL: &str = "info";

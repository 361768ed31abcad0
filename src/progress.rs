//! Scroll progress percentage.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Document scroll geometry, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top.
    pub scroll_top: f64,
    /// Full height of the document content.
    pub scroll_height: f64,
    /// Height of the viewport.
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Maximum distance the document can scroll.
    #[must_use]
    pub fn scroll_range(&self) -> f64 {
        self.scroll_height - self.client_height
    }

    /// Scrolled fraction as a percentage in `[0, 100]`.
    ///
    /// A page shorter than its viewport reports 0. Overscroll (rubber-band
    /// scrolling) is clamped.
    #[must_use]
    pub fn percent(&self) -> f64 {
        let range = self.scroll_range();
        if range > 0.0 {
            (self.scroll_top / range * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

/// CSS `width` value for a progress percentage.
#[must_use]
pub fn width_value(percent: f64) -> String {
    format!("{percent}%")
}

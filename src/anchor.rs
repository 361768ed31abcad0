//! In-page link targets and the header-offset scroll position.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Element id named by an in-page `href` such as `#about`.
///
/// Returns `None` for a bare `#`, an empty string, or anything that is not a
/// same-page fragment.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Document offset to scroll to so the target clears the sticky header.
///
/// `rect_top` is the target's viewport-relative top edge and `scroll_y` the
/// current window scroll offset. The result never goes above the page top.
#[must_use]
pub fn scroll_target(rect_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    (rect_top + scroll_y - header_offset).max(0.0)
}

/// How the window should move to an anchor target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

impl ScrollMode {
    /// Smooth unless the user asked the system to reduce motion.
    #[must_use]
    pub fn for_reduced_motion(reduced: bool) -> Self {
        if reduced { Self::Instant } else { Self::Smooth }
    }
}

//! Scroll-spy: which navigation link matches the section in view.
//!
//! The browser side observes every linked section with a root margin that
//! collapses the viewport to its centre line, so at most one section is
//! intersecting at a time. This module maps observer entries back to links.

#[cfg(test)]
#[path = "spy_test.rs"]
mod spy_test;

use crate::anchor::fragment_id;

/// Attribute change for one navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpyMark {
    /// Index into the link list given to [`ScrollSpy::new`].
    pub link: usize,
    /// Whether the link should carry `aria-current`.
    pub current: bool,
}

/// Link table for scroll-spy, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollSpy {
    hrefs: Vec<String>,
}

impl ScrollSpy {
    /// Build from the raw `href` attribute of each navigation link.
    #[must_use]
    pub fn new(hrefs: Vec<String>) -> Self {
        Self { hrefs }
    }

    /// Distinct section ids the links point at, in link order.
    #[must_use]
    pub fn section_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::with_capacity(self.hrefs.len());
        for id in self.hrefs.iter().filter_map(|h| fragment_id(h)) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// First link pointing at `section_id`.
    #[must_use]
    pub fn link_for(&self, section_id: &str) -> Option<usize> {
        self.hrefs
            .iter()
            .position(|h| fragment_id(h) == Some(section_id))
    }

    /// Attribute change for an observer entry on `section_id`.
    #[must_use]
    pub fn mark(&self, section_id: &str, intersecting: bool) -> Option<SpyMark> {
        self.link_for(section_id).map(|link| SpyMark { link, current: intersecting })
    }
}

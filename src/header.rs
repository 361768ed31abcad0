//! Sticky header visibility driven by scroll direction.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

/// Whether the header should be on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVisibility {
    Shown,
    Hidden,
}

impl HeaderVisibility {
    #[must_use]
    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }
}

/// Remembers the previous scroll offset to detect direction.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderTracker {
    last_y: f64,
    hide_after: f64,
}

impl HeaderTracker {
    /// Start tracking from `initial_y`; the header never hides while the
    /// offset is within `hide_after` pixels of the top.
    #[must_use]
    pub fn new(initial_y: f64, hide_after: f64) -> Self {
        Self { last_y: initial_y, hide_after }
    }

    /// Feed the current scroll offset and get the header state for it.
    ///
    /// Scrolling down past the threshold hides; any other movement,
    /// including no movement, shows.
    pub fn observe(&mut self, y: f64) -> HeaderVisibility {
        let going_down = y > self.last_y && y > self.hide_after;
        self.last_y = y;
        if going_down { HeaderVisibility::Hidden } else { HeaderVisibility::Shown }
    }

    #[must_use]
    pub fn last_y(&self) -> f64 {
        self.last_y
    }
}

//! Arrow-key focus cycling across the navigation menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Direction requested by a menu key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    Next,
    Previous,
}

impl MenuKey {
    /// Map a `KeyboardEvent.key` value; only the horizontal arrows move focus.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            _ => None,
        }
    }
}

/// Index of the item that should receive focus, wrapping at both ends.
///
/// Returns `None` for an empty menu.
#[must_use]
pub fn cycle(current: usize, len: usize, key: MenuKey) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current % len;
    let next = match key {
        MenuKey::Next => (current + 1) % len,
        MenuKey::Previous => (current + len - 1) % len,
    };
    Some(next)
}

//! One-shot reveal bookkeeping for cards.
//!
//! A card is revealed the first time it intersects and is never observed
//! again. The ledger remembers which cards have been shown so the observer
//! can be disconnected once the last one is. Entries already queued for a
//! card when it is unobserved may still arrive; they are ignored.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// What to do with an observer entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// Not visible yet, already revealed, or not a tracked card; no change.
    Wait,
    /// Reveal and stop observing this card.
    Reveal,
    /// Reveal; that was the last card, so disconnect the observer.
    RevealLast,
}

impl RevealStep {
    #[must_use]
    pub fn reveals(self) -> bool {
        !matches!(self, Self::Wait)
    }
}

/// Per-card reveal state, indexed by position in the observed card list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealLedger {
    revealed: Vec<bool>,
    pending: usize,
}

impl RevealLedger {
    #[must_use]
    pub fn new(cards: usize) -> Self {
        Self { revealed: vec![false; cards], pending: cards }
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.pending == 0
    }

    #[must_use]
    pub fn is_revealed(&self, card: usize) -> bool {
        self.revealed.get(card).copied().unwrap_or(false)
    }

    /// Record one observer entry for the card at index `card`.
    pub fn observe(&mut self, card: usize, intersecting: bool) -> RevealStep {
        if !intersecting {
            return RevealStep::Wait;
        }
        let Some(slot) = self.revealed.get_mut(card) else {
            return RevealStep::Wait;
        };
        if *slot {
            return RevealStep::Wait;
        }
        *slot = true;
        self.pending -= 1;
        if self.pending == 0 { RevealStep::RevealLast } else { RevealStep::Reveal }
    }
}

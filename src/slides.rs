//! Rotation state for the hero slideshow.
//!
//! Kept free of any DOM or signal types so the advance/select rules can be
//! exercised with plain unit tests. The `Slideshow` component wraps a `Deck`
//! in a signal and wires the interval timer around it.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("slideshow needs at least one image")]
    Empty,
}

/// Which slide out of a fixed set is currently shown.
///
/// The active index always stays inside `[0, count)`; the constructor rejects
/// an empty set so the wrap-around modulo never sees a zero length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deck {
    count: usize,
    active: usize,
}

impl Deck {
    pub fn new(count: usize) -> Result<Self, DeckError> {
        if count == 0 {
            return Err(DeckError::Empty);
        }
        Ok(Self { count, active: 0 })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Timer tick: step to the next slide, wrapping past the last one.
    pub fn advance(&mut self) {
        self.active = (self.active + 1) % self.count;
    }

    /// Indicator click: jump straight to `target`. Out-of-range targets are
    /// ignored rather than clamped; the dots are generated from the same
    /// slice as the slides, so a bad index can only come from a bug.
    pub fn select(&mut self, target: usize) {
        if target < self.count {
            self.active = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Deck, DeckError};

    #[test]
    fn advance_wraps_modulo_count() {
        let mut deck = Deck::new(4).expect("deck");
        for tick in 1..=9 {
            deck.advance();
            assert_eq!(deck.active(), tick % 4, "after {tick} ticks");
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut deck = Deck::new(4).expect("deck");
        deck.advance();
        assert_eq!(deck.active(), 1);
        for _ in 0..3 {
            deck.advance();
        }
        assert_eq!(deck.active(), 0);
    }

    #[test]
    fn select_is_absolute_regardless_of_prior_state() {
        let mut deck = Deck::new(4).expect("deck");
        for ticks in 0..5 {
            for _ in 0..ticks {
                deck.advance();
            }
            deck.select(2);
            assert_eq!(deck.active(), 2);
        }
    }

    #[test]
    fn select_then_advance_steps_from_selection() {
        // Manual selection does not reset the cadence; the next tick simply
        // steps forward from wherever the user landed.
        let mut deck = Deck::new(4).expect("deck");
        deck.select(2);
        deck.advance();
        assert_eq!(deck.active(), 3);
    }

    #[test]
    fn single_slide_absorbs_any_number_of_ticks() {
        let mut deck = Deck::new(1).expect("deck");
        for _ in 0..10 {
            deck.advance();
            assert_eq!(deck.active(), 0);
        }
    }

    #[test]
    fn reselecting_active_slide_is_a_noop() {
        let mut deck = Deck::new(3).expect("deck");
        deck.select(1);
        let before = deck;
        deck.select(1);
        assert_eq!(deck, before);
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut deck = Deck::new(3).expect("deck");
        deck.select(1);
        deck.select(3);
        deck.select(usize::MAX);
        assert_eq!(deck.active(), 1);
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(Deck::new(0), Err(DeckError::Empty));
    }
}

//! Incremental reveal of an already computed match list.
//!
//! The controller never fetches anything; it only decides how much of the current match
//! list the UI shows. A new match list always resets the window, so a shorter list can
//! never inherit a stale `has_more` or an out-of-range count.

/// How much of the match list is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    /// Number of leading matches the UI may show.
    pub visible_count: usize,
    /// Whether matches remain beyond `visible_count`.
    pub has_more: bool,
}

impl RevealState {
    /// Initial state for a freshly replaced match list of `total` entries.
    ///
    /// The visible count is clamped to `total`.
    pub fn reset(window: usize, total: usize) -> Self {
        let visible_count = window.min(total);
        Self {
            visible_count,
            has_more: visible_count < total,
        }
    }

    /// Grows the window by `window` entries.
    ///
    /// A no-op once everything is revealed.
    pub fn reveal_more(self, window: usize, total: usize) -> Self {
        if !self.has_more {
            return self;
        }
        let visible_count = self.visible_count + window;
        Self {
            visible_count,
            has_more: visible_count < total,
        }
    }

    /// Clamps the state to a match list that shrank to `total` entries.
    pub fn clamp(self, total: usize) -> Self {
        let visible_count = self.visible_count.min(total);
        Self {
            visible_count,
            has_more: visible_count < total,
        }
    }
}

/// Owns the reveal window size and the current [`RevealState`].
#[derive(Debug, Clone)]
pub struct RevealController {
    /// Entries added per reveal step (at least 1).
    window: usize,
    /// Current state.
    state: RevealState,
}

impl RevealController {
    /// Creates a controller with the given window size.
    ///
    /// A zero window is raised to 1 so revealing always makes progress.
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            state: RevealState::default(),
        }
    }

    /// Returns the window size.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Returns the current state.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Resets for a new match list of `total` entries.
    pub fn reset(&mut self, total: usize) -> RevealState {
        self.state = RevealState::reset(self.window, total);
        self.state
    }

    /// Reveals another window. Returns true if the visible count changed.
    pub fn reveal_more(&mut self, total: usize) -> bool {
        let next = self.state.reveal_more(self.window, total);
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Returns the visible prefix of `items`.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.state.visible_count.min(items.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_on_large_set() {
        let state = RevealState::reset(10, 25);
        assert_eq!(
            state,
            RevealState {
                visible_count: 10,
                has_more: true
            }
        );
    }

    #[test]
    fn reveal_steps_until_exhausted() {
        let first = RevealState::reset(10, 25);
        let second = first.reveal_more(10, 25);
        assert_eq!(second.visible_count, 20);
        assert!(second.has_more);

        let third = second.reveal_more(10, 25);
        assert_eq!(third.visible_count, 30);
        assert!(!third.has_more);

        let fourth = third.reveal_more(10, 25);
        assert_eq!(fourth, third);
    }

    #[test]
    fn reset_on_small_set_clamps() {
        let state = RevealState::reset(20, 3);
        assert_eq!(state.visible_count, 3);
        assert!(!state.has_more);

        let empty = RevealState::reset(20, 0);
        assert_eq!(empty.visible_count, 0);
        assert!(!empty.has_more);
    }

    #[test]
    fn exact_fit_has_no_more() {
        assert!(!RevealState::reset(10, 10).has_more);
    }

    #[test]
    fn clamp_after_shrink() {
        let grown = RevealState::reset(10, 25).reveal_more(10, 25);
        let clamped = grown.clamp(5);
        assert_eq!(clamped.visible_count, 5);
        assert!(!clamped.has_more);
    }

    #[test]
    fn controller_tracks_state() {
        let mut reveal = RevealController::new(2);
        reveal.reset(5);
        let items = [1, 2, 3, 4, 5];
        assert_eq!(reveal.visible(&items), &[1, 2]);

        assert!(reveal.reveal_more(5));
        assert!(reveal.reveal_more(5));
        assert_eq!(reveal.visible(&items), &items[..]);
        assert!(!reveal.state().has_more);
        assert!(!reveal.reveal_more(5));
    }

    #[test]
    fn new_query_resets_window() {
        let mut reveal = RevealController::new(3);
        reveal.reset(10);
        reveal.reveal_more(10);
        assert_eq!(reveal.state().visible_count, 6);

        reveal.reset(2);
        assert_eq!(reveal.state().visible_count, 2);
        assert!(!reveal.state().has_more);
    }

    #[test]
    fn zero_window_is_raised() {
        let mut reveal = RevealController::new(0);
        assert_eq!(reveal.window(), 1);
        reveal.reset(3);
        assert!(reveal.reveal_more(3));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Master deck navigation across project panels.
//!
//! The deck owns `current` as the single source of truth for which panel
//! is visible. Boundary policy is clamp: `next` on the last panel and
//! `prev` on the first are no-ops, and the matching buttons render
//! disabled. This is deliberately different from the nested gallery,
//! which wraps.

/// Describes one applied panel transition.
///
/// The pair of ordinals is the complete set of visual mutations a panel
/// switch requires: deactivate one panel and its indicator, activate the
/// other. Callers count these values to verify idempotence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectChange {
    pub deactivated: usize,
    pub activated: usize,
}

/// Navigation state for the master project deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNavigator {
    current: usize,
    total: usize,
}

impl ProjectNavigator {
    /// Creates a deck over `total` panels, starting at the first.
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    /// Index of the currently active panel.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of panels in the deck.
    pub fn total(&self) -> usize {
        self.total
    }

    /// 1-based position for the "current / total" counter display.
    pub fn position(&self) -> (usize, usize) {
        (self.current + 1, self.total)
    }

    /// Navigates to `index`.
    ///
    /// Returns `None` when `index` is already current or out of range;
    /// out-of-range requests are silently dropped because the only legal
    /// inputs are the indicator ordinals enumerated at construction.
    pub fn go_to(&mut self, index: usize) -> Option<ProjectChange> {
        if index == self.current || index >= self.total {
            return None;
        }
        let change = ProjectChange {
            deactivated: self.current,
            activated: index,
        };
        self.current = index;
        Some(change)
    }

    /// Advances to the next panel; no-op on the last one.
    pub fn next(&mut self) -> Option<ProjectChange> {
        if self.has_next() {
            self.go_to(self.current + 1)
        } else {
            None
        }
    }

    /// Steps back to the previous panel; no-op on the first one.
    pub fn previous(&mut self) -> Option<ProjectChange> {
        if self.has_previous() {
            self.go_to(self.current - 1)
        } else {
            None
        }
    }

    /// Whether the next button should be enabled.
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.total
    }

    /// Whether the previous button should be enabled.
    pub fn has_previous(&self) -> bool {
        self.current > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_deck_starts_at_first_panel() {
        let deck = ProjectNavigator::new(4);
        assert_eq!(deck.current_index(), 0);
        assert_eq!(deck.position(), (1, 4));
        assert!(!deck.has_previous());
        assert!(deck.has_next());
    }

    #[test]
    fn go_to_reports_both_ordinals() {
        let mut deck = ProjectNavigator::new(4);
        let change = deck.go_to(2).expect("expected a change");
        assert_eq!(change.deactivated, 0);
        assert_eq!(change.activated, 2);
        assert_eq!(deck.current_index(), 2);
    }

    #[test]
    fn go_to_current_index_is_a_no_op() {
        let mut deck = ProjectNavigator::new(4);
        deck.go_to(2);
        assert!(deck.go_to(2).is_none());
        assert_eq!(deck.current_index(), 2);
    }

    #[test]
    fn go_to_out_of_range_is_silently_dropped() {
        let mut deck = ProjectNavigator::new(4);
        assert!(deck.go_to(4).is_none());
        assert!(deck.go_to(99).is_none());
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn previous_at_first_panel_is_a_no_op() {
        let mut deck = ProjectNavigator::new(4);
        assert!(deck.previous().is_none());
        assert_eq!(deck.current_index(), 0);
        assert!(!deck.has_previous());
    }

    #[test]
    fn next_at_last_panel_is_a_no_op() {
        let mut deck = ProjectNavigator::new(4);
        deck.go_to(3);
        assert!(deck.next().is_none());
        assert_eq!(deck.current_index(), 3);
        assert!(!deck.has_next());
    }

    #[test]
    fn next_and_previous_clamp_rather_than_wrap() {
        let mut deck = ProjectNavigator::new(2);
        assert!(deck.next().is_some());
        assert!(deck.next().is_none()); // stays at 1, does not wrap to 0
        assert!(deck.previous().is_some());
        assert!(deck.previous().is_none()); // stays at 0, does not wrap to 1
    }

    #[test]
    fn single_panel_deck_disables_both_directions() {
        let mut deck = ProjectNavigator::new(1);
        assert!(!deck.has_next());
        assert!(!deck.has_previous());
        assert!(deck.next().is_none());
        assert!(deck.previous().is_none());
    }

    #[test]
    fn position_is_one_based() {
        let mut deck = ProjectNavigator::new(3);
        deck.go_to(2);
        assert_eq!(deck.position(), (3, 3));
    }
}

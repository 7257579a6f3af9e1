//! Session state tracking
//!
//! Maintains:
//! - Enabled categories
//! - The deck of cards not yet mastered
//! - Cursor onto the card being shown
//! - Correct tally and shuffle flag

use crate::catalog::{Card, Catalog, Category};
use crate::session::order;
use rand::Rng;

/// How the learner answered the current card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Card is mastered and leaves the deck
    Correct,
    /// Card goes to the back of the deck
    Incorrect,
}

/// Category → enabled flag, all enabled by default
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnabledCategories([bool; Category::COUNT]);

impl EnabledCategories {
    pub fn all() -> Self {
        EnabledCategories([true; Category::COUNT])
    }

    pub fn none() -> Self {
        EnabledCategories([false; Category::COUNT])
    }

    /// Enable exactly the listed categories
    pub fn only(categories: &[Category]) -> Self {
        let mut enabled = Self::none();
        for &category in categories {
            enabled.set(category, true);
        }
        enabled
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0[category.index()]
    }

    pub fn set(&mut self, category: Category, on: bool) {
        self.0[category.index()] = on;
    }

    pub fn toggle(&mut self, category: Category) {
        self.0[category.index()] = !self.0[category.index()];
    }

    /// Every category with its flag, in natural order
    pub fn iter(&self) -> impl Iterator<Item = (Category, bool)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.contains(c)))
    }
}

impl Default for EnabledCategories {
    fn default() -> Self {
        Self::all()
    }
}

/// Complete session state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    /// Categories whose cards are in play
    enabled: EnabledCategories,
    /// Catalog slots of the cards not yet mastered
    deck: Vec<usize>,
    /// Deck index of the card being shown
    cursor: Option<usize>,
    /// Cards mastered this session
    correct: u32,
    /// Whether the deck is currently shuffled
    shuffled: bool,
    /// Number of cards in the enabled categories
    total: usize,
}

impl SessionState {
    /// Fresh session over the enabled categories, cards in natural order
    pub fn initialize(catalog: &Catalog, enabled: EnabledCategories) -> Self {
        let deck: Vec<usize> = catalog
            .natural_order()
            .iter()
            .copied()
            .filter(|&slot| catalog.category(slot).is_some_and(|c| enabled.contains(c)))
            .collect();

        let total = deck.len();
        let cursor = if deck.is_empty() { None } else { Some(0) };

        tracing::debug!(cards = total, "session initialized");

        SessionState {
            enabled,
            deck,
            cursor,
            correct: 0,
            shuffled: false,
            total,
        }
    }

    /// Catalog slot of the card being shown
    pub fn current_slot(&self) -> Option<usize> {
        self.cursor.and_then(|i| self.deck.get(i).copied())
    }

    /// Card being shown, or None when the session is complete
    pub fn current_card<'a>(&self, catalog: &'a Catalog) -> Option<&'a Card> {
        self.current_slot().and_then(|slot| catalog.get(slot))
    }

    /// Mark the current card. Returns false when there was no card to mark.
    pub fn advance(&mut self, catalog: &Catalog, outcome: Outcome) -> bool {
        let Some(index) = self.cursor.filter(|&i| i < self.deck.len()) else {
            return false;
        };

        let slot = self.deck.remove(index);
        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::Incorrect => self.deck.push(slot),
        }

        self.sync_cursor(catalog);
        true
    }

    /// Flip one category and start over with the new filter
    pub fn toggle_category(&mut self, catalog: &Catalog, category: Category) {
        let mut enabled = self.enabled;
        enabled.toggle(category);
        *self = Self::initialize(catalog, enabled);
    }

    /// Start over with the same categories
    pub fn reset(&mut self, catalog: &Catalog) {
        *self = Self::initialize(catalog, self.enabled);
    }

    /// Shuffle the enabled cards, or put them back in natural order if already shuffled
    pub fn toggle_shuffle<R: Rng + ?Sized>(&mut self, catalog: &Catalog, rng: &mut R) {
        let enabled = self.enabled;
        let keep = |slot: usize| catalog.category(slot).is_some_and(|c| enabled.contains(c));

        if self.shuffled {
            order::restore_where(&mut self.deck, keep, |slot| catalog.rank(slot));
        } else {
            order::shuffle_where(&mut self.deck, keep, rng);
        }

        self.shuffled = !self.shuffled;
        self.sync_cursor(catalog);
    }

    /// Point the cursor at the first card from an enabled category
    fn sync_cursor(&mut self, catalog: &Catalog) {
        let enabled = self.enabled;
        self.cursor = self
            .deck
            .iter()
            .position(|&slot| catalog.category(slot).is_some_and(|c| enabled.contains(c)));
    }

    pub fn enabled(&self) -> &EnabledCategories {
        &self.enabled
    }

    #[cfg(test)]
    pub fn deck(&self) -> &[usize] {
        &self.deck
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    /// Size of the enabled filter; does not shrink as cards are mastered
    pub fn total_enabled(&self) -> usize {
        self.total
    }

    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn is_complete(&self) -> bool {
        self.current_slot().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// a1, a2 in Man; b1 in Pin
    fn small_catalog() -> Catalog {
        Catalog::from_cards(vec![
            Card::tile("a1", "a1", Category::Man, "", ""),
            Card::tile("a2", "a2", Category::Man, "", ""),
            Card::tile("b1", "b1", Category::Pin, "", ""),
        ])
        .unwrap()
    }

    fn deck_ids(state: &SessionState, catalog: &Catalog) -> Vec<String> {
        state
            .deck()
            .iter()
            .map(|&slot| catalog.get(slot).unwrap().id.clone())
            .collect()
    }

    fn current_id(state: &SessionState, catalog: &Catalog) -> Option<String> {
        state.current_card(catalog).map(|c| c.id.clone())
    }

    #[test]
    fn test_initialize_natural_order() {
        let catalog = small_catalog();
        let state = SessionState::initialize(&catalog, EnabledCategories::all());

        assert_eq!(deck_ids(&state, &catalog), vec!["a1", "a2", "b1"]);
        assert_eq!(state.cursor(), Some(0));
        assert_eq!(state.correct_count(), 0);
        assert_eq!(state.total_enabled(), 3);
        assert!(!state.is_shuffled());
    }

    #[test]
    fn test_initialize_with_nothing_enabled_is_complete() {
        let catalog = small_catalog();
        let state = SessionState::initialize(&catalog, EnabledCategories::none());

        assert!(state.deck().is_empty());
        assert_eq!(state.cursor(), None);
        assert!(state.is_complete());
        assert!(state.current_card(&catalog).is_none());
    }

    #[test]
    fn test_worked_example() {
        let catalog = small_catalog();
        let mut state = SessionState::initialize(&catalog, EnabledCategories::all());

        assert!(state.advance(&catalog, Outcome::Correct));
        assert_eq!(deck_ids(&state, &catalog), vec!["a2", "b1"]);
        assert_eq!(current_id(&state, &catalog).as_deref(), Some("a2"));
        assert_eq!(state.correct_count(), 1);

        assert!(state.advance(&catalog, Outcome::Incorrect));
        assert_eq!(deck_ids(&state, &catalog), vec!["b1", "a2"]);
        assert_eq!(current_id(&state, &catalog).as_deref(), Some("b1"));
        assert_eq!(state.correct_count(), 1);

        assert!(state.advance(&catalog, Outcome::Correct));
        assert_eq!(deck_ids(&state, &catalog), vec!["a2"]);
        assert_eq!(state.cursor(), Some(0));
        assert_eq!(state.correct_count(), 2);

        assert!(state.advance(&catalog, Outcome::Correct));
        assert!(state.deck().is_empty());
        assert_eq!(state.cursor(), None);
        assert_eq!(state.correct_count(), 3);
        assert!(state.is_complete());

        // Total stays at the filter size
        assert_eq!(state.total_enabled(), 3);
    }

    #[test]
    fn test_advance_when_complete_is_noop() {
        let catalog = small_catalog();
        let mut state = SessionState::initialize(&catalog, EnabledCategories::none());
        let before = state.clone();

        assert!(!state.advance(&catalog, Outcome::Correct));
        assert_eq!(state, before);
    }

    #[test]
    fn test_incorrect_forever_never_completes() {
        let catalog = small_catalog();
        let mut state = SessionState::initialize(&catalog, EnabledCategories::all());

        for _ in 0..30 {
            assert!(state.advance(&catalog, Outcome::Incorrect));
            assert_eq!(state.remaining(), 3);
            assert!(!state.is_complete());
        }
        assert_eq!(state.correct_count(), 0);
        // 30 rotations of a 3-card deck land back on natural order
        assert_eq!(deck_ids(&state, &catalog), vec!["a1", "a2", "b1"]);
    }

    #[test]
    fn test_disable_category_mid_session_resets() {
        let catalog = small_catalog();
        let mut state = SessionState::initialize(&catalog, EnabledCategories::all());
        state.advance(&catalog, Outcome::Correct);
        state.advance(&catalog, Outcome::Incorrect);
        state.advance(&catalog, Outcome::Correct);
        assert_eq!(deck_ids(&state, &catalog), vec!["a2"]);

        state.toggle_category(&catalog, Category::Pin);

        assert_eq!(deck_ids(&state, &catalog), vec!["a1", "a2"]);
        assert_eq!(state.correct_count(), 0);
        assert_eq!(state.total_enabled(), 2);
        assert!(!state.enabled().contains(Category::Pin));
        assert!(state.enabled().contains(Category::Man));
    }

    #[test]
    fn test_reset_keeps_filter() {
        let catalog = small_catalog();
        let mut state = SessionState::initialize(&catalog, EnabledCategories::only(&[Category::Pin]));
        state.advance(&catalog, Outcome::Correct);
        assert!(state.is_complete());

        state.reset(&catalog);
        assert_eq!(deck_ids(&state, &catalog), vec!["b1"]);
        assert_eq!(state.correct_count(), 0);
        assert_eq!(state.enabled(), &EnabledCategories::only(&[Category::Pin]));
    }

    #[test]
    fn test_toggle_category_clears_shuffle() {
        let catalog = Catalog::riichi();
        let mut rng = StdRng::seed_from_u64(21);
        let mut state = SessionState::initialize(&catalog, EnabledCategories::all());
        state.toggle_shuffle(&catalog, &mut rng);
        state.advance(&catalog, Outcome::Incorrect);
        assert!(state.is_shuffled());

        state.toggle_category(&catalog, Category::Yaku);

        let mut expected = EnabledCategories::all();
        expected.set(Category::Yaku, false);
        assert!(!state.is_shuffled());
        assert_eq!(state.correct_count(), 0);
        assert_eq!(state.cursor(), Some(0));
        assert_eq!(
            state.deck(),
            SessionState::initialize(&catalog, expected).deck()
        );
    }

    #[test]
    fn test_reset_clears_shuffle() {
        let catalog = Catalog::riichi();
        let mut rng = StdRng::seed_from_u64(8);
        let enabled = EnabledCategories::only(&[Category::Man, Category::Dragons]);
        let mut state = SessionState::initialize(&catalog, enabled);
        state.toggle_shuffle(&catalog, &mut rng);
        state.advance(&catalog, Outcome::Correct);
        assert!(state.is_shuffled());

        state.reset(&catalog);

        assert!(!state.is_shuffled());
        assert_eq!(state.correct_count(), 0);
        assert_eq!(state.remaining(), 12);
        assert_eq!(state.deck(), SessionState::initialize(&catalog, enabled).deck());
    }

    #[test]
    fn test_shuffle_then_unshuffle_restores_order() {
        let catalog = Catalog::riichi();
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = SessionState::initialize(&catalog, EnabledCategories::all());
        let natural = state.deck().to_vec();

        state.toggle_shuffle(&catalog, &mut rng);
        assert!(state.is_shuffled());
        assert_eq!(state.cursor(), Some(0));
        assert_ne!(state.deck(), natural.as_slice());

        state.toggle_shuffle(&catalog, &mut rng);
        assert!(!state.is_shuffled());
        assert_eq!(state.deck(), natural.as_slice());
    }

    #[test]
    fn test_unshuffle_keeps_requeued_cards_in_natural_order() {
        let catalog = small_catalog();
        let mut rng = StdRng::seed_from_u64(11);
        let mut state = SessionState::initialize(&catalog, EnabledCategories::all());
        state.advance(&catalog, Outcome::Incorrect);
        assert_eq!(deck_ids(&state, &catalog), vec!["a2", "b1", "a1"]);

        state.toggle_shuffle(&catalog, &mut rng);
        state.toggle_shuffle(&catalog, &mut rng);
        assert_eq!(deck_ids(&state, &catalog), vec!["a1", "a2", "b1"]);
    }

    #[test]
    fn test_stale_disabled_cards_are_skipped() {
        let catalog = small_catalog();
        let mut state = SessionState::initialize(&catalog, EnabledCategories::all());
        // Disable Man without rebuilding the deck
        state.enabled.set(Category::Man, false);
        state.sync_cursor(&catalog);
        assert_eq!(current_id(&state, &catalog).as_deref(), Some("b1"));

        state.advance(&catalog, Outcome::Correct);
        assert_eq!(deck_ids(&state, &catalog), vec!["a1", "a2"]);
        assert!(state.is_complete());
        assert_eq!(state.cursor(), None);
    }

    #[test]
    fn test_shuffle_does_not_move_disabled_cards() {
        let catalog = Catalog::riichi();
        let mut rng = StdRng::seed_from_u64(99);
        let mut state = SessionState::initialize(&catalog, EnabledCategories::all());
        state.enabled.set(Category::Yaku, false);
        let before = state.deck().to_vec();

        state.toggle_shuffle(&catalog, &mut rng);
        for (i, &slot) in state.deck().iter().enumerate() {
            if catalog.category(slot) == Some(Category::Yaku) {
                assert_eq!(before[i], slot);
            }
        }

        state.toggle_shuffle(&catalog, &mut rng);
        assert_eq!(state.deck(), before.as_slice());
    }
}

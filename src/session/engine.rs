//! Event reducer over the session state
//!
//! Advancing and shuffling are two-phase: the request is recorded as a
//! `PendingTransition` and the deck only changes once its deadline passes,
//! so the front end has time to show the swipe. While a transition is
//! pending, new advance/shuffle/flip events are dropped. Category toggles
//! and resets are immediate and cancel whatever is pending.

use crate::catalog::{Card, Catalog, Category};
use crate::session::state::{EnabledCategories, Outcome, SessionState};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Input the engine reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Reveal or hide the back of the current card
    Flip,
    /// Answer the current card
    Advance(Outcome),
    /// Shuffle or unshuffle the deck
    ToggleShuffle,
    /// Enable or disable a category (resets progress)
    ToggleCategory(Category),
    /// Start over with the same categories
    Reset,
    /// Clock tick; applies a pending transition once due
    Tick,
}

/// Deferred mutation waiting for the settle interval
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    Advance(Outcome),
    Shuffle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTransition {
    pub kind: TransitionKind,
    pub deadline: Instant,
}

/// Owns the catalog, the session state and the transition in flight
pub struct Engine {
    catalog: Catalog,
    state: SessionState,
    pending: Option<PendingTransition>,
    /// Presentational only; not part of the session state
    flipped: bool,
    settle: Duration,
    rng: StdRng,
}

impl Engine {
    pub fn new(
        catalog: Catalog,
        enabled: EnabledCategories,
        settle: Duration,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = SessionState::initialize(&catalog, enabled);

        Engine {
            catalog,
            state,
            pending: None,
            flipped: false,
            settle,
            rng,
        }
    }

    /// Apply one event. Returns whether it was accepted.
    pub fn handle(&mut self, event: Event, now: Instant) -> bool {
        match event {
            Event::Tick => self.tick(now),
            Event::Flip => {
                if self.pending.is_some() || self.state.is_complete() {
                    return false;
                }
                self.flipped = !self.flipped;
                true
            }
            Event::Advance(outcome) => self.begin(TransitionKind::Advance(outcome), now),
            Event::ToggleShuffle => self.begin(TransitionKind::Shuffle, now),
            Event::ToggleCategory(category) => {
                self.cancel_pending();
                self.state.toggle_category(&self.catalog, category);
                self.flipped = false;
                tracing::info!(%category, enabled = self.state.enabled().contains(category), "category toggled");
                true
            }
            Event::Reset => {
                self.cancel_pending();
                self.state.reset(&self.catalog);
                self.flipped = false;
                tracing::info!("progress reset");
                true
            }
        }
    }

    /// Apply the pending transition if its deadline has passed
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                self.apply(pending.kind);
                true
            }
            _ => false,
        }
    }

    fn begin(&mut self, kind: TransitionKind, now: Instant) -> bool {
        if self.pending.is_some() || self.state.is_complete() {
            tracing::debug!(?kind, "transition rejected");
            return false;
        }

        if self.settle.is_zero() {
            self.apply(kind);
        } else {
            self.pending = Some(PendingTransition {
                kind,
                deadline: now + self.settle,
            });
        }
        true
    }

    fn apply(&mut self, kind: TransitionKind) {
        match kind {
            TransitionKind::Advance(outcome) => {
                let card = self.state.current_card(&self.catalog).map(|c| c.id.clone());
                if self.state.advance(&self.catalog, outcome) {
                    tracing::debug!(
                        card = ?card,
                        ?outcome,
                        remaining = self.state.remaining(),
                        cursor = ?self.state.cursor(),
                        "card answered"
                    );
                }
                if self.state.is_complete() {
                    tracing::info!(correct = self.state.correct_count(), "session complete");
                }
            }
            TransitionKind::Shuffle => {
                self.state.toggle_shuffle(&self.catalog, &mut self.rng);
                tracing::debug!(shuffled = self.state.is_shuffled(), "deck reordered");
            }
        }
        self.flipped = false;
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(kind = ?pending.kind, "pending transition cancelled");
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.state.current_card(&self.catalog)
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    pub fn pending(&self) -> Option<&PendingTransition> {
        self.pending.as_ref()
    }

    /// Time left before the pending transition is due
    pub fn time_to_deadline(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|p| p.deadline.saturating_duration_since(now))
    }
}

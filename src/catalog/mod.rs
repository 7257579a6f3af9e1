//! Card Catalog: the read-only set of study cards
//!
//! # Components
//! - `card.rs`: Card, CardFace and Category types
//! - `riichi.rs`: Built-in Riichi Mahjong tiles and yaku
//! - `loader.rs`: JSON catalog files
//!
//! Cards are addressed by slot (their position in the catalog). Natural order
//! is category order first, then the order cards appear in the catalog.

pub mod card;
pub mod loader;
pub mod riichi;

pub use card::{Card, CardFace, Category};

use crate::error::{AppError, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

/// Read-only card collection with a precomputed natural-rank table
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Cards in load order
    cards: Vec<Card>,
    /// Slots sorted into natural order
    natural: Vec<usize>,
    /// Card id → natural rank
    ranks: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        for card in &cards {
            if !seen.insert(card.id.as_str()) {
                return Err(AppError::DuplicateCard(card.id.clone()));
            }
        }
        Ok(Self::index(cards))
    }

    /// The built-in Riichi Mahjong catalog
    pub fn riichi() -> Self {
        Self::index(riichi::cards())
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let catalog = Self::from_cards(loader::read_cards(path)?)?;
        tracing::info!(path = %path.display(), cards = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    fn index(cards: Vec<Card>) -> Self {
        let mut natural: Vec<usize> = (0..cards.len()).collect();
        // sort_by_key is stable, so catalog order holds within a category
        natural.sort_by_key(|&slot| cards[slot].category.index());

        let ranks = natural
            .iter()
            .enumerate()
            .map(|(rank, &slot)| (cards[slot].id.clone(), rank))
            .collect();

        Catalog {
            cards,
            natural,
            ranks,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&Card> {
        self.cards.get(slot)
    }

    /// Slot of the card with this id
    pub fn find(&self, id: &str) -> Option<usize> {
        self.ranks.get(id).map(|&rank| self.natural[rank])
    }

    /// Natural rank of the card in `slot`. Unknown slots sort last.
    pub fn rank(&self, slot: usize) -> usize {
        self.cards
            .get(slot)
            .and_then(|card| self.ranks.get(&card.id))
            .copied()
            .unwrap_or(usize::MAX)
    }

    /// Category of the card in `slot`
    pub fn category(&self, slot: usize) -> Option<Category> {
        self.cards.get(slot).map(|card| card.category)
    }

    /// All slots in natural order
    pub fn natural_order(&self) -> &[usize] {
        &self.natural
    }

    /// Cards in natural order
    pub fn iter_natural(&self) -> impl Iterator<Item = &Card> + '_ {
        self.natural.iter().map(move |&slot| &self.cards[slot])
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.cards.iter().filter(|c| c.category == category).count()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::riichi()
    }
}

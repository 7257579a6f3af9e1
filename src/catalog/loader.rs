//! JSON catalog files
//!
//! ```json
//! { "cards": [
//!     { "id": "Ton", "name": "East Wind", "category": "winds", "kanji": "東", "romaji": "ton" },
//!     { "id": "Riichi", "name": "Riichi", "category": "yaku", "kanji": "立直",
//!       "romaji": "riichi", "score": "1 han", "description": "Ready hand" }
//! ] }
//! ```
//!
//! A record with a `score` becomes a combination card, anything else a tile.

use super::card::{Card, CardFace, Category};
use crate::error::{AppError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    cards: Vec<CardRecord>,
}

#[derive(Debug, Deserialize)]
struct CardRecord {
    id: String,
    name: String,
    category: Category,
    #[serde(default)]
    kanji: String,
    #[serde(default)]
    romaji: String,
    score: Option<String>,
    description: Option<String>,
}

impl CardRecord {
    fn into_card(self) -> Result<Card> {
        if self.id.trim().is_empty() {
            return Err(AppError::InvalidCard {
                id: self.id,
                reason: "empty id".to_string(),
            });
        }

        let face = match self.score {
            Some(score) => CardFace::Combination {
                kanji: self.kanji,
                romaji: self.romaji,
                score,
                description: self.description.unwrap_or_default(),
            },
            None if self.description.is_some() => {
                return Err(AppError::InvalidCard {
                    id: self.id,
                    reason: "description without score".to_string(),
                });
            }
            None => CardFace::Tile {
                kanji: self.kanji,
                romaji: self.romaji,
            },
        };

        Ok(Card {
            id: self.id,
            name: self.name,
            category: self.category,
            face,
        })
    }
}

/// Parse catalog cards from a JSON string, keeping file order
pub fn parse_cards(content: &str) -> Result<Vec<Card>> {
    let file: CatalogFile = serde_json::from_str(content)?;
    file.cards.into_iter().map(CardRecord::into_card).collect()
}

/// Read catalog cards from a JSON file
pub fn read_cards(path: &Path) -> Result<Vec<Card>> {
    let content = fs::read_to_string(path)?;
    parse_cards(&content)
}

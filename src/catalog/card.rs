//! Card and category types
//!
//! A card is either a plain tile or a scored combination (yaku). The
//! category decides where the card sits in natural order.

use crate::error::AppError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Card group that can be enabled or disabled as a unit.
///
/// Variant order is the natural order of the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Man,
    Pin,
    Sou,
    Winds,
    Dragons,
    Yaku,
}

impl Category {
    pub const COUNT: usize = 6;

    /// All categories in natural order
    pub const ALL: [Category; Category::COUNT] = [
        Category::Man,
        Category::Pin,
        Category::Sou,
        Category::Winds,
        Category::Dragons,
        Category::Yaku,
    ];

    /// Position in natural order
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Man => "man",
            Category::Pin => "pin",
            Category::Sou => "sou",
            Category::Winds => "winds",
            Category::Dragons => "dragons",
            Category::Yaku => "yaku",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Man => "Characters",
            Category::Pin => "Circles",
            Category::Sou => "Bamboo",
            Category::Winds => "Winds",
            Category::Dragons => "Dragons",
            Category::Yaku => "Yaku",
        }
    }

    /// Card shown on the category toggle. Yaku have no tile to show.
    pub fn sample_card(self) -> Option<&'static str> {
        match self {
            Category::Man => Some("Man1"),
            Category::Pin => Some("Pin1"),
            Category::Sou => Some("Sou1"),
            Category::Winds => Some("Ton"),
            Category::Dragons => Some("Hatsu"),
            Category::Yaku => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| AppError::UnknownCategory(s.to_string()))
    }
}

/// What the back of a card shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardFace {
    /// A single tile: its written form and reading
    Tile { kanji: String, romaji: String },
    /// A scoring combination with its han value
    Combination {
        kanji: String,
        romaji: String,
        score: String,
        description: String,
    },
}

/// Immutable study item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub face: CardFace,
}

impl Card {
    pub fn tile(id: &str, name: &str, category: Category, kanji: &str, romaji: &str) -> Self {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            category,
            face: CardFace::Tile {
                kanji: kanji.to_string(),
                romaji: romaji.to_string(),
            },
        }
    }

    pub fn combination(
        id: &str,
        name: &str,
        kanji: &str,
        romaji: &str,
        score: &str,
        description: &str,
    ) -> Self {
        Card {
            id: id.to_string(),
            name: name.to_string(),
            category: Category::Yaku,
            face: CardFace::Combination {
                kanji: kanji.to_string(),
                romaji: romaji.to_string(),
                score: score.to_string(),
                description: description.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("man".parse::<Category>().unwrap(), Category::Man);
        assert_eq!(" Dragons ".parse::<Category>().unwrap(), Category::Dragons);
        assert!(matches!(
            "flowers".parse::<Category>(),
            Err(AppError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_natural_order_matches_index() {
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
        assert!(Category::Man < Category::Yaku);
    }

    #[test]
    fn test_face_variant() {
        let tile = Card::tile("Ton", "East Wind", Category::Winds, "東", "ton");
        let yaku = Card::combination("Riichi", "Riichi", "立直", "riichi", "1 han", "Ready hand");
        assert!(matches!(tile.face, CardFace::Tile { .. }));
        assert!(matches!(yaku.face, CardFace::Combination { .. }));
        assert_eq!(yaku.category, Category::Yaku);
    }
}

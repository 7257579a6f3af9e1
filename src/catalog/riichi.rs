//! Built-in Riichi Mahjong catalog: 34 tiles and the common yaku

use super::card::{Card, Category};

const NUMERALS: [(&str, &str, &str); 9] = [
    ("1", "一", "ii"),
    ("2", "二", "ryan"),
    ("3", "三", "san"),
    ("4", "四", "suu"),
    ("5", "五", "uu"),
    ("6", "六", "rou"),
    ("7", "七", "chii"),
    ("8", "八", "paa"),
    ("9", "九", "kyuu"),
];

/// (category, id prefix, suit name, suit kanji, suit reading)
const SUITS: [(Category, &str, &str, &str, &str); 3] = [
    (Category::Man, "Man", "Characters", "萬", "man"),
    (Category::Pin, "Pin", "Circles", "筒", "pin"),
    (Category::Sou, "Sou", "Bamboo", "索", "sou"),
];

const WINDS: [(&str, &str, &str, &str); 4] = [
    ("Ton", "East Wind", "東", "ton"),
    ("Nan", "South Wind", "南", "nan"),
    ("Shaa", "West Wind", "西", "shaa"),
    ("Pei", "North Wind", "北", "pei"),
];

const DRAGONS: [(&str, &str, &str, &str); 3] = [
    ("Haku", "White Dragon", "白", "haku"),
    ("Hatsu", "Green Dragon", "發", "hatsu"),
    ("Chun", "Red Dragon", "中", "chun"),
];

/// (id, name, kanji, romaji, score, description)
#[rustfmt::skip]
const YAKU: [(&str, &str, &str, &str, &str, &str); 28] = [
    ("Riichi", "Riichi", "立直", "riichi", "1 han (closed only)",
        "Declare a ready hand with a closed hand and a 1000 point deposit."),
    ("Ippatsu", "Ippatsu", "一発", "ippatsu", "1 han (closed only)",
        "Win within one uninterrupted go-around after declaring riichi."),
    ("MenzenTsumo", "Fully Concealed Hand", "門前清自摸和", "menzen tsumo", "1 han (closed only)",
        "Win by self-draw with a fully closed hand."),
    ("Pinfu", "Pinfu", "平和", "pinfu", "1 han (closed only)",
        "Four sequences, a valueless pair and a two-sided wait."),
    ("Tanyao", "All Simples", "断幺九", "tanyao", "1 han",
        "Hand made only of number tiles 2 through 8."),
    ("Iipeikou", "Pure Double Sequence", "一盃口", "iipeikou", "1 han (closed only)",
        "Two identical sequences in the same suit."),
    ("Yakuhai", "Value Tiles", "役牌", "yakuhai", "1 han per set",
        "A triplet of dragons, the seat wind or the round wind."),
    ("HaiteiRaoyue", "Under the Sea", "海底摸月", "haitei raoyue", "1 han",
        "Win by self-draw on the last tile of the wall."),
    ("HouteiRaoyui", "Under the River", "河底撈魚", "houtei raoyui", "1 han",
        "Win on the discard of the last tile of the hand."),
    ("RinshanKaihou", "After a Kan", "嶺上開花", "rinshan kaihou", "1 han",
        "Win on the replacement tile drawn after declaring a kan."),
    ("Chankan", "Robbing a Kan", "搶槓", "chankan", "1 han",
        "Win on a tile another player adds to an open triplet to make a kan."),
    ("DoubleRiichi", "Double Riichi", "両立直", "daburu riichi", "2 han (closed only)",
        "Declare riichi on the very first uninterrupted turn."),
    ("Chiitoitsu", "Seven Pairs", "七対子", "chiitoitsu", "2 han (closed only)",
        "Seven distinct pairs."),
    ("SanshokuDoujun", "Mixed Triple Sequence", "三色同順", "sanshoku doujun", "2 han (1 open)",
        "The same sequence in all three suits."),
    ("Ittsu", "Pure Straight", "一気通貫", "ittsu", "2 han (1 open)",
        "Sequences 1-2-3, 4-5-6 and 7-8-9 in one suit."),
    ("Chanta", "Half Outside Hand", "混全帯幺九", "chanta", "2 han (1 open)",
        "Every set and the pair contain a terminal or honor tile."),
    ("Toitoi", "All Triplets", "対々和", "toitoi", "2 han",
        "Four triplets or kans and a pair."),
    ("Sanankou", "Three Concealed Triplets", "三暗刻", "sanankou", "2 han",
        "Three triplets formed without calling."),
    ("SanshokuDoukou", "Triple Triplets", "三色同刻", "sanshoku doukou", "2 han",
        "The same numbered triplet in all three suits."),
    ("Sankantsu", "Three Kans", "三槓子", "sankantsu", "2 han",
        "Three kans declared by one player."),
    ("Shousangen", "Little Three Dragons", "小三元", "shousangen", "2 han",
        "Two dragon triplets and a pair of the third dragon."),
    ("Honroutou", "All Terminals and Honors", "混老頭", "honroutou", "2 han",
        "Hand made only of terminals and honor tiles."),
    ("Honitsu", "Half Flush", "混一色", "honitsu", "3 han (2 open)",
        "Tiles from a single suit plus honor tiles."),
    ("Junchan", "Fully Outside Hand", "純全帯幺九", "junchan", "3 han (2 open)",
        "Every set and the pair contain a terminal; no honor tiles."),
    ("Ryanpeikou", "Twice Pure Double Sequence", "二盃口", "ryanpeikou", "3 han (closed only)",
        "Two different pairs of identical sequences."),
    ("Chinitsu", "Full Flush", "清一色", "chinitsu", "6 han (5 open)",
        "Every tile from a single suit."),
    ("KokushiMusou", "Thirteen Orphans", "国士無双", "kokushi musou", "Yakuman",
        "One of each terminal and honor tile plus a duplicate of any of them."),
    ("Daisangen", "Big Three Dragons", "大三元", "daisangen", "Yakuman",
        "Triplets or kans of all three dragons."),
];

/// Cards of the built-in catalog in natural order
pub fn cards() -> Vec<Card> {
    let mut cards = Vec::with_capacity(34 + YAKU.len());

    for (category, prefix, suit, suit_kanji, suit_romaji) in SUITS {
        for (number, kanji, romaji) in NUMERALS {
            cards.push(Card::tile(
                &format!("{}{}", prefix, number),
                &format!("{} {}", number, suit),
                category,
                &format!("{}{}", kanji, suit_kanji),
                &format!("{}-{}", romaji, suit_romaji),
            ));
        }
    }

    for (id, name, kanji, romaji) in WINDS {
        cards.push(Card::tile(id, name, Category::Winds, kanji, romaji));
    }

    for (id, name, kanji, romaji) in DRAGONS {
        cards.push(Card::tile(id, name, Category::Dragons, kanji, romaji));
    }

    for (id, name, kanji, romaji, score, description) in YAKU {
        cards.push(Card::combination(id, name, kanji, romaji, score, description));
    }

    cards
}

//! Deck reordering restricted to enabled positions
//!
//! Both operations only touch deck positions whose card passes `keep`.
//! Everything else stays where it is.

use rand::Rng;

/// Fisher–Yates over the positions selected by `keep`
pub fn shuffle_where<R, F>(deck: &mut [usize], keep: F, rng: &mut R)
where
    R: Rng + ?Sized,
    F: Fn(usize) -> bool,
{
    let positions: Vec<usize> = (0..deck.len()).filter(|&i| keep(deck[i])).collect();

    for i in (1..positions.len()).rev() {
        let j = rng.gen_range(0..=i);
        deck.swap(positions[i], positions[j]);
    }
}

/// Put the positions selected by `keep` back in ascending `rank` order (stable)
pub fn restore_where<F, K>(deck: &mut [usize], keep: F, rank: K)
where
    F: Fn(usize) -> bool,
    K: Fn(usize) -> usize,
{
    let positions: Vec<usize> = (0..deck.len()).filter(|&i| keep(deck[i])).collect();

    let mut cards: Vec<usize> = positions.iter().map(|&i| deck[i]).collect();
    cards.sort_by_key(|&card| rank(card));

    for (&position, card) in positions.iter().zip(cards) {
        deck[position] = card;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck: Vec<usize> = (0..20).collect();
        shuffle_where(&mut deck, |_| true, &mut rng);

        let mut sorted = deck.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_leaves_skipped_positions() {
        let mut rng = StdRng::seed_from_u64(42);
        // Odd cards are "disabled"
        let mut deck: Vec<usize> = (0..30).collect();
        shuffle_where(&mut deck, |card| card % 2 == 0, &mut rng);

        for (i, &card) in deck.iter().enumerate() {
            if i % 2 == 1 {
                assert_eq!(card, i);
            } else {
                assert_eq!(card % 2, 0);
            }
        }
    }

    #[test]
    fn test_restore_sorts_kept_positions_only() {
        // 100 is skipped and holds position 1
        let mut deck = vec![3, 100, 1, 2];
        restore_where(&mut deck, |card| card != 100, |card| card);
        assert_eq!(deck, vec![1, 100, 2, 3]);
    }

    #[test]
    fn test_short_decks() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<usize> = Vec::new();
        shuffle_where(&mut empty, |_| true, &mut rng);
        restore_where(&mut empty, |_| true, |c| c);
        assert!(empty.is_empty());

        let mut single = vec![5];
        shuffle_where(&mut single, |_| true, &mut rng);
        assert_eq!(single, vec![5]);
    }
}

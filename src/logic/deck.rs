// src/logic/deck.rs

use itertools::iproduct;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;
use crate::config::GameConfig;

/// ソート済みの 52 枚デッキを作るよ！🃏
///
/// 並びはスート順 (♣ ♦ ♥ ♠)、同じスートの中は A → K。
/// だから `deck[i].index() == i` になって、カードの番号引きに使える。全部裏向き！
pub fn create_standard_deck() -> Vec<Card> {
    let deck: Vec<Card> = iproduct!(ALL_SUITS.iter(), ALL_RANKS.iter())
        .map(|(&suit, &rank)| Card::new(rank, suit))
        .collect();
    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck
}

/// カードの並びをシャッフルする (Fisher-Yates)。
///
/// デッキ全体でも、山札の残りだけでも使えるよ。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// シャッフル済みの 52 枚デッキを作るよ。
pub fn create_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck, rng);
    deck
}

/// 設定から乱数生成器を作るよ。シードがあれば再現できる StdRng、なければ OS のエントロピーから。
pub fn rng_for(config: &GameConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_is_complete_and_sorted() {
        let deck = create_standard_deck();
        assert_eq!(deck.len(), 52);

        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 52, "重複したカードがある！");

        assert!(deck.iter().all(|card| !card.is_face_up), "最初は全部裏向き");
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.index(), i);
        }
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = create_shuffled_deck(&mut rng);
        assert_eq!(deck.len(), 52);
        let unique: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique.len(), 52);
        // 52! 通りのうちソート済みと同じになる確率は無視できる
        assert_ne!(deck, create_standard_deck());
    }

    #[test]
    fn same_seed_same_deal() {
        let a = create_shuffled_deck(&mut rng_for(&GameConfig::with_seed(99)));
        let b = create_shuffled_deck(&mut rng_for(&GameConfig::with_seed(99)));
        let c = create_shuffled_deck(&mut rng_for(&GameConfig::with_seed(100)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn shuffle_works_on_a_partial_slice() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck[28..], &mut rng);
        assert_eq!(&deck[..28], &create_standard_deck()[..28], "前半はそのまま");
        let tail: HashSet<Card> = deck[28..].iter().copied().collect();
        let expected: HashSet<Card> = create_standard_deck()[28..].iter().copied().collect();
        assert_eq!(tail, expected);
    }
}

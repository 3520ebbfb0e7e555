// src/components/card.rs

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::config::rules::CARDS_PER_SUIT;
use crate::ecs::component::Component;

/// カードのスート（マーク）だよ！♣️♦️❤️♠️
///
/// 並び順 (0-3) はソート済みデッキの並び順そのもの。
/// カード番号 = スート番号 * 13 + (ランク - 1) になるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

/// 全スートをデッキの並び順で。
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// 0-3 の番号からスートを作るよ。範囲外なら `None`。
    pub fn from_index(index: u8) -> Option<Suit> {
        ALL_SUITS.get(index as usize).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// ハートとダイヤは赤！
    pub fn is_red(self) -> bool {
        matches!(self, Suit::Heart | Suit::Diamond)
    }

    fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }
}

/// カードのランク。A は 1、K は 13 だよ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// 1-13 の数字からランクを作るよ。範囲外なら `None`。
    pub fn from_value(value: u8) -> Option<Rank> {
        value
            .checked_sub(1)
            .and_then(|i| ALL_RANKS.get(i as usize))
            .copied()
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// ひとつ上のランク。K の上はないので `None`。
    pub fn next(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードそのものを表すコンポーネントだよ！🃏
///
/// - `suit` と `rank` がカードの正体 (アイデンティティ)。
/// - `is_face_up` は表向きかどうか。これは正体には含まれないので、
///   `==` や Hash はスートとランクだけを見るよ！
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作るよ。
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { suit, rank, is_face_up: false }
    }

    /// 表向きのカードを作る。UI から「このカード」と指定するときに便利！
    pub fn face_up(rank: Rank, suit: Suit) -> Self {
        Card { suit, rank, is_face_up: true }
    }

    /// ソート済みデッキでの番号 (0-51)。エンティティ ID としても使うよ。
    pub fn index(&self) -> usize {
        self.suit.index() as usize * CARDS_PER_SUIT + (self.rank.value() as usize - 1)
    }

    /// 番号からカードを復元するよ (ランク = 番号 % 13 + 1、スート = 番号 / 13)。裏向きで返す。
    pub fn from_index(index: usize) -> Option<Card> {
        let suit = Suit::from_index(u8::try_from(index / CARDS_PER_SUIT).ok()?)?;
        let rank = Rank::from_value((index % CARDS_PER_SUIT) as u8 + 1)?;
        Some(Card::new(rank, suit))
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl Component for Card {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_face_state() {
        let down = Card::new(Rank::Ten, Suit::Club);
        let up = Card::face_up(Rank::Ten, Suit::Club);
        assert_eq!(down, up);
        assert_ne!(up, Card::face_up(Rank::Ten, Suit::Spade));
    }

    #[test]
    fn index_round_trips_through_from_index() {
        for i in 0..52 {
            let card = Card::from_index(i).expect("0-51 はカードになるはず");
            assert_eq!(card.index(), i);
            assert!(!card.is_face_up);
        }
        assert!(Card::from_index(52).is_none());
    }

    #[test]
    fn index_layout_is_suit_major() {
        assert_eq!(Card::new(Rank::Ace, Suit::Club).index(), 0);
        assert_eq!(Card::new(Rank::King, Suit::Club).index(), 12);
        assert_eq!(Card::new(Rank::Ace, Suit::Diamond).index(), 13);
        assert_eq!(Card::new(Rank::King, Suit::Spade).index(), 51);
    }

    #[test]
    fn rank_helpers() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::from_value(1), Some(Rank::Ace));
        assert_eq!(Rank::from_value(13), Some(Rank::King));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
        assert_eq!(Rank::Nine.next(), Some(Rank::Ten));
        assert_eq!(Rank::King.next(), None);
    }

    #[test]
    fn colors() {
        assert!(Suit::Heart.is_red());
        assert!(Suit::Diamond.is_red());
        assert!(!Suit::Club.is_red());
        assert!(!Suit::Spade.is_red());
    }

    #[test]
    fn display_is_short_label() {
        assert_eq!(Card::new(Rank::Ten, Suit::Club).to_string(), "10♣");
        assert_eq!(Card::new(Rank::Queen, Suit::Heart).to_string(), "Q♥");
    }
}

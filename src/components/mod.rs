// src/components/mod.rs

// エンティティにくっつける「データ部品」たちだよ！
pub mod card;
pub mod game_state;
pub mod stack;

pub use card::{Card, Rank, Suit};
pub use game_state::{GameState, GameStatus};
pub use stack::{StackInfo, StackType};

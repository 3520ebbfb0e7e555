// src/config/rules.rs
//! Klondike (3 枚めくり) のルール定数と、ゲームごとの設定。

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const CARDS_PER_SUIT: usize = 13;
pub const SUIT_COUNT: usize = 4;
pub const DECK_SIZE: usize = CARDS_PER_SUIT * SUIT_COUNT; // 52 枚
pub const TABLEAU_COUNT: usize = 7; // 場札の列数
pub const FOUNDATION_COUNT: usize = 4; // 組札の数
pub const DRAW_COUNT: usize = 3; // 1 回にめくる枚数
pub const TABLEAU_DEAL_COUNT: usize = TABLEAU_COUNT * (TABLEAU_COUNT + 1) / 2; // 1+2+...+7 = 28 枚
pub const STOCK_DEAL_COUNT: usize = DECK_SIZE - TABLEAU_DEAL_COUNT; // 24 枚

/// ゲーム開始時のオプション。
///
/// `seed` を指定すると配り方が毎回同じになる (リプレイやテスト用)。
/// JSON だと `{"seed": 42}` か `{}` だよ。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        GameConfig { seed: Some(seed) }
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(GameError::InvalidConfig)
    }

    /// リスタートした回数ぶんシードをずらした設定を返すよ。シードなしならそのまま。
    pub fn advanced(self, restarts: u64) -> Self {
        GameConfig { seed: self.seed.map(|s| s.wrapping_add(restarts)) }
    }
}

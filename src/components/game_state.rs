// src/components/game_state.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// ゲームの進行状態だよ！ Dealing → Playing → Won の順に進む。🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// カードを配ってる最中。
    Dealing,
    /// プレイ中。
    Playing,
    /// 4 つの組札が全部 K まで埋まった！🏆 このゲームではもう何も動かせない。
    Won,
}

/// ゲーム全体の状態を持つシングルトンのコンポーネント。
///
/// カード以外の専用エンティティに 1 つだけ付けるよ。
/// `draw_window` は Waste の上から何枚が「今回めくった 3 枚」(Draw1..Draw3) か。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    pub draw_window: u8,
}

impl GameState {
    pub fn new() -> Self {
        GameState { status: GameStatus::Dealing, draw_window: 0 }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for GameState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_dealing_with_empty_window() {
        let state = GameState::new();
        assert_eq!(state.status, GameStatus::Dealing);
        assert_eq!(state.draw_window, 0);
        assert_eq!(state, GameState::default());
    }
}

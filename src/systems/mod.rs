// src/systems/mod.rs
//! World を書き換える処理 (配る・めくる・動かす・勝利判定) はここ！

pub mod deal_system;
pub mod draw_system;
pub mod move_card_system;
pub mod win_condition_system;

use crate::components::game_state::GameState;
use crate::ecs::world::World;
use crate::logic::rules::game_state_entity;

/// ゲーム状態のシングルトンを書き換えるヘルパー。まだなければ何もしないで `false`。
pub(crate) fn update_game_state(world: &mut World, update: impl FnOnce(&mut GameState)) -> bool {
    let Some(entity) = game_state_entity(world) else {
        return false;
    };
    match world.get_component_mut::<GameState>(entity) {
        Some(state) => {
            update(state);
            true
        }
        None => false,
    }
}

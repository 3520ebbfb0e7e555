// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::GameStatus;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::logic::rules::{all_foundations_complete, game_state};

use super::update_game_state;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// プレイ中に 4 つの組札が全部 K まで揃ったら、GameState を Won にする。
/// Won になったかどうかは `just_won` で分かるので、呼び出し側はそれを見て勝利フックを呼んでね。
#[derive(Debug, Default)]
pub struct WinConditionSystem {
    just_won: bool,
}

impl WinConditionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直前の `run` で Playing → Won に切り替わったか。
    pub fn just_won(&self) -> bool {
        self.just_won
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, world: &mut World) {
        self.just_won = false;

        let playing = game_state(world).is_some_and(|state| state.status == GameStatus::Playing);
        if !playing || !all_foundations_complete(world) {
            return;
        }

        if update_game_state(world, |state| state.status = GameStatus::Won) {
            info!("WinConditionSystem: all four foundations complete. Game won! 🏆");
            self.just_won = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
    use crate::components::game_state::GameState;
    use crate::components::stack::{StackInfo, StackType};
    use crate::ecs::entity::Entity;
    use crate::logic::rules::card_entity;

    fn world_with(status: GameStatus) -> World {
        let mut world = World::new();
        world.register_component::<Card>();
        world.register_component::<StackInfo>();
        world.register_component::<GameState>();
        world.create_entity_with_id(Entity(52));
        world.add_component(Entity(52), GameState { status, draw_window: 0 });
        world
    }

    /// 52 枚を組札に積む。`leave_out` の枚数だけ最後のスートの K 側を場札に残すよ。
    fn fill_foundations(world: &mut World, leave_out: usize) {
        for (f, suit) in ALL_SUITS.iter().enumerate() {
            for (pos, rank) in ALL_RANKS.iter().enumerate() {
                let card = Card::face_up(*rank, *suit);
                let entity = card_entity(&card);
                let held_back = f == ALL_SUITS.len() - 1 && pos >= ALL_RANKS.len() - leave_out;
                let stack_type = if held_back { StackType::Tableau(0) } else { StackType::Foundation(f as u8) };
                world.create_entity_with_id(entity);
                world.add_component(entity, card);
                world.add_component(entity, StackInfo::new(stack_type, pos as u8));
            }
        }
    }

    #[test]
    fn full_foundations_win_the_game() {
        let mut world = world_with(GameStatus::Playing);
        fill_foundations(&mut world, 0);

        let mut system = WinConditionSystem::new();
        system.run(&mut world);

        assert!(system.just_won());
        assert_eq!(game_state(&world).unwrap().status, GameStatus::Won);

        // もう一回回しても「今勝った」にはならない
        system.run(&mut world);
        assert!(!system.just_won());
    }

    #[test]
    fn one_card_short_is_not_a_win() {
        let mut world = world_with(GameStatus::Playing);
        fill_foundations(&mut world, 1);

        let mut system = WinConditionSystem::new();
        system.run(&mut world);

        assert!(!system.just_won());
        assert_eq!(game_state(&world).unwrap().status, GameStatus::Playing);
    }

    #[test]
    fn nothing_happens_while_dealing() {
        let mut world = world_with(GameStatus::Dealing);
        fill_foundations(&mut world, 0);

        let mut system = WinConditionSystem::new();
        system.run(&mut world);
        assert_eq!(game_state(&world).unwrap().status, GameStatus::Dealing);
    }
}
